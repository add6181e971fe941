//! Signup Form Validation Engine
//!
//! A reactive field-validation engine for a registration form. Each field
//! is bound to an ordered set of declarative rules; the engine re-evaluates
//! a field on every value change, tracks whether it has been touched, and
//! hands back an immutable snapshot after every event.
//!
//! ## Architecture
//!
//! 1. **Rules** (`rules/`): Tagged predicate variants, rule sets and the
//!    field to rule-set table.
//! 2. **Schema** (`schema`): Declarative form description, built in or
//!    loaded from TOML, YAML or JSON.
//! 3. **Engine** (`engine`): Field state, touched tracking, snapshots.
//! 4. **Presentation** (`presentation`): Snapshot to visual state mapping.
//! 5. **Submit** (`submit`): Validity gate in front of the submission sink.
//!
//! ## Example
//!
//! ```rust
//! use signup_form_core::ValidationEngine;
//!
//! let mut engine = ValidationEngine::signup().unwrap();
//! engine.set_value("email", "a@b.com").unwrap();
//! let snapshot = engine.set_value("password", "Abc defg1").unwrap();
//!
//! let password = snapshot.field("password").unwrap();
//! assert_eq!(password.passed("no_spaces"), Some(false));
//! assert!(!engine.is_form_valid());
//! ```

pub mod engine;
pub mod error;
pub mod event;
pub mod presentation;
pub mod rules;
pub mod schema;
pub mod snapshot;
pub mod submit;

pub use engine::ValidationEngine;
pub use error::{FormError, Result};
pub use event::FormEvent;
pub use presentation::{FieldView, FormView, VisualState, Visibility};
pub use rules::{Check, Rule, RuleSet, RuleTable};
pub use schema::{DisplayPolicy, FieldDecl, FileFormat, FormSchema};
pub use snapshot::{FieldSnapshot, RuleResult, ValidationSnapshot};
pub use submit::{submit, FormValues, LoggingSink, SubmissionSink, SubmitOutcome};
