//! Character-class checks used by the password rule set

/// At least `min` characters (Unicode scalar values, not bytes)
pub fn has_min_length(value: &str, min: usize) -> bool {
    value.chars().count() >= min
}

/// Contains an ASCII uppercase letter
pub fn has_uppercase(value: &str) -> bool {
    value.chars().any(|c| c.is_ascii_uppercase())
}

/// Contains an ASCII decimal digit
pub fn has_digit(value: &str) -> bool {
    value.chars().any(|c| c.is_ascii_digit())
}

/// No whitespace anywhere in the string
pub fn has_no_whitespace(value: &str) -> bool {
    !value.chars().any(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_length_counts_chars() {
        assert!(!has_min_length("Abcdef1", 8));
        assert!(has_min_length("Abcdefg1", 8));
        // 8 chars, 16 bytes
        assert!(has_min_length("ééééééé1", 8));
        assert!(has_min_length("", 0));
    }

    #[test]
    fn test_uppercase_is_ascii_only() {
        assert!(has_uppercase("abcD"));
        assert!(!has_uppercase("abcd"));
        assert!(!has_uppercase("École"));
    }

    #[test]
    fn test_digit() {
        assert!(has_digit("abc1"));
        assert!(!has_digit("abc"));
    }

    #[test]
    fn test_whitespace_anywhere_fails() {
        assert!(has_no_whitespace(""));
        assert!(has_no_whitespace("Abcdefg1"));
        assert!(!has_no_whitespace(" Abcdefg1"));
        assert!(!has_no_whitespace("Abc defg1"));
        assert!(!has_no_whitespace("Abcdefg1\n"));
        assert!(!has_no_whitespace("Abc\tdefg1"));
    }
}
