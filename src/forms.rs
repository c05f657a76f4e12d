// Form-serialization helpers. Every page that submits optional fields goes
// through these so empty inputs become absent values in one place.

/// Empty or whitespace-only input becomes `None`.
pub fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Numeric coercion for optional number fields. Non-numeric input is
/// treated the same as an empty field.
pub fn optional_number(value: &str) -> Option<i64> {
    value.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_fields_become_absent() {
        assert_eq!(optional(""), None);
        assert_eq!(optional("   "), None);
        assert_eq!(optional("Berlin"), Some("Berlin".to_string()));
        assert_eq!(optional("  Berlin  "), Some("Berlin".to_string()));
    }

    #[test]
    fn numbers_are_coerced_or_dropped() {
        assert_eq!(optional_number("50000"), Some(50000));
        assert_eq!(optional_number(" 50000 "), Some(50000));
        assert_eq!(optional_number(""), None);
        assert_eq!(optional_number("fifty"), None);
    }
}
