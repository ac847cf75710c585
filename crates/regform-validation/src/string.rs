//! String validation functions

/// Blank means empty; form controls submit "" for untouched inputs.
pub fn is_blank(s: &str) -> bool {
    s.is_empty()
}

/// Number of characters, not bytes
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Validates minimum string length in characters
pub fn validate_min_length(s: &str, min: usize) -> Result<(), String> {
    if char_len(s) >= min {
        Ok(())
    } else {
        Err(format!("Must be at least {} characters", min))
    }
}
