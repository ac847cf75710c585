//! Phone number validation functions

/// Checks that a phone number carries the given country-code prefix
pub fn has_prefix(phone: &str, prefix: &str) -> bool {
    phone.starts_with(prefix)
}

/// Validates the prefix, producing the user-facing message on failure
pub fn validate_prefix(phone: &str, prefix: &str) -> Result<(), String> {
    if has_prefix(phone, prefix) {
        Ok(())
    } else {
        Err(format!("Phone number must start with {}", prefix))
    }
}
