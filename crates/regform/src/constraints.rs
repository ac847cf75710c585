// File: src/constraints.rs
// Purpose: Field constraint set - rules on one field in isolation

use chrono::NaiveDate;
use regform_validation::{
    is_blank, is_not_future, is_valid_email, parse_date, validate_min_length, validate_prefix,
};

use crate::config::FormConfig;
use crate::record::Gender;

pub const FIRST_NAME_REQUIRED: &str = "First name is required";
pub const LAST_NAME_REQUIRED: &str = "Last name is required";
pub const DATE_OF_BIRTH_REQUIRED: &str = "Date of birth is required";
pub const DATE_OF_BIRTH_INVALID: &str = "Date of birth must be a valid date";
pub const DATE_OF_BIRTH_IN_FUTURE: &str = "Date of birth cannot be in the future";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Invalid email format";
pub const GENDER_INVALID: &str = "Gender must be one of: M, F";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters";

pub const PASSWORD_MIN_LENGTH: usize = 6;

fn required(value: &str, message: &str) -> Result<(), String> {
    if is_blank(value) {
        Err(message.to_string())
    } else {
        Ok(())
    }
}

pub fn first_name(value: &str) -> Result<(), String> {
    required(value, FIRST_NAME_REQUIRED)
}

pub fn last_name(value: &str) -> Result<(), String> {
    required(value, LAST_NAME_REQUIRED)
}

/// Blank is absent; anything else must be one of the offered choices
pub fn gender(value: &str) -> Result<Option<Gender>, String> {
    if is_blank(value) {
        return Ok(None);
    }
    Gender::from_code(value)
        .map(Some)
        .ok_or_else(|| GENDER_INVALID.to_string())
}

/// Required, a calendar date, and not after `today`
pub fn date_of_birth(value: &str, today: NaiveDate) -> Result<NaiveDate, String> {
    required(value, DATE_OF_BIRTH_REQUIRED)?;

    let date = parse_date(value).ok_or_else(|| DATE_OF_BIRTH_INVALID.to_string())?;
    if !is_not_future(date, today) {
        return Err(DATE_OF_BIRTH_IN_FUTURE.to_string());
    }
    Ok(date)
}

/// Format is checked only when an address is given
pub fn email(value: &str, config: &FormConfig) -> Result<Option<String>, String> {
    if is_blank(value) {
        return if config.require_email {
            Err(EMAIL_REQUIRED.to_string())
        } else {
            Ok(None)
        };
    }

    if !is_valid_email(value) {
        return Err(EMAIL_INVALID.to_string());
    }
    Ok(Some(value.to_string()))
}

/// Optional; a given number must carry the configured prefix
pub fn phone_number(value: &str, config: &FormConfig) -> Result<Option<String>, String> {
    if is_blank(value) {
        return Ok(None);
    }

    if let Some(prefix) = config.require_phone_prefix.as_deref() {
        validate_prefix(value, prefix)?;
    }
    Ok(Some(value.to_string()))
}

pub fn password(value: &str) -> Result<(), String> {
    validate_min_length(value, PASSWORD_MIN_LENGTH).map_err(|_| PASSWORD_TOO_SHORT.to_string())
}
