// File: src/validator.rs
// Purpose: Full-record validation - field constraints, then cross-field rules

use chrono::{NaiveDate, Utc};
use tracing::trace;

use crate::config::FormConfig;
use crate::constraints;
use crate::error::{ValidationErrors, ViolationKind};
use crate::field::Field;
use crate::record::{RegistrationRecord, ValidatedRegistration};
use crate::rules::CrossFieldRule;

/// Validates registration records against one form configuration
///
/// Validation is not fail-fast: every field constraint and every cross-field
/// rule runs, so one call reports every problem with the record.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    config: FormConfig,
}

impl Validator {
    pub fn new(config: FormConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    /// Validate against the current UTC date
    pub fn validate(
        &self,
        record: &RegistrationRecord,
    ) -> Result<ValidatedRegistration, ValidationErrors> {
        self.validate_on(record, Utc::now().date_naive())
    }

    /// Validate with an explicit "today" for the date-of-birth check
    pub fn validate_on(
        &self,
        record: &RegistrationRecord,
        today: NaiveDate,
    ) -> Result<ValidatedRegistration, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let config = &self.config;

        let first_name = keep(
            &mut errors,
            Field::FirstName,
            constraints::first_name(&record.first_name),
        );
        let last_name = keep(
            &mut errors,
            Field::LastName,
            constraints::last_name(&record.last_name),
        );
        let gender = keep(&mut errors, Field::Gender, constraints::gender(&record.gender));
        let date_of_birth = keep(
            &mut errors,
            Field::DateOfBirth,
            constraints::date_of_birth(&record.date_of_birth, today),
        );
        let email = keep(&mut errors, Field::Email, constraints::email(&record.email, config));
        let phone_number = keep(
            &mut errors,
            Field::PhoneNumber,
            constraints::phone_number(&record.phone_number, config),
        );
        let password = keep(
            &mut errors,
            Field::Password,
            constraints::password(&record.password),
        );

        for rule in CrossFieldRule::for_config(config) {
            rule.check(record, &mut errors);
        }

        if !errors.is_empty() {
            trace!(fields = errors.len(), "record rejected");
            return Err(errors);
        }

        match (first_name, last_name, gender, date_of_birth, email, phone_number, password) {
            (
                Some(()),
                Some(()),
                Some(gender),
                Some(date_of_birth),
                Some(email),
                Some(phone_number),
                Some(()),
            ) => {
                trace!("record accepted");
                Ok(ValidatedRegistration::new(
                    record.first_name.clone(),
                    record.last_name.clone(),
                    gender,
                    date_of_birth,
                    email,
                    phone_number,
                    record.password.clone(),
                    record.confirm_password.clone(),
                ))
            }
            // Every None above recorded an error
            _ => Err(errors),
        }
    }
}

/// Keeps the checked value, or records the violation under `field`
fn keep<T>(errors: &mut ValidationErrors, field: Field, result: Result<T, String>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(message) => {
            trace!(%field, %message, "field constraint failed");
            errors.add(field, ViolationKind::FieldConstraint, message);
            None
        }
    }
}
