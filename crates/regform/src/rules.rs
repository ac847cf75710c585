// File: src/rules.rs
// Purpose: Cross-field rule set - rules over several fields jointly

use tracing::trace;

use crate::config::FormConfig;
use crate::error::{ValidationErrors, ViolationKind};
use crate::field::Field;
use crate::record::RegistrationRecord;

pub const PASSWORDS_DONT_MATCH: &str = "Passwords don't match";
pub const CONTACT_METHOD_REQUIRED: &str = "Either email or phone number must be provided";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrossFieldRule {
    /// confirmPassword repeats password
    PasswordMatch,
    /// email or phoneNumber is given
    ContactMethodPresent,
}

impl CrossFieldRule {
    /// Rules active under a configuration, in evaluation order
    pub fn for_config(config: &FormConfig) -> Vec<CrossFieldRule> {
        let mut rules = vec![CrossFieldRule::PasswordMatch];
        if config.require_one_of_email_phone {
            rules.push(CrossFieldRule::ContactMethodPresent);
        }
        rules
    }

    /// Fields a violation is attached to
    pub fn fields(self) -> &'static [Field] {
        match self {
            CrossFieldRule::PasswordMatch => &[Field::ConfirmPassword],
            CrossFieldRule::ContactMethodPresent => &[Field::Email, Field::PhoneNumber],
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            CrossFieldRule::PasswordMatch => PASSWORDS_DONT_MATCH,
            CrossFieldRule::ContactMethodPresent => CONTACT_METHOD_REQUIRED,
        }
    }

    pub fn is_satisfied(self, record: &RegistrationRecord) -> bool {
        match self {
            CrossFieldRule::PasswordMatch => record.password == record.confirm_password,
            CrossFieldRule::ContactMethodPresent => {
                !record.email.is_empty() || !record.phone_number.is_empty()
            }
        }
    }

    /// Records a violation on every involved field when the rule fails
    pub fn check(self, record: &RegistrationRecord, errors: &mut ValidationErrors) {
        if self.is_satisfied(record) {
            return;
        }
        trace!(rule = ?self, "cross-field rule failed");
        for &field in self.fields() {
            errors.add(field, ViolationKind::CrossField, self.message());
        }
    }
}
