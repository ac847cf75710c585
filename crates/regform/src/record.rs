// File: src/record.rs
// Purpose: Raw and validated registration records

use chrono::NaiveDate;
use serde::{Deserialize, Serialize, Serializer};

use crate::field::Field;

/// Gender choices offered by the form's single-choice selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    /// Submitted value
    pub fn code(self) -> &'static str {
        match self {
            Gender::Male => "M",
            Gender::Female => "F",
        }
    }

    /// Option text
    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Gender::ALL.into_iter().find(|g| g.code() == code)
    }
}

/// The values of one registration attempt, exactly as the controls hold them
///
/// Every field is raw text and "" means blank. Missing JSON keys deserialize
/// as blank, so a partially filled payload is still a record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegistrationRecord {
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub date_of_birth: String,
    pub email: String,
    pub phone_number: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegistrationRecord {
    /// An empty record, as the form starts out
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Gender => &self.gender,
            Field::DateOfBirth => &self.date_of_birth,
            Field::Email => &self.email,
            Field::PhoneNumber => &self.phone_number,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Gender => &mut self.gender,
            Field::DateOfBirth => &mut self.date_of_birth,
            Field::Email => &mut self.email,
            Field::PhoneNumber => &mut self.phone_number,
            Field::Password => &mut self.password,
            Field::ConfirmPassword => &mut self.confirm_password,
        };
        *slot = value.into();
    }

    /// Builder-style `set`
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Parse a record from a JSON object keyed by camelCase field names
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

/// A record that passed validation
///
/// Only the validator constructs these, so holding one means every field
/// constraint and cross-field rule held on the day it was validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatedRegistration {
    first_name: String,
    last_name: String,
    #[serde(serialize_with = "blank_when_none")]
    gender: Option<Gender>,
    date_of_birth: NaiveDate,
    #[serde(serialize_with = "blank_when_none")]
    email: Option<String>,
    #[serde(serialize_with = "blank_when_none")]
    phone_number: Option<String>,
    password: String,
    confirm_password: String,
}

// Absent optionals are written as "" so the JSON mirrors the submitted form.
fn blank_when_none<S, T>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: Serialize,
{
    match value {
        Some(v) => v.serialize(serializer),
        None => serializer.serialize_str(""),
    }
}

impl ValidatedRegistration {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        first_name: String,
        last_name: String,
        gender: Option<Gender>,
        date_of_birth: NaiveDate,
        email: Option<String>,
        phone_number: Option<String>,
        password: String,
        confirm_password: String,
    ) -> Self {
        Self {
            first_name,
            last_name,
            gender,
            date_of_birth,
            email,
            phone_number,
            password,
            confirm_password,
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn gender(&self) -> Option<Gender> {
        self.gender
    }

    pub fn date_of_birth(&self) -> NaiveDate {
        self.date_of_birth
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn phone_number(&self) -> Option<&str> {
        self.phone_number.as_deref()
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn confirm_password(&self) -> &str {
        &self.confirm_password
    }

    /// Pretty-printed JSON, as shown in the success notification
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Back to raw form values
    pub fn to_record(&self) -> RegistrationRecord {
        RegistrationRecord {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            gender: self.gender.map(Gender::code).unwrap_or_default().to_string(),
            date_of_birth: self
                .date_of_birth
                .format(regform_validation::DATE_FORMAT)
                .to_string(),
            email: self.email.clone().unwrap_or_default(),
            phone_number: self.phone_number.clone().unwrap_or_default(),
            password: self.password.clone(),
            confirm_password: self.confirm_password.clone(),
        }
    }
}

impl From<&ValidatedRegistration> for RegistrationRecord {
    fn from(validated: &ValidatedRegistration) -> Self {
        validated.to_record()
    }
}
