// File: src/form_field.rs
// Purpose: HTML5 input attributes derived from the form configuration

use chrono::NaiveDate;

use crate::config::FormConfig;
use crate::constraints::PASSWORD_MIN_LENGTH;
use crate::field::Field;

/// Metadata for one form input, mirroring its server-side constraints
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldAttrs {
    /// `name` and `id` of the control
    pub name: &'static str,
    /// Field label for display
    pub label: &'static str,
    /// `type` attribute; `None` for the gender `<select>`
    pub input_type: Option<&'static str>,
    pub required: bool,
    pub min_length: Option<usize>,
    /// Upper bound for date inputs (`YYYY-MM-DD`)
    pub max: Option<String>,
    /// Regex for the HTML5 `pattern` attribute
    pub pattern: Option<String>,
}

impl FieldAttrs {
    /// Label text, with `*` on required fields
    pub fn display_label(&self) -> String {
        if self.required {
            format!("{}*", self.label)
        } else {
            self.label.to_string()
        }
    }
}

/// Trait for form schemas that can describe their inputs
pub trait FormField {
    /// Get field attributes for the specified field
    fn field_attrs(&self, field: Field) -> FieldAttrs;

    /// Get all field names in form order
    fn field_names(&self) -> Vec<&'static str> {
        Field::ALL.iter().map(|field| field.as_str()).collect()
    }
}

/// A configuration pinned to a day, so date inputs can carry `max`
#[derive(Debug, Clone, Copy)]
pub struct FormSchema<'a> {
    pub config: &'a FormConfig,
    pub today: NaiveDate,
}

impl<'a> FormSchema<'a> {
    pub fn new(config: &'a FormConfig, today: NaiveDate) -> Self {
        Self { config, today }
    }
}

impl FormField for FormSchema<'_> {
    fn field_attrs(&self, field: Field) -> FieldAttrs {
        let mut attrs = FieldAttrs {
            name: field.as_str(),
            label: field.label(),
            input_type: Some("text"),
            required: false,
            min_length: None,
            max: None,
            pattern: None,
        };

        match field {
            Field::FirstName | Field::LastName => attrs.required = true,
            Field::Gender => attrs.input_type = None,
            Field::DateOfBirth => {
                attrs.input_type = Some("date");
                attrs.required = true;
                attrs.max = Some(self.today.format(regform_validation::DATE_FORMAT).to_string());
            }
            Field::Email => {
                attrs.input_type = Some("email");
                attrs.required = self.config.require_email;
            }
            Field::PhoneNumber => {
                attrs.input_type = Some("tel");
                attrs.pattern = self
                    .config
                    .require_phone_prefix
                    .as_deref()
                    .map(|prefix| format!("{}.*", regex::escape(prefix)));
            }
            Field::Password | Field::ConfirmPassword => {
                attrs.input_type = Some("password");
                attrs.required = true;
                if field == Field::Password {
                    attrs.min_length = Some(PASSWORD_MIN_LENGTH);
                }
            }
        }

        attrs
    }
}
