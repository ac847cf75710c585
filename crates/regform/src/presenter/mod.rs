// File: src/presenter/mod.rs
// Purpose: Form presenter - owns the editable record, submits, renders

use chrono::{NaiveDate, Utc};
use maud::{html, Markup};
use std::time::Instant;
use tracing::{debug, info, warn};

use crate::config::FormConfig;
use crate::error::ValidationErrors;
use crate::field::Field;
use crate::form_field::{FormField, FormSchema};
use crate::record::{RegistrationRecord, ValidatedRegistration};
use crate::validator::Validator;

pub mod layouts;
pub mod notification;
mod render;

pub use notification::Notification;

use layouts::{grid_form_block_layout, vertical_form_layout, VerticalSlots};

const PROFILE_FIELDS: [Field; 4] = [
    Field::FirstName,
    Field::LastName,
    Field::Gender,
    Field::DateOfBirth,
];
const LOGIN_FIELDS: [Field; 4] = [
    Field::Email,
    Field::PhoneNumber,
    Field::Password,
    Field::ConfirmPassword,
];
const LOGIN_HELPER: &str = "Choose one login method to input - either email address or phone number";

/// The registration form as the user sees it
///
/// Holds the record being edited, the errors of the last submission and the
/// success notification. Nothing survives beyond the presenter itself.
#[derive(Debug, Clone)]
pub struct FormPresenter {
    validator: Validator,
    record: RegistrationRecord,
    errors: ValidationErrors,
    notification: Option<Notification>,
}

impl FormPresenter {
    pub fn new(config: FormConfig) -> Self {
        Self {
            validator: Validator::new(config),
            record: RegistrationRecord::new(),
            errors: ValidationErrors::new(),
            notification: None,
        }
    }

    pub fn config(&self) -> &FormConfig {
        self.validator.config()
    }

    pub fn record(&self) -> &RegistrationRecord {
        &self.record
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    pub fn value(&self, field: Field) -> &str {
        self.record.get(field)
    }

    /// One edit of one input
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.record.set(field, value);
    }

    /// Replace all values at once, e.g. from a posted form
    pub fn load(&mut self, record: RegistrationRecord) {
        self.record = record;
    }

    /// Submit against the current UTC date
    pub fn submit(&mut self, now: Instant) -> Result<ValidatedRegistration, ValidationErrors> {
        self.submit_on(now, Utc::now().date_naive())
    }

    /// Validate the current values
    ///
    /// On failure the values stay as they are and the errors replace those
    /// of the previous attempt. On success the errors are cleared and the
    /// record is shown as JSON in a fresh notification.
    pub fn submit_on(
        &mut self,
        now: Instant,
        today: NaiveDate,
    ) -> Result<ValidatedRegistration, ValidationErrors> {
        match self.validator.validate_on(&self.record, today) {
            Ok(validated) => {
                self.errors = ValidationErrors::new();
                match validated.to_json_pretty() {
                    Ok(json) => {
                        let auto_hide = self.config().notification.auto_hide();
                        self.notification = Some(Notification::new(json, now, auto_hide));
                    }
                    Err(e) => warn!("failed to serialize registration: {}", e),
                }
                info!("registration submitted");
                Ok(validated)
            }
            Err(errors) => {
                debug!(
                    fields = errors.len(),
                    invalid = ?errors.fields().map(Field::as_str).collect::<Vec<_>>(),
                    "registration rejected"
                );
                self.errors = errors.clone();
                Err(errors)
            }
        }
    }

    /// Close the notification (user action)
    pub fn dismiss(&mut self) {
        if self.notification.take().is_some() {
            debug!("notification dismissed");
        }
    }

    /// Close the notification once its auto-hide duration has passed
    pub fn tick(&mut self, now: Instant) {
        if self.notification.as_ref().is_some_and(|n| n.is_expired(now)) {
            self.notification = None;
            debug!("notification expired");
        }
    }

    /// Render the page against the current UTC date
    pub fn render_today(&self) -> Markup {
        self.render(Utc::now().date_naive())
    }

    pub fn render(&self, today: NaiveDate) -> Markup {
        let config = self.config();
        let schema = FormSchema::new(config, today);

        let inputs = |fields: &[Field]| -> Vec<Markup> {
            fields
                .iter()
                .map(|&field| {
                    render::input(
                        &schema.field_attrs(field),
                        self.record.get(field),
                        self.errors.get_error(field),
                    )
                })
                .collect()
        };

        let login_helper = config.require_one_of_email_phone.then_some(LOGIN_HELPER);

        let form = html! {
            (grid_form_block_layout("Profile Information", None, &inputs(&PROFILE_FIELDS)))
            (grid_form_block_layout("Login Information", login_helper, &inputs(&LOGIN_FIELDS)))
        };

        let actions = html! {
            div.actions {
                button.submit type="submit" name="action" value="submit" { "Submit" }
            }
            @if let Some(notification) = &self.notification {
                (notification.render())
            }
        };

        vertical_form_layout(VerticalSlots {
            title: config.title.clone(),
            divider: config.divider,
            form,
            actions,
        })
    }
}

impl Default for FormPresenter {
    fn default() -> Self {
        Self::new(FormConfig::default())
    }
}
