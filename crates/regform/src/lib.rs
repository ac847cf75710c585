// regform - user registration form
// Configurable validation schema with a maud presenter

pub mod config;
pub mod constraints;
pub mod error;
pub mod field;
pub mod form_field;
pub mod presenter;
pub mod record;
pub mod rules;
pub mod validator;

// Re-export core types
pub use config::{FormConfig, NotificationConfig, Preset};
pub use error::{ValidationErrors, Violation, ViolationKind};
pub use field::{Field, UnknownField};
pub use form_field::{FieldAttrs, FormField, FormSchema};
pub use presenter::{FormPresenter, Notification};
pub use record::{Gender, RegistrationRecord, ValidatedRegistration};
pub use rules::CrossFieldRule;
pub use validator::Validator;

// Re-export Maud for callers embedding the rendered form
pub use maud::{Markup, PreEscaped};
