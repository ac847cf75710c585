// Input rendering
// One labelled control per field with its inline error below

use maud::{html, Markup};

use crate::form_field::FieldAttrs;
use crate::record::Gender;

/// Shown under a control with no error, keeping rows aligned
const BLANK_HELPER: &str = "\u{a0}";

pub(crate) fn input(attrs: &FieldAttrs, value: &str, error: Option<&str>) -> Markup {
    html! {
        div.field.field-error[error.is_some()] {
            label.field-label for=(attrs.name) { (attrs.display_label()) }
            @if attrs.input_type.is_none() {
                (gender_select(attrs, value))
            } @else {
                input id=(attrs.name) name=(attrs.name) type=[attrs.input_type] value=(value)
                    required[attrs.required]
                    minlength=[attrs.min_length]
                    max=[attrs.max.as_deref()]
                    pattern=[attrs.pattern.as_deref()]
                    aria-invalid=[error.map(|_| "true")];
            }
            p.helper-text { (error.unwrap_or(BLANK_HELPER)) }
        }
    }
}

fn gender_select(attrs: &FieldAttrs, value: &str) -> Markup {
    html! {
        select id=(attrs.name) name=(attrs.name) {
            option value="" selected[value.is_empty()] {}
            @for gender in Gender::ALL {
                option value=(gender.code()) selected[value == gender.code()] { (gender.label()) }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FormConfig;
    use crate::field::Field;
    use crate::form_field::{FormField, FormSchema};
    use chrono::NaiveDate;

    fn attrs(field: Field) -> FieldAttrs {
        let config = FormConfig::default();
        FormSchema::new(&config, NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()).field_attrs(field)
    }

    #[test]
    fn test_input_shows_error() {
        let html = input(&attrs(Field::FirstName), "", Some("First name is required")).into_string();
        assert!(html.contains("First name is required"));
        assert!(html.contains("aria-invalid=\"true\""));
        assert!(html.contains("field-error"));
        assert!(html.contains(" required"));
    }

    #[test]
    fn test_input_keeps_value_without_error() {
        let html = input(&attrs(Field::LastName), "O'Neil & Co", None).into_string();
        assert!(html.contains("value=\"O'Neil &amp; Co\""));
        assert!(!html.contains("aria-invalid"));
        assert!(!html.contains("field-error"));
    }

    #[test]
    fn test_gender_select_marks_choice() {
        let html = input(&attrs(Field::Gender), "F", None).into_string();
        assert!(html.contains("<select"));
        assert!(html.contains("<option value=\"F\" selected>Female</option>"));
        assert!(html.contains("<option value=\"M\">Male</option>"));
    }

    #[test]
    fn test_date_input_has_max() {
        let html = input(&attrs(Field::DateOfBirth), "", None).into_string();
        assert!(html.contains("type=\"date\""));
        assert!(html.contains("max=\"2024-06-15\""));
    }
}
