//! Presenter lifecycle: edit, submit, render, notification

use chrono::NaiveDate;
use regform::{Field, FormConfig, FormPresenter, Preset};
use std::time::{Duration, Instant};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

fn fill_valid(presenter: &mut FormPresenter) {
    presenter.set_field(Field::FirstName, "Ann");
    presenter.set_field(Field::LastName, "Lee");
    presenter.set_field(Field::DateOfBirth, "2000-01-01");
    presenter.set_field(Field::Email, "ann@example.com");
    presenter.set_field(Field::Password, "secret1");
    presenter.set_field(Field::ConfirmPassword, "secret1");
}

#[test]
fn test_starts_blank() {
    let presenter = FormPresenter::default();
    assert_eq!(presenter.value(Field::FirstName), "");
    assert!(presenter.errors().is_empty());
    assert!(presenter.notification().is_none());
}

#[test]
fn test_failed_submit_keeps_values_and_shows_errors() {
    let mut presenter = FormPresenter::default();
    presenter.set_field(Field::LastName, "Lee");
    presenter.set_field(Field::Password, "abc");

    let errors = presenter.submit_on(Instant::now(), today()).unwrap_err();
    assert!(errors.has_error(Field::FirstName));
    assert_eq!(presenter.errors(), &errors);
    assert_eq!(presenter.value(Field::LastName), "Lee");
    assert_eq!(presenter.value(Field::Password), "abc");
    assert!(presenter.notification().is_none());

    let html = presenter.render(today()).into_string();
    assert!(html.contains("First name is required"));
    assert!(html.contains("Password must be at least 6 characters"));
    assert!(html.contains("value=\"Lee\""));
}

#[test]
fn test_resubmit_after_fix_clears_errors() {
    let mut presenter = FormPresenter::default();
    assert!(presenter.submit_on(Instant::now(), today()).is_err());

    fill_valid(&mut presenter);
    let validated = presenter.submit_on(Instant::now(), today()).unwrap();
    assert_eq!(validated.first_name(), "Ann");
    assert!(presenter.errors().is_empty());

    let html = presenter.render(today()).into_string();
    assert!(!html.contains("First name is required"));
}

#[test]
fn test_success_opens_notification_with_json() {
    let mut presenter = FormPresenter::default();
    fill_valid(&mut presenter);

    let opened = Instant::now();
    presenter.submit_on(opened, today()).unwrap();

    let notification = presenter.notification().unwrap();
    assert!(notification.message().contains("\"firstName\": \"Ann\""));
    assert!(notification.message().contains("\"dateOfBirth\": \"2000-01-01\""));
    assert_eq!(notification.opened_at(), opened);

    let html = presenter.render(today()).into_string();
    assert!(html.contains("notification-top-center"));
    assert!(html.contains("&quot;firstName&quot;: &quot;Ann&quot;"));
}

#[test]
fn test_notification_auto_hides() {
    let mut presenter = FormPresenter::default();
    fill_valid(&mut presenter);

    let opened = Instant::now();
    presenter.submit_on(opened, today()).unwrap();

    presenter.tick(opened + Duration::from_millis(5999));
    assert!(presenter.notification().is_some());

    presenter.tick(opened + Duration::from_millis(6000));
    assert!(presenter.notification().is_none());
}

#[test]
fn test_notification_dismissed_by_user() {
    let mut presenter = FormPresenter::default();
    fill_valid(&mut presenter);
    presenter.submit_on(Instant::now(), today()).unwrap();

    presenter.dismiss();
    assert!(presenter.notification().is_none());
    assert!(!presenter.render(today()).into_string().contains("notification-top-center"));

    // Dismissing again is harmless
    presenter.dismiss();
}

#[test]
fn test_configured_auto_hide() {
    let mut config = FormConfig::default();
    config.notification.auto_hide_ms = 1000;
    let mut presenter = FormPresenter::new(config);
    fill_valid(&mut presenter);

    let opened = Instant::now();
    presenter.submit_on(opened, today()).unwrap();
    presenter.tick(opened + Duration::from_millis(1000));
    assert!(presenter.notification().is_none());
}

#[test]
fn test_failed_submit_keeps_previous_notification() {
    let mut presenter = FormPresenter::default();
    fill_valid(&mut presenter);
    let opened = Instant::now();
    presenter.submit_on(opened, today()).unwrap();

    presenter.set_field(Field::FirstName, "");
    presenter.submit_on(opened + Duration::from_millis(10), today()).unwrap_err();
    assert_eq!(presenter.notification().unwrap().opened_at(), opened);
}

#[test]
fn test_render_layout() {
    let presenter = FormPresenter::default();
    let html = presenter.render(today()).into_string();

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<h1>User Data</h1>"));
    assert!(html.contains("<hr class=\"divider\">"));
    assert!(html.contains("Profile Information"));
    assert!(html.contains("Login Information"));
    assert!(html.contains("Choose one login method to input - either email address or phone number"));
    assert!(html.contains("First Name*"));
    assert!(html.contains("max=\"2024-06-15\""));
    assert!(html.contains(">Submit</button>"));
    for field in Field::ALL {
        assert!(html.contains(&format!("name=\"{}\"", field.as_str())), "missing {}", field);
    }
}

#[test]
fn test_render_email_required_variant() {
    let mut config = FormConfig::preset(Preset::EmailRequired);
    config.title = "Sign up".into();
    config.divider = false;
    let html = FormPresenter::new(config).render(today()).into_string();

    assert!(html.contains("<h1>Sign up</h1>"));
    assert!(!html.contains("<hr"));
    assert!(html.contains("Email Address*"));
    assert!(!html.contains("Choose one login method"));
}

#[test]
fn test_load_replaces_record() {
    let mut presenter = FormPresenter::default();
    presenter.set_field(Field::FirstName, "Old");
    presenter.load(regform::RegistrationRecord::new().with(Field::LastName, "Lee"));
    assert_eq!(presenter.value(Field::FirstName), "");
    assert_eq!(presenter.value(Field::LastName), "Lee");
}

#[test]
fn test_render_today_bounds_birth_date_by_current_date() {
    let before = chrono::Utc::now().date_naive();
    let html = FormPresenter::default().render_today().into_string();
    let after = chrono::Utc::now().date_naive();

    assert!(html.starts_with("<!DOCTYPE html>"));
    let bounded = [before, after]
        .iter()
        .any(|day| html.contains(&format!("max=\"{}\"", day.format("%Y-%m-%d"))));
    assert!(bounded, "date input should be capped at today");
}
