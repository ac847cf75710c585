use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use regform::{FormConfig, FormPresenter, RegistrationRecord};
use std::io::Read;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const CONFIG_ENV: &str = "REGFORM_CONFIG";
const DEFAULT_CONFIG: &str = "regform.toml";

/// Reads one record as JSON on stdin, submits it, prints the resulting page.
fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("regform=info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = FormConfig::load(config_path(std::env::var(CONFIG_ENV).ok()))?;

    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("Failed to read record from stdin")?;
    let record = parse_record(&input)?;

    println!("{}", preview(config, record, Instant::now(), Utc::now().date_naive()));
    Ok(())
}

/// `REGFORM_CONFIG` when set and non-empty, else ./regform.toml
fn config_path(from_env: Option<String>) -> String {
    from_env
        .filter(|path| !path.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_CONFIG.to_string())
}

/// Empty input submits the blank form
fn parse_record(input: &str) -> Result<RegistrationRecord> {
    if input.trim().is_empty() {
        return Ok(RegistrationRecord::new());
    }
    RegistrationRecord::from_json(input).context("Failed to parse record JSON")
}

fn preview(config: FormConfig, record: RegistrationRecord, now: Instant, today: NaiveDate) -> String {
    let mut presenter = FormPresenter::new(config);
    presenter.load(record);

    match presenter.submit_on(now, today) {
        Ok(validated) => info!(first_name = validated.first_name(), "record accepted"),
        Err(errors) => info!(fields = errors.len(), "record rejected"),
    }

    presenter.render(today).into_string()
}
