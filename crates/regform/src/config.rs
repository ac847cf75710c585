// File: src/config.rs
// Purpose: Form configuration parsing from regform.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing::{info, warn};

/// Named flag bundles, one per deployed variant of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Preset {
    /// Email optional, phone must start with +852, one of the two required
    #[default]
    ContactEither,
    /// Email optional, phone unconstrained, one of the two required
    ContactEitherOpenPhone,
    /// Email required, phone unconstrained
    EmailRequired,
}

/// Form configuration
///
/// Built from a preset; the TOML file is read through `ConfigFile`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormConfig {
    /// Blank email is a violation
    pub require_email: bool,

    /// Phone numbers, when given, must start with this prefix
    pub require_phone_prefix: Option<String>,

    /// At least one of email and phone number must be given
    pub require_one_of_email_phone: bool,

    /// Heading of the form page
    pub title: String,

    /// Draw a divider under the heading
    pub divider: bool,

    pub notification: NotificationConfig,
}

/// Success notification settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NotificationConfig {
    /// Milliseconds before the notification closes itself
    #[serde(default = "default_auto_hide_ms")]
    pub auto_hide_ms: u64,
}

/// On-disk shape: an optional preset plus overrides for any flag
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    preset: Option<Preset>,
    #[serde(default)]
    require_email: Option<bool>,
    /// "" switches the prefix rule off
    #[serde(default)]
    require_phone_prefix: Option<String>,
    #[serde(default)]
    require_one_of_email_phone: Option<bool>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    divider: Option<bool>,
    #[serde(default)]
    notification: Option<NotificationConfig>,
}

// Default values
fn default_title() -> String {
    "User Data".to_string()
}

fn default_auto_hide_ms() -> u64 {
    6000
}

fn default_phone_prefix() -> String {
    "+852".to_string()
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            auto_hide_ms: default_auto_hide_ms(),
        }
    }
}

impl NotificationConfig {
    pub fn auto_hide(&self) -> Duration {
        Duration::from_millis(self.auto_hide_ms)
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self::preset(Preset::default())
    }
}

impl FormConfig {
    /// Flags of a named variant, with default presentation settings
    pub fn preset(preset: Preset) -> Self {
        let (require_email, require_phone_prefix, require_one_of_email_phone) = match preset {
            Preset::ContactEither => (false, Some(default_phone_prefix()), true),
            Preset::ContactEitherOpenPhone => (false, None, true),
            Preset::EmailRequired => (true, None, false),
        };

        Self {
            require_email,
            require_phone_prefix,
            require_one_of_email_phone,
            title: default_title(),
            divider: true,
            notification: NotificationConfig::default(),
        }
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let file: ConfigFile = toml::from_str(content).context("Invalid form configuration")?;
        let config = file.into_config();
        config.warn_if_inconsistent();
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist, return default config
        if !path.exists() {
            info!(path = %path.display(), "no form config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        let config = Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        info!(
            path = %path.display(),
            require_email = config.require_email,
            phone_prefix = config.require_phone_prefix.as_deref().unwrap_or(""),
            require_one_of_email_phone = config.require_one_of_email_phone,
            "loaded form config"
        );
        Ok(config)
    }

    /// Load configuration from default path (./regform.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("regform.toml")
    }

    fn warn_if_inconsistent(&self) {
        if self.require_email && self.require_one_of_email_phone {
            warn!("require_email makes the email-or-phone rule redundant");
        }
    }
}

impl ConfigFile {
    fn into_config(self) -> FormConfig {
        let mut config = FormConfig::preset(self.preset.unwrap_or_default());

        if let Some(require_email) = self.require_email {
            config.require_email = require_email;
        }
        if let Some(prefix) = self.require_phone_prefix {
            config.require_phone_prefix = (!prefix.is_empty()).then_some(prefix);
        }
        if let Some(one_of) = self.require_one_of_email_phone {
            config.require_one_of_email_phone = one_of;
        }
        if let Some(title) = self.title {
            config.title = title;
        }
        if let Some(divider) = self.divider {
            config.divider = divider;
        }
        if let Some(notification) = self.notification {
            config.notification = notification;
        }

        config
    }
}
