//! # Storefront Configuration
//!
//! Configuration for the workflow services.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     STOREFRONT_OPEN=09:00                                              │
//! │     STOREFRONT_HOLIDAY_RATE=0.25                                       │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/workflow/storefront.toml (Linux)                         │
//! │     ~/Library/Application Support/com.storefront.workflow/... (macOS)  │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     Open 08:00-20:00, 20% off on December 25                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [hours]
//! open = "08:00"
//! close = "20:00"
//!
//! [promotion]
//! holiday_month = 12
//! holiday_day = 25
//! rate = 0.2
//!
//! [notifications]
//! welcome_message = "Welcome aboard!"
//!
//! [store]
//! name = "Default Store"
//! home_path = "/home"
//! ```

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::error::{WorkflowError, WorkflowResult};

/// `HH:MM` wall-clock times in config files.
mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%H:%M";

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, FORMAT).map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// Business Hours
// =============================================================================

/// The daily window during which the storefront is open.
///
/// The window is half-open: `open` itself is inside, `close` is not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoursSettings {
    #[serde(with = "hhmm", default = "default_open")]
    pub open: NaiveTime,

    #[serde(with = "hhmm", default = "default_close")]
    pub close: NaiveTime,
}

fn default_open() -> NaiveTime {
    NaiveTime::from_hms_opt(8, 0, 0).unwrap_or(NaiveTime::MIN)
}

fn default_close() -> NaiveTime {
    NaiveTime::from_hms_opt(20, 0, 0).unwrap_or(NaiveTime::MIN)
}

impl Default for HoursSettings {
    fn default() -> Self {
        HoursSettings {
            open: default_open(),
            close: default_close(),
        }
    }
}

impl HoursSettings {
    /// True when `time` falls in `[open, close)`.
    pub fn contains(&self, time: NaiveTime) -> bool {
        time >= self.open && time < self.close
    }
}

// =============================================================================
// Promotion
// =============================================================================

/// The once-a-year holiday discount.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PromotionSettings {
    /// Month of the holiday (1-12).
    #[serde(default = "default_holiday_month")]
    pub holiday_month: u32,

    /// Day of month of the holiday.
    #[serde(default = "default_holiday_day")]
    pub holiday_day: u32,

    /// Discount handed out on the holiday, as a fraction (0.2 = 20%).
    #[serde(default = "default_holiday_rate")]
    pub rate: f64,
}

fn default_holiday_month() -> u32 {
    12
}
fn default_holiday_day() -> u32 {
    25
}
fn default_holiday_rate() -> f64 {
    0.2
}

impl Default for PromotionSettings {
    fn default() -> Self {
        PromotionSettings {
            holiday_month: default_holiday_month(),
            holiday_day: default_holiday_day(),
            rate: default_holiday_rate(),
        }
    }
}

// =============================================================================
// Notifications
// =============================================================================

/// Email content owned by the storefront.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSettings {
    /// Body of the sign-up email. Must greet the user with "welcome".
    #[serde(default = "default_welcome_message")]
    pub welcome_message: String,
}

fn default_welcome_message() -> String {
    "Welcome aboard!".to_string()
}

impl Default for NotificationSettings {
    fn default() -> Self {
        NotificationSettings {
            welcome_message: default_welcome_message(),
        }
    }
}

// =============================================================================
// Store
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreSettings {
    #[serde(default = "default_store_name")]
    pub name: String,

    /// Path reported to analytics when the home page renders.
    #[serde(default = "default_home_path")]
    pub home_path: String,
}

fn default_store_name() -> String {
    "Default Store".to_string()
}

fn default_home_path() -> String {
    "/home".to_string()
}

impl Default for StoreSettings {
    fn default() -> Self {
        StoreSettings {
            name: default_store_name(),
            home_path: default_home_path(),
        }
    }
}

// =============================================================================
// Main Configuration
// =============================================================================

/// Complete storefront configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    #[serde(default)]
    pub hours: HoursSettings,

    #[serde(default)]
    pub promotion: PromotionSettings,

    #[serde(default)]
    pub notifications: NotificationSettings,

    #[serde(default)]
    pub store: StoreSettings,
}

impl StorefrontConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (storefront.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> WorkflowResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading storefront config from file");
                config = Self::from_file(&path)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load storefront config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Parses a TOML file without applying overrides or validation.
    pub fn from_file(path: &Path) -> WorkflowResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Saves configuration to file.
    pub fn save(&self, config_path: Option<PathBuf>) -> WorkflowResult<()> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or_else(|| WorkflowError::ConfigSaveFailed("No config path available".into()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| WorkflowError::ConfigSaveFailed(e.to_string()))?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents)
            .map_err(|e| WorkflowError::ConfigSaveFailed(e.to_string()))?;

        info!(?path, "Storefront config saved");
        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> WorkflowResult<()> {
        if self.hours.open >= self.hours.close {
            return Err(WorkflowError::InvalidConfig(format!(
                "opening time {} must be before closing time {}",
                self.hours.open.format(hhmm::FORMAT),
                self.hours.close.format(hhmm::FORMAT)
            )));
        }

        // 2024 is a leap year, so February 29 is accepted
        if NaiveDate::from_ymd_opt(2024, self.promotion.holiday_month, self.promotion.holiday_day)
            .is_none()
        {
            return Err(WorkflowError::InvalidConfig(format!(
                "holiday {}-{} is not a calendar date",
                self.promotion.holiday_month, self.promotion.holiday_day
            )));
        }

        if !(0.0..1.0).contains(&self.promotion.rate) {
            return Err(WorkflowError::InvalidConfig(format!(
                "promotion rate must be in [0, 1), got {}",
                self.promotion.rate
            )));
        }

        if !self
            .notifications
            .welcome_message
            .to_lowercase()
            .contains("welcome")
        {
            return Err(WorkflowError::InvalidConfig(
                "welcome_message must contain a welcome greeting".into(),
            ));
        }

        if !self.store.home_path.starts_with('/') {
            return Err(WorkflowError::InvalidConfig(format!(
                "home_path must start with '/', got: {}",
                self.store.home_path
            )));
        }

        Ok(())
    }

    /// Applies `STOREFRONT_*` overrides read through `lookup`.
    ///
    /// Unparseable values are logged and ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(open) = lookup("STOREFRONT_OPEN") {
            match NaiveTime::parse_from_str(&open, hhmm::FORMAT) {
                Ok(time) => {
                    debug!(open = %open, "Overriding opening time from environment");
                    self.hours.open = time;
                }
                Err(_) => warn!(open = %open, "Ignoring unparseable STOREFRONT_OPEN"),
            }
        }

        if let Some(close) = lookup("STOREFRONT_CLOSE") {
            match NaiveTime::parse_from_str(&close, hhmm::FORMAT) {
                Ok(time) => {
                    debug!(close = %close, "Overriding closing time from environment");
                    self.hours.close = time;
                }
                Err(_) => warn!(close = %close, "Ignoring unparseable STOREFRONT_CLOSE"),
            }
        }

        if let Some(rate) = lookup("STOREFRONT_HOLIDAY_RATE") {
            match rate.parse::<f64>() {
                Ok(r) => {
                    debug!(rate = r, "Overriding holiday rate from environment");
                    self.promotion.rate = r;
                }
                Err(_) => warn!(rate = %rate, "Ignoring unparseable STOREFRONT_HOLIDAY_RATE"),
            }
        }

        if let Some(name) = lookup("STOREFRONT_STORE_NAME") {
            debug!(name = %name, "Overriding store name from environment");
            self.store.name = name;
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "storefront", "workflow")
            .map(|dirs| dirs.config_dir().join("storefront.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn at(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_default_config() {
        let config = StorefrontConfig::default();
        assert_eq!(config.hours.open, at(8, 0));
        assert_eq!(config.hours.close, at(20, 0));
        assert_eq!(config.promotion.holiday_month, 12);
        assert_eq!(config.promotion.holiday_day, 25);
        assert_eq!(config.promotion.rate, 0.2);
        assert_eq!(config.store.home_path, "/home");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_hours_window_is_half_open() {
        let hours = HoursSettings::default();
        assert!(!hours.contains(at(7, 59)));
        assert!(hours.contains(at(8, 0)));
        assert!(hours.contains(at(19, 59)));
        assert!(!hours.contains(at(20, 0)));
        assert!(!hours.contains(at(20, 1)));
    }

    #[test]
    fn test_config_validation() {
        let mut config = StorefrontConfig::default();

        config.hours.open = at(21, 0);
        assert!(config.validate().is_err());
        config.hours = HoursSettings::default();

        config.promotion.holiday_month = 2;
        config.promotion.holiday_day = 30;
        assert!(config.validate().is_err());
        config.promotion.holiday_day = 29;
        assert!(config.validate().is_ok());
        config.promotion = PromotionSettings::default();

        config.promotion.rate = 1.0;
        assert!(config.validate().is_err());
        config.promotion.rate = -0.1;
        assert!(config.validate().is_err());
        config.promotion.rate = 0.0;
        assert!(config.validate().is_ok());

        config.notifications.welcome_message = "Hello".into();
        assert!(config.validate().is_err());
        config.notifications.welcome_message = "WELCOME to the shop".into();
        assert!(config.validate().is_ok());

        config.store.home_path = "home".into();
        assert!(matches!(
            config.validate(),
            Err(WorkflowError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("STOREFRONT_OPEN", "09:30"),
            ("STOREFRONT_CLOSE", "not-a-time"),
            ("STOREFRONT_HOLIDAY_RATE", "0.25"),
            ("STOREFRONT_STORE_NAME", "Downtown"),
        ]
        .into_iter()
        .collect();

        let mut config = StorefrontConfig::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.hours.open, at(9, 30));
        assert_eq!(config.hours.close, at(20, 0));
        assert_eq!(config.promotion.rate, 0.25);
        assert_eq!(config.store.name, "Downtown");
    }

    #[test]
    fn test_toml_partial_file_uses_defaults() {
        let config: StorefrontConfig = toml::from_str(
            r#"
            [hours]
            open = "07:00"

            [promotion]
            rate = 0.1
            "#,
        )
        .unwrap();

        assert_eq!(config.hours.open, at(7, 0));
        assert_eq!(config.hours.close, at(20, 0));
        assert_eq!(config.promotion.rate, 0.1);
        assert_eq!(config.promotion.holiday_day, 25);
        assert_eq!(config.notifications.welcome_message, "Welcome aboard!");
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("storefront.toml");

        let mut config = StorefrontConfig::default();
        config.store.name = "Harbour Street".into();
        config.save(Some(path.clone())).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("[hours]"));
        assert!(contents.contains("open = \"08:00\""));

        let loaded = StorefrontConfig::from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storefront.toml");
        std::fs::write(&path, "[hours]\nopen = \"22:00\"\nclose = \"06:00\"\n").unwrap();

        let err = StorefrontConfig::from_file(&path)
            .and_then(|c| c.validate())
            .unwrap_err();
        assert!(err.is_config_error());
    }

    #[test]
    fn test_load_validates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storefront.toml");
        std::fs::write(&path, "[hours]\nopen = \"22:00\"\nclose = \"06:00\"\n").unwrap();

        let err = StorefrontConfig::load(Some(path.clone())).unwrap_err();
        assert!(matches!(err, WorkflowError::InvalidConfig(_)));
        assert!(err.to_string().contains("22:00"));

        assert_eq!(
            StorefrontConfig::load_or_default(Some(path)),
            StorefrontConfig::default()
        );
    }

    #[test]
    fn test_load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storefront.toml");
        std::fs::write(&path, "[hours]\nopen = \"07:30\"\n\n[store]\nhome_path = \"/shop\"\n")
            .unwrap();

        let config = StorefrontConfig::load(Some(path.clone())).unwrap();
        assert_eq!(config.hours.open, at(7, 30));
        assert_eq!(config.store.home_path, "/shop");
        assert_eq!(StorefrontConfig::load_or_default(Some(path)), config);
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        assert_eq!(
            StorefrontConfig::load(Some(path)).unwrap(),
            StorefrontConfig::default()
        );
    }

    #[test]
    fn test_malformed_time_is_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storefront.toml");
        std::fs::write(&path, "[hours]\nopen = \"8 o'clock\"\n").unwrap();

        assert!(matches!(
            StorefrontConfig::from_file(&path),
            Err(WorkflowError::ConfigLoadFailed(_))
        ));
    }
}
