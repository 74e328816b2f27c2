//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Validation
//!
//! Config values are validated after parsing: the tradition tag must name
//! a registered surname tradition and the locale must have a registered
//! kinship namer. Unknown keys in the file are rejected by serde.

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// User-scope configuration.
///
/// # Example
///
/// ```toml
/// tradition = "spanish"
/// locale = "en"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Default surname tradition tag
    pub tradition: Option<String>,

    /// Default locale for kinship names
    pub locale: Option<String>,
}

impl GlobalConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(tradition) = &self.tradition {
            let valid = crate::tradition::valid_tradition_names();
            if !valid.contains(&tradition.as_str()) {
                return Err(ConfigError::InvalidValue(format!(
                    "invalid tradition '{}', must be one of: {}",
                    tradition,
                    valid.join(", ")
                )));
            }
        }

        if let Some(locale) = &self.locale {
            let valid = crate::kinship::available_locales();
            if !valid.contains(&locale.as_str()) {
                return Err(ConfigError::InvalidValue(format!(
                    "invalid locale '{}', must be one of: {}",
                    locale,
                    valid.join(", ")
                )));
            }
        }

        Ok(())
    }

    /// Get a value by configuration key.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnknownKey` for keys outside the schema.
    pub fn get(&self, key: &str) -> Result<Option<&str>, ConfigError> {
        match key {
            "tradition" => Ok(self.tradition.as_deref()),
            "locale" => Ok(self.locale.as_deref()),
            _ => Err(ConfigError::UnknownKey(key.to_string())),
        }
    }

    /// Set a value by configuration key, validating it first.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnknownKey` for keys outside the schema and
    /// `ConfigError::InvalidValue` for values that fail validation.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut updated = self.clone();
        match key {
            "tradition" => updated.tradition = Some(value.to_string()),
            "locale" => updated.locale = Some(value.to_string()),
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        updated.validate()?;
        *self = updated;
        Ok(())
    }

    /// All schema keys and their current values, for listings.
    pub fn entries(&self) -> Vec<(&'static str, Option<&str>)> {
        vec![
            ("tradition", self.tradition.as_deref()),
            ("locale", self.locale.as_deref()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(GlobalConfig::default().validate().is_ok());
    }

    #[test]
    fn known_tradition_accepted() {
        let config = GlobalConfig {
            tradition: Some("spanish".to_string()),
            locale: None,
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn unknown_tradition_rejected() {
        let config = GlobalConfig {
            tradition: Some("klingon".to_string()),
            locale: None,
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue(_))
        ));
    }

    #[test]
    fn unknown_locale_rejected() {
        let config = GlobalConfig {
            tradition: None,
            locale: Some("xx".to_string()),
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue(_))
        ));
    }

    #[test]
    fn get_and_set_round_trip() {
        let mut config = GlobalConfig::default();
        assert_eq!(config.get("tradition").unwrap(), None);
        config.set("tradition", "polish").unwrap();
        assert_eq!(config.get("tradition").unwrap(), Some("polish"));
    }

    #[test]
    fn set_validates_the_value() {
        let mut config = GlobalConfig::default();
        assert!(config.set("tradition", "klingon").is_err());
        // A failed set leaves the config untouched
        assert_eq!(config.tradition, None);
    }

    #[test]
    fn unknown_key_rejected() {
        let mut config = GlobalConfig::default();
        assert!(matches!(
            config.get("color"),
            Err(ConfigError::UnknownKey(_))
        ));
        assert!(config.set("color", "red").is_err());
    }

    #[test]
    fn unknown_file_keys_rejected_by_serde() {
        let result: Result<GlobalConfig, _> = toml::from_str("colour = \"red\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn toml_round_trip() {
        let config = GlobalConfig {
            tradition: Some("icelandic".to_string()),
            locale: Some("en".to_string()),
        };
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: GlobalConfig = toml::from_str(&text).unwrap();
        assert_eq!(config, parsed);
    }
}
