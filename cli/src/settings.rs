use anyhow::Context;
use fogsweeper_core::{FlagAccounting, ModelOptions};
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const DEFAULT_PROMPT: &str = "minesweeper-alpha: ";

/// Options read from an optional TOML file. Missing keys keep their defaults.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub flag_accounting: FlagAccounting,
    pub banners: bool,
    pub prompt: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            flag_accounting: FlagAccounting::default(),
            banners: true,
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }
}

impl Settings {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Could not read settings file {}", path.display()))?;
        let settings = Self::from_toml(&text)
            .with_context(|| format!("Invalid settings file {}", path.display()))?;
        log::debug!("Loaded settings from {}: {:?}", path.display(), settings);
        Ok(settings)
    }

    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    pub fn model_options(&self) -> ModelOptions {
        ModelOptions {
            flag_accounting: self.flag_accounting,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        assert_eq!(Settings::from_toml("").unwrap(), Settings::default());
    }

    #[test]
    fn reads_every_key() {
        let settings = Settings::from_toml(
            r#"
            flag_accounting = "current"
            banners = false
            prompt = "> "
            "#,
        )
        .unwrap();

        assert_eq!(
            settings,
            Settings {
                flag_accounting: FlagAccounting::Current,
                banners: false,
                prompt: "> ".to_string(),
            }
        );
        assert_eq!(
            settings.model_options().flag_accounting,
            FlagAccounting::Current
        );
    }

    #[test]
    fn rejects_unknown_keys_and_values() {
        assert!(Settings::from_toml("colour = true").is_err());
        assert!(Settings::from_toml(r#"flag_accounting = "strict""#).is_err());
    }
}
