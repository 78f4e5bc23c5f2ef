//! Application configuration.

use serde::Deserialize;
use std::path::Path;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Profile form behavior configuration.
    #[serde(default)]
    pub form: FormConfig,
}

/// Profile form behavior configuration.
///
/// Both knobs exist because the source behavior they control is ambiguous;
/// the defaults reproduce it exactly rather than guessing at intent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FormConfig {
    /// What happens to the "saved" indicator when the post-submit refetch
    /// replaces local state.
    #[serde(default)]
    pub saved_flag: SavedFlagPolicy,
    /// Whether the therapist checkbox honors read-only (impersonation) mode
    /// the way text fields do. Off by default: the checkbox stays
    /// interactive while impersonating.
    #[serde(default)]
    pub readonly_locks_therapist: bool,
}

/// Policy for the saved flag across the post-submit refetch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SavedFlagPolicy {
    /// The refetch leaves `saved = true` standing as UI messaging.
    #[default]
    KeepAcrossRefetch,
    /// The refetch clears `saved` along with replacing the record.
    ClearOnRefetch,
}

impl Config {
    /// Load configuration from files and environment variables.
    ///
    /// Configuration is loaded in the following order:
    /// 1. `config/default.toml`
    /// 2. `config/{environment}.toml` (based on `ACCOUNT_ENV`)
    /// 3. Environment variables with `ACCOUNT_` prefix
    pub fn load() -> Result<Self, config::ConfigError> {
        // Pick up a local .env if present
        dotenvy::dotenv().ok();

        let env = std::env::var("ACCOUNT_ENV").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("ACCOUNT")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Load configuration from a specific file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::from(path.as_ref()))
            .add_source(
                config::Environment::with_prefix("ACCOUNT")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_reproduce_source_behavior() {
        let config = Config::default();
        assert_eq!(config.form.saved_flag, SavedFlagPolicy::KeepAcrossRefetch);
        assert!(!config.form.readonly_locks_therapist);
    }

    #[test]
    fn test_saved_flag_policy_from_toml() {
        let config: Config = config::Config::builder()
            .add_source(config::File::from_str(
                "[form]\nsaved_flag = \"clear_on_refetch\"\nreadonly_locks_therapist = true\n",
                config::FileFormat::Toml,
            ))
            .build()
            .and_then(config::Config::try_deserialize)
            .unwrap();

        assert_eq!(config.form.saved_flag, SavedFlagPolicy::ClearOnRefetch);
        assert!(config.form.readonly_locks_therapist);
    }
}
