use std::{path::PathBuf, str::FromStr};

use serde::Deserialize;
use serde_with::serde_as;
use strum::{Display, EnumString};

#[derive(Deserialize, Clone, Debug)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub tracker: TrackerSettings,
}

#[serde_as]
#[derive(Deserialize, Clone, Debug)]
pub struct ApplicationSettings {
    #[serde_as(as = "serde_with::DisplayFromStr")]
    pub port: u16,
    pub host: String,
    pub app_url: String,
    pub cookie_domain: String,
    #[serde(default)]
    pub secure_cookies: bool,
}

#[serde_as]
#[derive(Deserialize, Clone, Debug)]
pub struct TrackerSettings {
    /// Start every new session with the demo activities.
    pub seed_sample_data: bool,
    #[serde_as(as = "serde_with::DisplayFromStr")]
    pub session_idle_minutes: u64,
    #[serde_as(as = "serde_with::DisplayFromStr")]
    pub max_sessions: u64,
    #[serde_as(as = "serde_with::DisplayFromStr")]
    pub default_target_reduction: f64,
}

impl Default for TrackerSettings {
    fn default() -> Self {
        Self {
            seed_sample_data: true,
            session_idle_minutes: 120,
            max_sessions: 10_000,
            default_target_reduction: emissions::DEFAULT_TARGET_REDUCTION,
        }
    }
}

impl ApplicationSettings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

pub fn read_config() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir()
        .map_err(|e| config::ConfigError::Message(format!("no working directory: {e}")))?;
    read_config_from(base_path.join("config"), current_environment()?)
}

pub fn read_config_from(
    config_directory: PathBuf,
    environment: Environment,
) -> Result<Settings, config::ConfigError> {
    let environment_filename = format!("{}.yaml", environment);

    let settings = config::Config::builder()
        .add_source(config::File::from(config_directory.join("base.yaml")))
        .add_source(
            config::File::from(config_directory.join(environment_filename)).required(false),
        )
        .add_source(
            config::Environment::with_prefix("FOOTPRINT")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}

fn current_environment() -> Result<Environment, config::ConfigError> {
    let raw = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "local".into());
    Environment::from_str(&raw)
        .map_err(|_| config::ConfigError::Message(format!("unknown APP_ENVIRONMENT '{raw}'")))
}

#[derive(Display, Debug, Clone, Copy, PartialEq, Eq, EnumString)]
pub enum Environment {
    #[strum(ascii_case_insensitive, serialize = "local")]
    Local,
    #[strum(ascii_case_insensitive, serialize = "production")]
    Production,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("config")
    }

    #[test]
    fn environment_is_case_insensitive() {
        assert_eq!(
            Environment::from_str("Production").unwrap(),
            Environment::Production
        );
        assert_eq!(Environment::Local.to_string(), "local");
        assert!(Environment::from_str("staging").is_err());
    }

    #[test]
    fn local_config_layers_over_base() {
        let settings = read_config_from(config_dir(), Environment::Local).unwrap();
        assert_eq!(settings.application.port, 5000);
        assert_eq!(settings.application.host, "127.0.0.1");
        assert!(!settings.application.secure_cookies);
        assert!(settings.tracker.seed_sample_data);
        assert_eq!(settings.tracker.default_target_reduction, 15.0);
    }

    #[test]
    fn production_config_hardens_cookies() {
        let settings = read_config_from(config_dir(), Environment::Production).unwrap();
        assert!(settings.application.secure_cookies);
        assert!(!settings.tracker.seed_sample_data);
        assert_eq!(settings.application.address(), "0.0.0.0:5000");
    }
}
