use std::time::Duration;

use serde::Deserialize;

pub const DEFAULT_POLL_INTERVAL_SECONDS: u64 = 10;
pub const MAX_POLL_INTERVAL_SECONDS: u64 = 60;

#[derive(Clone, Deserialize, Debug)]
pub struct Settings {
    /// Base URL of the Domoticz server, e.g. `http://domoticz:8080`.
    pub base_url: String,
    pub username: String,
    pub password: String,
    pub poll_interval_seconds: u64,
    pub request_timeout_seconds: u64,

    /// Extra trusted root (PEM) for controllers with self signed certificates.
    pub ca_cert: Option<String>,
}

impl Settings {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_seconds)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }

    fn validate(mut self) -> Result<Self, config::ConfigError> {
        self.base_url = self.base_url.trim().trim_end_matches('/').to_string();

        if self.base_url.is_empty() {
            return Err(config::ConfigError::Message(
                "base_url must not be empty. Set BASE_URL to your Domoticz server".to_string(),
            ));
        }

        if !(1..=MAX_POLL_INTERVAL_SECONDS).contains(&self.poll_interval_seconds) {
            return Err(config::ConfigError::Message(format!(
                "poll_interval_seconds must be between 1 and {MAX_POLL_INTERVAL_SECONDS}, got {}",
                self.poll_interval_seconds
            )));
        }

        if self.request_timeout_seconds == 0 {
            return Err(config::ConfigError::Message(
                "request_timeout_seconds must be at least 1".to_string(),
            ));
        }

        Ok(self)
    }
}

/// Reads settings from an optional `Settings` file and the process environment.
pub fn read_settings() -> Result<Settings, config::ConfigError> {
    read_settings_from(None)
}

/// Like [`read_settings`], but takes environment variables from `env` when
/// given instead of the process environment.
pub fn read_settings_from(
    env: Option<config::Map<String, String>>,
) -> Result<Settings, config::ConfigError> {
    config::Config::builder()
        .set_default("username", "admin")?
        .set_default("password", "domoticz")?
        .set_default("poll_interval_seconds", DEFAULT_POLL_INTERVAL_SECONDS)?
        .set_default("request_timeout_seconds", 10_u64)?
        .add_source(config::File::with_name("Settings").required(false))
        .add_source(config::Environment::default().source(env))
        .build()?
        .try_deserialize::<Settings>()?
        .validate()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(pairs: &[(&str, &str)]) -> config::Map<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn defaults_apply_when_only_base_url_is_set() {
        let settings = read_settings_from(Some(env(&[("BASE_URL", "http://domoticz:8080/")])))
            .unwrap();

        assert_eq!(settings.base_url, "http://domoticz:8080");
        assert_eq!(settings.username, "admin");
        assert_eq!(settings.password, "domoticz");
        assert_eq!(settings.poll_interval(), Duration::from_secs(10));
        assert!(settings.ca_cert.is_none());
    }

    #[test]
    fn environment_overrides_defaults() {
        let settings = read_settings_from(Some(env(&[
            ("BASE_URL", "https://domoticz.example.net"),
            ("USERNAME", "voice"),
            ("PASSWORD", "1234"),
            ("POLL_INTERVAL_SECONDS", "5"),
        ])))
        .unwrap();

        assert_eq!(settings.username, "voice");
        assert_eq!(settings.password, "1234");
        assert_eq!(settings.poll_interval_seconds, 5);
    }

    #[test]
    fn missing_base_url_is_an_error() {
        assert!(read_settings_from(Some(env(&[]))).is_err());
    }

    #[test]
    fn unbounded_poll_interval_is_rejected() {
        let result = read_settings_from(Some(env(&[
            ("BASE_URL", "http://domoticz:8080"),
            ("POLL_INTERVAL_SECONDS", "600"),
        ])));

        assert!(result.is_err());
    }
}
