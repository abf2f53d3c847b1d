use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::client::BASE_URL;

pub const CONFIG_PATH: &str = "config.toml";

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Config {
    pub surveymonkey: SurveyMonkeyConfig,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct SurveyMonkeyConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    BASE_URL.to_string()
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found. A default '{}' has been created. Please update it with your credentials.", .0.display())]
    Created(PathBuf),
    #[error("failed to access configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to write default configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
}

impl Default for Config {
    fn default() -> Self {
        Config {
            surveymonkey: SurveyMonkeyConfig {
                client_id: "your_surveymonkey_client_id".to_string(),
                client_secret: "your_surveymonkey_client_secret".to_string(),
                redirect_uri: "http://localhost:8080".to_string(),
                access_token: None,
                base_url: default_base_url(),
            },
        }
    }
}

impl Config {
    /// Applies `SURVEYMONKEY_*` overrides from `lookup`.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let sm = &mut self.surveymonkey;
        if let Some(v) = lookup("SURVEYMONKEY_CLIENT_ID") {
            sm.client_id = v;
        }
        if let Some(v) = lookup("SURVEYMONKEY_CLIENT_SECRET") {
            sm.client_secret = v;
        }
        if let Some(v) = lookup("SURVEYMONKEY_REDIRECT_URI") {
            sm.redirect_uri = v;
        }
        if let Some(v) = lookup("SURVEYMONKEY_ACCESS_TOKEN") {
            sm.access_token = Some(v);
        }
        if let Some(v) = lookup("SURVEYMONKEY_BASE_URL") {
            sm.base_url = v;
        }
    }
}

pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(Path::new(CONFIG_PATH))
}

/// Reads `path`, creating a default file (and failing) if it is missing.
/// Environment variables, including those from a `.env` file, take
/// precedence over the file.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    dotenv::dotenv().ok();

    if !path.exists() {
        let toml_string = toml::to_string_pretty(&Config::default())?;

        let mut file = fs::File::create(path)?;
        file.write_all(toml_string.as_bytes())?;

        return Err(ConfigError::Created(path.to_path_buf()));
    }

    // Read and parse the existing config file
    let config_str = fs::read_to_string(path)?;
    let mut config: Config = toml::from_str(&config_str)?;
    config.apply_overrides(|key| std::env::var(key).ok());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn parses_minimal_file() {
        let config: Config = toml::from_str(
            r#"
            [surveymonkey]
            client_id = "abc"
            client_secret = "shh"
            redirect_uri = "https://x/cb"
            "#,
        )
        .unwrap();

        assert_eq!(config.surveymonkey.client_id, "abc");
        assert_eq!(config.surveymonkey.base_url, BASE_URL);
        assert!(config.surveymonkey.access_token.is_none());
    }

    #[test]
    fn overrides_replace_file_values() {
        let mut config = Config::default();
        let env: HashMap<&str, &str> = [
            ("SURVEYMONKEY_ACCESS_TOKEN", "tok123"),
            ("SURVEYMONKEY_BASE_URL", "http://localhost:9999"),
        ]
        .into_iter()
        .collect();

        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.surveymonkey.access_token.as_deref(), Some("tok123"));
        assert_eq!(config.surveymonkey.base_url, "http://localhost:9999");
        assert_eq!(config.surveymonkey.client_id, "your_surveymonkey_client_id");
    }

    #[test]
    fn missing_file_writes_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let err = load_config_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Created(_)));

        let written: Config = toml::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written.surveymonkey.redirect_uri, "http://localhost:8080");
    }
}
