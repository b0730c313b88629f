use std::path::{Path, PathBuf};

use crate::error::ConfigError;

pub const APP_NAME: &str = "Star Wars Knowledge Graph QA";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

const DEFAULT_NEO4J_URI: &str = "bolt://localhost:7687";
const DEFAULT_NEO4J_USER: &str = "neo4j";
const DEFAULT_NEO4J_PASSWORD: &str = "password";
const DEFAULT_LOG_LEVEL: &str = "INFO";
const DEFAULT_SQLITE_DB_PATH: &str = "star_wars.db";

/// Load the dotenv file named by `DOTENV_PATH` (default `.env`) into the
/// process environment. Returns the path that was read.
pub fn load_dotenv() -> Result<PathBuf, dotenvy::Error> {
    let path = PathBuf::from(std::env::var("DOTENV_PATH").unwrap_or_else(|_| ".env".to_string()));
    load_dotenv_from(&path)?;
    Ok(path)
}

fn load_dotenv_from(path: &Path) -> Result<(), dotenvy::Error> {
    dotenvy::from_path(path)
}

/// Runtime settings read from the environment (and an optional dotenv file)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub neo4j_uri: String,
    pub neo4j_user: String,
    pub neo4j_password: String,
    /// Checked at startup only; the question translation never calls an LLM
    pub google_api_key: Option<String>,
    pub log_level: String,
    pub sqlite_db_path: PathBuf,
}

impl Settings {
    /// Read the process environment; call [`load_dotenv`] first to pick up a dotenv file
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let or_default = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        Self {
            neo4j_uri: or_default("NEO4J_URI", DEFAULT_NEO4J_URI),
            neo4j_user: or_default("NEO4J_USER", DEFAULT_NEO4J_USER),
            neo4j_password: or_default("NEO4J_PASSWORD", DEFAULT_NEO4J_PASSWORD),
            google_api_key: lookup("GOOGLE_API_KEY"),
            log_level: or_default("LOG_LEVEL", DEFAULT_LOG_LEVEL),
            sqlite_db_path: PathBuf::from(or_default("SQLITE_DB_PATH", DEFAULT_SQLITE_DB_PATH)),
        }
    }

    /// Check that every required variable is present and non-empty
    pub fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("NEO4J_URI", Some(self.neo4j_uri.as_str())),
            ("NEO4J_USER", Some(self.neo4j_user.as_str())),
            ("NEO4J_PASSWORD", Some(self.neo4j_password.as_str())),
            ("GOOGLE_API_KEY", self.google_api_key.as_deref()),
        ];

        let missing: Vec<String> = required
            .iter()
            .filter(|(_, value)| value.map_or(true, str::is_empty))
            .map(|(name, _)| name.to_string())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::MissingVariables(missing))
        }
    }

    /// Filter directive for `tracing_subscriber::EnvFilter`
    pub fn log_filter(&self) -> String {
        match self.log_level.to_uppercase().as_str() {
            "CRITICAL" | "FATAL" => "error".to_string(),
            "WARNING" => "warn".to_string(),
            other => other.to_lowercase(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_settings_defaults() {
        let settings = Settings::from_lookup(lookup_from(&[]));

        assert_eq!(settings.neo4j_uri, "bolt://localhost:7687");
        assert_eq!(settings.neo4j_user, "neo4j");
        assert_eq!(settings.neo4j_password, "password");
        assert_eq!(settings.log_level, "INFO");
        assert_eq!(settings.sqlite_db_path, PathBuf::from("star_wars.db"));
        assert_eq!(APP_NAME, "Star Wars Knowledge Graph QA");
    }

    #[test]
    fn test_validation_reports_missing_api_key() {
        let settings = Settings::from_lookup(lookup_from(&[]));
        let err = settings.validate().unwrap_err();

        assert_eq!(
            err,
            ConfigError::MissingVariables(vec!["GOOGLE_API_KEY".to_string()])
        );
        assert!(err
            .to_string()
            .contains("Variáveis de ambiente obrigatórias"));
    }

    #[test]
    fn test_empty_values_count_as_missing() {
        let settings = Settings::from_lookup(lookup_from(&[
            ("NEO4J_URI", ""),
            ("NEO4J_PASSWORD", ""),
            ("GOOGLE_API_KEY", "test_key"),
        ]));

        assert_eq!(
            settings.validate(),
            Err(ConfigError::MissingVariables(vec![
                "NEO4J_URI".to_string(),
                "NEO4J_PASSWORD".to_string(),
            ]))
        );
    }

    #[test]
    fn test_validation_success() {
        let settings = Settings::from_lookup(lookup_from(&[
            ("NEO4J_URI", "bolt://localhost:7687"),
            ("NEO4J_USER", "neo4j"),
            ("NEO4J_PASSWORD", "password"),
            ("GOOGLE_API_KEY", "test_key"),
        ]));

        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_log_filter_maps_level_names() {
        let settings = Settings::from_lookup(lookup_from(&[("LOG_LEVEL", "WARNING")]));
        assert_eq!(settings.log_filter(), "warn");

        let settings = Settings::from_lookup(lookup_from(&[("LOG_LEVEL", "DEBUG")]));
        assert_eq!(settings.log_filter(), "debug");
    }

    #[test]
    fn test_load_dotenv_sets_variables() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(&path, "HOLONET_DOTENV_MARKER=loaded\n").unwrap();

        load_dotenv_from(&path).unwrap();

        assert_eq!(std::env::var("HOLONET_DOTENV_MARKER").as_deref(), Ok("loaded"));
    }

    #[test]
    fn test_load_dotenv_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_dotenv_from(&dir.path().join("absent.env")).is_err());
    }
}
