//! Configuration management for the KYC server
//!
//! Configuration is read once at startup from the environment (optionally
//! seeded from a `.env` file) and is read-only afterwards.

use serde::Deserialize;
use std::env;
use std::path::PathBuf;

/// Default upload limit: 20MB
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub document_ai: DocumentAiConfig,
    pub openai: OpenAiConfig,
    pub pipeline: PipelineConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub max_upload_bytes: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DocumentAiConfig {
    pub project_id: String,
    pub location: String,
    pub processor_id: String,
    pub access_token: String,
    pub endpoint: String,
}

impl DocumentAiConfig {
    /// Fully qualified processor resource name
    pub fn processor_name(&self) -> String {
        format!(
            "projects/{}/locations/{}/processors/{}",
            self.project_id, self.location, self.processor_id
        )
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OpenAiConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PipelineConfig {
    /// Run the field structuring stage before risk analysis
    pub structure_fields: bool,
    /// Directory for upload temp files (system temp dir when unset)
    pub temp_dir: Option<PathBuf>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            structure_fields: true,
            temp_dir: None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required configuration value: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    ///
    /// Blank values are treated the same as absent ones.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let require = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

        let location = get("GCP_LOCATION").unwrap_or_else(|| "us".to_string());
        let endpoint = get("DOCUMENT_AI_ENDPOINT")
            .unwrap_or_else(|| format!("https://{}-documentai.googleapis.com", location));

        Ok(Config {
            server: ServerConfig {
                host: get("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
                port: parse_or("SERVER_PORT", get("SERVER_PORT"), 3000)?,
                max_upload_bytes: parse_or(
                    "KYC_MAX_UPLOAD_BYTES",
                    get("KYC_MAX_UPLOAD_BYTES"),
                    DEFAULT_MAX_UPLOAD_BYTES,
                )?,
            },
            document_ai: DocumentAiConfig {
                project_id: require("GCP_PROJECT_ID")?,
                location,
                processor_id: require("GCP_PROCESSOR_ID")?,
                access_token: require("GCP_ACCESS_TOKEN")?,
                endpoint: endpoint.trim_end_matches('/').to_string(),
            },
            openai: OpenAiConfig {
                api_key: require("OPENAI_API_KEY")?,
                model: get("OPENAI_MODEL").unwrap_or_else(|| "gpt-4o".to_string()),
                base_url: get("OPENAI_BASE_URL")
                    .unwrap_or_else(|| "https://api.openai.com/v1".to_string())
                    .trim_end_matches('/')
                    .to_string(),
            },
            pipeline: PipelineConfig {
                structure_fields: parse_flag("KYC_STRUCTURE_FIELDS", get("KYC_STRUCTURE_FIELDS"), true)?,
                temp_dir: get("KYC_TEMP_DIR").map(PathBuf::from),
            },
        })
    }
}

fn parse_or<T: std::str::FromStr>(
    key: &'static str,
    value: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match value {
        Some(v) => v.parse().map_err(|_| ConfigError::Invalid { key, value: v }),
        None => Ok(default),
    }
}

fn parse_flag(key: &'static str, value: Option<String>, default: bool) -> Result<bool, ConfigError> {
    let Some(raw) = value else {
        return Ok(default);
    };
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid { key, value: raw }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn base_vars() -> HashMap<&'static str, &'static str> {
        HashMap::from([
            ("GCP_PROJECT_ID", "kyc-project"),
            ("GCP_PROCESSOR_ID", "abc123"),
            ("GCP_ACCESS_TOKEN", "ya29.token"),
            ("OPENAI_API_KEY", "sk-test"),
        ])
    }

    fn load(vars: &HashMap<&'static str, &'static str>) -> Result<Config, ConfigError> {
        Config::from_lookup(|key| vars.get(key).map(|v| v.to_string()))
    }

    #[test]
    fn test_defaults_applied() {
        let config = load(&base_vars()).unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.max_upload_bytes, DEFAULT_MAX_UPLOAD_BYTES);
        assert_eq!(config.document_ai.location, "us");
        assert_eq!(config.document_ai.endpoint, "https://us-documentai.googleapis.com");
        assert_eq!(config.openai.model, "gpt-4o");
        assert_eq!(config.openai.base_url, "https://api.openai.com/v1");
        assert!(config.pipeline.structure_fields);
        assert!(config.pipeline.temp_dir.is_none());
    }

    #[test]
    fn test_processor_name() {
        let config = load(&base_vars()).unwrap();
        assert_eq!(
            config.document_ai.processor_name(),
            "projects/kyc-project/locations/us/processors/abc123"
        );
    }

    #[test]
    fn test_missing_required_value() {
        let mut vars = base_vars();
        vars.remove("OPENAI_API_KEY");

        let err = load(&vars).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("OPENAI_API_KEY")));
        assert!(err.to_string().contains("OPENAI_API_KEY"));
    }

    #[test]
    fn test_blank_value_counts_as_missing() {
        let mut vars = base_vars();
        vars.insert("GCP_PROCESSOR_ID", "   ");

        assert!(matches!(load(&vars), Err(ConfigError::Missing("GCP_PROCESSOR_ID"))));
    }

    #[test]
    fn test_overrides() {
        let mut vars = base_vars();
        vars.insert("SERVER_PORT", "8501");
        vars.insert("GCP_LOCATION", "eu");
        vars.insert("OPENAI_BASE_URL", "http://localhost:8080/v1/");
        vars.insert("KYC_STRUCTURE_FIELDS", "off");
        vars.insert("KYC_TEMP_DIR", "/var/tmp/kyc");

        let config = load(&vars).unwrap();
        assert_eq!(config.server.port, 8501);
        assert_eq!(config.document_ai.endpoint, "https://eu-documentai.googleapis.com");
        assert_eq!(config.openai.base_url, "http://localhost:8080/v1");
        assert!(!config.pipeline.structure_fields);
        assert_eq!(config.pipeline.temp_dir, Some(PathBuf::from("/var/tmp/kyc")));
    }

    #[test]
    fn test_invalid_port() {
        let mut vars = base_vars();
        vars.insert("SERVER_PORT", "not-a-port");

        assert!(matches!(
            load(&vars),
            Err(ConfigError::Invalid { key: "SERVER_PORT", .. })
        ));
    }
}
