use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde_yaml::Value;
use tracing::{info, warn};

pub const OPENAI_KEY_NAME: &str = "OPENAI_API_KEY";
pub const SERPER_KEY_NAME: &str = "SERPER_API_KEY";

const DEFAULT_OPENAI_CREDENTIALS: &str = "openai_credentials.yml";
const DEFAULT_SERPER_CREDENTIALS: &str = "crewai_api_key.yml";
const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_SERPER_BASE_URL: &str = "https://google.serper.dev";

/// Application configuration, built once at startup and shared read-only.
/// Fails at startup if the OpenAI key cannot be found.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: String,
    /// Absent when no search credentials are configured; the job researcher
    /// then runs without web search.
    pub serper_api_key: Option<String>,
    pub openai_base_url: String,
    pub serper_base_url: String,
    pub port: u16,
}

impl Config {
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let openai_file = env_or("OPENAI_CREDENTIALS_FILE", DEFAULT_OPENAI_CREDENTIALS);
        let serper_file = env_or("SERPER_CREDENTIALS_FILE", DEFAULT_SERPER_CREDENTIALS);

        let openai_api_key = require_key(&openai_file, OPENAI_KEY_NAME)?;
        let serper_api_key = resolve_key(&serper_file, SERPER_KEY_NAME)?;
        if serper_api_key.is_none() {
            warn!("{SERPER_KEY_NAME} not configured; job search will run without web results");
        }

        Ok(Config {
            openai_api_key,
            serper_api_key,
            openai_base_url: env_or_string("OPENAI_BASE_URL", DEFAULT_OPENAI_BASE_URL),
            serper_base_url: env_or_string("SERPER_BASE_URL", DEFAULT_SERPER_BASE_URL),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
        })
    }
}

/// Reads a credentials YAML file as a mapping of key name to any YAML value.
/// Only the keys a caller looks up need to hold strings.
pub fn load_credentials(path: &Path) -> Result<HashMap<String, Value>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read credentials file '{}'", path.display()))?;
    if raw.trim().is_empty() {
        return Ok(HashMap::new());
    }
    serde_yaml::from_str(&raw)
        .with_context(|| format!("Credentials file '{}' is not a key: value map", path.display()))
}

/// Looks a key up in the credentials file when it exists, otherwise in the
/// environment. Empty or null values count as missing.
fn resolve_key(path: &Path, key: &str) -> Result<Option<String>> {
    let value = if path.exists() {
        info!("Loading {key} from {}", path.display());
        match load_credentials(path)?.remove(key) {
            None | Some(Value::Null) => None,
            Some(Value::String(v)) => Some(v),
            Some(_) => bail!("{key} in {} must be a string", path.display()),
        }
    } else {
        std::env::var(key).ok()
    };
    Ok(value.filter(|v| !v.trim().is_empty()))
}

fn env_or(key: &str, default: &str) -> PathBuf {
    PathBuf::from(env_or_string(key, default))
}

fn env_or_string(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Like `resolve_key`, but a missing key is fatal.
pub fn require_key(path: &Path, key: &str) -> Result<String> {
    match resolve_key(path, key)? {
        Some(v) => Ok(v),
        None => bail!("{key} is missing! Please check your {} file.", path.display()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_yaml(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_credentials_flat_map() {
        let file = write_yaml("OPENAI_API_KEY: sk-test\nOTHER: value\n");
        let creds = load_credentials(file.path()).unwrap();
        assert_eq!(creds.get("OPENAI_API_KEY").and_then(Value::as_str), Some("sk-test"));
        assert_eq!(creds.get("OTHER").and_then(Value::as_str), Some("value"));
    }

    #[test]
    fn test_load_credentials_empty_file() {
        let file = write_yaml("");
        assert!(load_credentials(file.path()).unwrap().is_empty());
    }

    #[test]
    fn test_load_credentials_rejects_non_mapping() {
        let file = write_yaml("- OPENAI_API_KEY\n- sk-test\n");
        assert!(load_credentials(file.path()).is_err());
    }

    #[test]
    fn test_unrelated_nested_key_is_tolerated() {
        let file = write_yaml("proxy:\n  host: localhost\n  port: 3128\nSERPER_API_KEY: abc\n");
        assert_eq!(
            resolve_key(file.path(), SERPER_KEY_NAME).unwrap().as_deref(),
            Some("abc")
        );
    }

    #[test]
    fn test_nested_value_for_wanted_key_is_error() {
        let file = write_yaml("OPENAI_API_KEY:\n  nested: true\n");
        let err = require_key(file.path(), OPENAI_KEY_NAME).unwrap_err();
        assert!(err.to_string().contains("must be a string"), "{err}");
    }

    #[test]
    fn test_null_value_counts_as_missing() {
        let file = write_yaml("OPENAI_API_KEY:\nSERPER_API_KEY: abc\n");
        assert!(require_key(file.path(), OPENAI_KEY_NAME).is_err());
        assert_eq!(
            resolve_key(file.path(), SERPER_KEY_NAME).unwrap().as_deref(),
            Some("abc")
        );
    }

    #[test]
    fn test_require_key_present() {
        let file = write_yaml("OPENAI_API_KEY: sk-test\n");
        assert_eq!(require_key(file.path(), OPENAI_KEY_NAME).unwrap(), "sk-test");
    }

    #[test]
    fn test_require_key_missing_is_error() {
        let file = write_yaml("SOMETHING_ELSE: x\n");
        let err = require_key(file.path(), OPENAI_KEY_NAME).unwrap_err();
        assert!(err.to_string().contains("OPENAI_API_KEY is missing"), "{err}");
    }

    #[test]
    fn test_require_key_empty_value_is_error() {
        let file = write_yaml("OPENAI_API_KEY: \"\"\n");
        assert!(require_key(file.path(), OPENAI_KEY_NAME).is_err());
    }

    #[test]
    fn test_optional_key_absent_from_file() {
        let file = write_yaml("OPENAI_API_KEY: sk-test\n");
        assert_eq!(resolve_key(file.path(), SERPER_KEY_NAME).unwrap(), None);
    }
}
