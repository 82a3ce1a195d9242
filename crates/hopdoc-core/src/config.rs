use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::ConfigError;

/// Default per-request timeout for live fetches, in seconds.
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = ".hopdoc.yaml";

/// Options consumed by the renderer.
///
/// Config files may also use the CLI flag names (`execute`, `timeout`,
/// `server`, `target_server`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Perform a live fetch for every `GET` request and embed the response.
    #[serde(alias = "execute")]
    pub execute_reads: bool,
    /// Zero disables the timeout.
    #[serde(alias = "timeout")]
    pub timeout_seconds: u64,
    /// Scheme and host shown in the documented endpoints.
    #[serde(alias = "server")]
    pub documentation_host: Option<String>,
    /// Scheme and host dialed by live fetches; the documented endpoint is unchanged.
    #[serde(alias = "target_server")]
    pub fetch_host: Option<String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            execute_reads: false,
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            documentation_host: None,
            fetch_host: None,
        }
    }
}

impl RenderOptions {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

/// Project configuration loaded from `.hopdoc.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HopdocConfig {
    pub input: Option<String>,
    /// Output file; stdout when unset.
    pub output: Option<String>,
    pub render: RenderOptions,
}

/// Load config from a YAML file. Returns `None` if the file doesn't exist.
pub fn load_config(path: &Path) -> Result<Option<HopdocConfig>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.display().to_string(),
        source,
    })?;
    let config: HopdocConfig =
        serde_yaml_ng::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })?;
    Ok(Some(config))
}

/// Generate the default config file content.
pub fn default_config_content() -> &'static str {
    r#"# hopdoc configuration
input: collection.json
# output: API.md            # omit to print to stdout

render:
  execute_reads: false      # fetch GET requests and embed the responses
  timeout_seconds: 10       # 0 disables the timeout
  # documentation_host: https://api.example.com   # host shown in the docs
  # fetch_host: http://localhost:8080             # host dialed when fetching
"#
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HopdocConfig::default();
        assert!(config.input.is_none());
        assert!(config.output.is_none());
        assert!(!config.render.execute_reads);
        assert_eq!(config.render.timeout_seconds, 10);
        assert_eq!(config.render.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_parse_config_yaml() {
        let yaml = r#"
input: api.json
output: API.md
render:
  execute_reads: true
  timeout_seconds: 3
  documentation_host: https://api.example.com
  fetch_host: http://localhost:8080
"#;
        let config: HopdocConfig = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(config.input.as_deref(), Some("api.json"));
        assert_eq!(config.output.as_deref(), Some("API.md"));
        assert!(config.render.execute_reads);
        assert_eq!(config.render.timeout_seconds, 3);
        assert_eq!(
            config.render.documentation_host.as_deref(),
            Some("https://api.example.com")
        );
        assert_eq!(
            config.render.fetch_host.as_deref(),
            Some("http://localhost:8080")
        );
    }

    #[test]
    fn test_parse_flag_named_keys() {
        let yaml = "render:\n  execute: true\n  timeout: 3\n  server: https://x.org\n  target_server: http://localhost:8080\n";
        let config: HopdocConfig = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(
            config.render,
            RenderOptions {
                execute_reads: true,
                timeout_seconds: 3,
                documentation_host: Some("https://x.org".to_string()),
                fetch_host: Some("http://localhost:8080".to_string()),
            }
        );
    }

    #[test]
    fn test_default_content_parses() {
        let config: HopdocConfig = serde_yaml_ng::from_str(default_config_content()).unwrap();
        assert_eq!(config.input.as_deref(), Some("collection.json"));
        assert_eq!(config.render, RenderOptions::default());
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = load_config(&dir.path().join(CONFIG_FILE_NAME)).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_load_invalid_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "render: [not, a, map]\n").unwrap();
        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
