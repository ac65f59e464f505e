//! Configuration management for sdoc.
//!
//! Parses `sdoc.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `output.link_prefix`
//! - `external_doc.url`

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override output format.
    pub format: Option<OutputFormat>,
    /// Override link prefix.
    pub link_prefix: Option<String>,
    /// Override link extension.
    pub link_extension: Option<String>,
}

/// Configuration filename to search for.
pub const CONFIG_FILENAME: &str = "sdoc.toml";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output configuration.
    pub output: OutputConfig,
    /// External documentation rules, tried in order.
    pub external_doc: Vec<ExternalDocConfig>,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Output format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Plain CommonMark.
    #[default]
    Commonmark,
    /// CommonMark with raw HTML anchors and highlighted code blocks.
    CommonmarkHtml,
}

impl OutputFormat {
    pub fn is_html(self) -> bool {
        self == Self::CommonmarkHtml
    }
}

/// Output configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format.
    pub format: OutputFormat,
    /// Prefix of every generated documentation link.
    pub link_prefix: String,
    /// Extension of linked documents, without the leading dot.
    pub link_extension: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            link_prefix: String::new(),
            link_extension: "md".to_owned(),
        }
    }
}

/// External documentation rule.
///
/// Names in `namespace` link to `url`, with `$$` replaced by the
/// percent-encoded name.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ExternalDocConfig {
    pub namespace: String,
    pub url: String,
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `sdoc.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading, allowing CLI arguments to take
    /// precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the resulting configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = std::env::current_dir()
            .ok()
            .and_then(|cwd| Self::discover_config(&cwd))
        {
            Self::load_from_file(&discovered)?
        } else {
            tracing::debug!("No {CONFIG_FILENAME} found, using defaults");
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(format) = settings.format {
            self.output.format = format;
        }
        if let Some(link_prefix) = &settings.link_prefix {
            self.output.link_prefix.clone_from(link_prefix);
        }
        if let Some(link_extension) = &settings.link_extension {
            self.output.link_extension.clone_from(link_extension);
        }
    }

    /// Search for config file in `start` and its parents.
    fn discover_config(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;
        config.config_path = Some(path.to_path_buf());
        config.validate()?;

        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file and after CLI settings
    /// are applied.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_output()?;
        self.validate_external_doc()?;
        Ok(())
    }

    fn validate_output(&self) -> Result<(), ConfigError> {
        let extension = &self.output.link_extension;
        require_non_empty(extension, "output.link_extension")?;
        if extension.starts_with('.') {
            return Err(ConfigError::Validation(
                "output.link_extension must not start with '.'".to_owned(),
            ));
        }
        Ok(())
    }

    fn validate_external_doc(&self) -> Result<(), ConfigError> {
        for rule in &self.external_doc {
            require_non_empty(&rule.namespace, "external_doc.namespace")?;
            require_non_empty(&rule.url, "external_doc.url")?;
            require_http_url(&rule.url, "external_doc.url")?;
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.output.link_prefix = expand::expand_env(&self.output.link_prefix, "output.link_prefix")?;
        for rule in &mut self.external_doc {
            rule.url = expand::expand_env(&rule.url, "external_doc.url")?;
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`output.link_prefix`").
        field: String,
        /// Error message (e.g., "${`DOCS_URL`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn write_config(dir: &Path, content: &str) -> PathBuf {
        let path = dir.join(CONFIG_FILENAME);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.output.format, OutputFormat::Commonmark);
        assert_eq!(config.output.link_prefix, "");
        assert_eq!(config.output.link_extension, "md");
        assert!(config.external_doc.is_empty());
        assert!(config.config_path.is_none());
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.output.link_extension, "md");
    }

    #[test]
    fn test_parse_output_config() {
        let toml = r#"
[output]
format = "commonmark_html"
link_prefix = "/api/"
link_extension = "html"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.output.format, OutputFormat::CommonmarkHtml);
        assert!(config.output.format.is_html());
        assert_eq!(config.output.link_prefix, "/api/");
        assert_eq!(config.output.link_extension, "html");
    }

    #[test]
    fn test_parse_unknown_format() {
        let toml = r#"
[output]
format = "latex"
"#;
        assert!(toml::from_str::<Config>(toml).is_err());
    }

    #[test]
    fn test_parse_external_doc() {
        let toml = r#"
[[external_doc]]
namespace = "std"
url = "https://en.cppreference.com/mwiki/index.php?search=$$"

[[external_doc]]
namespace = "boost"
url = "https://www.boost.org/doc?q=$$"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(
            config.external_doc,
            vec![
                ExternalDocConfig {
                    namespace: "std".to_owned(),
                    url: "https://en.cppreference.com/mwiki/index.php?search=$$".to_owned(),
                },
                ExternalDocConfig {
                    namespace: "boost".to_owned(),
                    url: "https://www.boost.org/doc?q=$$".to_owned(),
                },
            ]
        );
    }

    #[test]
    fn test_load_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            dir.path(),
            r#"
[output]
link_prefix = "docs/"
"#,
        );

        let config = Config::load(Some(&path), None).unwrap();
        assert_eq!(config.output.link_prefix, "docs/");
        assert_eq!(config.config_path, Some(path));
    }

    #[test]
    fn test_load_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");

        let err = Config::load(Some(&path), None).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
        assert!(err.to_string().contains("missing.toml"));
    }

    #[test]
    fn test_load_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "[output\n");

        let err = Config::load(Some(&path), None).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_cli_settings_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            dir.path(),
            r#"
[output]
format = "commonmark"
link_prefix = "docs/"
"#,
        );
        let settings = CliSettings {
            format: Some(OutputFormat::CommonmarkHtml),
            link_prefix: None,
            link_extension: Some("html".to_owned()),
        };

        let config = Config::load(Some(&path), Some(&settings)).unwrap();
        assert_eq!(config.output.format, OutputFormat::CommonmarkHtml);
        assert_eq!(config.output.link_prefix, "docs/");
        assert_eq!(config.output.link_extension, "html");
    }

    #[test]
    fn test_cli_settings_are_validated() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "");
        let settings = CliSettings {
            link_extension: Some(".html".to_owned()),
            ..CliSettings::default()
        };

        let err = Config::load(Some(&path), Some(&settings)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Configuration error: output.link_extension must not start with '.'"
        );
    }

    #[test]
    fn test_discover_config_in_parent() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "");
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        assert_eq!(Config::discover_config(&nested), Some(path));
    }

    #[test]
    fn test_discover_config_none() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("src");
        std::fs::create_dir_all(&nested).unwrap();

        let found = Config::discover_config(&nested);
        assert!(found.is_none_or(|path| !path.starts_with(dir.path())));
    }

    #[test]
    fn test_validate_empty_extension() {
        let mut config = Config::default();
        config.output.link_extension = String::new();

        let err = config.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Configuration error: output.link_extension cannot be empty"
        );
    }

    #[test]
    fn test_validate_external_doc() {
        let mut config = Config::default();
        config.external_doc.push(ExternalDocConfig {
            namespace: "std".to_owned(),
            url: "ftp://example.com/$$".to_owned(),
        });
        let err = config.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Configuration error: external_doc.url must start with http:// or https://"
        );

        config.external_doc[0] = ExternalDocConfig {
            namespace: String::new(),
            url: "https://example.com/$$".to_owned(),
        };
        let err = config.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Configuration error: external_doc.namespace cannot be empty"
        );
    }

    #[test]
    fn test_load_expands_env_vars() {
        // SAFETY: the variable name is unique to this test
        unsafe {
            std::env::set_var("SDOC_TEST_DOCS_HOST", "docs.example.com");
        }
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            dir.path(),
            r#"
[output]
link_prefix = "https://${SDOC_TEST_DOCS_HOST}/"

[[external_doc]]
namespace = "lib"
url = "https://${SDOC_TEST_DOCS_HOST}/search?q=$$"
"#,
        );

        let config = Config::load(Some(&path), None).unwrap();
        assert_eq!(config.output.link_prefix, "https://docs.example.com/");
        assert_eq!(
            config.external_doc[0].url,
            "https://docs.example.com/search?q=$$"
        );
        unsafe {
            std::env::remove_var("SDOC_TEST_DOCS_HOST");
        }
    }
}
