//! `graphpack.toml` configuration.
//!
//! ```toml
//! [codec]
//! mode = "clustered"
//!
//! [text]
//! delimiter = " "
//! ```
//!
//! Every key is optional. Command-line flags take precedence over the file,
//! and the file over built-in defaults.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use graphpack_codec::EncodingMode;

use crate::exit::CliError;

/// Name of the file looked up from the working directory upward.
pub const CONFIG_FILE: &str = "graphpack.toml";

/// Field separator for decoded text when none is configured.
pub const DEFAULT_DELIMITER: &str = "\t";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GraphpackConfig {
    #[serde(default)]
    pub codec: CodecConfig,
    #[serde(default)]
    pub text: TextConfig,
}

/// `[codec]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CodecConfig {
    /// Stream layout used when `--mode` is not given.
    #[serde(default)]
    pub mode: Option<EncodingMode>,
}

/// `[text]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TextConfig {
    /// Separator between the fields of a decoded row. Must be whitespace so
    /// the output can be encoded again.
    #[serde(default)]
    pub delimiter: Option<String>,
}

impl GraphpackConfig {
    /// Search upward from `start_dir` for `graphpack.toml`, parse and return
    /// it along with the directory it was found in.
    pub fn find_and_load(start_dir: &Path) -> Result<Option<(Self, PathBuf)>, CliError> {
        let mut dir = start_dir.to_path_buf();
        loop {
            let candidate = dir.join(CONFIG_FILE);
            if candidate.is_file() {
                let config = Self::load(&candidate)?;
                return Ok(Some((config, dir)));
            }
            if !dir.pop() {
                break;
            }
        }
        Ok(None)
    }

    /// Load and validate a configuration file.
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let content = std::fs::read_to_string(path).map_err(|e| CliError::ConfigInvalid {
            path: path.to_path_buf(),
            detail: e.to_string(),
        })?;
        Self::parse(&content).map_err(|detail| CliError::ConfigInvalid {
            path: path.to_path_buf(),
            detail,
        })
    }

    /// Parse and validate configuration text.
    pub fn parse(content: &str) -> Result<Self, String> {
        let config: GraphpackConfig = toml::from_str(content).map_err(|e| e.message().to_string())?;
        if let Some(delimiter) = &config.text.delimiter {
            if delimiter.is_empty() || !delimiter.chars().all(char::is_whitespace) {
                return Err(format!(
                    "text.delimiter must be non-empty whitespace, got {delimiter:?}"
                ));
            }
        }
        Ok(config)
    }

    /// Stream layout, falling back to the default.
    pub fn mode(&self) -> EncodingMode {
        self.codec.mode.unwrap_or_default()
    }

    /// Decoded text separator, falling back to a tab.
    pub fn delimiter(&self) -> &str {
        self.text.delimiter.as_deref().unwrap_or(DEFAULT_DELIMITER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config = GraphpackConfig::parse("").unwrap();
        assert_eq!(config, GraphpackConfig::default());
        assert_eq!(config.mode(), EncodingMode::Greedy);
        assert_eq!(config.delimiter(), "\t");
    }

    #[test]
    fn parse_full_config() {
        let config = GraphpackConfig::parse(
            r#"
[codec]
mode = "clustered"

[text]
delimiter = " "
"#,
        )
        .unwrap();
        assert_eq!(config.mode(), EncodingMode::Clustered);
        assert_eq!(config.delimiter(), " ");
    }

    #[test]
    fn unknown_mode_rejected() {
        let err = GraphpackConfig::parse("[codec]\nmode = \"fast\"\n").unwrap_err();
        assert!(err.contains("fast") || err.contains("variant"), "{err}");
    }

    #[test]
    fn unknown_key_rejected() {
        assert!(GraphpackConfig::parse("[codec]\nlevel = 3\n").is_err());
    }

    #[test]
    fn non_whitespace_delimiter_rejected() {
        let err = GraphpackConfig::parse("[text]\ndelimiter = \",\"\n").unwrap_err();
        assert!(err.contains("whitespace"));
        assert!(GraphpackConfig::parse("[text]\ndelimiter = \"\"\n").is_err());
    }

    #[test]
    fn find_and_load_in_current_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "[codec]\nmode = \"clustered\"\n").unwrap();

        let (config, found_dir) = GraphpackConfig::find_and_load(dir.path()).unwrap().unwrap();
        assert_eq!(config.mode(), EncodingMode::Clustered);
        assert_eq!(found_dir, dir.path());
    }

    #[test]
    fn find_and_load_walks_up() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "[text]\ndelimiter = \" \"\n").unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let (config, found_dir) = GraphpackConfig::find_and_load(&nested).unwrap().unwrap();
        assert_eq!(config.delimiter(), " ");
        assert_eq!(found_dir, dir.path());
    }

    #[test]
    fn invalid_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "[codec\n").unwrap();

        let err = GraphpackConfig::load(&path).unwrap_err();
        assert!(matches!(err, CliError::ConfigInvalid { .. }));
        assert!(err.to_string().contains(CONFIG_FILE));
    }
}
