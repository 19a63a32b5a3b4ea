//! Configuration for the buzzc driver.
//!
//! Settings come from a `buzz.toml` file. Every field has a default, so an
//! empty file and no file at all behave the same.

use std::path::{Path, PathBuf};

use buzzc_lex::LexerConfig;
use dirs::{config_dir, home_dir};
use serde::Deserialize;

use crate::error::{DriverError, Result};
use crate::output::{OutputFormat, DEFAULT_COLUMN_WIDTH};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "buzz.toml";

/// Driver configuration.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Extension both the source and the output file must carry.
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Lexer settings.
    #[serde(default)]
    pub lexer: LexerSection,

    /// Token table settings.
    #[serde(default)]
    pub output: OutputSection,
}

/// `[lexer]` table.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LexerSection {
    /// Largest accepted block comment body in bytes.
    #[serde(default)]
    pub max_comment_len: Option<usize>,

    /// Starting capacity of the token buffer.
    #[serde(default = "default_initial_capacity")]
    pub initial_capacity: usize,
}

/// `[output]` table.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct OutputSection {
    /// Table or JSON.
    #[serde(default)]
    pub format: OutputFormat,

    /// Also print the token list on stdout.
    #[serde(default = "default_true")]
    pub echo: bool,

    /// Width of each table column.
    #[serde(default = "default_column_width")]
    pub column_width: usize,
}

fn default_extension() -> String {
    ".bz".to_string()
}

fn default_initial_capacity() -> usize {
    LexerConfig::default().initial_capacity
}

fn default_true() -> bool {
    true
}

fn default_column_width() -> usize {
    DEFAULT_COLUMN_WIDTH
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extension: default_extension(),
            lexer: LexerSection::default(),
            output: OutputSection::default(),
        }
    }
}

impl Default for LexerSection {
    fn default() -> Self {
        Self {
            max_comment_len: None,
            initial_capacity: default_initial_capacity(),
        }
    }
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            echo: true,
            column_width: DEFAULT_COLUMN_WIDTH,
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. `~/.config/buzz/`
    /// 3. Platform configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(DriverError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| DriverError::Config(format!("Failed to parse configuration: {}", e)))?;
        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if !self.extension.starts_with('.') || self.extension.len() < 2 {
            return Err(DriverError::Config(format!(
                "extension must look like '.bz', got '{}'",
                self.extension
            )));
        }
        if self.output.column_width == 0 {
            return Err(DriverError::Config("column_width must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Settings handed to the lexer.
    pub fn lexer_config(&self) -> LexerConfig {
        let config = LexerConfig::default().with_initial_capacity(self.lexer.initial_capacity);
        match self.lexer.max_comment_len {
            Some(limit) => config.with_max_comment_len(limit),
            None => config,
        }
    }

    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("buzz").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("buzz").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.extension, ".bz");
        assert_eq!(config.lexer.max_comment_len, None);
        assert_eq!(config.lexer.initial_capacity, 12);
        assert_eq!(config.output.format, OutputFormat::Table);
        assert!(config.output.echo);
        assert_eq!(config.output.column_width, 20);
    }

    #[test]
    fn test_empty_file_is_default() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "");
        assert_eq!(Config::load_from_path(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_full_file() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"
extension = ".buzz"

[lexer]
max_comment_len = 128
initial_capacity = 64

[output]
format = "json"
echo = false
column_width = 12
"#,
        );
        let config = Config::load_from_path(&path).unwrap();
        assert_eq!(config.extension, ".buzz");
        assert_eq!(config.lexer.max_comment_len, Some(128));
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(!config.output.echo);
        assert_eq!(config.output.column_width, 12);

        let lexer = config.lexer_config();
        assert_eq!(lexer.max_comment_len, Some(128));
        assert_eq!(lexer.initial_capacity, 64);
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[output]\ncolour = true\n");
        let err = Config::load_from_path(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse configuration"));
    }

    #[test]
    fn test_bad_extension_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "extension = \"bz\"\n");
        assert!(matches!(
            Config::load_from_path(&path),
            Err(DriverError::Config(_))
        ));
    }

    #[test]
    fn test_load_from_nonexistent_path() {
        let result = Config::load_from_path(Path::new("/nonexistent/path/buzz.toml"));
        assert!(result.is_err());
    }
}
