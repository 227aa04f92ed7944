pub mod toml_config;

use crate::domain::model::{Bounds, LoopStyle, Messages};
use crate::utils::error::Result;
use crate::utils::validation::{validate_ordered_bounds, Validate};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use toml_config::TomlConfig;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::Parser))]
#[cfg_attr(feature = "cli", command(name = "loop-styles"))]
#[cfg_attr(
    feature = "cli",
    command(about = "Input-validation loops written in several styles")
)]
pub struct CliConfig {
    /// Run a single loop style instead of the full walkthrough
    #[cfg_attr(feature = "cli", arg(long, value_enum))]
    pub style: Option<LoopStyle>,

    /// Lower bound of the range check (inclusive)
    #[cfg_attr(feature = "cli", arg(long, allow_hyphen_values = true))]
    pub min: Option<i64>,

    /// Upper bound of the range check (inclusive)
    #[cfg_attr(feature = "cli", arg(long, allow_hyphen_values = true))]
    pub max: Option<i64>,

    /// TOML file with [range] and [messages] overrides
    #[cfg_attr(feature = "cli", arg(long))]
    pub config: Option<PathBuf>,

    #[cfg_attr(feature = "cli", arg(long, help = "Enable verbose output"))]
    pub verbose: bool,
}

/// Bounds and messages after CLI flags, config file and defaults are merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub bounds: Bounds,
    pub messages: Messages,
}

impl CliConfig {
    /// 合併順序：預設值 < 設定檔 < 命令列參數
    pub fn resolve(&self) -> Result<Settings> {
        let file = match &self.config {
            Some(path) => {
                tracing::debug!("Loading config file {}", path.display());
                let file = TomlConfig::from_file(path)?;
                file.validate()?;
                file
            }
            None => TomlConfig::default(),
        };

        let from_file = file.bounds_over(Bounds::default());
        let bounds = Bounds {
            min: self.min.unwrap_or(from_file.min),
            max: self.max.unwrap_or(from_file.max),
        };
        validate_ordered_bounds("range", bounds.min, bounds.max)?;

        let messages = file.messages_over(Messages::for_bounds(bounds));
        Ok(Settings { bounds, messages })
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let (Some(min), Some(max)) = (self.min, self.max) {
            validate_ordered_bounds("--min/--max", min, max)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_resolve_to_classic_walkthrough() {
        let settings = CliConfig::default().resolve().unwrap();
        assert_eq!(settings.bounds, Bounds::default());
        assert_eq!(settings.messages, Messages::default());
    }

    #[test]
    fn test_cli_flags_override_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[range]\nmin = 3\nmax = 7").unwrap();

        let config = CliConfig {
            max: Some(20),
            config: Some(file.path().to_path_buf()),
            ..CliConfig::default()
        };
        let settings = config.resolve().unwrap();
        assert_eq!(settings.bounds, Bounds { min: 3, max: 20 });
        assert_eq!(
            settings.messages.range_error,
            "The number must be between 3 and 20."
        );
    }

    #[test]
    fn test_inverted_flags_fail_validation() {
        let config = CliConfig {
            min: Some(10),
            max: Some(1),
            ..CliConfig::default()
        };
        assert!(config.validate().is_err());
        assert!(config.resolve().is_err());
    }

    #[test]
    fn test_missing_config_file_is_io_error() {
        let config = CliConfig {
            config: Some(PathBuf::from("/definitely/not/here.toml")),
            ..CliConfig::default()
        };
        assert!(matches!(
            config.resolve(),
            Err(crate::utils::error::LoopError::IoError(_))
        ));
    }
}
