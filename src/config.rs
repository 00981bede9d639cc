//! Configuration file support for numpick.
//!
//! Configuration is loaded from `~/.config/numpick/config.toml` (or the file
//! named by `$NUMPICK_CONFIG`) with the following precedence:
//! 1. CLI arguments (highest priority)
//! 2. Configuration file
//! 3. Default values (lowest priority)
//!
//! # Example Configuration
//!
//! ```toml
//! # ~/.config/numpick/config.toml
//! history_limit = 200
//!
//! [picker]
//! min = -50
//! max = 50
//! value = 0
//! unit = 5
//! repeat = 150      # ms between steps while a button is held
//! long_press = 400  # ms before a press counts as a long press
//! focusable = true
//!
//! [picker.custom_layout]
//! kind = "vertical"
//! decrement_label = "▼"
//! increment_label = "▲"
//! ```

use std::path::PathBuf;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::{PickerError, Result};

pub const DEFAULT_MIN: i32 = 0;
pub const DEFAULT_MAX: i32 = 999_999;
pub const DEFAULT_VALUE: i32 = 1;
pub const DEFAULT_UNIT: i32 = 1;
pub const DEFAULT_REPEAT_MS: u64 = 200;
pub const DEFAULT_LONG_PRESS_MS: u64 = 500;
pub const DEFAULT_FOCUSABLE: bool = false;
pub const DEFAULT_HISTORY_LIMIT: usize = 100;

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Widget settings
    pub picker: PickerConfig,

    /// Number of listener events kept in the demo's event log
    pub history_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            picker: PickerConfig::default(),
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

/// Construction-time settings of a single picker.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    pub min: i32,
    pub max: i32,
    /// Initial value, clamped into `[min, max]` at construction
    pub value: i32,
    /// Step applied per increment/decrement
    pub unit: i32,
    /// Interval between repeated steps while a trigger is held (ms)
    pub repeat: u64,
    /// Hold time before a press becomes a long press (ms)
    pub long_press: u64,
    /// Whether the display accepts direct keyboard editing
    pub focusable: bool,
    /// Visual template
    pub custom_layout: PickerLayout,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
            value: DEFAULT_VALUE,
            unit: DEFAULT_UNIT,
            repeat: DEFAULT_REPEAT_MS,
            long_press: DEFAULT_LONG_PRESS_MS,
            focusable: DEFAULT_FOCUSABLE,
            custom_layout: PickerLayout::default(),
        }
    }
}

/// Arrangement of the two triggers around the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutKind {
    /// `[-] [ value ] [+]`
    #[default]
    Horizontal,
    /// Increment above the display, decrement below
    Vertical,
    /// Single borderless line
    Compact,
}

impl FromStr for LayoutKind {
    type Err = PickerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "horizontal" => Ok(LayoutKind::Horizontal),
            "vertical" => Ok(LayoutKind::Vertical),
            "compact" => Ok(LayoutKind::Compact),
            other => Err(PickerError::InvalidArgument(format!(
                "unknown layout '{}' (expected horizontal, vertical or compact)",
                other
            ))),
        }
    }
}

/// Replaceable visual template of the picker.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PickerLayout {
    pub kind: LayoutKind,
    pub decrement_label: String,
    pub increment_label: String,
}

impl Default for PickerLayout {
    fn default() -> Self {
        Self {
            kind: LayoutKind::Horizontal,
            decrement_label: "-".to_string(),
            increment_label: "+".to_string(),
        }
    }
}

/// Values given on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArgs {
    pub config_path: Option<PathBuf>,
    pub min: Option<i32>,
    pub max: Option<i32>,
    pub value: Option<i32>,
    pub unit: Option<i32>,
    pub repeat: Option<u64>,
    pub long_press: Option<u64>,
    pub layout: Option<LayoutKind>,
    pub focusable: bool,
    pub help: bool,
}

fn parse_flag<T: FromStr>(flag: &str, value: Option<String>) -> Result<T> {
    let value = value
        .ok_or_else(|| PickerError::InvalidArgument(format!("{} requires a value", flag)))?;
    value
        .parse()
        .map_err(|_| PickerError::InvalidArgument(format!("{}: invalid value '{}'", flag, value)))
}

impl CliArgs {
    /// Parse arguments (without the program name).
    pub fn parse<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut cli = CliArgs::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" | "-c" => {
                    let path: String = parse_flag(&arg, args.next())?;
                    cli.config_path = Some(PathBuf::from(path));
                }
                "--min" => cli.min = Some(parse_flag(&arg, args.next())?),
                "--max" => cli.max = Some(parse_flag(&arg, args.next())?),
                "--value" => cli.value = Some(parse_flag(&arg, args.next())?),
                "--unit" => cli.unit = Some(parse_flag(&arg, args.next())?),
                "--repeat" => cli.repeat = Some(parse_flag(&arg, args.next())?),
                "--long-press" => cli.long_press = Some(parse_flag(&arg, args.next())?),
                "--layout" => cli.layout = Some(parse_flag(&arg, args.next())?),
                "--focusable" => cli.focusable = true,
                "--help" | "-h" => cli.help = true,
                other => {
                    return Err(PickerError::InvalidArgument(format!(
                        "unknown argument '{}'",
                        other
                    )));
                }
            }
        }

        Ok(cli)
    }

    pub fn usage() -> &'static str {
        "Usage: numpick [--config PATH] [--min N] [--max N] [--value N] [--unit N]\n\
         \x20              [--repeat MS] [--long-press MS]\n\
         \x20              [--layout horizontal|vertical|compact] [--focusable]"
    }
}

impl Config {
    /// Load configuration from `path`, or from the default location.
    ///
    /// Returns default configuration if the file doesn't exist or can't be parsed.
    pub fn load(path: Option<PathBuf>) -> Self {
        let config_path = path.unwrap_or_else(Self::config_path);

        if !config_path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(&config_path) {
            Ok(contents) => match Self::parse(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Warning: Failed to parse config file: {}", e);
                    Self::default()
                }
            },
            Err(e) => {
                eprintln!("Warning: Failed to read config file: {}", e);
                Self::default()
            }
        }
    }

    /// Parse configuration from TOML text.
    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Get the default configuration file path.
    pub fn config_path() -> PathBuf {
        std::env::var("NUMPICK_CONFIG")
            .ok()
            .map(PathBuf::from)
            .unwrap_or_else(|| Self::config_dir().join("config.toml"))
    }

    /// Get the configuration directory path.
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("numpick")
    }

    /// Merge with CLI overrides.
    ///
    /// CLI arguments take precedence over config file values.
    pub fn with_overrides(mut self, cli: &CliArgs) -> Self {
        let picker = &mut self.picker;
        if let Some(min) = cli.min {
            picker.min = min;
        }
        if let Some(max) = cli.max {
            picker.max = max;
        }
        if let Some(value) = cli.value {
            picker.value = value;
        }
        if let Some(unit) = cli.unit {
            picker.unit = unit;
        }
        if let Some(repeat) = cli.repeat {
            picker.repeat = repeat;
        }
        if let Some(long_press) = cli.long_press {
            picker.long_press = long_press;
        }
        if let Some(kind) = cli.layout {
            picker.custom_layout.kind = kind;
        }
        if cli.focusable {
            picker.focusable = true;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.picker.min, 0);
        assert_eq!(config.picker.max, 999_999);
        assert_eq!(config.picker.value, 1);
        assert_eq!(config.picker.unit, 1);
        assert_eq!(config.picker.repeat, 200);
        assert!(!config.picker.focusable);
        assert_eq!(config.picker.custom_layout.kind, LayoutKind::Horizontal);
        assert_eq!(config.history_limit, 100);
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
            history_limit = 20

            [picker]
            min = -5
            max = 5
            unit = 2
            focusable = true

            [picker.custom_layout]
            kind = "compact"
            increment_label = ">"
        "#;

        let config = Config::parse(toml).unwrap();
        assert_eq!(config.history_limit, 20);
        assert_eq!(config.picker.min, -5);
        assert_eq!(config.picker.max, 5);
        assert_eq!(config.picker.unit, 2);
        assert_eq!(config.picker.value, 1);
        assert_eq!(config.picker.repeat, 200);
        assert!(config.picker.focusable);
        assert_eq!(config.picker.custom_layout.kind, LayoutKind::Compact);
        assert_eq!(config.picker.custom_layout.increment_label, ">");
        assert_eq!(config.picker.custom_layout.decrement_label, "-");
    }

    #[test]
    fn test_parse_config_rejects_bad_types() {
        let err = Config::parse("[picker]\nmin = \"low\"").unwrap_err();
        assert!(matches!(err, PickerError::Config(_)));
    }

    #[test]
    fn test_cli_parse() {
        let cli = CliArgs::parse(args(&[
            "--min", "-3", "--max", "9", "--layout", "Vertical", "--focusable", "--repeat", "50",
        ]))
        .unwrap();

        assert_eq!(cli.min, Some(-3));
        assert_eq!(cli.max, Some(9));
        assert_eq!(cli.layout, Some(LayoutKind::Vertical));
        assert_eq!(cli.repeat, Some(50));
        assert!(cli.focusable);
        assert!(cli.value.is_none());
    }

    #[test]
    fn test_cli_parse_errors() {
        assert!(matches!(
            CliArgs::parse(args(&["--min"])),
            Err(PickerError::InvalidArgument(_))
        ));
        assert!(matches!(
            CliArgs::parse(args(&["--unit", "two"])),
            Err(PickerError::InvalidArgument(_))
        ));
        assert!(matches!(
            CliArgs::parse(args(&["--layout", "diagonal"])),
            Err(PickerError::InvalidArgument(_))
        ));
        assert!(matches!(
            CliArgs::parse(args(&["--bogus"])),
            Err(PickerError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_cli_overrides_file() {
        let config = Config::parse("[picker]\nmin = 10\nmax = 20\nunit = 3").unwrap();
        let cli = CliArgs {
            max: Some(30),
            layout: Some(LayoutKind::Compact),
            ..CliArgs::default()
        };

        let merged = config.with_overrides(&cli);
        assert_eq!(merged.picker.min, 10);
        assert_eq!(merged.picker.max, 30);
        assert_eq!(merged.picker.unit, 3);
        assert_eq!(merged.picker.custom_layout.kind, LayoutKind::Compact);
    }

    #[test]
    fn test_load_missing_file_falls_back_to_defaults() {
        let config = Config::load(Some(PathBuf::from("/nonexistent/numpick/config.toml")));
        assert_eq!(config.picker, PickerConfig::default());
    }
}
