use serde::{Deserialize, Serialize};
use std::alloc::Layout;
use std::fs;
use std::path::Path;

use crate::error::ConfigError;
use crate::layout::element_count;

/// Environment variable naming an optional configuration file.
pub const CONFIG_ENV: &str = "ARRAY_INTRO_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LessonConfig {
    /// N: length of the first buffer and row count of the grid.
    pub rows: usize,
    /// M: column count of the grid.
    pub cols: usize,
    pub first_value: f64,
    pub probe_row: usize,
    pub probe_col: usize,
    pub sentinel: f64,
    pub grid_fill: f64,
    pub flat_fill: f64,
    pub cell_row: usize,
    pub cell_col: usize,
    pub parallel_fill: bool,
    pub show_addresses: bool,
    pub color: bool,
}

impl Default for LessonConfig {
    fn default() -> Self {
        Self {
            rows: 100,
            cols: 200,
            first_value: 10.0,
            probe_row: 20,
            probe_col: 2,
            sentinel: -1230000000.11111,
            grid_fill: 3.1415926,
            flat_fill: -3.1415926,
            cell_row: 3,
            cell_col: 5,
            parallel_fill: false,
            show_addresses: true,
            color: true,
        }
    }
}

impl LessonConfig {
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: LessonConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        let config: LessonConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Picks the format from the extension, sniffing the content otherwise.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let format = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match format.as_deref() {
            Some("json") => Self::from_json(&content),
            Some("toml") => Self::from_toml(&content),
            _ => {
                if content.trim_start().starts_with('{') {
                    Self::from_json(&content)
                } else {
                    Self::from_toml(&content)
                }
            }
        }
    }

    /// Reads the file named by [`CONFIG_ENV`], or returns the defaults.
    pub fn from_env() -> Result<(Self, Option<String>), ConfigError> {
        match std::env::var(CONFIG_ENV) {
            Ok(path) if !path.trim().is_empty() => {
                let config = Self::from_file(Path::new(&path))?;
                Ok((config, Some(path)))
            }
            _ => Ok((Self::default(), None)),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows <= 5 {
            return Err(ConfigError::invalid(
                "rows",
                format!("must be greater than 5, got {}", self.rows),
            ));
        }
        if self.cols == 0 {
            return Err(ConfigError::invalid("cols", "must be greater than 0"));
        }
        let cells = element_count(self.rows, self.cols)
            .map_err(|err| ConfigError::invalid("cols", err.to_string()))?;
        Layout::array::<f64>(cells).map_err(|_| {
            ConfigError::invalid(
                "cols",
                format!("{}x{} f64 values exceed the address space", self.rows, self.cols),
            )
        })?;

        if self.probe_row >= self.rows || self.probe_col >= self.cols {
            return Err(ConfigError::invalid(
                "probe_row",
                format!(
                    "probe [{}, {}] lies outside {}x{}",
                    self.probe_row, self.probe_col, self.rows, self.cols
                ),
            ));
        }
        if self.cell_row >= self.rows || self.cell_col >= self.cols {
            return Err(ConfigError::invalid(
                "cell_row",
                format!(
                    "cell [{}, {}] lies outside {}x{}",
                    self.cell_row, self.cell_col, self.rows, self.cols
                ),
            ));
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
    fn test_defaults_are_valid() {
        let config = LessonConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!((config.rows, config.cols), (100, 200));
        assert_eq!((config.probe_row, config.probe_col), (20, 2));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = LessonConfig::from_toml("rows = 10\ncols = 4\nprobe_row = 1\ncell_col = 3\n").unwrap();
        assert_eq!(config.rows, 10);
        assert_eq!(config.cols, 4);
        assert_eq!(config.cell_col, 3);
        assert_eq!(config.grid_fill, 3.1415926);
    }

    #[test]
    fn test_json() {
        let config = LessonConfig::from_json(r#"{"parallel_fill": true, "show_addresses": false}"#)
            .unwrap();
        assert!(config.parallel_fill);
        assert!(!config.show_addresses);
        assert_eq!(config.rows, 100);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = LessonConfig::from_toml("depth = 3\n").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn test_validation_errors() {
        let err = LessonConfig::from_toml("rows = 5\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "rows", .. }));

        let err = LessonConfig::from_toml("cols = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "cols", .. }));

        let err = LessonConfig::from_toml("cols = 2\nprobe_col = 2\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "probe_row", .. }));

        let err = LessonConfig::from_toml("rows = 6\nprobe_row = 1\ncell_row = 6\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "cell_row", .. }));
    }

    #[test]
    fn test_shape_too_large_in_bytes() {
        let config = LessonConfig {
            rows: 6,
            cols: 1 << 61,
            probe_row: 1,
            ..LessonConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "cols", .. }));
        assert!(err.to_string().contains("exceed the address space"));
    }

    #[test]
    fn test_from_file_by_extension() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "rows = 80").unwrap();
        let config = LessonConfig::from_file(file.path()).unwrap();
        assert_eq!(config.rows, 80);

        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        writeln!(file, r#"{{"cols": 9}}"#).unwrap();
        let config = LessonConfig::from_file(file.path()).unwrap();
        assert_eq!(config.cols, 9);
    }

    #[test]
    fn test_from_file_sniffs_format() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"first_value": 1.5}}"#).unwrap();
        let config = LessonConfig::from_file(file.path()).unwrap();
        assert_eq!(config.first_value, 1.5);

        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "first_value = 2.5").unwrap();
        let config = LessonConfig::from_file(file.path()).unwrap();
        assert_eq!(config.first_value, 2.5);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = LessonConfig::from_file(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
        assert!(err.to_string().contains("absent.toml"));
    }

    // The only test that touches CONFIG_ENV, so the env var is not raced.
    #[test]
    fn test_from_env() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "rows = 12\nparallel_fill = true").unwrap();

        std::env::set_var(CONFIG_ENV, file.path());
        let (config, source) = LessonConfig::from_env().unwrap();
        assert_eq!(config.rows, 12);
        assert!(config.parallel_fill);
        assert_eq!(source.as_deref(), file.path().to_str());

        std::env::set_var(CONFIG_ENV, "  ");
        let (config, source) = LessonConfig::from_env().unwrap();
        assert_eq!(config, LessonConfig::default());
        assert!(source.is_none());

        std::env::remove_var(CONFIG_ENV);
        let (config, source) = LessonConfig::from_env().unwrap();
        assert_eq!(config, LessonConfig::default());
        assert!(source.is_none());
    }
}
