use crate::model::ConfigError;
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    /// How many `title -> label` pairs the report prints.
    pub sample_size: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("current_products.csv"),
            output_path: PathBuf::from("thumbnail_labels_import.csv"),
            sample_size: 10,
        }
    }
}

/// Loads the config file, falling back to defaults when it does not exist.
pub fn load_config(path: &str) -> Result<AppConfig, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            info!("No {} found, using defaults", path);
            return Ok(AppConfig::default());
        }
        Err(e) => return Err(e.into()),
    };
    let config: AppConfig = serde_json::from_str(&content)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, body: &str) -> String {
        let path = dir.path().join("config.json");
        fs::write(&path, body).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        let cfg = load_config(path.to_str().unwrap()).unwrap();
        assert_eq!(cfg, AppConfig::default());
        assert_eq!(cfg.input_path, PathBuf::from("current_products.csv"));
        assert_eq!(cfg.output_path, PathBuf::from("thumbnail_labels_import.csv"));
        assert_eq!(cfg.sample_size, 10);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, r#"{ "sample_size": 3 }"#);
        let cfg = load_config(&path).unwrap();
        assert_eq!(cfg.sample_size, 3);
        assert_eq!(cfg.input_path, PathBuf::from("current_products.csv"));
    }

    #[test]
    fn overrides_paths() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"{ "input_path": "in.csv", "output_path": "out/labels.csv" }"#,
        );
        let cfg = load_config(&path).unwrap();
        assert_eq!(cfg.input_path, PathBuf::from("in.csv"));
        assert_eq!(cfg.output_path, PathBuf::from("out/labels.csv"));
    }

    #[test]
    fn invalid_json_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "{ not json");
        assert!(matches!(load_config(&path), Err(ConfigError::Parse(_))));
    }
}
