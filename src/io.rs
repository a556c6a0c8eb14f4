//! I/O utilities for demo configurations and generated artifacts.
//!
//! This module provides functionality for:
//! - Saving demo configurations to JSON
//! - Loading demo configurations from JSON
//! - Writing generated text artifacts (Modelfile, dataset) to disk

use std::fs;
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::dataset::DemoExample;
use crate::error::{PrimerError, Result};

/// Save a configuration to a JSON file.
///
/// # Errors
///
/// Returns an error if serialization or file writing fails.
pub fn save_config<T: Serialize, P: AsRef<Path>>(config: &T, path: P) -> Result<()> {
    let json = serde_json::to_string_pretty(config)
        .map_err(|e| PrimerError::Io(format!("Failed to serialize config: {e}")))?;

    write_text(path, &json)
}

/// Load a configuration from a JSON file.
///
/// # Errors
///
/// Returns an error if file reading or deserialization fails.
pub fn load_config<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<T> {
    let json = fs::read_to_string(path.as_ref())
        .map_err(|e| PrimerError::Io(format!("Failed to read config file: {e}")))?;

    let config = serde_json::from_str(&json)
        .map_err(|e| PrimerError::Io(format!("Failed to parse config: {e}")))?;

    Ok(config)
}

/// Write a text artifact, creating parent directories as needed.
///
/// # Errors
///
/// Returns an error if directory creation or file writing fails.
pub fn write_text<P: AsRef<Path>>(path: P, contents: &str) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| PrimerError::Io(format!("Failed to create {}: {e}", parent.display())))?;
        }
    }

    fs::write(path, contents)
        .map_err(|e| PrimerError::Io(format!("Failed to write {}: {e}", path.display())))?;

    Ok(())
}

/// Save the demo dataset as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if serialization or file writing fails.
pub fn save_dataset<P: AsRef<Path>>(examples: &[DemoExample], path: P) -> Result<()> {
    let json = serde_json::to_string_pretty(examples)
        .map_err(|e| PrimerError::Io(format!("Failed to serialize dataset: {e}")))?;

    write_text(path, &json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DemoConfig;
    use crate::dataset;
    use tempfile::TempDir;

    #[test]
    fn test_save_load_config() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("demo_config.json");

        let config = DemoConfig::builtin();
        save_config(&config, &config_path)?;
        assert!(config_path.exists());

        let loaded: DemoConfig = load_config(&config_path)?;
        assert_eq!(loaded.base_model, config.base_model);
        assert_eq!(loaded.lora.r, config.lora.r);
        assert_eq!(loaded.layers.len(), config.layers.len());

        Ok(())
    }

    #[test]
    fn test_write_text_creates_parents() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let nested = temp_dir.path().join("out").join("deep").join("Modelfile");

        write_text(&nested, "FROM llama3.2:1b\n")?;
        assert_eq!(fs::read_to_string(&nested)?, "FROM llama3.2:1b\n");

        Ok(())
    }

    #[test]
    fn test_save_dataset() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("demo_dataset.json");

        save_dataset(&dataset::builtin(), &path)?;

        let loaded: Vec<DemoExample> = serde_json::from_str(&fs::read_to_string(&path)?)?;
        assert_eq!(loaded, dataset::builtin());

        Ok(())
    }

    #[test]
    fn test_load_missing_config() {
        let result: Result<DemoConfig> = load_config("/nonexistent/config.json");
        assert!(result.is_err());
    }
}
