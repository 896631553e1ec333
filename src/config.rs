//! Configuration management for reverb-estimator
//!
//! Config stored at: ~/.config/reverb-estimator/config.json

use crate::cli::OutputFormat;
use crate::constants::builtin_catalog;
use crate::domain::model::{Material, MaterialCatalog};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "reverb-estimator";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Default output format (json, table)
    #[serde(default = "default_output_format")]
    pub output_format: OutputFormat,

    /// User materials file (TOML) merged over the built-in catalog
    #[serde(default)]
    pub materials_file: Option<PathBuf>,

    /// Default results file for saving and listing history
    #[serde(default)]
    pub results_file: Option<PathBuf>,
}

fn default_output_format() -> OutputFormat {
    OutputFormat::Table
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_format: default_output_format(),
            materials_file: None,
            results_file: None,
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))?
            .join(APP_DIR);
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Results file used when no path is given on the command line
    pub fn results_path(&self) -> Result<PathBuf> {
        if let Some(ref path) = self.results_file {
            return Ok(path.clone());
        }

        let data_dir = dirs::data_dir()
            .ok_or_else(|| Error::Config("Could not determine data directory".to_string()))?
            .join(APP_DIR);
        Ok(data_dir.join("results.json"))
    }

    /// Materials file to merge over the built-ins, if any
    ///
    /// When not configured, materials.toml next to the config file is
    /// picked up if it exists.
    pub fn materials_path(&self) -> Result<Option<PathBuf>> {
        if let Some(ref path) = self.materials_file {
            return Ok(Some(path.clone()));
        }

        let default = Self::config_dir()?.join("materials.toml");
        if default.exists() {
            Ok(Some(default))
        } else {
            Ok(None)
        }
    }

    /// Assemble the effective catalog: built-ins plus the user file
    ///
    /// User entries with a built-in name replace the built-in value.
    pub fn material_catalog(&self) -> Result<MaterialCatalog> {
        let mut catalog = builtin_catalog().clone();
        if let Some(path) = self.materials_path()? {
            for material in load_materials(&path)? {
                catalog.insert(material);
            }
        }
        Ok(catalog)
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, content)?;
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Reverb Estimator Configuration")?;
        writeln!(f, "==============================")?;
        writeln!(f)?;
        writeln!(f, "Output format:  {}", self.output_format)?;
        writeln!(
            f,
            "Materials file: {}",
            self.materials_file
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(built-in only)".to_string())
        )?;
        writeln!(
            f,
            "Results file:   {}",
            self.results_path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|_| "(error)".to_string())
        )?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:    {}", path.display())?;
        }

        Ok(())
    }
}

/// Materials file layout: a list of `[[materials]]` tables
#[derive(Debug, Deserialize)]
struct MaterialsFile {
    #[serde(default)]
    materials: Vec<Material>,
}

/// Load user materials from a TOML file
///
/// Each entry carries a name and six absorption values in band order.
/// Absorption must be finite and non-negative; raft-style entries above
/// 1.0 are allowed.
pub fn load_materials(path: &Path) -> Result<Vec<Material>> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::MaterialsFile(format!("{}: {}", path.display(), e)))?;
    let parsed: MaterialsFile =
        toml::from_str(&content).map_err(|e| Error::MaterialsFile(e.to_string()))?;

    for material in &parsed.materials {
        if material.name.trim().is_empty() {
            return Err(Error::MaterialsFile(
                "Material with an empty name".to_string(),
            ));
        }
        if material.absorption.iter().any(|a| *a < 0.0 || !a.is_finite()) {
            return Err(Error::MaterialsFile(format!(
                "Negative or non-finite absorption for material: {}",
                material.name
            )));
        }
    }

    Ok(parsed.materials)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_toml(content: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("materials.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        (dir, path)
    }

    #[test]
    fn test_load_materials() {
        let (_dir, path) = write_toml(
            r#"
[[materials]]
name = "Perforated Panel"
absorption = [0.20, 0.45, 0.70, 0.65, 0.55, 0.50]

[[materials]]
name = "Custom Raft"
absorption = [1.1, 2.0, 3.2, 4.0, 4.0, 3.8]
"#,
        );
        let materials = load_materials(&path).unwrap();
        assert_eq!(materials.len(), 2);
        assert_eq!(materials[0].name, "Perforated Panel");
        assert_eq!(materials[0].absorption_at(500), 0.70);
        assert_eq!(materials[1].absorption_at(1000), 4.0);
    }

    #[test]
    fn test_load_materials_rejects_negative() {
        let (_dir, path) = write_toml(
            r#"
[[materials]]
name = "Broken"
absorption = [0.1, -0.2, 0.3, 0.4, 0.5, 0.6]
"#,
        );
        let err = load_materials(&path).unwrap_err();
        assert!(err.to_string().contains("Broken"));
    }

    #[test]
    fn test_material_catalog_merges_user_file() {
        let (_dir, path) = write_toml(
            r#"
[[materials]]
name = "Class A"
absorption = [0.99, 0.99, 0.99, 0.99, 0.99, 0.99]

[[materials]]
name = "My Panel"
absorption = [0.2, 0.2, 0.2, 0.2, 0.2, 0.2]
"#,
        );
        let config = Config {
            materials_file: Some(path),
            ..Default::default()
        };
        let catalog = config.material_catalog().unwrap();

        // User entry overrides the built-in of the same name
        assert_eq!(catalog.lookup("Class A", 500), 0.99);
        assert_eq!(catalog.lookup("My Panel", 125), 0.2);
        // Built-ins are untouched
        assert_eq!(builtin_catalog().lookup("Class A", 500), 0.90);
        assert_eq!(catalog.len(), builtin_catalog().len() + 1);
    }
}
