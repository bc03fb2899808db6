use anyhow::{bail, Context, Result};
use dwdm_core::grid::{GridBuilder, GridGenerator};
use dwdm_schemas::{
    config::{FlexibleBand, GridConfig},
    file_formats::GridConfigFile,
};
use std::{fs, path::Path};

/// Grid settings resolved from a YAML file, or the ITU defaults when no file is given.
#[derive(Debug, Clone)]
pub struct GridSettings {
    pub grid: GridConfig,
    pub flexible_band: FlexibleBand,
    pub flexible_widths_ghz: Vec<f64>,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self::from_file(GridConfigFile::default())
    }
}

impl GridSettings {
    /// Loads settings from `path`, or returns the defaults when `path` is `None`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            println!("[Config] No configuration file given, using ITU defaults.");
            return Ok(Self::default());
        };

        println!("[Config] Loading grid configuration from '{}'...", path.display());
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
        Self::from_yaml(&content).with_context(|| format!("Failed to parse YAML from {:?}", path))
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        let file: GridConfigFile = serde_yaml::from_str(content)?;
        let major = file.schema_version.split('.').next().unwrap_or_default();
        if major != "1" {
            bail!("Unsupported schema_version '{}', expected 1.x", file.schema_version);
        }
        Ok(Self::from_file(file))
    }

    fn from_file(file: GridConfigFile) -> Self {
        Self {
            grid: file.grid,
            flexible_band: file.flexible_band,
            flexible_widths_ghz: file.flexible_widths_ghz,
        }
    }

    /// Validates the settings and builds the generator.
    pub fn generator(&self) -> Result<GridGenerator> {
        GridBuilder::new()
            .with_config(self.grid)
            .with_flexible_band(self.flexible_band)
            .build()
            .context("Invalid grid configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dwdm_schemas::config::IndexRounding;

    #[test]
    fn shipped_file_matches_defaults() {
        let settings = GridSettings::from_yaml(include_str!("../grid.yaml")).unwrap();
        assert_eq!(settings.grid, GridConfig::default());
        assert_eq!(settings.flexible_band, FlexibleBand::default());
        assert_eq!(settings.flexible_widths_ghz, vec![50.0]);
    }

    #[test]
    fn partial_file_overrides_only_named_fields() {
        let yaml = r#"
schema_version: "1.2"
grid:
  frequency_max: 194.0
  index_rounding: truncate
flexible_widths_ghz: [37.5, 75.0]
"#;
        let settings = GridSettings::from_yaml(yaml).unwrap();
        assert_eq!(settings.grid.frequency_max, 194.0);
        assert_eq!(settings.grid.frequency_min, 184.5);
        assert_eq!(settings.grid.index_rounding, IndexRounding::Truncate);
        assert_eq!(settings.flexible_widths_ghz, vec![37.5, 75.0]);
    }

    #[test]
    fn unknown_schema_version_is_rejected() {
        assert!(GridSettings::from_yaml("schema_version: \"2.0\"\n").is_err());
    }

    #[test]
    fn invalid_granularity_fails_at_build() {
        let yaml = "schema_version: \"1.0\"\ngrid:\n  granularity: 0.0\n";
        let settings = GridSettings::from_yaml(yaml).unwrap();
        assert!(settings.generator().is_err());
    }
}
