use crate::config::{FlexibleBand, GridConfig};
use serde::Deserialize;

/// Top-level layout of a grid configuration file.
#[derive(Debug, Deserialize)]
pub struct GridConfigFile {
    pub schema_version: String,
    #[serde(default)]
    pub grid: GridConfig,
    #[serde(default)]
    pub flexible_band: FlexibleBand,
    #[serde(default = "default_flexible_widths")]
    pub flexible_widths_ghz: Vec<f64>,
}

fn default_flexible_widths() -> Vec<f64> {
    vec![50.0]
}

impl Default for GridConfigFile {
    fn default() -> Self {
        Self {
            schema_version: "1.0".to_string(),
            grid: GridConfig::default(),
            flexible_band: FlexibleBand::default(),
            flexible_widths_ghz: default_flexible_widths(),
        }
    }
}
