use serde::{Deserialize, Serialize};

/// Speed of light in vacuum (m/s).
pub const SPEED_OF_LIGHT: f64 = 2.99792458e8;
/// ITU-T G.694.1 anchor frequency (THz).
pub const REFERENCE_FREQUENCY_THZ: f64 = 193.1;
/// Minimum channel granularity (THz), i.e. 12.5 GHz.
pub const GRANULARITY_THZ: f64 = 0.0125;

/// How the channel index bounds are derived from the band edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndexRounding {
    /// Round to the nearest integer index.
    #[default]
    Nearest,
    /// Truncate toward zero. Can drop a band-edge channel when the division is inexact.
    Truncate,
}

impl IndexRounding {
    pub fn apply(self, value: f64) -> i64 {
        match self {
            IndexRounding::Nearest => value.round() as i64,
            IndexRounding::Truncate => value.trunc() as i64,
        }
    }
}

/// The physical and normative constants a grid is generated from.
///
/// Frequencies are in THz, the speed of light in m/s. The band edges are illustrative
/// (C + L bands), not normative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    #[serde(default = "default_speed_of_light")]
    pub speed_of_light: f64,
    #[serde(default = "default_reference_frequency")]
    pub reference_frequency: f64,
    #[serde(default = "default_granularity")]
    pub granularity: f64,
    #[serde(default = "default_frequency_min")]
    pub frequency_min: f64,
    #[serde(default = "default_frequency_max")]
    pub frequency_max: f64,
    #[serde(default)]
    pub index_rounding: IndexRounding,
}

fn default_speed_of_light() -> f64 {
    SPEED_OF_LIGHT
}
fn default_reference_frequency() -> f64 {
    REFERENCE_FREQUENCY_THZ
}
fn default_granularity() -> f64 {
    GRANULARITY_THZ
}
fn default_frequency_min() -> f64 {
    184.5
}
fn default_frequency_max() -> f64 {
    195.9375
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            speed_of_light: default_speed_of_light(),
            reference_frequency: default_reference_frequency(),
            granularity: default_granularity(),
            frequency_min: default_frequency_min(),
            frequency_max: default_frequency_max(),
            index_rounding: IndexRounding::default(),
        }
    }
}

/// The narrower sub-band the flexible grid is partitioned over (THz).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlexibleBand {
    #[serde(default = "default_flex_min")]
    pub frequency_min: f64,
    #[serde(default = "default_flex_max")]
    pub frequency_max: f64,
}

fn default_flex_min() -> f64 {
    193.0
}
fn default_flex_max() -> f64 {
    193.35
}

impl Default for FlexibleBand {
    fn default() -> Self {
        Self {
            frequency_min: default_flex_min(),
            frequency_max: default_flex_max(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let config: GridConfig =
            serde_json::from_str(r#"{ "frequency_min": 191.0, "index_rounding": "truncate" }"#).unwrap();
        assert_eq!(config.frequency_min, 191.0);
        assert_eq!(config.frequency_max, 195.9375);
        assert_eq!(config.reference_frequency, 193.1);
        assert_eq!(config.index_rounding, IndexRounding::Truncate);
    }

    #[test]
    fn rounding_modes_differ_on_inexact_edges() {
        let ratio = (184.5 - 193.1) / 0.0125;
        assert_eq!(IndexRounding::Nearest.apply(ratio), -688);
        assert_eq!(IndexRounding::Truncate.apply(ratio), -687);
    }
}
