use super::{
    generator::{index_bounds, GridGenerator},
    MAX_INDEX_SPAN,
};
use crate::error::GridError;
use dwdm_schemas::config::{FlexibleBand, GridConfig, IndexRounding};

/// A fluent builder for constructing a `GridGenerator`.
///
/// Starts from the ITU defaults; each `with_*` call overrides one part of the configuration.
#[derive(Default)]
pub struct GridBuilder {
    config: GridConfig,
    band: Option<(f64, f64)>,
    index_rounding: Option<IndexRounding>,
    flexible_band: Option<FlexibleBand>,
}

impl GridBuilder {
    /// Creates a builder holding the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole grid configuration.
    pub fn with_config(mut self, config: GridConfig) -> Self {
        self.config = config;
        self
    }

    /// Overrides the generated frequency range (THz).
    pub fn with_band(mut self, frequency_min: f64, frequency_max: f64) -> Self {
        self.band = Some((frequency_min, frequency_max));
        self
    }

    pub fn with_index_rounding(mut self, rounding: IndexRounding) -> Self {
        self.index_rounding = Some(rounding);
        self
    }

    /// Sets the sub-band used for the flexible grid.
    pub fn with_flexible_band(mut self, band: FlexibleBand) -> Self {
        self.flexible_band = Some(band);
        self
    }

    /// Consumes the builder and returns a validated `GridGenerator`.
    ///
    /// # Errors
    ///
    /// Returns `GridError::ConfigError` when the speed of light or the granularity is not
    /// positive, when any frequency is not finite, or when a band edge lies more than
    /// `MAX_INDEX_SPAN` steps from the reference or a band spans more than that many steps.
    /// An inverted band is accepted and yields an empty grid.
    pub fn build(self) -> Result<GridGenerator, GridError> {
        let mut config = self.config;
        if let Some((frequency_min, frequency_max)) = self.band {
            config.frequency_min = frequency_min;
            config.frequency_max = frequency_max;
        }
        if let Some(rounding) = self.index_rounding {
            config.index_rounding = rounding;
        }
        let flexible_band = self.flexible_band.unwrap_or_default();

        require_positive("speed_of_light", config.speed_of_light)?;
        require_positive("granularity", config.granularity)?;
        require_finite("reference_frequency", config.reference_frequency)?;
        require_finite("frequency_min", config.frequency_min)?;
        require_finite("frequency_max", config.frequency_max)?;
        require_finite("flexible_band.frequency_min", flexible_band.frequency_min)?;
        require_finite("flexible_band.frequency_max", flexible_band.frequency_max)?;

        require_bounded_band("band", &config, config.frequency_min, config.frequency_max)?;
        require_bounded_band(
            "flexible_band",
            &config,
            flexible_band.frequency_min,
            flexible_band.frequency_max,
        )?;

        Ok(GridGenerator {
            config,
            flexible_band,
        })
    }
}

fn require_finite(name: &str, value: f64) -> Result<(), GridError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(GridError::ConfigError(format!("'{}' must be finite, got {}", name, value)))
    }
}

fn require_positive(name: &str, value: f64) -> Result<(), GridError> {
    require_finite(name, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(GridError::ConfigError(format!("'{}' must be positive, got {}", name, value)))
    }
}

/// Rejects band edges whose index would not fit the supported range, before any
/// float-to-integer conversion can saturate.
fn require_bounded_band(
    name: &str,
    config: &GridConfig,
    frequency_min: f64,
    frequency_max: f64,
) -> Result<(), GridError> {
    for edge in [frequency_min, frequency_max] {
        let offset = (edge - config.reference_frequency) / config.granularity;
        if !offset.is_finite() || offset.abs() > MAX_INDEX_SPAN as f64 {
            return Err(GridError::ConfigError(format!(
                "'{}' edge {} THz is more than {} steps from the reference frequency",
                name, edge, MAX_INDEX_SPAN
            )));
        }
    }
    let range = index_bounds(config, frequency_min, frequency_max);
    let span = range.end() - range.start();
    if span > MAX_INDEX_SPAN {
        return Err(GridError::ConfigError(format!(
            "'{}' spans {} steps, the limit is {}",
            name, span, MAX_INDEX_SPAN
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_apply_on_top_of_config() {
        let generator = GridBuilder::new()
            .with_band(193.0, 193.5)
            .with_index_rounding(IndexRounding::Truncate)
            .build()
            .unwrap();
        assert_eq!(generator.config().frequency_min, 193.0);
        assert_eq!(generator.config().frequency_max, 193.5);
        assert_eq!(generator.config().index_rounding, IndexRounding::Truncate);
        assert_eq!(generator.config().reference_frequency, 193.1);
        assert_eq!(*generator.flexible_band(), FlexibleBand::default());
    }

    #[test]
    fn rejects_zero_granularity() {
        let config = GridConfig {
            granularity: 0.0,
            ..GridConfig::default()
        };
        let err = GridBuilder::new().with_config(config).build().unwrap_err();
        assert!(matches!(err, GridError::ConfigError(msg) if msg.contains("granularity")));
    }

    #[test]
    fn rejects_non_finite_band() {
        assert!(GridBuilder::new().with_band(f64::NAN, 195.0).build().is_err());
        assert!(GridBuilder::new().with_band(184.0, f64::INFINITY).build().is_err());
    }

    #[test]
    fn rejects_band_edge_far_from_reference() {
        let err = GridBuilder::new().with_band(184.5, 1.0e9).build().unwrap_err();
        assert!(matches!(err, GridError::ConfigError(msg) if msg.contains("'band'")));
    }

    #[test]
    fn rejects_granularity_too_fine_for_band() {
        let config = GridConfig {
            granularity: 1e-9,
            ..GridConfig::default()
        };
        assert!(matches!(
            GridBuilder::new().with_config(config).build(),
            Err(GridError::ConfigError(_))
        ));
    }

    #[test]
    fn rejects_band_wider_than_span_limit() {
        // Each edge is 80_000 steps out, so only the total span exceeds the limit.
        let err = GridBuilder::new().with_band(193.1 - 1000.0, 193.1 + 1000.0).build().unwrap_err();
        assert!(matches!(err, GridError::ConfigError(msg) if msg.contains("spans")));
    }

    #[test]
    fn rejects_unbounded_flexible_band() {
        let band = FlexibleBand {
            frequency_min: 193.0,
            frequency_max: 5.0e6,
        };
        let err = GridBuilder::new().with_flexible_band(band).build().unwrap_err();
        assert!(matches!(err, GridError::ConfigError(msg) if msg.contains("flexible_band")));
    }

    #[test]
    fn default_band_is_within_limits() {
        let generator = GridBuilder::new().build().unwrap();
        let range = generator.index_range();
        assert!(range.end() - range.start() < MAX_INDEX_SPAN);
    }

    #[test]
    fn accepts_inverted_band() {
        assert!(GridBuilder::new().with_band(195.0, 184.0).build().is_ok());
    }
}
