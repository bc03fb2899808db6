use super::{tables::SpacingTables, CHANNEL_DECIMALS};
use crate::{
    converter::{frequency_to_wavelength_nm, round_to},
    error::GridError,
    flexible::FlexibleGridGenerator,
};
use dwdm_schemas::{
    channel::Channel,
    config::{FlexibleBand, GridConfig},
    flexible::FlexibleSlot,
    spacing::ChannelSpacing,
    table::ItuTableRow,
};
use log::debug;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Which shape `GridGenerator::generate` returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputShape {
    /// One channel list per spacing.
    #[default]
    BySpacing,
    /// One merged row per index with a column per spacing.
    ItuTable,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum GridOutput {
    BySpacing(SpacingTables),
    ItuTable(Vec<ItuTableRow>),
}

/// Derives the grid channels from a validated configuration.
///
/// Built through `GridBuilder`. Every call recomputes from the configuration; nothing is cached.
#[derive(Debug, Clone, Default)]
pub struct GridGenerator {
    pub(super) config: GridConfig,
    pub(super) flexible_band: FlexibleBand,
}

/// Inclusive index range covering `[frequency_min, frequency_max]`; empty when inverted.
pub(crate) fn index_bounds(config: &GridConfig, frequency_min: f64, frequency_max: f64) -> RangeInclusive<i64> {
    let rounding = config.index_rounding;
    let n_min = rounding.apply((frequency_min - config.reference_frequency) / config.granularity);
    let n_max = rounding.apply((frequency_max - config.reference_frequency) / config.granularity);
    n_min..=n_max
}

impl GridGenerator {
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn flexible_band(&self) -> &FlexibleBand {
        &self.flexible_band
    }

    pub fn index_range(&self) -> RangeInclusive<i64> {
        index_bounds(&self.config, self.config.frequency_min, self.config.frequency_max)
    }

    /// Builds the channel for index `n`, rounding frequency and wavelength once each.
    pub fn channel(&self, n: i64) -> Result<Channel, GridError> {
        let frequency = round_to(
            self.config.reference_frequency + n as f64 * self.config.granularity,
            CHANNEL_DECIMALS,
        );
        let wavelength = round_to(
            frequency_to_wavelength_nm(self.config.speed_of_light, frequency)?,
            CHANNEL_DECIMALS,
        );
        Ok(Channel {
            index: n,
            frequency,
            wavelength,
        })
    }

    /// The spacings index `n` belongs to, finest first. Always includes 12.5 GHz.
    pub fn classify(n: i64) -> Vec<ChannelSpacing> {
        ChannelSpacing::ALL
            .into_iter()
            .filter(|spacing| spacing.contains(n))
            .collect()
    }

    /// Generates the base grid and classifies every channel into its subgrids.
    pub fn spacing_tables(&self) -> Result<SpacingTables, GridError> {
        let range = self.index_range();
        debug!(
            "[Grid] Generating indices {}..={} between {} and {} THz",
            range.start(),
            range.end(),
            self.config.frequency_min,
            self.config.frequency_max
        );

        let mut tables = SpacingTables::default();
        for n in range {
            tables.push(self.channel(n)?);
        }

        debug!(
            "[Grid] {} base channels, {} at 100 GHz",
            tables.len(ChannelSpacing::Ghz12_5),
            tables.len(ChannelSpacing::Ghz100)
        );
        Ok(tables)
    }

    /// Generates the merged table: one row per index, absent columns left as `None`.
    pub fn itu_table(&self) -> Result<Vec<ItuTableRow>, GridError> {
        let tables = self.spacing_tables()?;
        Ok(tables.base().iter().map(itu_row).collect())
    }

    pub fn generate(&self, shape: OutputShape) -> Result<GridOutput, GridError> {
        match shape {
            OutputShape::BySpacing => self.spacing_tables().map(GridOutput::BySpacing),
            OutputShape::ItuTable => self.itu_table().map(GridOutput::ItuTable),
        }
    }

    pub fn flexible(&self) -> FlexibleGridGenerator {
        FlexibleGridGenerator::new(self.config, self.flexible_band)
    }

    /// Flexible-grid slots of `width_ghz` over the configured sub-band.
    pub fn flexible_slots(&self, width_ghz: f64) -> Result<Vec<FlexibleSlot>, GridError> {
        self.flexible().slots(width_ghz)
    }
}

fn itu_row(channel: &Channel) -> ItuTableRow {
    let column = |spacing: ChannelSpacing| spacing.contains(channel.index).then_some(channel.frequency);
    ItuTableRow {
        index: channel.index,
        f_12: column(ChannelSpacing::Ghz12_5),
        f_25: column(ChannelSpacing::Ghz25),
        f_100: column(ChannelSpacing::Ghz100),
        f_50: column(ChannelSpacing::Ghz50),
        wavelength: channel.wavelength,
    }
}
