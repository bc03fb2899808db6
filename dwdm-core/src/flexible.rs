//! Flexible-grid partition of a sub-band into slots of arbitrary width.
//!
//! Candidate centers walk the 12.5 GHz base grid and a slot is kept only when its offset
//! from the reference frequency is an integer number of slot widths. Stepping directly by
//! the width would not work for widths that are not a multiple of the granularity.

use crate::{converter::round_to, error::GridError, grid::generator::index_bounds};
use dwdm_schemas::{
    config::{FlexibleBand, GridConfig},
    flexible::FlexibleSlot,
};
use log::debug;
use std::ops::RangeInclusive;

/// Largest distance from an integer the width ratio may have for a slot to be accepted.
pub const ALIGNMENT_TOLERANCE: f64 = 1e-6;

/// Decimal places kept for slot center and edges.
pub const SLOT_DECIMALS: i32 = 5;

#[derive(Debug, Clone, Copy)]
pub struct FlexibleGridGenerator {
    config: GridConfig,
    band: FlexibleBand,
}

impl FlexibleGridGenerator {
    pub fn new(config: GridConfig, band: FlexibleBand) -> Self {
        Self { config, band }
    }

    /// Base-grid indices covering the sub-band.
    pub fn index_range(&self) -> RangeInclusive<i64> {
        index_bounds(&self.config, self.band.frequency_min, self.band.frequency_max)
    }

    /// Slots of `width_ghz` whose centers sit on an integer multiple of the width.
    pub fn slots(&self, width_ghz: f64) -> Result<Vec<FlexibleSlot>, GridError> {
        if !width_ghz.is_finite() || width_ghz <= 0.0 {
            return Err(GridError::InvalidSlotWidth(width_ghz));
        }
        let width_thz = width_ghz / 1000.0;
        let reference = self.config.reference_frequency;

        let slots: Vec<FlexibleSlot> = self
            .index_range()
            .filter_map(|n| {
                let center = reference + n as f64 * self.config.granularity;
                let ratio = (center - reference) / width_thz;
                ((ratio - ratio.round()).abs() < ALIGNMENT_TOLERANCE).then(|| FlexibleSlot {
                    index: n,
                    center: round_to(center, SLOT_DECIMALS),
                    start: round_to(center - width_thz / 2.0, SLOT_DECIMALS),
                    end: round_to(center + width_thz / 2.0, SLOT_DECIMALS),
                })
            })
            .collect();

        debug!("[Flex] {} slots of {} GHz", slots.len(), width_ghz);
        Ok(slots)
    }
}
