use serde::{Deserialize, Serialize};

/// A single nominal channel of the grid.
///
/// `index` is the signed offset from the reference frequency in units of the granularity.
/// `frequency` (THz) and `wavelength` (nm) are rounded to four decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Channel {
    pub index: i64,
    pub frequency: f64,
    pub wavelength: f64,
}
