use serde::{Deserialize, Serialize};

/// One row of the merged ITU table.
///
/// Each `f_*` column holds the channel frequency when the index belongs to that spacing and
/// `None` otherwise, so absence is explicit instead of a repeated value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ItuTableRow {
    pub index: i64,
    pub f_12: Option<f64>,
    pub f_25: Option<f64>,
    pub f_100: Option<f64>,
    pub f_50: Option<f64>,
    pub wavelength: f64,
}
