use serde::{Deserialize, Serialize};

/// A contiguous spectral slot of the flexible grid. All values in THz, five decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlexibleSlot {
    pub index: i64,
    pub center: f64,
    pub start: f64,
    pub end: f64,
}

impl FlexibleSlot {
    pub fn width(&self) -> f64 {
        self.end - self.start
    }
}
