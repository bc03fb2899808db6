pub mod builder;
pub mod generator;
pub mod tables;

pub use builder::GridBuilder;
pub use generator::{GridGenerator, GridOutput, OutputShape};
pub use tables::{SpacingSummary, SpacingTables};

/// Decimal places kept for channel frequency and wavelength.
pub const CHANNEL_DECIMALS: i32 = 4;

/// Largest number of base-grid steps a band may span, and the largest offset of a band
/// edge from the reference frequency, in steps.
pub const MAX_INDEX_SPAN: i64 = 100_000;
