//! Generation of the ITU-T G.694.1 DWDM frequency grid.
//!
//! The base grid is every multiple of the 12.5 GHz granularity around the 193.1 THz anchor
//! inside a configured band. The 25, 50 and 100 GHz subgrids are selected from it by index
//! divisibility, and a flexible grid partitions a narrower sub-band into slots of arbitrary
//! width.

pub mod converter;
pub mod error;
pub mod export;
pub mod flexible;
pub mod grid;

pub use dwdm_schemas as schemas;
