pub mod channel;
pub mod config;
pub mod file_formats;
pub mod flexible;
pub mod spacing;
pub mod table;
