//! TKG Core Library
//!
//! Domain models, configuration and dataset loading for the
//! Travel Knowledge Graph loader.

pub mod config;
pub mod dataset;
pub mod error;

pub use config::Settings;
pub use dataset::Dataset;
pub use error::{TkgError, TkgResult};
