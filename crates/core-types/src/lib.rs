//! # Compset Core Types
//!
//! Layer 0 of the workspace: the vocabulary every other crate speaks. It holds the
//! three tracked properties, the closed metric enumerations offered by the dashboard
//! and the validated monthly base table.
//!
//! This crate performs no calculation beyond input validation.

pub mod enums;
pub mod error;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use enums::{Metric, Mode, Property, RawMetric};
pub use error::CoreError;
pub use structs::{BaseTable, MonthlyRecord, PerProperty, PropertyMetrics, PropertyNames};
