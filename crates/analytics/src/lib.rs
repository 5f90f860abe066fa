//! # Compset Analytics Engine
//!
//! This crate turns the monthly base table into the derived hospitality metrics the
//! dashboard charts: RevPAR per occupancy point, the three market indices, total
//! market RevPAR, the subject's market share and its RevPAR gap to the competitor.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of charts,
//!   terminals or HTTP. It depends only on `core-types` (Layer 0).
//! - **Stateless Calculation:** The `MetricEngine` takes an immutable `BaseTable` and
//!   produces a `DerivedTable`. Nothing is cached or mutated between calls.
//! - **Loud Failures:** A zero divisor is an `AnalyticsError::DivisionByZero`, never a
//!   silent NaN or infinity.
//!
//! ## Public API
//!
//! - `MetricEngine`: The derivation logic.
//! - `DerivedTable` / `DerivedRow` / `DerivedColumn`: The derived view and its columns.
//! - `SeriesSummary` / `summarize`: Average, peak and trough of a plotted series.
//! - `AnalyticsError`: The specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod engine;
pub mod error;
pub mod report;
pub mod summary;

// Re-export the key components to create a clean, public-facing API.
pub use engine::MetricEngine;
pub use error::AnalyticsError;
pub use report::{DerivedColumn, DerivedRow, DerivedTable};
pub use summary::{summarize, Extremum, SeriesSummary};
