//! # Compset Charting
//!
//! Draws a `selection::ChartSpec` as a line chart.
//!
//! ## Architectural Principles
//!
//! - **Layer 2 Presentation:** The only crate that knows about a plotting library.
//!   Everything upstream speaks `ChartSpec`.
//! - **Pluggable Backends:** `ChartRenderer` is the seam. `SvgRenderer` is the one
//!   shipped backend; it produces a self-contained SVG document that both the CLI
//!   and the web server can hand out unchanged.
//!
//! ## Public API
//!
//! - `ChartRenderer`: The rendering trait.
//! - `SvgRenderer`: SVG output via `plotters`.
//! - `ChartError`: The specific error types that can be returned from this crate.

pub mod error;
pub mod svg;

pub use error::ChartError;
pub use svg::SvgRenderer;

use selection::ChartSpec;

/// A backend that turns a chart specification into a plot artifact.
pub trait ChartRenderer {
    type Output;

    fn render(&self, spec: &ChartSpec) -> Result<Self::Output, ChartError>;
}
