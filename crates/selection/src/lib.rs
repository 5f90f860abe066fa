//! # Compset Selection Router
//!
//! Turns a dashboard request, a mode, a metric and the competitors to compare
//! against, into a `ChartSpec` and the matching analysis text.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** No rendering happens here. The router hands a backend-neutral
//!   `ChartSpec` to whichever renderer the front-end uses.
//! - **Closed Enumerations:** Requests are enums checked exhaustively at compile time.
//!   String input is parsed once, at the edge, by `Selection::parse`.
//! - **Request-Scoped State:** A `Selection` lives for one request; the router and the
//!   tables it reads are immutable.
//!
//! ## Public API
//!
//! - `Selection` / `CompetitorSet`: One user request.
//! - `SelectionRouter`: Maps a selection to a `RoutedView`.
//! - `ChartSpec` / `Series` / `ReferenceLine`: What to draw.
//! - `NarrativeStore` / `StaticNarratives`: Keyed analysis text.
//! - `SelectionError`: The specific error types that can be returned from this crate.

pub mod chart;
pub mod error;
pub mod narrative;
pub mod router;
pub mod selection;

pub use chart::{ChartSpec, ReferenceLine, Series};
pub use error::SelectionError;
pub use narrative::{NarrativeStore, StaticNarratives};
pub use router::{NamedSummary, RoutedView, SelectionRouter};
pub use selection::{CompetitorSet, Selection};
