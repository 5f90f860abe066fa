//! # Compset Web Server
//!
//! Serves the dashboard page and a small JSON API over the bundled dataset.
//!
//! ## Architectural Principles
//!
//! - **Layer 3 Front-End:** Parses query strings into a `Selection`, hands it to the
//!   router and renders the result. No metric logic lives here.
//! - **Immutable Shared State:** The base and derived tables are built once at
//!   startup and shared read-only behind an `Arc`.

use analytics::{DerivedTable, MetricEngine};
use axum::{Router, routing::get};
use charting::SvgRenderer;
use configuration::{ChartSettings, DashboardSettings};
use core_types::BaseTable;
use selection::SelectionRouter;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{AllowHeaders, AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

pub mod error;
pub mod handlers;
pub mod page;

use error::AppError;

/// The shared application state that all handlers can access.
pub struct AppState {
    pub table: BaseTable,
    pub derived: DerivedTable,
    pub router: SelectionRouter,
    pub renderer: SvgRenderer,
    pub dashboard: DashboardSettings,
}

impl AppState {
    /// Derives the metrics table and captures the display settings.
    pub fn new(table: BaseTable, dashboard: DashboardSettings, chart: ChartSettings) -> Result<Self, AppError> {
        let derived = MetricEngine::new().derive(&table)?;
        Ok(Self {
            table,
            derived,
            router: SelectionRouter::new(),
            renderer: SvgRenderer::new(chart.width, chart.height),
            dashboard,
        })
    }
}

/// Builds the application router. Split from `run_server` so tests can drive it in-process.
pub fn create_app(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods(Any)
        .allow_headers(AllowHeaders::any());

    Router::new()
        .route("/", get(handlers::dashboard))
        .route("/api/health", get(|| async { "OK" }))
        .route("/api/table", get(handlers::get_table))
        .route("/api/derived", get(handlers::get_derived))
        .route("/api/metrics", get(handlers::get_metrics))
        .route("/api/view", get(handlers::get_view))
        .route("/api/chart.svg", get(handlers::get_chart_svg))
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Binds `addr` and serves the dashboard until the process is stopped.
pub async fn run_server(addr: SocketAddr, state: AppState) -> anyhow::Result<()> {
    let app = create_app(Arc::new(state));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Web server started and listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
