use crate::{AppState, error::AppError, page};
use analytics::DerivedTable;
use axum::{
    Json,
    extract::{Query, State},
    http::header,
    response::{Html, IntoResponse},
};
use charting::{ChartRenderer, SvgRenderer};
use core_types::{BaseTable, Metric, Mode};
use selection::{CompetitorSet, RoutedView, Selection};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct MetricsQuery {
    pub mode: String,
}

/// Query string of `/api/view` and `/api/chart.svg`.
///
/// `competitors` is a comma-separated list of property ids. When absent, both
/// comparison properties are selected; an empty value selects none.
#[derive(Debug, Deserialize)]
pub struct ViewQuery {
    pub mode: String,
    pub metric: String,
    pub competitors: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl ViewQuery {
    fn selection(&self) -> Result<Selection, AppError> {
        let ids: Vec<&str> = match self.competitors.as_deref() {
            None => vec!["competitor", "market"],
            Some(list) => list.split(',').map(str::trim).filter(|id| !id.is_empty()).collect(),
        };
        Ok(Selection::parse(&self.mode, &self.metric, &ids)?)
    }
}

/// Form fields of the dashboard page.
///
/// Unchecked checkboxes are simply missing from the query, so `submitted` tells a
/// first visit (both competitors checked) apart from a form with both unchecked.
#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    pub mode: Option<String>,
    pub metric: Option<String>,
    pub competitor: Option<String>,
    pub market: Option<String>,
    pub submitted: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MetricEntry {
    pub id: &'static str,
    pub label: String,
    /// Whether the competitor selection changes this metric's chart.
    pub toggleable: bool,
}

#[derive(Debug, Serialize)]
pub struct MetricMenu {
    pub mode: Mode,
    pub metrics: Vec<MetricEntry>,
}

/// # GET /api/table
pub async fn get_table(State(state): State<Arc<AppState>>) -> Json<BaseTable> {
    Json(state.table.clone())
}

/// # GET /api/derived
pub async fn get_derived(State(state): State<Arc<AppState>>) -> Json<DerivedTable> {
    Json(state.derived.clone())
}

/// # GET /api/metrics?mode=
/// The metric menu for a mode, in display order.
pub async fn get_metrics(
    State(state): State<Arc<AppState>>,
    Query(query): Query<MetricsQuery>,
) -> Result<Json<MetricMenu>, AppError> {
    let mode: Mode = query.mode.parse()?;
    let names = state.table.names();
    let metrics = mode
        .metrics()
        .into_iter()
        .map(|metric| MetricEntry {
            id: metric.id(),
            label: metric.label(names),
            toggleable: mode == Mode::Comparison && metric.is_toggleable(),
        })
        .collect();
    Ok(Json(MetricMenu { mode, metrics }))
}

/// # GET /api/view?mode=&metric=&competitors=
/// The chart specification, analysis text and series summaries for one selection.
pub async fn get_view(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ViewQuery>,
) -> Result<Json<RoutedView>, AppError> {
    let selection = query.selection()?;
    tracing::info!(mode = %selection.mode(), metric = %selection.metric(), "Serving view.");
    let view = state.router.route(&state.table, &state.derived, &selection)?;
    Ok(Json(view))
}

/// # GET /api/chart.svg?mode=&metric=&competitors=[&width=&height=]
pub async fn get_chart_svg(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ViewQuery>,
) -> Result<impl IntoResponse, AppError> {
    let selection = query.selection()?;
    let renderer = SvgRenderer::new(
        query.width.unwrap_or(state.renderer.width),
        query.height.unwrap_or(state.renderer.height),
    );
    if renderer.width == 0 || renderer.height == 0 {
        return Err(AppError::BadRequest("width and height must be positive".to_string()));
    }

    let view = state.router.route(&state.table, &state.derived, &selection)?;
    let svg = renderer.render(&view.chart)?;
    Ok(([(header::CONTENT_TYPE, "image/svg+xml")], svg))
}

/// # GET /
/// The dashboard page. A metric that the chosen mode does not offer falls back to
/// the first entry of that mode's menu, as happens when the mode is switched.
pub async fn dashboard(
    State(state): State<Arc<AppState>>,
    Query(query): Query<DashboardQuery>,
) -> Result<Html<String>, AppError> {
    let mode = match query.mode.as_deref() {
        Some(id) => id.parse()?,
        None => Mode::Solo,
    };
    let metric = match query.metric.as_deref() {
        Some(id) => Metric::from_label(id, state.table.names())?,
        None => Metric::Occupancy,
    };
    let metric = if metric.available_in(mode) { metric } else { Metric::Occupancy };
    let competitors = if query.submitted.is_some() {
        CompetitorSet { competitor: query.competitor.is_some(), market: query.market.is_some() }
    } else {
        CompetitorSet::both()
    };

    let selection = Selection::from_parts(mode, metric, competitors)?;
    let view = state.router.route(&state.table, &state.derived, &selection)?;
    let svg = state.renderer.render(&view.chart)?;

    Ok(Html(page::render(&state.dashboard, state.table.names(), &view, &svg)))
}
