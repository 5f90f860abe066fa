use crate::chart::{ChartSpec, ReferenceLine, Series};
use crate::error::SelectionError;
use crate::narrative::{NarrativeStore, StaticNarratives};
use crate::selection::Selection;
use analytics::{DerivedColumn, DerivedTable, SeriesSummary, summarize};
use core_types::{BaseTable, Metric, Mode, Property, RawMetric};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;

/// Summary statistics of one plotted series, labelled with the series name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NamedSummary {
    pub series: String,
    #[serde(flatten)]
    pub summary: SeriesSummary,
}

/// The router's answer to one selection: what to draw and what to say about it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutedView {
    pub selection: Selection,
    pub chart: ChartSpec,
    pub analysis: String,
    pub summaries: Vec<NamedSummary>,
}

/// Maps a `Selection` to a chart specification and its analysis text.
///
/// The router holds no data. Each call reads the tables it is given and builds
/// a fresh view, so repeated calls with the same inputs return equal views.
#[derive(Debug, Clone, Default)]
pub struct SelectionRouter<N = StaticNarratives> {
    narratives: N,
}

impl SelectionRouter<StaticNarratives> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<N: NarrativeStore> SelectionRouter<N> {
    pub fn with_narratives(narratives: N) -> Self {
        Self { narratives }
    }

    pub fn route(
        &self,
        table: &BaseTable,
        derived: &DerivedTable,
        selection: &Selection,
    ) -> Result<RoutedView, SelectionError> {
        if table.len() != derived.len() {
            return Err(SelectionError::Misaligned { base: table.len(), derived: derived.len() });
        }

        let mode = selection.mode();
        let metric = selection.metric();
        tracing::debug!(mode = %mode, metric = %metric, "Routing selection.");

        let chart = build_chart(table, derived, selection)?;

        let analysis = self
            .narratives
            .analysis(mode, metric)
            .ok_or_else(|| SelectionError::MissingNarrative {
                mode: mode.id().to_string(),
                metric: metric.id().to_string(),
            })?
            .to_string();

        let summaries = chart
            .series
            .iter()
            .map(|series| -> Result<NamedSummary, SelectionError> {
                Ok(NamedSummary {
                    series: series.name.clone(),
                    summary: summarize(&chart.x_values, &series.values)?,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(RoutedView { selection: *selection, chart, analysis, summaries })
    }
}

fn build_chart(table: &BaseTable, derived: &DerivedTable, selection: &Selection) -> Result<ChartSpec, SelectionError> {
    let names = table.names();
    let year = table.year_label();
    let subject = &names.subject;

    let mut chart = ChartSpec {
        subheader: String::new(),
        title: String::new(),
        x_label: "Month".to_string(),
        y_label: String::new(),
        x_values: table.month_labels(),
        series: Vec::new(),
        reference_line: None,
    };

    match *selection {
        Selection::Solo { metric } => {
            chart.subheader = format!("{} Trends (Solo)", metric.label());
            chart.title = format!("{subject} Monthly {} Trends ({year})", metric.label());
            chart.y_label = metric.axis_label().to_string();
            chart.series = raw_series(table, metric, &selection.properties())?;
        }
        Selection::Comparison { metric, .. } => {
            let mode = Mode::Comparison.label();
            match metric {
                Metric::Occupancy => comparison_raw(&mut chart, table, selection, RawMetric::Occupancy)?,
                Metric::Revpar => comparison_raw(&mut chart, table, selection, RawMetric::Revpar)?,
                Metric::Adr => comparison_raw(&mut chart, table, selection, RawMetric::Adr)?,
                Metric::RevparPerOccupancy => {
                    chart.subheader = format!("RevPAR per Occupancy Point ({mode})");
                    chart.title = format!("RevPAR per Occupancy Point ({year})");
                    chart.y_label = "RevPAR per Occupancy Point ($)".to_string();
                    chart.series = selection
                        .properties()
                        .into_iter()
                        .map(|p| {
                            let values = derived.column(DerivedColumn::RevparPerOccupancy(p));
                            series(p.series_label(names), &values, 1.0)
                        })
                        .collect::<Result<_, _>>()?;
                }
                Metric::PerformanceIndices => {
                    chart.subheader = format!("Performance Indices ({mode})");
                    chart.title = format!("{subject} Performance Indices Relative to Market ({year})");
                    chart.y_label = "Index Value".to_string();
                    chart.series = vec![
                        series("Occupancy Index", &derived.column(DerivedColumn::OccupancyIndex), 1.0)?,
                        series("ADR Index", &derived.column(DerivedColumn::AdrIndex), 1.0)?,
                        series("RevPAR Index", &derived.column(DerivedColumn::RevparIndex), 1.0)?,
                    ];
                    chart.reference_line = Some(ReferenceLine { y: 1.0, label: "Market Average".to_string() });
                }
                Metric::MarketShare => {
                    chart.subheader = format!("{subject} RevPAR Market Share ({mode})");
                    chart.title = format!("{subject} RevPAR Market Share ({year})");
                    chart.y_label = "Market Share (%)".to_string();
                    chart.series = vec![series(
                        "Market Share (%)",
                        &derived.column(DerivedColumn::MarketShare),
                        100.0,
                    )?];
                }
                Metric::RevparGap => {
                    let competitor = &names.competitor;
                    chart.subheader = format!("RevPAR Gap: {subject} vs {competitor} ({mode})");
                    chart.title = format!("RevPAR Gap: {subject} vs {competitor} ({year})");
                    chart.y_label = "RevPAR Gap ($)".to_string();
                    chart.series = vec![series("RevPAR Gap ($)", &derived.column(DerivedColumn::RevparGap), 1.0)?];
                    chart.reference_line = Some(ReferenceLine { y: 0.0, label: "No Gap".to_string() });
                }
            }
        }
    }

    Ok(chart)
}

fn comparison_raw(
    chart: &mut ChartSpec,
    table: &BaseTable,
    selection: &Selection,
    metric: RawMetric,
) -> Result<(), SelectionError> {
    chart.subheader = format!("{} Trends ({})", metric.label(), Mode::Comparison.label());
    chart.title = format!("Monthly {} Trends ({})", metric.label(), table.year_label());
    chart.y_label = metric.axis_label().to_string();
    chart.series = raw_series(table, metric, &selection.properties())?;
    Ok(())
}

fn raw_series(table: &BaseTable, metric: RawMetric, properties: &[Property]) -> Result<Vec<Series>, SelectionError> {
    properties
        .iter()
        .map(|&p| series(p.series_label(table.names()), &table.column(p, metric), 1.0))
        .collect()
}

/// Converts a Decimal column into a plottable series, multiplying by `scale`.
fn series(name: impl Into<String>, values: &[Decimal], scale: f64) -> Result<Series, SelectionError> {
    let values = values
        .iter()
        .map(|v| {
            v.to_f64()
                .map(|f| f * scale)
                .ok_or_else(|| SelectionError::NotPlottable(v.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Series { name: name.into(), values })
}
