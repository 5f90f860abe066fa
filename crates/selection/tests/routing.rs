//! End-to-end routing against the bundled dataset.

use analytics::{DerivedTable, MetricEngine};
use core_types::{BaseTable, Metric, Mode, RawMetric};
use selection::{CompetitorSet, RoutedView, Selection, SelectionRouter};

fn fixture() -> (BaseTable, DerivedTable) {
    let table = dataset::load().unwrap();
    let derived = MetricEngine::new().derive(&table).unwrap();
    (table, derived)
}

fn route(selection: Selection) -> RoutedView {
    let (table, derived) = fixture();
    SelectionRouter::new().route(&table, &derived, &selection).unwrap()
}

#[test]
fn solo_occupancy_plots_only_the_subject() {
    let view = route(Selection::parse("solo", "Occupancy", &["competitor", "market"]).unwrap());

    assert_eq!(view.chart.series.len(), 1);
    assert_eq!(view.chart.series[0].name, "BNBME");
    assert_eq!(view.chart.series[0].values, vec![47.0, 63.0, 74.0, 87.0, 55.0, 45.0, 15.0, 32.0]);
    assert_eq!(view.chart.subheader, "Occupancy Trends (Solo)");
    assert_eq!(view.chart.title, "BNBME Monthly Occupancy Trends (2024)");
    assert_eq!(view.chart.x_label, "Month");
    assert_eq!(view.chart.y_label, "Occupancy Rate (%)");
    assert!(view.analysis.contains("52.25%"));
}

#[test]
fn revpar_gap_ignores_an_empty_competitor_selection() {
    let view = route(Selection::comparison(Metric::RevparGap, CompetitorSet::none()));

    assert_eq!(view.chart.series_names(), vec!["RevPAR Gap ($)"]);
    assert_eq!(
        view.chart.series[0].values,
        vec![23.0, -303.0, 96.0, 31.0, 61.0, 1.0, -40.0, -91.0]
    );
    assert_eq!(view.chart.title, "RevPAR Gap: BNBME vs Luxe (2024)");
    let guide = view.chart.reference_line.as_ref().unwrap();
    assert_eq!((guide.y, guide.label.as_str()), (0.0, "No Gap"));
}

#[test]
fn fixed_series_metrics_ignore_the_competitor_selection() {
    for metric in [Metric::PerformanceIndices, Metric::MarketShare, Metric::RevparGap] {
        let all = route(Selection::comparison(metric, CompetitorSet::both()));
        let none = route(Selection::comparison(metric, CompetitorSet::none()));
        assert_eq!(all.chart, none.chart, "{metric}");
    }
}

#[test]
fn toggleable_metrics_add_selected_competitors_in_order() {
    let view = route(Selection::comparison(Metric::Adr, CompetitorSet::both()));
    assert_eq!(
        view.chart.series_names(),
        vec!["BNBME", "Luxe (Competitor)", "Anantara (Market)"]
    );
    assert_eq!(view.chart.title, "Monthly ADR Trends (2024)");
    assert_eq!(view.chart.subheader, "ADR Trends (Comparison)");

    let market_only = CompetitorSet { competitor: false, market: true };
    let view = route(Selection::comparison(Metric::Revpar, market_only));
    assert_eq!(view.chart.series_names(), vec!["BNBME", "Anantara (Market)"]);
    assert_eq!(view.chart.series[1].values[6], 153.0);
}

#[test]
fn empty_selection_leaves_only_the_subject_on_toggleable_metrics() {
    for metric in Metric::ALL.into_iter().filter(Metric::is_toggleable) {
        let view = route(Selection::comparison(metric, CompetitorSet::none()));
        assert_eq!(view.chart.series.len(), 1, "{metric}");
        assert_eq!(view.chart.series[0].name, "BNBME");
    }
}

#[test]
fn revpar_per_occupancy_point_uses_the_derived_column() {
    let view = route(Selection::comparison(Metric::RevparPerOccupancy, CompetitorSet::both()));
    assert_eq!(view.chart.series.len(), 3);
    let march = view.chart.series[0].values[2];
    assert!((march - 812.0 / 74.0).abs() < 1e-9);
    assert_eq!(view.chart.y_label, "RevPAR per Occupancy Point ($)");

    let subject = &view.summaries[0];
    assert_eq!(subject.series, "BNBME");
    assert_eq!(format!("{:.2}", subject.summary.average), "7.84");
    assert_eq!(subject.summary.peak.month, "2024-03");
    // 130 / 32: the text's "$4.06" low falls in August.
    assert_eq!(subject.summary.trough.month, "2024-08");
    assert!((subject.summary.trough.value - 4.0625).abs() < 1e-9);
}

#[test]
fn performance_indices_plot_three_indices_against_parity() {
    let view = route(Selection::comparison(Metric::PerformanceIndices, CompetitorSet::both()));
    assert_eq!(
        view.chart.series_names(),
        vec!["Occupancy Index", "ADR Index", "RevPAR Index"]
    );
    let revpar_index = &view.chart.series[2].values;
    assert!((revpar_index[6] - 79.0 / 153.0).abs() < 1e-9);
    assert_eq!(format!("{:.2}", revpar_index[2]), "1.43");
    assert_eq!(view.chart.reference_line.as_ref().unwrap().y, 1.0);
    assert_eq!(view.chart.title, "BNBME Performance Indices Relative to Market (2024)");
}

#[test]
fn routing_is_idempotent() {
    let (table, derived) = fixture();
    let router = SelectionRouter::new();
    for mode in [Mode::Solo, Mode::Comparison] {
        for metric in mode.metrics() {
            let selection = Selection::from_parts(mode, metric, CompetitorSet::both()).unwrap();
            let first = router.route(&table, &derived, &selection).unwrap();
            let second = router.route(&table, &derived, &selection).unwrap();
            assert_eq!(first, second, "{mode}/{metric}");
            assert_eq!(first.chart.x_values, table.month_labels());
            assert!(first.chart.series.iter().all(|s| s.values.len() == 8));
        }
    }
}

#[test]
fn solo_and_comparison_analysis_differ() {
    let solo = route(Selection::solo(RawMetric::Revpar));
    let comparison = route(Selection::comparison(Metric::Revpar, CompetitorSet::both()));
    assert_ne!(solo.analysis, comparison.analysis);
    assert!(comparison.analysis.contains("Luxe"));
}

#[test]
fn routed_view_serializes_for_the_api() {
    let view = route(Selection::comparison(Metric::MarketShare, CompetitorSet::none()));
    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json["selection"]["mode"], "comparison");
    assert_eq!(json["selection"]["metric"], "market-share");
    assert_eq!(json["chart"]["series"][0]["name"], "Market Share (%)");
    assert_eq!(json["summaries"][0]["series"], "Market Share (%)");
    assert!(json["summaries"][0]["average"].is_number());
    assert_eq!(json["summaries"][0]["peak"]["month"], "2024-03");
}

#[test]
fn menu_labels_parse_back_to_their_metrics() {
    let (table, _) = fixture();
    let metric = Metric::from_label("RevPAR Gap with Luxe", table.names()).unwrap();
    let selection = Selection::from_parts(Mode::Comparison, metric, CompetitorSet::none()).unwrap();
    assert_eq!(route(selection).chart.series.len(), 1);
}
