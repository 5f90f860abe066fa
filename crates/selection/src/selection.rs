use crate::error::SelectionError;
use core_types::{Metric, Mode, Property, RawMetric};
use serde::Serialize;

/// Which comparison properties are plotted next to the subject.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct CompetitorSet {
    pub competitor: bool,
    pub market: bool,
}

impl CompetitorSet {
    /// Both comparison properties; the dashboard's initial state.
    pub fn both() -> Self {
        Self { competitor: true, market: true }
    }

    pub fn none() -> Self {
        Self::default()
    }

    pub fn contains(&self, property: Property) -> bool {
        match property {
            Property::Subject => false,
            Property::Competitor => self.competitor,
            Property::Market => self.market,
        }
    }

    pub fn insert(&mut self, property: Property) -> Result<(), SelectionError> {
        match property {
            Property::Subject => return Err(SelectionError::InvalidCompetitor(property.to_string())),
            Property::Competitor => self.competitor = true,
            Property::Market => self.market = true,
        }
        Ok(())
    }

    /// Selected properties in plotting order: competitor before market.
    pub fn properties(&self) -> Vec<Property> {
        [Property::Competitor, Property::Market]
            .into_iter()
            .filter(|p| self.contains(*p))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        !self.competitor && !self.market
    }

    /// Parses identifiers such as "competitor" and "market". Duplicates are harmless.
    pub fn parse<S: AsRef<str>>(ids: &[S]) -> Result<Self, SelectionError> {
        let mut set = Self::none();
        for id in ids {
            let property: Property = id.as_ref().parse()?;
            set.insert(property)?;
        }
        Ok(set)
    }

    /// Resolves a front-end competitor choice for `mode`.
    ///
    /// Solo mode never compares, so its input is not parsed at all. In comparison
    /// mode `none` selects nobody, an empty `ids` selects both and anything else
    /// is parsed.
    pub fn resolve<S: AsRef<str>>(mode: Mode, ids: &[S], none: bool) -> Result<Self, SelectionError> {
        match mode {
            Mode::Solo => Ok(Self::none()),
            Mode::Comparison if none => Ok(Self::none()),
            Mode::Comparison if ids.is_empty() => Ok(Self::both()),
            Mode::Comparison => Self::parse(ids),
        }
    }
}

/// One user request to the dashboard.
///
/// Solo mode only carries a `RawMetric`, so a solo request for a comparison-only
/// metric cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Selection {
    Solo { metric: RawMetric },
    Comparison { metric: Metric, competitors: CompetitorSet },
}

impl Selection {
    pub fn solo(metric: RawMetric) -> Self {
        Selection::Solo { metric }
    }

    pub fn comparison(metric: Metric, competitors: CompetitorSet) -> Self {
        Selection::Comparison { metric, competitors }
    }

    /// Builds a selection from independently chosen parts.
    ///
    /// The competitor set is ignored in solo mode.
    pub fn from_parts(mode: Mode, metric: Metric, competitors: CompetitorSet) -> Result<Self, SelectionError> {
        match mode {
            Mode::Solo => metric.raw().map(Selection::solo).ok_or_else(|| SelectionError::MetricNotAvailable {
                metric: metric.id().to_string(),
                mode: mode.id().to_string(),
            }),
            Mode::Comparison => Ok(Selection::comparison(metric, competitors)),
        }
    }

    /// Parses the string form used by the CLI and the HTTP query string.
    pub fn parse<S: AsRef<str>>(mode: &str, metric: &str, competitors: &[S]) -> Result<Self, SelectionError> {
        let mode: Mode = mode.parse()?;
        let metric: Metric = metric.parse()?;
        let competitors = match mode {
            Mode::Solo => CompetitorSet::none(),
            Mode::Comparison => CompetitorSet::parse(competitors)?,
        };
        Self::from_parts(mode, metric, competitors)
    }

    pub fn mode(&self) -> Mode {
        match self {
            Selection::Solo { .. } => Mode::Solo,
            Selection::Comparison { .. } => Mode::Comparison,
        }
    }

    pub fn metric(&self) -> Metric {
        match self {
            Selection::Solo { metric } => Metric::from(*metric),
            Selection::Comparison { metric, .. } => *metric,
        }
    }

    /// Properties whose series are plotted for a per-property metric, subject first.
    pub fn properties(&self) -> Vec<Property> {
        let mut properties = vec![Property::Subject];
        if let Selection::Comparison { competitors, .. } = self {
            properties.extend(competitors.properties());
        }
        properties
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solo_ignores_competitor_input() {
        let selection = Selection::parse("solo", "occupancy", &["competitor", "market"]).unwrap();
        assert_eq!(selection, Selection::solo(RawMetric::Occupancy));
        assert_eq!(selection.properties(), vec![Property::Subject]);
    }

    #[test]
    fn solo_rejects_comparison_only_metrics() {
        let err = Selection::parse::<&str>("solo", "market-share", &[]).unwrap_err();
        assert_eq!(
            err,
            SelectionError::MetricNotAvailable { metric: "market-share".to_string(), mode: "solo".to_string() }
        );
        assert!(err.is_invalid_request());
    }

    #[test]
    fn unknown_metric_surfaces_from_core_types() {
        let err = Selection::parse::<&str>("comparison", "sharpe", &[]).unwrap_err();
        assert_eq!(err.to_string(), "Unknown metric 'sharpe'");
        assert!(err.is_invalid_request());
    }

    #[test]
    fn comparison_orders_competitor_before_market() {
        let selection = Selection::parse("comparison", "adr", &["market", "competitor"]).unwrap();
        assert_eq!(
            selection.properties(),
            vec![Property::Subject, Property::Competitor, Property::Market]
        );
    }

    #[test]
    fn subject_is_not_a_comparison_target() {
        assert_eq!(
            CompetitorSet::parse(&["subject"]),
            Err(SelectionError::InvalidCompetitor("subject".to_string()))
        );
    }

    #[test]
    fn resolve_skips_competitor_input_in_solo_mode() {
        assert_eq!(CompetitorSet::resolve(Mode::Solo, &["subject"], false), Ok(CompetitorSet::none()));
        assert_eq!(CompetitorSet::resolve(Mode::Solo, &["bogus"], true), Ok(CompetitorSet::none()));
    }

    #[test]
    fn resolve_defaults_to_both_in_comparison_mode() {
        let empty: [&str; 0] = [];
        assert_eq!(CompetitorSet::resolve(Mode::Comparison, &empty, false), Ok(CompetitorSet::both()));
        assert_eq!(CompetitorSet::resolve(Mode::Comparison, &empty, true), Ok(CompetitorSet::none()));
        assert_eq!(
            CompetitorSet::resolve(Mode::Comparison, &["market"], false),
            Ok(CompetitorSet { competitor: false, market: true })
        );
        assert_eq!(
            CompetitorSet::resolve(Mode::Comparison, &["subject"], false),
            Err(SelectionError::InvalidCompetitor("subject".to_string()))
        );
    }

    #[test]
    fn empty_competitor_set_plots_the_subject_only() {
        let selection = Selection::comparison(Metric::Revpar, CompetitorSet::none());
        assert!(CompetitorSet::none().is_empty());
        assert_eq!(selection.properties(), vec![Property::Subject]);
    }

    #[test]
    fn serializes_with_a_mode_tag() {
        let json = serde_json::to_value(Selection::comparison(Metric::RevparGap, CompetitorSet::both())).unwrap();
        assert_eq!(json["mode"], "comparison");
        assert_eq!(json["metric"], "revpar-gap");
        assert_eq!(json["competitors"]["market"], true);

        let json = serde_json::to_value(Selection::solo(RawMetric::Adr)).unwrap();
        assert_eq!(json["mode"], "solo");
        assert_eq!(json["metric"], "adr");
    }
}
