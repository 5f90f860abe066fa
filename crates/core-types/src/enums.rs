use crate::error::CoreError;
use crate::structs::PropertyNames;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lowercases an identifier and folds spaces and underscores into dashes so that
/// "RevPAR Market Share", "revpar_market_share" and "revpar-market-share" compare equal.
fn normalize_id(raw: &str) -> String {
    raw.trim()
        .to_ascii_lowercase()
        .chars()
        .map(|c| if c == ' ' || c == '_' { '-' } else { c })
        .collect()
}

/// One of the three properties tracked by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Property {
    /// The property the dashboard reports on.
    Subject,
    /// The named direct competitor.
    Competitor,
    /// The property standing in for the market.
    Market,
}

impl Property {
    pub const ALL: [Property; 3] = [Property::Subject, Property::Competitor, Property::Market];

    pub fn id(&self) -> &'static str {
        match self {
            Property::Subject => "subject",
            Property::Competitor => "competitor",
            Property::Market => "market",
        }
    }

    /// The legend label used for this property's series, e.g. "Luxe (Competitor)".
    pub fn series_label(&self, names: &PropertyNames) -> String {
        match self {
            Property::Subject => names.subject.clone(),
            Property::Competitor => format!("{} (Competitor)", names.competitor),
            Property::Market => format!("{} (Market)", names.market),
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Property {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_id(s).as_str() {
            "subject" => Ok(Property::Subject),
            "competitor" => Ok(Property::Competitor),
            "market" => Ok(Property::Market),
            _ => Err(CoreError::UnknownProperty(s.to_string())),
        }
    }
}

/// How the dashboard presents the subject: alone, or against the competitive set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Solo,
    Comparison,
}

impl Mode {
    pub fn id(&self) -> &'static str {
        match self {
            Mode::Solo => "solo",
            Mode::Comparison => "comparison",
        }
    }

    /// Title-case label used in chart subheaders, e.g. "(Solo)".
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Solo => "Solo",
            Mode::Comparison => "Comparison",
        }
    }

    /// The metrics a user may pick in this mode, in menu order.
    pub fn metrics(&self) -> Vec<Metric> {
        match self {
            Mode::Solo => RawMetric::SOLO_ORDER.iter().map(|&m| Metric::from(m)).collect(),
            Mode::Comparison => Metric::ALL.to_vec(),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Mode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_id(s).as_str() {
            "solo" => Ok(Mode::Solo),
            "comparison" | "compare" => Ok(Mode::Comparison),
            _ => Err(CoreError::UnknownMode(s.to_string())),
        }
    }
}

/// The three metrics recorded directly in the base table.
///
/// This is also the complete metric set of solo mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RawMetric {
    Occupancy,
    Adr,
    Revpar,
}

impl RawMetric {
    /// Menu order in solo mode.
    pub const SOLO_ORDER: [RawMetric; 3] = [RawMetric::Occupancy, RawMetric::Adr, RawMetric::Revpar];

    pub fn label(&self) -> &'static str {
        match self {
            RawMetric::Occupancy => "Occupancy",
            RawMetric::Adr => "ADR",
            RawMetric::Revpar => "RevPAR",
        }
    }

    pub fn axis_label(&self) -> &'static str {
        match self {
            RawMetric::Occupancy => "Occupancy Rate (%)",
            RawMetric::Adr => "ADR ($)",
            RawMetric::Revpar => "RevPAR ($)",
        }
    }
}

impl FromStr for RawMetric {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Metric::from_str(s)?.raw() {
            Some(raw) => Ok(raw),
            None => Err(CoreError::UnknownMetric(s.to_string())),
        }
    }
}

/// Every metric the dashboard can chart. This is the comparison-mode menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Metric {
    Occupancy,
    Revpar,
    Adr,
    RevparPerOccupancy,
    PerformanceIndices,
    MarketShare,
    RevparGap,
}

impl Metric {
    /// Menu order in comparison mode.
    pub const ALL: [Metric; 7] = [
        Metric::Occupancy,
        Metric::Revpar,
        Metric::Adr,
        Metric::RevparPerOccupancy,
        Metric::PerformanceIndices,
        Metric::MarketShare,
        Metric::RevparGap,
    ];

    /// Stable identifier used on the command line and in query strings.
    pub fn id(&self) -> &'static str {
        match self {
            Metric::Occupancy => "occupancy",
            Metric::Revpar => "revpar",
            Metric::Adr => "adr",
            Metric::RevparPerOccupancy => "revpar-per-occupancy",
            Metric::PerformanceIndices => "performance-indices",
            Metric::MarketShare => "market-share",
            Metric::RevparGap => "revpar-gap",
        }
    }

    /// The menu label. The gap metric is named after the competitor.
    pub fn label(&self, names: &PropertyNames) -> String {
        match self {
            Metric::Occupancy => "Occupancy".to_string(),
            Metric::Revpar => "RevPAR".to_string(),
            Metric::Adr => "ADR".to_string(),
            Metric::RevparPerOccupancy => "RevPAR per Occupancy Point".to_string(),
            Metric::PerformanceIndices => "Performance Indices".to_string(),
            Metric::MarketShare => "RevPAR Market Share".to_string(),
            Metric::RevparGap => format!("RevPAR Gap with {}", names.competitor),
        }
    }

    /// Parses an id or a menu label. The gap label only matches when it names
    /// `names.competitor`.
    pub fn from_label(s: &str, names: &PropertyNames) -> Result<Metric, CoreError> {
        let id = normalize_id(s);
        match Metric::ALL.into_iter().find(|m| normalize_id(&m.label(names)) == id) {
            Some(metric) => Ok(metric),
            None => s.parse(),
        }
    }

    pub fn raw(&self) -> Option<RawMetric> {
        match self {
            Metric::Occupancy => Some(RawMetric::Occupancy),
            Metric::Revpar => Some(RawMetric::Revpar),
            Metric::Adr => Some(RawMetric::Adr),
            _ => None,
        }
    }

    /// Whether the competitor selection adds series to this metric's chart.
    pub fn is_toggleable(&self) -> bool {
        match self {
            Metric::Occupancy | Metric::Revpar | Metric::Adr | Metric::RevparPerOccupancy => true,
            Metric::PerformanceIndices | Metric::MarketShare | Metric::RevparGap => false,
        }
    }

    pub fn available_in(&self, mode: Mode) -> bool {
        match mode {
            Mode::Solo => self.raw().is_some(),
            Mode::Comparison => true,
        }
    }
}

impl From<RawMetric> for Metric {
    fn from(raw: RawMetric) -> Self {
        match raw {
            RawMetric::Occupancy => Metric::Occupancy,
            RawMetric::Adr => Metric::Adr,
            RawMetric::Revpar => Metric::Revpar,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Metric {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let metric = match normalize_id(s).as_str() {
            "occupancy" | "occ" => Metric::Occupancy,
            "revpar" => Metric::Revpar,
            "adr" => Metric::Adr,
            "revpar-per-occupancy" | "revpar-per-occupancy-point" | "revpar-per-occ" => {
                Metric::RevparPerOccupancy
            }
            "performance-indices" | "indices" => Metric::PerformanceIndices,
            "market-share" | "revpar-market-share" => Metric::MarketShare,
            "revpar-gap" | "gap" => Metric::RevparGap,
            _ => return Err(CoreError::UnknownMetric(s.to_string())),
        };
        Ok(metric)
    }
}
