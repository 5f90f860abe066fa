use core_types::{PerProperty, Property};
use rust_decimal::Decimal;
use serde::Serialize;

/// The derived metrics for one month.
///
/// Ratios are raw ratios: `market_share` is a fraction in [0, 1] and is only
/// multiplied by 100 when displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DerivedRow {
    pub month: String,

    // I. Efficiency
    /// RevPAR earned per occupancy percentage point, for each property.
    pub revpar_per_occ: PerProperty<Decimal>,

    // II. Indices against the market property (1.0 = parity)
    pub occupancy_index: Decimal,
    pub adr_index: Decimal,
    pub revpar_index: Decimal,

    // III. Share and gap
    pub total_market_revpar: Decimal,
    pub market_share: Decimal,
    /// Subject RevPAR minus competitor RevPAR; negative when the subject trails.
    pub revpar_gap: Decimal,
}

impl DerivedRow {
    pub fn get(&self, column: DerivedColumn) -> Decimal {
        match column {
            DerivedColumn::RevparPerOccupancy(property) => *self.revpar_per_occ.get(property),
            DerivedColumn::OccupancyIndex => self.occupancy_index,
            DerivedColumn::AdrIndex => self.adr_index,
            DerivedColumn::RevparIndex => self.revpar_index,
            DerivedColumn::TotalMarketRevpar => self.total_market_revpar,
            DerivedColumn::MarketShare => self.market_share,
            DerivedColumn::RevparGap => self.revpar_gap,
        }
    }
}

/// Names one of the nine derived columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DerivedColumn {
    RevparPerOccupancy(Property),
    OccupancyIndex,
    AdrIndex,
    RevparIndex,
    TotalMarketRevpar,
    MarketShare,
    RevparGap,
}

impl DerivedColumn {
    pub const ALL: [DerivedColumn; 9] = [
        DerivedColumn::RevparPerOccupancy(Property::Subject),
        DerivedColumn::RevparPerOccupancy(Property::Competitor),
        DerivedColumn::RevparPerOccupancy(Property::Market),
        DerivedColumn::OccupancyIndex,
        DerivedColumn::AdrIndex,
        DerivedColumn::RevparIndex,
        DerivedColumn::TotalMarketRevpar,
        DerivedColumn::MarketShare,
        DerivedColumn::RevparGap,
    ];

    /// Short header used in tables.
    pub fn header(&self) -> String {
        match self {
            DerivedColumn::RevparPerOccupancy(property) => format!("RevPAR/Occ ({property})"),
            DerivedColumn::OccupancyIndex => "Occ Index".to_string(),
            DerivedColumn::AdrIndex => "ADR Index".to_string(),
            DerivedColumn::RevparIndex => "RevPAR Index".to_string(),
            DerivedColumn::TotalMarketRevpar => "Total RevPAR".to_string(),
            DerivedColumn::MarketShare => "Market Share".to_string(),
            DerivedColumn::RevparGap => "RevPAR Gap".to_string(),
        }
    }
}

/// The derived view over a `BaseTable`, one row per month in the same order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DerivedTable {
    pub rows: Vec<DerivedRow>,
}

impl DerivedTable {
    pub fn column(&self, column: DerivedColumn) -> Vec<Decimal> {
        self.rows.iter().map(|row| row.get(column)).collect()
    }

    pub fn row(&self, month: &str) -> Option<&DerivedRow> {
        self.rows.iter().find(|row| row.month == month)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
