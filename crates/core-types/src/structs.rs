use crate::enums::{Property, RawMetric};
use crate::error::CoreError;
use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One value per tracked property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerProperty<T> {
    pub subject: T,
    pub competitor: T,
    pub market: T,
}

impl<T> PerProperty<T> {
    pub fn new(subject: T, competitor: T, market: T) -> Self {
        Self { subject, competitor, market }
    }

    pub fn get(&self, property: Property) -> &T {
        match property {
            Property::Subject => &self.subject,
            Property::Competitor => &self.competitor,
            Property::Market => &self.market,
        }
    }

    /// Applies `f` to each property's value, keeping the property layout.
    pub fn try_map<U, E, F>(&self, mut f: F) -> Result<PerProperty<U>, E>
    where
        F: FnMut(Property, &T) -> Result<U, E>,
    {
        Ok(PerProperty {
            subject: f(Property::Subject, &self.subject)?,
            competitor: f(Property::Competitor, &self.competitor)?,
            market: f(Property::Market, &self.market)?,
        })
    }
}

/// Display names of the three properties, e.g. BNBME / Luxe / Anantara.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyNames {
    pub subject: String,
    pub competitor: String,
    pub market: String,
}

impl PropertyNames {
    pub fn new(subject: &str, competitor: &str, market: &str) -> Self {
        Self {
            subject: subject.to_string(),
            competitor: competitor.to_string(),
            market: market.to_string(),
        }
    }

    pub fn get(&self, property: Property) -> &str {
        match property {
            Property::Subject => &self.subject,
            Property::Competitor => &self.competitor,
            Property::Market => &self.market,
        }
    }
}

/// The three raw metrics reported for one property in one month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyMetrics {
    /// Percent of inventory sold, stored as 0–100 (47 means 47%).
    pub occupancy: Decimal,
    /// Average daily rate per occupied room-night.
    pub adr: Decimal,
    /// Revenue per available room. Roughly `occupancy / 100 * adr`, but supplied, not derived.
    pub revpar: Decimal,
}

impl PropertyMetrics {
    pub fn new(occupancy: Decimal, adr: Decimal, revpar: Decimal) -> Self {
        Self { occupancy, adr, revpar }
    }

    pub fn get(&self, metric: RawMetric) -> Decimal {
        match metric {
            RawMetric::Occupancy => self.occupancy,
            RawMetric::Adr => self.adr,
            RawMetric::Revpar => self.revpar,
        }
    }
}

/// One row of the base table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyRecord {
    /// Calendar month label, `YYYY-MM`.
    pub month: String,
    pub metrics: PerProperty<PropertyMetrics>,
}

impl MonthlyRecord {
    pub fn new(month: &str, subject: PropertyMetrics, competitor: PropertyMetrics, market: PropertyMetrics) -> Self {
        Self {
            month: month.to_string(),
            metrics: PerProperty::new(subject, competitor, market),
        }
    }

    pub fn property(&self, property: Property) -> &PropertyMetrics {
        self.metrics.get(property)
    }
}

/// The validated, immutable monthly dataset the dashboard reports on.
///
/// Rows are kept in chronological order; that order is the x-axis of every chart.
/// Only `BaseTable::new` builds one, so there is no `Deserialize` impl.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BaseTable {
    names: PropertyNames,
    records: Vec<MonthlyRecord>,
}

impl BaseTable {
    /// Validates the records and wraps them in a `BaseTable`.
    ///
    /// Rejects an empty table, malformed or out-of-order month labels, occupancy
    /// outside 0–100, non-positive ADR and negative RevPAR.
    pub fn new(names: PropertyNames, records: Vec<MonthlyRecord>) -> Result<Self, CoreError> {
        if records.is_empty() {
            return Err(CoreError::InvalidInput(
                "records".to_string(),
                "the base table needs at least one month".to_string(),
            ));
        }

        let mut previous: Option<NaiveDate> = None;
        for record in &records {
            let date = parse_month(&record.month)?;
            if let Some(prev) = previous {
                if date <= prev {
                    return Err(CoreError::InvalidInput(
                        record.month.clone(),
                        "months must be unique and in chronological order".to_string(),
                    ));
                }
            }
            previous = Some(date);

            for property in Property::ALL {
                validate_metrics(&record.month, property, record.property(property))?;
            }
        }

        tracing::debug!(months = records.len(), "Base table validated.");
        Ok(Self { names, records })
    }

    pub fn names(&self) -> &PropertyNames {
        &self.names
    }

    pub fn records(&self) -> &[MonthlyRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn month_labels(&self) -> Vec<String> {
        self.records.iter().map(|r| r.month.clone()).collect()
    }

    /// One raw metric for one property across every month, in table order.
    pub fn column(&self, property: Property, metric: RawMetric) -> Vec<Decimal> {
        self.records
            .iter()
            .map(|r| r.property(property).get(metric))
            .collect()
    }

    /// The year span covered by the table, e.g. "2024" or "2023-2024".
    pub fn year_label(&self) -> String {
        let years: Vec<i32> = self
            .records
            .iter()
            .filter_map(|r| parse_month(&r.month).ok())
            .map(|d| d.year())
            .collect();
        match (years.first(), years.last()) {
            (Some(first), Some(last)) if first != last => format!("{first}-{last}"),
            (Some(first), _) => first.to_string(),
            _ => String::new(),
        }
    }
}

fn parse_month(label: &str) -> Result<NaiveDate, CoreError> {
    NaiveDate::parse_from_str(&format!("{label}-01"), "%Y-%m-%d").map_err(|_| {
        CoreError::InvalidInput(label.to_string(), "month label must be formatted YYYY-MM".to_string())
    })
}

fn validate_metrics(month: &str, property: Property, metrics: &PropertyMetrics) -> Result<(), CoreError> {
    let field = |name: &str| format!("{month}/{property}/{name}");

    if metrics.occupancy < Decimal::ZERO || metrics.occupancy > Decimal::ONE_HUNDRED {
        return Err(CoreError::InvalidInput(
            field("occupancy"),
            format!("{} is outside 0-100", metrics.occupancy),
        ));
    }
    if metrics.adr <= Decimal::ZERO {
        return Err(CoreError::InvalidInput(
            field("adr"),
            format!("{} must be positive", metrics.adr),
        ));
    }
    if metrics.revpar < Decimal::ZERO {
        return Err(CoreError::InvalidInput(
            field("revpar"),
            format!("{} must not be negative", metrics.revpar),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn metrics(occ: Decimal, adr: Decimal, revpar: Decimal) -> PropertyMetrics {
        PropertyMetrics::new(occ, adr, revpar)
    }

    fn row(month: &str) -> MonthlyRecord {
        MonthlyRecord::new(
            month,
            metrics(dec!(47), dec!(992), dec!(467)),
            metrics(dec!(36), dec!(1240), dec!(444)),
            metrics(dec!(47), dec!(954), dec!(445)),
        )
    }

    fn names() -> PropertyNames {
        PropertyNames::new("BNBME", "Luxe", "Anantara")
    }

    #[test]
    fn accepts_chronological_months() {
        let table = BaseTable::new(names(), vec![row("2024-01"), row("2024-02")]).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.month_labels(), vec!["2024-01", "2024-02"]);
        assert_eq!(table.year_label(), "2024");
        assert_eq!(
            table.column(Property::Competitor, RawMetric::Adr),
            vec![dec!(1240), dec!(1240)]
        );
    }

    #[test]
    fn year_label_spans_years() {
        let table = BaseTable::new(names(), vec![row("2023-12"), row("2024-01")]).unwrap();
        assert_eq!(table.year_label(), "2023-2024");
    }

    #[test]
    fn rejects_empty_table() {
        assert!(matches!(
            BaseTable::new(names(), vec![]),
            Err(CoreError::InvalidInput(field, _)) if field == "records"
        ));
    }

    #[test]
    fn rejects_out_of_order_or_duplicate_months() {
        assert!(BaseTable::new(names(), vec![row("2024-02"), row("2024-01")]).is_err());
        assert!(BaseTable::new(names(), vec![row("2024-02"), row("2024-02")]).is_err());
    }

    #[test]
    fn rejects_malformed_month_label() {
        let err = BaseTable::new(names(), vec![row("March")]).unwrap_err();
        assert!(err.to_string().contains("YYYY-MM"));
    }

    #[test]
    fn rejects_out_of_range_metrics() {
        let mut bad = row("2024-01");
        bad.metrics.market.occupancy = dec!(101);
        let err = BaseTable::new(names(), vec![bad]).unwrap_err();
        assert_eq!(
            err,
            CoreError::InvalidInput("2024-01/market/occupancy".to_string(), "101 is outside 0-100".to_string())
        );

        let mut bad = row("2024-01");
        bad.metrics.subject.adr = Decimal::ZERO;
        assert!(BaseTable::new(names(), vec![bad]).is_err());

        let mut bad = row("2024-01");
        bad.metrics.competitor.revpar = dec!(-1);
        assert!(BaseTable::new(names(), vec![bad]).is_err());
    }

    #[test]
    fn zero_occupancy_is_valid_input() {
        let mut quiet = row("2024-01");
        quiet.metrics.subject.occupancy = Decimal::ZERO;
        quiet.metrics.subject.revpar = Decimal::ZERO;
        assert!(BaseTable::new(names(), vec![quiet]).is_ok());
    }

    #[test]
    fn serializes_records_with_property_layout() {
        let table = BaseTable::new(names(), vec![row("2024-01")]).unwrap();
        let json = serde_json::to_value(&table).unwrap();
        assert_eq!(json["names"]["competitor"], "Luxe");
        assert_eq!(json["records"][0]["month"], "2024-01");
        assert_eq!(json["records"][0]["metrics"]["subject"]["occupancy"], "47");
    }
}
