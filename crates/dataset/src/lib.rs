//! # Compset Dataset
//!
//! The dashboard's only data source: eight months of 2024 figures for BNBME, its
//! direct competitor Luxe and the market proxy Anantara. The figures are ground
//! truth supplied by the analyst; nothing here is derived.
//!
//! ## Public API
//!
//! - `load`: builds and validates the `BaseTable`.
//! - `DatasetError`: the error returned if the bundled figures ever fail validation.

pub mod error;

pub use error::DatasetError;

use core_types::{BaseTable, MonthlyRecord, PropertyMetrics, PropertyNames};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

pub const SUBJECT_NAME: &str = "BNBME";
pub const COMPETITOR_NAME: &str = "Luxe";
pub const MARKET_NAME: &str = "Anantara";

/// (occupancy %, RevPAR, ADR) for one property in one month.
type Figures = (Decimal, Decimal, Decimal);

/// month, subject, competitor, market
const MONTHS: [(&str, Figures, Figures, Figures); 8] = [
    ("2024-01", (dec!(47), dec!(467), dec!(992)), (dec!(36), dec!(444), dec!(1240)), (dec!(47), dec!(445), dec!(954))),
    ("2024-02", (dec!(63), dec!(584), dec!(927)), (dec!(88), dec!(887), dec!(1007)), (dec!(70), dec!(649), dec!(924))),
    ("2024-03", (dec!(74), dec!(812), dec!(1096)), (dec!(74), dec!(716), dec!(966)), (dec!(58), dec!(566), dec!(972))),
    ("2024-04", (dec!(87), dec!(803), dec!(922)), (dec!(88), dec!(772), dec!(882)), (dec!(68), dec!(593), dec!(867))),
    ("2024-05", (dec!(55), dec!(395), dec!(722)), (dec!(58), dec!(334), dec!(572)), (dec!(48), dec!(308), dec!(635))),
    ("2024-06", (dec!(45), dec!(305), dec!(677)), (dec!(54), dec!(304), dec!(565)), (dec!(38), dec!(205), dec!(540))),
    ("2024-07", (dec!(15), dec!(79), dec!(522)), (dec!(23), dec!(119), dec!(514)), (dec!(36), dec!(153), dec!(425))),
    ("2024-08", (dec!(32), dec!(130), dec!(410)), (dec!(43), dec!(221), dec!(512)), (dec!(38), dec!(162), dec!(429))),
];

fn metrics((occupancy, revpar, adr): Figures) -> PropertyMetrics {
    PropertyMetrics::new(occupancy, adr, revpar)
}

/// Builds the bundled 2024 table.
pub fn load() -> Result<BaseTable, DatasetError> {
    let names = PropertyNames::new(SUBJECT_NAME, COMPETITOR_NAME, MARKET_NAME);
    let records = MONTHS
        .iter()
        .map(|&(month, subject, competitor, market)| {
            MonthlyRecord::new(month, metrics(subject), metrics(competitor), metrics(market))
        })
        .collect();

    let table = BaseTable::new(names, records)?;
    tracing::info!(months = table.len(), year = %table.year_label(), "Loaded bundled dataset.");
    Ok(table)
}
