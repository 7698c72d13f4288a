use serde::{Deserialize, Serialize};

use super::{Facing, Id};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AvailabilityStatus {
    Available,
    Reserved,
    Sold,
}

impl AvailabilityStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AvailabilityStatus::Available => "available",
            AvailabilityStatus::Reserved => "reserved",
            AvailabilityStatus::Sold => "sold",
        }
    }
}

impl std::fmt::Display for AvailabilityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The canonical open-plot record.
///
/// Older portal responses used two divergent spellings for the same entity
/// (`plotNo`/`extent` vs `plotNumber`/`extentSqYds`); the aliases absorb
/// both into this one shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenPlot {
    pub id: Id,
    #[serde(default, alias = "plotNo")]
    pub plot_number: String,
    pub facing: Facing,
    #[serde(default, alias = "extent")]
    pub extent_sq_yds: f64,
    #[serde(default, alias = "pricePerYd")]
    pub price_per_sq_yd: i64,
    #[serde(default)]
    pub total_price: i64,
    pub status: AvailabilityStatus,
    #[serde(default)]
    pub approval: Option<String>,
}

/// Raw land held for future development.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenLand {
    pub id: Id,
    #[serde(default)]
    pub survey_number: String,
    #[serde(default)]
    pub extent_acres: f64,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub price: i64,
    pub status: AvailabilityStatus,
}
