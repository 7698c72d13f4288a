use serde::{Deserialize, Serialize};

use super::{Facing, Id, RegistrationStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConstructionStatus {
    Planned,
    UnderConstruction,
    Completed,
}

impl ConstructionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConstructionStatus::Planned => "planned",
            ConstructionStatus::UnderConstruction => "under-construction",
            ConstructionStatus::Completed => "completed",
        }
    }
}

impl std::fmt::Display for ConstructionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceRange {
    pub min: i64,
    pub max: i64,
}

/// An apartment project. Unit counts are server-maintained; the expected
/// relation `available + sold <= total` is not checked client-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Building {
    pub id: Id,
    #[serde(default)]
    pub project_name: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub total_units: u32,
    #[serde(default)]
    pub available_units: u32,
    #[serde(default)]
    pub sold_units: u32,
    pub construction_status: ConstructionStatus,
    #[serde(default)]
    pub price_range: PriceRange,
}

/// One floor of a building, with its sub-unit counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FloorUnit {
    pub id: Id,
    pub building_id: Id,
    pub floor_number: i32,
    #[serde(default)]
    pub total_sub_units: u32,
    #[serde(default)]
    pub available_sub_units: u32,
}

/// A single sellable unit on a floor.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Unit {
    pub id: Id,
    #[serde(default)]
    pub unit_number: String,
    #[serde(default)]
    pub floor_unit_id: Option<Id>,
    #[serde(default)]
    pub facing: Option<Facing>,
    pub status: RegistrationStatus,
    #[serde(default)]
    pub total_amount: i64,
    #[serde(default)]
    pub amount_received: i64,
    #[serde(default)]
    pub balance_amount: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_building_wire_shape() {
        let b: Building = serde_json::from_str(
            r#"{
                "id": "b1",
                "projectName": "Lakeview Towers",
                "totalUnits": 120,
                "availableUnits": 40,
                "soldUnits": 80,
                "constructionStatus": "under-construction",
                "priceRange": {"min": 4500000, "max": 9000000}
            }"#,
        )
        .unwrap();
        assert_eq!(b.project_name, "Lakeview Towers");
        assert_eq!(b.construction_status, ConstructionStatus::UnderConstruction);
        assert_eq!(b.price_range.max, 9_000_000);
    }

    #[test]
    fn test_unit_defaults() {
        let u: Unit = serde_json::from_str(r#"{"id": "u1", "status": "available"}"#).unwrap();
        assert_eq!(u.unit_number, "");
        assert!(u.facing.is_none());
        assert_eq!(u.balance_amount, 0);
    }
}
