use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Id;

/// Compass facing of a plot or unit entrance. The portal uses exactly
/// these eight values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Facing {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl Facing {
    pub fn as_str(&self) -> &'static str {
        match self {
            Facing::North => "north",
            Facing::South => "south",
            Facing::East => "east",
            Facing::West => "west",
            Facing::NorthEast => "north-east",
            Facing::NorthWest => "north-west",
            Facing::SouthEast => "south-east",
            Facing::SouthWest => "south-west",
        }
    }
}

impl std::fmt::Display for Facing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Where a property sits in the registration pipeline. Exactly eight states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum RegistrationStatus {
    Available,
    Blocked,
    Booked,
    Agreement,
    RegistrationInProgress,
    Registered,
    Handover,
    Cancelled,
}

impl RegistrationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RegistrationStatus::Available => "available",
            RegistrationStatus::Blocked => "blocked",
            RegistrationStatus::Booked => "booked",
            RegistrationStatus::Agreement => "agreement",
            RegistrationStatus::RegistrationInProgress => "registration-in-progress",
            RegistrationStatus::Registered => "registered",
            RegistrationStatus::Handover => "handover",
            RegistrationStatus::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for RegistrationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A sellable property (a plot, or a unit's parent listing).
///
/// `balance_amount` is server-derived; the client carries it as-is and never
/// checks it against `total_amount - amount_received`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: Id,
    #[serde(default)]
    pub project_number: String,
    #[serde(default)]
    pub plot_number: String,
    pub facing: Facing,
    pub status: RegistrationStatus,
    #[serde(default)]
    pub total_amount: i64,
    #[serde(default)]
    pub amount_received: i64,
    #[serde(default)]
    pub balance_amount: i64,
    /// Set once a customer has completed the purchase; gates
    /// purchaser-only documents.
    #[serde(default)]
    pub purchased_customer_id: Option<Id>,
    #[serde(default)]
    pub building_id: Option<Id>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facing_wire_names() {
        let f: Facing = serde_json::from_str(r#""north-east""#).unwrap();
        assert_eq!(f, Facing::NorthEast);
        assert_eq!(serde_json::to_string(&Facing::SouthWest).unwrap(), r#""south-west""#);
    }

    #[test]
    fn test_property_minimal_wire_shape() {
        // The backend omits empty fields; everything but identity and the
        // two enums should default.
        let p: Property = serde_json::from_str(
            r#"{"id": "p1", "facing": "east", "status": "booked"}"#,
        )
        .unwrap();
        assert_eq!(p.id, "p1");
        assert_eq!(p.status, RegistrationStatus::Booked);
        assert_eq!(p.total_amount, 0);
        assert!(p.purchased_customer_id.is_none());
    }

    #[test]
    fn test_property_financials_carried_unchecked() {
        // An inconsistent balance is the server's business, not ours.
        let p: Property = serde_json::from_str(
            r#"{
                "id": "p2",
                "facing": "west",
                "status": "registered",
                "totalAmount": 5000000,
                "amountReceived": 1000000,
                "balanceAmount": 999
            }"#,
        )
        .unwrap();
        assert_eq!(p.balance_amount, 999);
    }
}
