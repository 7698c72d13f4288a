use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Id;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommissionStatus {
    Pending,
    Paid,
}

impl CommissionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommissionStatus::Pending => "pending",
            CommissionStatus::Paid => "paid",
        }
    }
}

impl std::fmt::Display for CommissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LeadStatus {
    Open,
    FollowUp,
    Closed,
    Lost,
}

impl LeadStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeadStatus::Open => "open",
            LeadStatus::FollowUp => "follow-up",
            LeadStatus::Closed => "closed",
            LeadStatus::Lost => "lost",
        }
    }
}

impl std::fmt::Display for LeadStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A sales lead worked by an agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: Id,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    pub status: LeadStatus,
    #[serde(default)]
    pub agent_id: Option<Id>,
    #[serde(default)]
    pub closed_at: Option<DateTime<Utc>>,
}

/// An agent's cut of a closed lead. The lead arrives populated, not as an id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Commission {
    pub id: Id,
    pub lead: Lead,
    #[serde(default)]
    pub percentage: f64,
    #[serde(default)]
    pub amount: i64,
    pub status: CommissionStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commission_wire_shape() {
        let c: Commission = serde_json::from_str(
            r#"{
                "id": "cm1",
                "lead": {"id": "l1", "name": "Meena", "status": "closed", "agentId": "u7"},
                "percentage": 2.5,
                "amount": 125000,
                "status": "pending"
            }"#,
        )
        .unwrap();
        assert_eq!(c.lead.status, LeadStatus::Closed);
        assert_eq!(c.status, CommissionStatus::Pending);
        assert_eq!(c.amount, 125_000);
    }
}
