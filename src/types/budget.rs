use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Id;

/// A payment row from the accountant ledger.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: Id,
    #[serde(default)]
    pub payer: Option<String>,
    #[serde(default)]
    pub amount: i64,
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub received_at: Option<DateTime<Utc>>,
}

/// One month of the cash-flow series. `net` arrives precomputed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashflowPoint {
    pub month: String,
    #[serde(default)]
    pub inflow: i64,
    #[serde(default)]
    pub outflow: i64,
    #[serde(default)]
    pub net: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cashflow_wire_shape() {
        let series: Vec<CashflowPoint> = serde_json::from_str(
            r#"[
                {"month": "2026-01", "inflow": 1200000, "outflow": 800000, "net": 400000},
                {"month": "2026-02", "inflow": 500000, "outflow": 900000, "net": -400000}
            ]"#,
        )
        .unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series[1].net, -400_000);
    }
}
