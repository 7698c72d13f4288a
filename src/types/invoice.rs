use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Id;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub description: String,
    #[serde(default)]
    pub quantity: u32,
    #[serde(default)]
    pub rate: i64,
    #[serde(default)]
    pub amount: i64,
}

/// An invoice raised against a project/unit.
///
/// `total` is carried as the server sent it; the client does not re-derive
/// it from `subtotal + sgst + cgst`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: Id,
    #[serde(default)]
    pub invoice_number: Option<String>,
    #[serde(default)]
    pub line_items: Vec<LineItem>,
    #[serde(default)]
    pub subtotal: i64,
    #[serde(default)]
    pub sgst: i64,
    #[serde(default)]
    pub cgst: i64,
    #[serde(default)]
    pub total: i64,
    #[serde(default)]
    pub issue_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub project_id: Option<Id>,
    #[serde(default)]
    pub unit_id: Option<Id>,
    #[serde(default)]
    pub floor_unit_id: Option<Id>,
}

/// A contractor task the portal has marked done.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletedTask {
    pub id: Id,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub contractor_id: Option<Id>,
    #[serde(default)]
    pub amount: Option<i64>,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invoice_wire_shape() {
        let inv: Invoice = serde_json::from_str(
            r#"{
                "id": "i1",
                "invoiceNumber": "INV-0042",
                "lineItems": [
                    {"description": "Flooring", "quantity": 1, "rate": 80000, "amount": 80000}
                ],
                "subtotal": 80000,
                "sgst": 7200,
                "cgst": 7200,
                "total": 94400,
                "issueDate": "2026-04-01T00:00:00Z"
            }"#,
        )
        .unwrap();
        assert_eq!(inv.invoice_number.as_deref(), Some("INV-0042"));
        assert_eq!(inv.line_items.len(), 1);
        assert_eq!(inv.total, 94_400);
    }

    #[test]
    fn test_invoice_total_carried_unchecked() {
        // subtotal + sgst + cgst != total is left for the server to answer for
        let inv: Invoice = serde_json::from_str(
            r#"{"id": "i2", "subtotal": 100, "sgst": 9, "cgst": 9, "total": 5000}"#,
        )
        .unwrap();
        assert_eq!(inv.total, 5000);
    }
}
