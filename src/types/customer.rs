use serde::{Deserialize, Serialize};

use super::{Id, User};

/// How a customer first reached the portal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PurchaseSource {
    WalkIn,
    Agent,
    Referral,
    Online,
}

impl PurchaseSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            PurchaseSource::WalkIn => "walk-in",
            PurchaseSource::Agent => "agent",
            PurchaseSource::Referral => "referral",
            PurchaseSource::Online => "online",
        }
    }
}

impl std::fmt::Display for PurchaseSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentPlan {
    FullPayment,
    Installments,
    ConstructionLinked,
}

impl PaymentPlan {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentPlan::FullPayment => "full-payment",
            PaymentPlan::Installments => "installments",
            PaymentPlan::ConstructionLinked => "construction-linked",
        }
    }
}

impl std::fmt::Display for PaymentPlan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentStatus {
    Pending,
    PartiallyPaid,
    Paid,
    Overdue,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::PartiallyPaid => "partially-paid",
            PaymentStatus::Paid => "paid",
            PaymentStatus::Overdue => "overdue",
        }
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One property a customer holds, with its payment terms.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerPropertyDetail {
    pub property_id: Id,
    #[serde(default)]
    pub floor_unit_id: Option<Id>,
    #[serde(default)]
    pub unit_id: Option<Id>,
    pub payment_plan: PaymentPlan,
    pub payment_status: PaymentStatus,
}

/// A customer record wraps a user account plus their holdings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: Id,
    pub user: User,
    pub purchase_source: PurchaseSource,
    #[serde(default)]
    pub properties: Vec<CustomerPropertyDetail>,
}
