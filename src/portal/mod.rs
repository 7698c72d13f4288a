//! Typed client for the portal REST API.
//!
//! One resource module per endpoint family, all sharing the [`Transport`].
//! [`Portal`] is the facade commands use: it owns the transport plus the
//! query caches, so repeated reads within a staleness window cost nothing
//! and writes invalidate instead of mutating.

pub mod budget;
pub mod commissions;
pub mod customers;
mod error;
pub mod invoices;
pub mod leads;
pub mod payments;
pub mod properties;
mod transport;
pub mod units;
pub mod users;

pub use error::PortalError;
pub use transport::Transport;
pub use units::UnitForm;

use std::sync::Arc;
use std::time::Duration;

use crate::config::LocalConfig;
use crate::query::QueryCache;
use crate::types::{
    CashflowPoint, Commission, CompletedTask, Customer, Invoice, Lead, Payment, Property, Unit,
    User,
};

/// Staleness windows observed per resource family.
const STALE_SHORT: Duration = Duration::from_secs(2 * 60);
const STALE_LONG: Duration = Duration::from_secs(5 * 60);

/// Facade over the portal API with per-resource query caches.
pub struct Portal {
    transport: Transport,
    invoices: QueryCache<Vec<Invoice>>,
    tasks: QueryCache<Vec<CompletedTask>>,
    customers: QueryCache<Vec<Customer>>,
    properties: QueryCache<Vec<Property>>,
    users: QueryCache<Vec<User>>,
    commissions: QueryCache<Vec<Commission>>,
    leads: QueryCache<Vec<Lead>>,
    payments: QueryCache<Vec<Payment>>,
    cashflow: QueryCache<Vec<CashflowPoint>>,
}

impl Portal {
    pub fn from_config(config: &LocalConfig) -> Result<Self, PortalError> {
        let session = config.session_cookie_secret();
        let transport = Transport::new(&config.portal_url, session.as_ref())?;
        Ok(Self::new(transport))
    }

    pub fn new(transport: Transport) -> Self {
        Self {
            transport,
            invoices: QueryCache::new("invoice", STALE_SHORT),
            tasks: QueryCache::new("completedTasks", STALE_SHORT),
            customers: QueryCache::new("customer", STALE_LONG),
            properties: QueryCache::new("property", STALE_LONG),
            users: QueryCache::new("user", STALE_LONG),
            commissions: QueryCache::new("commission", STALE_LONG),
            leads: QueryCache::new("closedLeads", STALE_LONG),
            payments: QueryCache::new("payment", STALE_SHORT),
            cashflow: QueryCache::new("cashFlow", STALE_LONG),
        }
    }

    // ==================== Cached reads ====================

    pub async fn invoices(&self) -> Result<Arc<Vec<Invoice>>, PortalError> {
        self.invoices
            .get_or_fetch("all", || invoices::all(&self.transport))
            .await
    }

    pub async fn recent_invoices(&self) -> Result<Arc<Vec<Invoice>>, PortalError> {
        self.invoices
            .get_or_fetch("recent", || invoices::recent(&self.transport))
            .await
    }

    pub async fn completed_tasks(&self) -> Result<Arc<Vec<CompletedTask>>, PortalError> {
        self.tasks
            .get_or_fetch("all", || invoices::completed_tasks(&self.transport))
            .await
    }

    pub async fn customers(&self) -> Result<Arc<Vec<Customer>>, PortalError> {
        self.customers
            .get_or_fetch("all", || customers::all(&self.transport))
            .await
    }

    pub async fn available_properties(&self) -> Result<Arc<Vec<Property>>, PortalError> {
        self.properties
            .get_or_fetch("available", || properties::available(&self.transport))
            .await
    }

    pub async fn agents(&self) -> Result<Arc<Vec<User>>, PortalError> {
        self.users
            .get_or_fetch("agents", || users::agents(&self.transport))
            .await
    }

    pub async fn purchased_customers(&self) -> Result<Arc<Vec<User>>, PortalError> {
        self.users
            .get_or_fetch("purchased", || users::purchased_customers(&self.transport))
            .await
    }

    pub async fn commissions(&self) -> Result<Arc<Vec<Commission>>, PortalError> {
        self.commissions
            .get_or_fetch("all", || commissions::all(&self.transport))
            .await
    }

    pub async fn closed_leads(&self) -> Result<Arc<Vec<Lead>>, PortalError> {
        self.leads
            .get_or_fetch("closed", || leads::closed(&self.transport))
            .await
    }

    pub async fn accountant_payments(&self) -> Result<Arc<Vec<Payment>>, PortalError> {
        self.payments
            .get_or_fetch("accountant", || payments::accountant(&self.transport))
            .await
    }

    pub async fn cashflow(&self) -> Result<Arc<Vec<CashflowPoint>>, PortalError> {
        self.cashflow
            .get_or_fetch("series", || budget::cashflow(&self.transport))
            .await
    }

    // ==================== Units (uncached reads, invalidating writes) ====================

    pub async fn unit(&self, id: &str) -> Result<Unit, PortalError> {
        units::get(&self.transport, id).await
    }

    pub async fn create_unit(&self, form: UnitForm) -> Result<Unit, PortalError> {
        let unit = units::create(&self.transport, form).await?;
        self.invalidate_unit_views().await;
        Ok(unit)
    }

    pub async fn update_unit(&self, id: &str, form: UnitForm) -> Result<Unit, PortalError> {
        let unit = units::update(&self.transport, id, form).await?;
        self.invalidate_unit_views().await;
        Ok(unit)
    }

    pub async fn delete_unit(&self, id: &str) -> Result<(), PortalError> {
        units::delete(&self.transport, id).await?;
        self.invalidate_unit_views().await;
        Ok(())
    }

    /// Writes never patch cached lists; they drop them so the next read
    /// refetches.
    async fn invalidate_unit_views(&self) {
        self.properties.invalidate("available").await;
        self.invoices.invalidate_all().await;
    }
}
