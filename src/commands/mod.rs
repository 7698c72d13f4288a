//! CLI command implementations.

mod agents;
mod cashflow;
mod commissions;
mod config;
mod customers;
mod dashboard;
mod invoices;
mod leads;
mod payments;
mod properties;
mod units;

pub use agents::AgentsCmd;
pub use cashflow::CashflowCmd;
pub use commissions::CommissionsCmd;
pub use config::ConfigCmd;
pub use customers::CustomersCmd;
pub use dashboard::DashboardCmd;
pub use invoices::InvoicesCmd;
pub use leads::LeadsCmd;
pub use payments::PaymentsCmd;
pub use properties::PropertiesCmd;
pub use units::UnitCmd;
