//! Dashboard command - role-gated overview of portal activity.
//!
//! Sections are chosen by the role's permission bundle, fetched
//! concurrently, and rendered independently: one failing section does not
//! take down the rest. With `--watch`, the dashboard rerenders on an
//! interval; reads within a cache's staleness window are served from memory,
//! and Ctrl-C drops the render future together with any in-flight request.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Args;
use futures::join;
use tracing::warn;

use crate::access::role_permissions;
use crate::config::LocalConfig;
use crate::format::{format_indian_currency, format_indian_currency_short};
use crate::portal::{Portal, PortalError};
use crate::types::{
    Action, CashflowPoint, Commission, CompletedTask, Invoice, Module, Permission, Property, Role,
};

#[derive(Args)]
pub struct DashboardCmd {
    /// Render as this role (defaults to the configured role)
    #[arg(long, value_enum)]
    pub role: Option<Role>,

    /// Keep refreshing until interrupted
    #[arg(long)]
    pub watch: bool,

    /// Seconds between refreshes when watching
    #[arg(long, default_value = "60")]
    pub interval: u64,
}

impl DashboardCmd {
    pub async fn run(&self) -> Result<()> {
        let config = LocalConfig::load()?;
        let role = self.role.or(config.role).unwrap_or(Role::Admin);
        let permission = role_permissions(role);
        let portal = Portal::from_config(&config)?;

        if !self.watch {
            return render(&portal, &permission, role).await;
        }

        loop {
            tokio::select! {
                _ = tokio::signal::ctrl_c() => {
                    // Dropping the render future cancels its in-flight requests.
                    println!();
                    return Ok(());
                }
                result = render(&portal, &permission, role) => result?,
            }

            tokio::select! {
                _ = tokio::signal::ctrl_c() => return Ok(()),
                _ = tokio::time::sleep(Duration::from_secs(self.interval.max(1))) => {}
            }
        }
    }
}

async fn render(portal: &Portal, permission: &Permission, role: Role) -> Result<()> {
    println!("Dashboard ({role})\n");

    let (invoices, cashflow, properties, commissions, tasks) = join!(
        fetch_if(
            permission.allows(Module::Invoices, Action::Read) && role != Role::Contractor,
            portal.recent_invoices(),
        ),
        fetch_if(
            permission.allows(Module::Budget, Action::Read),
            portal.cashflow(),
        ),
        fetch_if(
            permission.allows(Module::Properties, Action::Read),
            portal.available_properties(),
        ),
        fetch_if(
            permission.allows(Module::Commissions, Action::Read),
            portal.commissions(),
        ),
        fetch_if(role == Role::Contractor, portal.completed_tasks()),
    );

    section_invoices(invoices);
    section_cashflow(cashflow);
    section_properties(properties);
    section_commissions(commissions);
    section_tasks(tasks);

    Ok(())
}

/// Run the fetch only when the section is permitted. The future is lazy, so
/// a gated-off section issues no request at all.
async fn fetch_if<T>(
    allowed: bool,
    fetch: impl Future<Output = Result<Arc<Vec<T>>, PortalError>>,
) -> Option<Result<Arc<Vec<T>>, PortalError>> {
    if allowed { Some(fetch.await) } else { None }
}

fn section_invoices(result: Option<Result<Arc<Vec<Invoice>>, PortalError>>) {
    let Some(result) = result else { return };
    println!("Recent invoices");
    match result {
        Ok(invoices) if invoices.is_empty() => println!("  (none)"),
        Ok(invoices) => {
            for invoice in invoices.iter() {
                let number = invoice.invoice_number.as_deref().unwrap_or(&invoice.id);
                println!("  {}  {}", number, format_indian_currency(invoice.total));
            }
        }
        Err(err) => println!("  unavailable: {err}"),
    }
    println!();
}

fn section_cashflow(result: Option<Result<Arc<Vec<CashflowPoint>>, PortalError>>) {
    let Some(result) = result else { return };
    println!("Cash flow");
    match result {
        Ok(series) if series.is_empty() => println!("  (none)"),
        Ok(series) => {
            for point in series.iter() {
                println!(
                    "  {}  in {}  out {}  net {}",
                    point.month,
                    format_indian_currency_short(point.inflow),
                    format_indian_currency_short(point.outflow),
                    format_indian_currency_short(point.net)
                );
            }
        }
        Err(err) => println!("  unavailable: {err}"),
    }
    println!();
}

fn section_properties(result: Option<Result<Arc<Vec<Property>>, PortalError>>) {
    let Some(result) = result else { return };
    println!("Available properties");
    match result {
        Ok(properties) if properties.is_empty() => println!("  (none)"),
        Ok(properties) => {
            println!("  {} on the market", properties.len());
            for property in properties.iter().take(5) {
                println!(
                    "  plot {}  {}  {}",
                    property.plot_number,
                    property.facing,
                    format_indian_currency_short(property.total_amount)
                );
            }
        }
        Err(err) => println!("  unavailable: {err}"),
    }
    println!();
}

fn section_commissions(result: Option<Result<Arc<Vec<Commission>>, PortalError>>) {
    let Some(result) = result else { return };
    println!("Commissions");
    match result {
        Ok(commissions) if commissions.is_empty() => println!("  (none)"),
        Ok(commissions) => {
            for commission in commissions.iter().take(5) {
                println!(
                    "  {}  {}  [{}]",
                    commission.lead.name,
                    format_indian_currency(commission.amount),
                    commission.status
                );
            }
        }
        Err(err) => println!("  unavailable: {err}"),
    }
    println!();
}

fn section_tasks(result: Option<Result<Arc<Vec<CompletedTask>>, PortalError>>) {
    let Some(result) = result else { return };
    println!("Completed tasks");
    match result {
        Ok(tasks) if tasks.is_empty() => println!("  (none)"),
        Ok(tasks) => {
            for task in tasks.iter() {
                println!("  {}", task.title);
            }
        }
        // The task list renders empty on error; the failure goes to the log.
        Err(err) => warn!(error = %err, "completed tasks unavailable"),
    }
    println!();
}
