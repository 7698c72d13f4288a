//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::commands::{
    AgentsCmd, CashflowCmd, CommissionsCmd, ConfigCmd, CustomersCmd, DashboardCmd, InvoicesCmd,
    LeadsCmd, PaymentsCmd, PropertiesCmd, UnitCmd,
};

#[derive(Parser)]
#[command(name = "est")]
#[command(about = "Estate - command-line client for the real-estate portal")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Role-gated overview of portal activity
    Dashboard(DashboardCmd),

    /// List customers
    Customers(CustomersCmd),

    /// List invoices and completed tasks
    Invoices(InvoicesCmd),

    /// List payments from the accountant ledger
    Payments(PaymentsCmd),

    /// Monthly cash-flow series
    Cashflow(CashflowCmd),

    /// List available properties
    Properties(PropertiesCmd),

    /// List agents
    Agents(AgentsCmd),

    /// List commissions
    Commissions(CommissionsCmd),

    /// List closed leads
    Leads(LeadsCmd),

    /// Inspect or modify units
    Unit(UnitCmd),

    /// Manage configuration (portal URL, session, identity)
    Config(ConfigCmd),
}

impl Command {
    pub async fn execute(&self) -> anyhow::Result<()> {
        match self {
            Command::Dashboard(cmd) => cmd.run().await,
            Command::Customers(cmd) => cmd.run().await,
            Command::Invoices(cmd) => cmd.run().await,
            Command::Payments(cmd) => cmd.run().await,
            Command::Cashflow(cmd) => cmd.run().await,
            Command::Properties(cmd) => cmd.run().await,
            Command::Agents(cmd) => cmd.run().await,
            Command::Commissions(cmd) => cmd.run().await,
            Command::Leads(cmd) => cmd.run().await,
            Command::Unit(cmd) => cmd.run().await,
            Command::Config(cmd) => cmd.run().await,
        }
    }
}
