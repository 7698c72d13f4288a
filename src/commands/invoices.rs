//! Invoices command - list invoices and completed contractor tasks.

use anyhow::Result;
use clap::Args;

use crate::config::LocalConfig;
use crate::format::format_indian_currency;
use crate::portal::Portal;

#[derive(Args)]
pub struct InvoicesCmd {
    /// Show only the three most recently issued invoices
    #[arg(long, conflicts_with = "tasks")]
    pub recent: bool,

    /// Show completed contractor tasks instead
    #[arg(long)]
    pub tasks: bool,
}

impl InvoicesCmd {
    pub async fn run(&self) -> Result<()> {
        let config = LocalConfig::load()?;
        let portal = Portal::from_config(&config)?;

        if self.tasks {
            let tasks = portal.completed_tasks().await?;
            println!("{} completed tasks\n", tasks.len());
            for task in tasks.iter() {
                let when = task
                    .completed_at
                    .map(|d| d.format("%Y-%m-%d").to_string())
                    .unwrap_or_else(|| "-".to_string());
                let amount = task
                    .amount
                    .map(format_indian_currency)
                    .unwrap_or_else(|| "-".to_string());
                println!("{}  {}  {}  {}", task.id, when, amount, task.title);
            }
            return Ok(());
        }

        let invoices = if self.recent {
            portal.recent_invoices().await?
        } else {
            portal.invoices().await?
        };

        println!("{} invoices\n", invoices.len());
        for invoice in invoices.iter() {
            let number = invoice.invoice_number.as_deref().unwrap_or(&invoice.id);
            let issued = invoice
                .issue_date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| "-".to_string());
            println!(
                "{}  {}  {} ({} items)",
                number,
                issued,
                format_indian_currency(invoice.total),
                invoice.line_items.len()
            );
        }

        Ok(())
    }
}
