//! Cashflow command - monthly inflow/outflow series.

use anyhow::Result;
use clap::Args;

use crate::config::LocalConfig;
use crate::format::format_indian_currency_short;
use crate::portal::Portal;

#[derive(Args)]
pub struct CashflowCmd {}

impl CashflowCmd {
    pub async fn run(&self) -> Result<()> {
        let config = LocalConfig::load()?;
        let portal = Portal::from_config(&config)?;

        let series = portal.cashflow().await?;
        if series.is_empty() {
            println!("No cash-flow data.");
            return Ok(());
        }

        println!("{:<10} {:>10} {:>10} {:>10}", "month", "inflow", "outflow", "net");
        for point in series.iter() {
            println!(
                "{:<10} {:>10} {:>10} {:>10}",
                point.month,
                format_indian_currency_short(point.inflow),
                format_indian_currency_short(point.outflow),
                format_indian_currency_short(point.net)
            );
        }

        Ok(())
    }
}
