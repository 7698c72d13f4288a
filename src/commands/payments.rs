//! Payments command - the accountant ledger.

use anyhow::Result;
use clap::Args;

use crate::config::LocalConfig;
use crate::format::format_indian_currency;
use crate::portal::Portal;

#[derive(Args)]
pub struct PaymentsCmd {}

impl PaymentsCmd {
    pub async fn run(&self) -> Result<()> {
        let config = LocalConfig::load()?;
        let portal = Portal::from_config(&config)?;

        let payments = portal.accountant_payments().await?;
        println!("{} payments\n", payments.len());

        let mut received = 0i64;
        for payment in payments.iter() {
            let when = payment
                .received_at
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| "-".to_string());
            println!(
                "{}  {}  {}  {}",
                when,
                format_indian_currency(payment.amount),
                payment.method.as_deref().unwrap_or("-"),
                payment.payer.as_deref().unwrap_or("-")
            );
            received += payment.amount;
        }

        if !payments.is_empty() {
            println!("\ntotal: {}", format_indian_currency(received));
        }

        Ok(())
    }
}
