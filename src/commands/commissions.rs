//! Commissions command - agent commissions over closed leads.

use anyhow::Result;
use clap::Args;

use crate::config::LocalConfig;
use crate::format::format_indian_currency;
use crate::portal::Portal;
use crate::types::CommissionStatus;

#[derive(Args)]
pub struct CommissionsCmd {
    /// Show only commissions still pending payout
    #[arg(long)]
    pub pending: bool,
}

impl CommissionsCmd {
    pub async fn run(&self) -> Result<()> {
        let config = LocalConfig::load()?;
        let portal = Portal::from_config(&config)?;

        let commissions = portal.commissions().await?;
        let shown: Vec<_> = commissions
            .iter()
            .filter(|c| !self.pending || c.status == CommissionStatus::Pending)
            .collect();

        println!("{} commissions\n", shown.len());
        for commission in shown {
            println!(
                "{}  {}  {:.1}%  {}  [{}]",
                commission.id,
                commission.lead.name,
                commission.percentage,
                format_indian_currency(commission.amount),
                commission.status
            );
        }

        Ok(())
    }
}
