//! Leads command - closed leads.

use anyhow::Result;
use clap::Args;

use crate::config::LocalConfig;
use crate::portal::Portal;

#[derive(Args)]
pub struct LeadsCmd {}

impl LeadsCmd {
    pub async fn run(&self) -> Result<()> {
        let config = LocalConfig::load()?;
        let portal = Portal::from_config(&config)?;

        let leads = portal.closed_leads().await?;
        println!("{} closed leads\n", leads.len());
        for lead in leads.iter() {
            let closed = lead
                .closed_at
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| "-".to_string());
            println!(
                "{}  {}  closed {}  agent {}",
                lead.id,
                lead.name,
                closed,
                lead.agent_id.as_deref().unwrap_or("-")
            );
        }

        Ok(())
    }
}
