//! Agents command - list agent accounts.

use anyhow::Result;
use clap::Args;

use crate::config::LocalConfig;
use crate::portal::Portal;

#[derive(Args)]
pub struct AgentsCmd {}

impl AgentsCmd {
    pub async fn run(&self) -> Result<()> {
        let config = LocalConfig::load()?;
        let portal = Portal::from_config(&config)?;

        let agents = portal.agents().await?;
        println!("{} agents\n", agents.len());
        for agent in agents.iter() {
            println!(
                "{}  {}  {}",
                agent.id,
                agent.name,
                agent.phone.as_deref().unwrap_or("-")
            );
        }

        Ok(())
    }
}
