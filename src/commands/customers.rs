//! Customers command - list portal customers.

use anyhow::Result;
use clap::Args;

use crate::config::LocalConfig;
use crate::portal::Portal;

#[derive(Args)]
pub struct CustomersCmd {
    /// Show only customers who have completed a purchase
    #[arg(long)]
    pub purchased: bool,
}

impl CustomersCmd {
    pub async fn run(&self) -> Result<()> {
        let config = LocalConfig::load()?;
        let portal = Portal::from_config(&config)?;

        if self.purchased {
            let users = portal.purchased_customers().await?;
            println!("{} purchased customers\n", users.len());
            for user in users.iter() {
                println!(
                    "{}  {}  {}",
                    user.id,
                    user.name,
                    user.email.as_deref().unwrap_or("-")
                );
            }
            return Ok(());
        }

        let customers = portal.customers().await?;
        println!("{} customers\n", customers.len());
        for customer in customers.iter() {
            println!(
                "{}  {}  via {}  ({} properties)",
                customer.id,
                customer.user.name,
                customer.purchase_source,
                customer.properties.len()
            );
        }

        Ok(())
    }
}
