//! Properties command - available listings, with document visibility for
//! the configured identity.

use anyhow::Result;
use clap::Args;

use crate::access::can_view_purchaser_only_doc;
use crate::config::LocalConfig;
use crate::format::format_indian_currency_short;
use crate::portal::Portal;
use crate::types::User;

#[derive(Args)]
pub struct PropertiesCmd {}

impl PropertiesCmd {
    pub async fn run(&self) -> Result<()> {
        let config = LocalConfig::load()?;
        let portal = Portal::from_config(&config)?;

        // Rendering identity; absent config means no purchaser-only docs.
        let user = match (&config.user_id, config.role) {
            (Some(id), Some(role)) => Some(User::local(id.clone(), role)),
            _ => None,
        };

        let properties = portal.available_properties().await?;
        println!("{} available properties\n", properties.len());
        for property in properties.iter() {
            let docs = if can_view_purchaser_only_doc(user.as_ref(), property) {
                "docs"
            } else {
                "-"
            };
            println!(
                "{}  plot {}  {}  {}  {}  {}",
                property.id,
                property.plot_number,
                property.facing,
                property.status,
                format_indian_currency_short(property.total_amount),
                docs
            );
        }

        Ok(())
    }
}
