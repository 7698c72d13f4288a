//! Config command - manage local configuration.

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::config::LocalConfig;
use crate::types::Role;

#[derive(Args)]
pub struct ConfigCmd {
    #[command(subcommand)]
    pub command: ConfigSubCmd,
}

#[derive(Subcommand)]
pub enum ConfigSubCmd {
    /// Set the portal origin (default: http://localhost:3000)
    SetUrl(SetUrlCmd),

    /// Set the session cookie sent with every request
    SetSession(SetSessionCmd),

    /// Set the identity used for role-gated rendering
    SetUser(SetUserCmd),

    /// Show current configuration
    Show,
}

#[derive(Args)]
pub struct SetUrlCmd {
    /// Portal origin (e.g. https://portal.example.com)
    pub url: String,
}

#[derive(Args)]
pub struct SetSessionCmd {
    /// Session cookie value
    pub cookie: String,
}

#[derive(Args)]
pub struct SetUserCmd {
    /// User id
    pub id: String,

    /// Role to render as
    #[arg(value_enum)]
    pub role: Role,
}

impl ConfigCmd {
    pub async fn run(&self) -> Result<()> {
        match &self.command {
            ConfigSubCmd::SetUrl(cmd) => {
                let mut config = LocalConfig::load()?;
                config.portal_url = cmd.url.clone();
                config.save()?;
                println!("Portal URL set to: {}", cmd.url);
            }
            ConfigSubCmd::SetSession(cmd) => {
                let mut config = LocalConfig::load()?;
                config.set_session(cmd.cookie.clone());
                config.save()?;
                println!("Session cookie saved.");
            }
            ConfigSubCmd::SetUser(cmd) => {
                let mut config = LocalConfig::load()?;
                config.user_id = Some(cmd.id.clone());
                config.role = Some(cmd.role);
                config.save()?;
                println!("Rendering as {} ({}).", cmd.id, cmd.role);
            }
            ConfigSubCmd::Show => {
                let config = LocalConfig::load()?;
                println!("Config: {}", LocalConfig::config_path()?.display());
                println!();
                println!("portal_url: {}", config.portal_url);
                println!(
                    "session:    {}",
                    if config.has_session() {
                        "(set)"
                    } else {
                        "(not set)"
                    }
                );
                println!(
                    "user:       {}",
                    config.user_id.as_deref().unwrap_or("(not set)")
                );
                println!(
                    "role:       {}",
                    config
                        .role
                        .map(|r| r.as_str())
                        .unwrap_or("(not set)")
                );
            }
        }
        Ok(())
    }
}
