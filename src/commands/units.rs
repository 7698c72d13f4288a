//! Unit command - inspect and modify units.

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::config::LocalConfig;
use crate::format::format_indian_currency;
use crate::portal::{Portal, UnitForm};
use crate::types::{Facing, RegistrationStatus, Unit};

#[derive(Args)]
pub struct UnitCmd {
    #[command(subcommand)]
    pub command: UnitSubCmd,
}

#[derive(Subcommand)]
pub enum UnitSubCmd {
    /// Show one unit
    Get(GetUnitCmd),

    /// Create a unit
    Create(CreateUnitCmd),

    /// Update a unit
    Update(UpdateUnitCmd),

    /// Delete a unit
    Delete(DeleteUnitCmd),
}

#[derive(Args)]
pub struct GetUnitCmd {
    /// Unit id
    pub id: String,
}

#[derive(Args)]
pub struct CreateUnitCmd {
    /// Unit number within its floor
    #[arg(long)]
    pub number: String,

    /// Floor unit the new unit belongs to
    #[arg(long)]
    pub floor_unit: Option<String>,

    /// Compass facing
    #[arg(long, value_enum)]
    pub facing: Option<Facing>,

    /// Registration status
    #[arg(long, value_enum)]
    pub status: Option<RegistrationStatus>,

    /// Total amount in rupees
    #[arg(long)]
    pub total_amount: Option<i64>,
}

#[derive(Args)]
pub struct UpdateUnitCmd {
    /// Unit id
    pub id: String,

    /// New unit number
    #[arg(long)]
    pub number: Option<String>,

    /// New floor unit
    #[arg(long)]
    pub floor_unit: Option<String>,

    /// New compass facing
    #[arg(long, value_enum)]
    pub facing: Option<Facing>,

    /// New registration status
    #[arg(long, value_enum)]
    pub status: Option<RegistrationStatus>,

    /// New total amount in rupees
    #[arg(long)]
    pub total_amount: Option<i64>,
}

#[derive(Args)]
pub struct DeleteUnitCmd {
    /// Unit id
    pub id: String,
}

impl UnitCmd {
    pub async fn run(&self) -> Result<()> {
        let config = LocalConfig::load()?;
        let portal = Portal::from_config(&config)?;

        match &self.command {
            UnitSubCmd::Get(cmd) => {
                let unit = portal.unit(&cmd.id).await?;
                print_unit(&unit);
            }
            UnitSubCmd::Create(cmd) => {
                let form = UnitForm {
                    unit_number: Some(cmd.number.clone()),
                    floor_unit_id: cmd.floor_unit.clone(),
                    facing: cmd.facing,
                    status: cmd.status,
                    total_amount: cmd.total_amount,
                };
                let unit = portal.create_unit(form).await?;
                println!("Created unit {}.", unit.id);
                print_unit(&unit);
            }
            UnitSubCmd::Update(cmd) => {
                let form = UnitForm {
                    unit_number: cmd.number.clone(),
                    floor_unit_id: cmd.floor_unit.clone(),
                    facing: cmd.facing,
                    status: cmd.status,
                    total_amount: cmd.total_amount,
                };
                let unit = portal.update_unit(&cmd.id, form).await?;
                println!("Updated unit {}.", unit.id);
                print_unit(&unit);
            }
            UnitSubCmd::Delete(cmd) => {
                portal.delete_unit(&cmd.id).await?;
                println!("Deleted unit {}.", cmd.id);
            }
        }

        Ok(())
    }
}

fn print_unit(unit: &Unit) {
    println!("unit:       {} ({})", unit.unit_number, unit.id);
    println!("floor unit: {}", unit.floor_unit_id.as_deref().unwrap_or("-"));
    println!(
        "facing:     {}",
        unit.facing.map(|f| f.as_str()).unwrap_or("-")
    );
    println!("status:     {}", unit.status);
    println!("total:      {}", format_indian_currency(unit.total_amount));
    println!(
        "received:   {}",
        format_indian_currency(unit.amount_received)
    );
    println!(
        "balance:    {}",
        format_indian_currency(unit.balance_amount)
    );
}
