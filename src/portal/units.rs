//! Unit endpoints. Create and update submit `multipart/form-data`, matching
//! the portal's upload-capable forms.

use reqwest::multipart::Form;

use crate::types::{Facing, Id, RegistrationStatus, Unit};

use super::Transport;
use super::error::PortalError;

/// Fields accepted by the unit create/update forms. Absent fields are left
/// out of the request entirely.
#[derive(Debug, Default)]
pub struct UnitForm {
    pub unit_number: Option<String>,
    pub floor_unit_id: Option<Id>,
    pub facing: Option<Facing>,
    pub status: Option<RegistrationStatus>,
    pub total_amount: Option<i64>,
}

impl UnitForm {
    fn into_form(self) -> Form {
        let mut form = Form::new();
        if let Some(number) = self.unit_number {
            form = form.text("unitNumber", number);
        }
        if let Some(id) = self.floor_unit_id {
            form = form.text("floorUnitId", id);
        }
        if let Some(facing) = self.facing {
            form = form.text("facing", facing.as_str());
        }
        if let Some(status) = self.status {
            form = form.text("status", status.as_str());
        }
        if let Some(amount) = self.total_amount {
            form = form.text("totalAmount", amount.to_string());
        }
        form
    }
}

pub async fn get(transport: &Transport, id: &str) -> Result<Unit, PortalError> {
    transport.get_one(&format!("/api/unit/getUnit/{id}")).await
}

pub async fn create(transport: &Transport, form: UnitForm) -> Result<Unit, PortalError> {
    transport
        .post_form("/api/unit/createUnit", form.into_form())
        .await
}

pub async fn update(transport: &Transport, id: &str, form: UnitForm) -> Result<Unit, PortalError> {
    transport
        .patch_form(&format!("/api/unit/updateUnit/{id}"), form.into_form())
        .await
}

pub async fn delete(transport: &Transport, id: &str) -> Result<(), PortalError> {
    transport
        .delete(&format!("/api/unit/deleteUnit/{id}"))
        .await
}
