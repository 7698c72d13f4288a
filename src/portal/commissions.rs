//! Commission endpoints.

use crate::types::Commission;

use super::Transport;
use super::error::PortalError;

pub async fn all(transport: &Transport) -> Result<Vec<Commission>, PortalError> {
    transport
        .get_list("/api/commission/getAllCommissions", &[])
        .await
}
