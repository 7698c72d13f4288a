//! Lead endpoints.

use crate::types::Lead;

use super::Transport;
use super::error::PortalError;

pub async fn closed(transport: &Transport) -> Result<Vec<Lead>, PortalError> {
    transport.get_list("/api/leads/getClosedLeads", &[]).await
}
