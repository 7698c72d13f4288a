//! Property endpoints.

use crate::types::Property;

use super::Transport;
use super::error::PortalError;

/// Properties currently open for sale.
pub async fn available(transport: &Transport) -> Result<Vec<Property>, PortalError> {
    transport.get_list("/api/properties/available", &[]).await
}
