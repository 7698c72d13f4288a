//! User-directory endpoints.

use crate::types::User;

use super::Transport;
use super::error::PortalError;

pub async fn agents(transport: &Transport) -> Result<Vec<User>, PortalError> {
    transport.get_list("/api/user/getAllAgents", &[]).await
}

/// Customers who have completed a purchase.
pub async fn purchased_customers(transport: &Transport) -> Result<Vec<User>, PortalError> {
    transport
        .get_list("/api/user/getAllcustomer_purchased", &[])
        .await
}
