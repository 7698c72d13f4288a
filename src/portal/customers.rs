//! Customer endpoints.

use crate::types::Customer;

use super::Transport;
use super::error::PortalError;

pub async fn all(transport: &Transport) -> Result<Vec<Customer>, PortalError> {
    transport
        .get_list("/api/customer/getAllCustomers", &[])
        .await
}
