//! Payment endpoints.

use crate::types::Payment;

use super::Transport;
use super::error::PortalError;

/// Payments recorded in the accountant ledger.
pub async fn accountant(transport: &Transport) -> Result<Vec<Payment>, PortalError> {
    transport.get_list("/api/payments/accountant", &[]).await
}
