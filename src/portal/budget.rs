//! Budget endpoints.

use crate::types::CashflowPoint;

use super::Transport;
use super::error::PortalError;

/// Monthly cash-flow series, ordered by month.
pub async fn cashflow(transport: &Transport) -> Result<Vec<CashflowPoint>, PortalError> {
    transport.get_list("/api/budget/cashflow", &[]).await
}
