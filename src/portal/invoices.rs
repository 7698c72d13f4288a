//! Invoice endpoints.

use crate::types::{CompletedTask, Invoice};

use super::Transport;
use super::error::PortalError;

pub async fn all(transport: &Transport) -> Result<Vec<Invoice>, PortalError> {
    transport.get_list("/api/invoices", &[]).await
}

/// The three most recently issued invoices.
pub async fn recent(transport: &Transport) -> Result<Vec<Invoice>, PortalError> {
    transport
        .get_list("/api/invoices", &[("limit", "3"), ("sort", "-issueDate")])
        .await
}

/// Contractor tasks the portal has marked done.
pub async fn completed_tasks(transport: &Transport) -> Result<Vec<CompletedTask>, PortalError> {
    transport.get_list("/api/invoices/completed/tasks", &[]).await
}
