//! Trait abstraction for the backend client to enable mocking in tests

use super::ApiError;
use crate::state::{Dealer, InvoiceRequest, Vehicle};
use async_trait::async_trait;

/// Operations the invoice backend exposes
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InvoiceApi: Send + Sync {
    /// List all dealers, in backend order
    async fn list_dealers(&self) -> Result<Vec<Dealer>, ApiError>;

    /// List all vehicles, in backend order
    async fn list_vehicles(&self) -> Result<Vec<Vehicle>, ApiError>;

    /// Generate an invoice and return the raw PDF bytes
    async fn generate_invoice(&self, request: &InvoiceRequest) -> Result<Vec<u8>, ApiError>;
}
