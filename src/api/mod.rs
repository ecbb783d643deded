//! Backend client module for HTTP communication

mod client;
mod error;
mod traits;

pub use client::{HttpApiClient, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use traits::InvoiceApi;

#[cfg(test)]
pub use traits::MockInvoiceApi;
