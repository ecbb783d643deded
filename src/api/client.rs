//! HTTP client for communicating with the invoice backend
//!
//! Thin wrapper over `reqwest` that knows the three backend endpoints and maps
//! failures onto [`ApiError`].

use super::{ApiError, InvoiceApi};
use crate::state::{Dealer, InvoiceRequest, Vehicle};
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Default backend address
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080";

const DEALERS_PATH: &str = "/api/dealers";
const VEHICLES_PATH: &str = "/api/vehicles";
const GENERATE_PATH: &str = "/api/invoices/generate";

/// Client for the invoice backend
#[derive(Debug, Clone)]
pub struct HttpApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl HttpApiClient {
    /// Create a new client for the backend at `base_url`
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let trimmed = base_url.trim().trim_end_matches('/');
        reqwest::Url::parse(trimmed).map_err(|_| ApiError::InvalidBaseUrl(base_url.to_string()))?;

        Ok(Self {
            base_url: trimmed.to_string(),
            client: reqwest::Client::new(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET a JSON document
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.url(path);
        debug!("Fetching {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                url: url.clone(),
                source,
            })?;
        let response = check_status(&url, response).await?;

        response
            .json()
            .await
            .map_err(|source| ApiError::Decode { url, source })
    }
}

/// Turn a non-success response into [`ApiError::Status`], keeping the body text
async fn check_status(
    url: &str,
    response: reqwest::Response,
) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = match response.text().await {
        Ok(body) => body,
        Err(err) => {
            debug!("Failed to read error body from {}: {}", url, err);
            String::new()
        }
    };
    Err(ApiError::Status {
        url: url.to_string(),
        status,
        body,
    })
}

#[async_trait]
impl InvoiceApi for HttpApiClient {
    async fn list_dealers(&self) -> Result<Vec<Dealer>, ApiError> {
        self.get_json(DEALERS_PATH).await
    }

    async fn list_vehicles(&self) -> Result<Vec<Vehicle>, ApiError> {
        self.get_json(VEHICLES_PATH).await
    }

    async fn generate_invoice(&self, request: &InvoiceRequest) -> Result<Vec<u8>, ApiError> {
        let url = self.url(GENERATE_PATH);
        debug!(
            dealer_id = request.dealer_id,
            vehicle_id = request.vehicle_id,
            "Requesting invoice from {}",
            url
        );

        let response = self
            .client
            .post(&url)
            .header(ACCEPT, "application/pdf")
            .json(request)
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                url: url.clone(),
                source,
            })?;
        let response = check_status(&url, response).await?;

        let bytes = response
            .bytes()
            .await
            .map_err(|source| ApiError::Decode { url, source })?;
        Ok(bytes.to_vec())
    }
}
