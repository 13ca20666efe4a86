//! Authenticated HTTP client. One client instance carries the base URL and
//! the admin bearer token; every screen goes through it so auth is applied
//! the same way on every request.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::types::*;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

/// Error body the backend sends on non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
}

#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl Client {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// Attach the logged-in admin's bearer token.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        let token = token.into();
        self.token = (!token.is_empty()).then_some(token);
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn apply_auth(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(status_error(response).await);
        }
        Ok(response.json::<T>().await?)
    }

    /// Like [`execute`](Self::execute) for endpoints whose success response
    /// carries no body worth decoding (deletes).
    async fn execute_empty(&self, request: reqwest::RequestBuilder) -> Result<(), ApiError> {
        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(status_error(response).await);
        }
        Ok(())
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        debug!(%path, "GET");
        self.execute(self.apply_auth(self.http.get(self.url(path))))
            .await
    }

    async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        debug!(%path, "PUT");
        self.execute(self.apply_auth(self.http.put(self.url(path)).json(body)))
            .await
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        debug!(%path, "DELETE");
        self.execute_empty(self.apply_auth(self.http.delete(self.url(path))))
            .await
    }

    // --- auth ---

    pub async fn login(&self, email: &str, password: &str) -> Result<Admin, ApiError> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let envelope: LoginEnvelope = self
            .execute(self.http.post(self.url("login")).json(&body))
            .await?;
        Ok(envelope.super_admin)
    }

    // --- collections ---

    pub async fn cold_storages(&self) -> Result<Vec<StoreAdmin>, ApiError> {
        let envelope: ColdStoragesEnvelope = self.get_json("cold-storages").await?;
        Ok(envelope.store_admins)
    }

    pub async fn farmers(&self, storage_id: &str) -> Result<Vec<Farmer>, ApiError> {
        let envelope: DataEnvelope<Vec<Farmer>> = self
            .get_json(&format!("cold-storages/{storage_id}/farmers"))
            .await?;
        Ok(envelope.data)
    }

    pub async fn farmer(&self, farmer_id: &str) -> Result<Farmer, ApiError> {
        let envelope: DataEnvelope<Farmer> =
            self.get_json(&format!("farmers/{farmer_id}")).await?;
        Ok(envelope.data)
    }

    pub async fn incoming_orders(&self, storage_id: &str) -> Result<Vec<IncomingOrder>, ApiError> {
        let envelope: DataEnvelope<Vec<IncomingOrder>> = self
            .get_json(&format!("cold-storages/{storage_id}/incoming-orders"))
            .await?;
        Ok(envelope.data)
    }

    pub async fn outgoing_orders(&self, storage_id: &str) -> Result<Vec<OutgoingOrder>, ApiError> {
        let envelope: DataEnvelope<Vec<OutgoingOrder>> = self
            .get_json(&format!("cold-storages/{storage_id}/outgoing-orders"))
            .await?;
        Ok(envelope.data)
    }

    // --- analytics ---

    pub async fn stock_summary(&self, storage_id: &str) -> Result<Vec<VarietyStock>, ApiError> {
        #[derive(Debug, Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct StockEnvelope {
            stock_summary: Vec<VarietyStock>,
        }
        let envelope: StockEnvelope = self
            .get_json(&format!("cold-storages/{storage_id}/stock-summary"))
            .await?;
        Ok(envelope.stock_summary)
    }

    pub async fn top_farmers(&self, storage_id: &str) -> Result<Vec<TopFarmer>, ApiError> {
        let envelope: DataEnvelope<Vec<TopFarmer>> = self
            .get_json(&format!("cold-storages/{storage_id}/top-farmers"))
            .await?;
        Ok(envelope.data)
    }

    pub async fn farmer_orders(
        &self,
        storage_id: &str,
        farmer_id: &str,
    ) -> Result<Vec<IncomingOrder>, ApiError> {
        let envelope: DataEnvelope<Vec<IncomingOrder>> = self
            .get_json(&format!(
                "cold-storages/{storage_id}/farmers/{farmer_id}/orders"
            ))
            .await?;
        Ok(envelope.data)
    }

    pub async fn order_frequency(
        &self,
        storage_id: &str,
        farmer_id: &str,
    ) -> Result<OrderFrequency, ApiError> {
        let envelope: DataEnvelope<OrderFrequency> = self
            .get_json(&format!(
                "cold-storages/{storage_id}/farmers/{farmer_id}/order-frequency"
            ))
            .await?;
        Ok(envelope.data)
    }

    // --- mutations ---

    pub async fn update_incoming_order(
        &self,
        order_id: &str,
        update: &IncomingOrderUpdate,
    ) -> Result<IncomingOrder, ApiError> {
        let envelope: DataEnvelope<IncomingOrder> = self
            .put_json(&format!("incoming-orders/{order_id}"), update)
            .await?;
        Ok(envelope.data)
    }

    pub async fn update_outgoing_order(
        &self,
        order_id: &str,
        update: &OutgoingOrderUpdate,
    ) -> Result<OutgoingOrder, ApiError> {
        let envelope: DataEnvelope<OutgoingOrder> = self
            .put_json(&format!("outgoing-orders/{order_id}"), update)
            .await?;
        Ok(envelope.data)
    }

    pub async fn delete_outgoing_order(&self, order_id: &str) -> Result<(), ApiError> {
        self.delete(&format!("outgoing-orders/{order_id}")).await
    }

    pub async fn update_farmer(
        &self,
        farmer_id: &str,
        update: &FarmerUpdate,
    ) -> Result<Farmer, ApiError> {
        let envelope: DataEnvelope<Farmer> = self
            .put_json(&format!("farmers/{farmer_id}"), update)
            .await?;
        Ok(envelope.data)
    }

    pub async fn delete_farmer(&self, farmer_id: &str) -> Result<(), ApiError> {
        self.delete(&format!("farmers/{farmer_id}")).await
    }
}

async fn status_error(response: reqwest::Response) -> ApiError {
    let status = response.status();
    let message = response
        .json::<ErrorBody>()
        .await
        .ok()
        .map(|body| body.message)
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string()
        });
    warn!(status = status.as_u16(), %message, "backend rejected request");
    ApiError::Status {
        status: status.as_u16(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_without_duplicate_slashes() {
        let client = Client::new("http://localhost:5000/api/");
        assert_eq!(
            client.url("/cold-storages"),
            "http://localhost:5000/api/cold-storages"
        );
        assert_eq!(
            client.url("farmers/f1"),
            "http://localhost:5000/api/farmers/f1"
        );
    }

    #[test]
    fn with_token_ignores_empty_tokens() {
        let client = Client::new("http://localhost:5000").with_token("");
        assert!(client.token.is_none());
        let client = Client::new("http://localhost:5000").with_token("abc");
        assert_eq!(client.token.as_deref(), Some("abc"));
    }

    #[test]
    fn status_error_displays_backend_message() {
        let err = ApiError::Status {
            status: 422,
            message: "Cannot exceed available quantity".into(),
        };
        assert_eq!(err.to_string(), "Cannot exceed available quantity");
    }
}
