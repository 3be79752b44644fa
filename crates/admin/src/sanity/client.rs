//! HTTP client for the remote order store.

use std::sync::Arc;

use secrecy::ExposeSecret;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::instrument;

use orderdesk_core::Order;

use crate::config::SanityConfig;

use super::SanityError;

/// Field projection for order reads.
///
/// Fixed set per the dashboard's needs: identifier, name fields, contact
/// fields, address fields, financial fields, status, and cart item
/// name+image.
const ORDER_PROJECTION: &str = "{_id, firstName, lastName, phone, email, address, city, zipCode, total, discount, orderData, status, cartItems[]{name, image}}";

/// Remote order store client.
///
/// Cheaply cloneable via `Arc`; holds the HTTP client and store
/// credentials.
#[derive(Clone)]
pub struct SanityClient {
    inner: Arc<SanityClientInner>,
}

struct SanityClientInner {
    client: reqwest::Client,
    project_id: String,
    dataset: String,
    api_version: String,
    token: String,
}

/// Envelope for query responses: `{"result": ...}`.
#[derive(Debug, Deserialize)]
struct QueryResponse<T> {
    result: Option<T>,
}

/// Envelope for mutation responses.
#[derive(Debug, Deserialize)]
struct MutateResponse {
    #[serde(rename = "transactionId")]
    transaction_id: Option<String>,
    #[serde(default)]
    results: Vec<MutationResult>,
}

#[derive(Debug, Deserialize)]
struct MutationResult {
    id: String,
}

/// Error envelope returned by the store on failed requests.
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    description: Option<String>,
    #[serde(rename = "type", default)]
    error_type: Option<String>,
}

impl SanityClient {
    /// Create a new order store client.
    #[must_use]
    pub fn new(config: &SanityConfig) -> Self {
        Self {
            inner: Arc::new(SanityClientInner {
                client: reqwest::Client::new(),
                project_id: config.project_id.clone(),
                dataset: config.dataset.clone(),
                api_version: config.api_version.clone(),
                token: config.token.expose_secret().to_string(),
            }),
        }
    }

    /// Fetch all orders with the fixed field projection.
    ///
    /// Returns orders in store order (not guaranteed sorted).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the store reports an error.
    #[instrument(skip(self))]
    pub async fn fetch_orders(&self) -> Result<Vec<Order>, SanityError> {
        let groq = format!("*[_type == \"order\"]{ORDER_PROJECTION}");
        let orders: Option<Vec<Order>> = self.query(&groq, &[]).await?;
        Ok(orders.unwrap_or_default())
    }

    /// Fetch a single order by identifier.
    ///
    /// Returns `None` when the identifier does not resolve to an order.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the store reports an error.
    #[instrument(skip(self), fields(order_id = %id))]
    pub async fn fetch_order(&self, id: &str) -> Result<Option<Order>, SanityError> {
        let groq = format!("*[_type == \"order\" && _id == $id][0]{ORDER_PROJECTION}");
        let id_json = serde_json::to_string(id)?;
        self.query(&groq, &[("$id", &id_json)]).await
    }

    /// Set an order's status, committing the change durably.
    ///
    /// This is a partial write: only the `status` field is patched.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the store rejects the
    /// mutation; the order is left unchanged in that case.
    #[instrument(skip(self), fields(order_id = %id, status = %status))]
    pub async fn update_order_status(&self, id: &str, status: &str) -> Result<(), SanityError> {
        let body = status_patch_body(id, status);

        let response = self
            .inner
            .client
            .post(self.mutate_url())
            .bearer_auth(&self.inner.token)
            .json(&body)
            .send()
            .await?;

        let response = Self::check_status(response).await?;
        let payload: MutateResponse = response.json().await?;

        if !payload.results.iter().any(|r| r.id == id) {
            return Err(SanityError::Api(format!(
                "mutation committed nothing for {id}"
            )));
        }

        tracing::debug!(
            transaction_id = payload.transaction_id.as_deref().unwrap_or("-"),
            "Order status committed"
        );
        Ok(())
    }

    // =========================================================================
    // Request plumbing
    // =========================================================================

    /// Execute a GROQ query with optional `$name` parameters.
    ///
    /// Parameter values must already be JSON-encoded.
    async fn query<T: DeserializeOwned>(
        &self,
        groq: &str,
        params: &[(&str, &str)],
    ) -> Result<Option<T>, SanityError> {
        let url = self.query_url(groq, params);

        let response = self
            .inner
            .client
            .get(url)
            .bearer_auth(&self.inner.token)
            .send()
            .await?;

        let response = Self::check_status(response).await?;
        let envelope: QueryResponse<T> = response.json().await?;
        Ok(envelope.result)
    }

    /// Build the query endpoint URL with the GROQ expression and parameters
    /// percent-encoded.
    fn query_url(&self, groq: &str, params: &[(&str, &str)]) -> String {
        let mut url = format!(
            "{}/data/query/{}?query={}",
            self.base_url(),
            self.inner.dataset,
            urlencoding::encode(groq)
        );
        for (name, value) in params {
            url.push('&');
            url.push_str(&urlencoding::encode(name));
            url.push('=');
            url.push_str(&urlencoding::encode(value));
        }
        url
    }

    fn mutate_url(&self) -> String {
        format!(
            "{}/data/mutate/{}?returnIds=true",
            self.base_url(),
            self.inner.dataset
        )
    }

    fn base_url(&self) -> String {
        format!(
            "https://{}.api.sanity.io/v{}",
            self.inner.project_id, self.inner.api_version
        )
    }

    /// Map non-success responses to the error taxonomy.
    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, SanityError> {
        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("Retry-After")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse().ok())
                .unwrap_or(60);
            return Err(SanityError::RateLimited(retry_after));
        }

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(SanityError::Unauthorized(
                "Invalid or expired store token".to_string(),
            ));
        }

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let description = serde_json::from_str::<ErrorResponse>(&text).map_or_else(
                |_| format!("HTTP {status}"),
                |e| {
                    e.error
                        .description
                        .or(e.error.error_type)
                        .unwrap_or_else(|| format!("HTTP {status}"))
                },
            );
            return Err(SanityError::Api(description));
        }

        Ok(response)
    }
}

/// Build the mutation body for a status patch:
/// one `patch`/`set` on the status field only.
fn status_patch_body(id: &str, status: &str) -> serde_json::Value {
    serde_json::json!({
        "mutations": [
            {
                "patch": {
                    "id": id,
                    "set": { "status": status }
                }
            }
        ]
    })
}
