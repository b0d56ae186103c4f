use reqwest::Method;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::errors::{MilestonError, MilestonResult};
use crate::signing::sign_payload;

/// Header carrying the hex HMAC-SHA256 of the request body, attached only
/// when a signing secret is configured.
pub const SIGNATURE_HEADER: &str = "x-request-signature";

/// Authenticated dispatch core shared by every resource client.
///
/// Holds the service base URL, the static auth headers (`apikey`,
/// `businessid`, `Content-Type`) and an optional signing secret. All state is
/// immutable after construction, so one client may serve any number of
/// concurrent calls.
#[derive(Debug)]
pub struct ApiClient {
    base_url: String,
    client: reqwest::Client,
    headers: HeaderMap,
    signing_secret: Option<String>,
}

/// Builder for [`ApiClient`].
pub struct ApiClientBuilder {
    api_key: String,
    business_id: String,
    base_url: String,
    signing_secret: Option<String>,
    client: Option<reqwest::Client>,
}

impl ApiClientBuilder {
    /// Attach a signing secret. Every dispatched request will then carry an
    /// `x-request-signature` header over its JSON body.
    pub fn with_signing_secret(mut self, secret: impl Into<String>) -> Self {
        self.signing_secret = Some(secret.into());
        self
    }

    /// Override the underlying reqwest client (optional).
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = Some(client);
        self
    }

    pub fn build(self) -> MilestonResult<ApiClient> {
        let mut headers = HeaderMap::new();
        headers.insert(
            "apikey",
            HeaderValue::from_str(&self.api_key)
                .map_err(|e| MilestonError::Config(format!("invalid api key: {e}")))?,
        );
        headers.insert(
            "businessid",
            HeaderValue::from_str(&self.business_id)
                .map_err(|e| MilestonError::Config(format!("invalid business id: {e}")))?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        Ok(ApiClient {
            base_url: self.base_url.trim_end_matches('/').to_owned(),
            client: self.client.unwrap_or_default(),
            headers,
            signing_secret: self.signing_secret,
        })
    }
}

impl ApiClient {
    pub fn builder(
        api_key: impl Into<String>,
        business_id: impl Into<String>,
        base_url: impl Into<String>,
    ) -> ApiClientBuilder {
        ApiClientBuilder {
            api_key: api_key.into(),
            business_id: business_id.into(),
            base_url: base_url.into(),
            signing_secret: None,
            client: None,
        }
    }

    pub fn new(
        api_key: impl Into<String>,
        business_id: impl Into<String>,
        base_url: impl Into<String>,
    ) -> MilestonResult<Self> {
        Self::builder(api_key, business_id, base_url).build()
    }

    fn request_url(&self, endpoint: &str) -> String {
        // Endpoints are relative fragments beginning with '/' or '?'.
        format!("{}{}", self.base_url, endpoint)
    }

    /// Issue a request to `endpoint` and decode the JSON response.
    ///
    /// The payload (or `{}` when absent) is serialized once; that exact text
    /// is both the wire body and, when a signing secret is configured, the
    /// input to the `x-request-signature` digest. Every method including GET
    /// carries the body, as the Mileston services expect.
    ///
    /// Failures are logged once via `tracing` and propagated unchanged;
    /// there are no retries.
    pub async fn dispatch<P, R>(
        &self,
        endpoint: &str,
        method: Method,
        payload: Option<&P>,
    ) -> MilestonResult<R>
    where
        P: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        match self.execute(endpoint, method.clone(), payload).await {
            Ok(decoded) => Ok(decoded),
            Err(err) => {
                tracing::error!(%method, endpoint, error = %err, "mileston request failed");
                Err(err)
            }
        }
    }

    async fn execute<P, R>(
        &self,
        endpoint: &str,
        method: Method,
        payload: Option<&P>,
    ) -> MilestonResult<R>
    where
        P: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let body = match payload {
            Some(payload) => serde_json::to_string(payload)?,
            None => "{}".to_owned(),
        };

        let mut builder = self
            .client
            .request(method, self.request_url(endpoint))
            .headers(self.headers.clone());

        if let Some(secret) = &self.signing_secret {
            builder = builder.header(SIGNATURE_HEADER, sign_payload(secret, &body));
        }

        let response = builder.body(body).send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let body: Option<Value> = serde_json::from_str(&text).ok();
            let message = body
                .as_ref()
                .and_then(|b| b.get("message"))
                .and_then(Value::as_str)
                .map(str::to_owned)
                .unwrap_or_else(|| {
                    if text.is_empty() {
                        status.to_string()
                    } else {
                        text.clone()
                    }
                });
            return Err(MilestonError::Remote {
                status: status.as_u16(),
                message,
                body,
            });
        }

        Ok(serde_json::from_str(&text)?)
    }
}
