use reqwest::Method;

use crate::client::ApiClient;
use crate::errors::MilestonResult;
use crate::types::payout::{SendPayoutRequest, SendPayoutResponse};

const DEFAULT_BASE_URL: &str = "https://user-service.mileston.co";

/// Client for sending payouts from a business's main wallet.
pub struct Payout {
    client: ApiClient,
}

impl Payout {
    pub fn new(api_key: impl Into<String>, business_id: impl Into<String>) -> MilestonResult<Self> {
        Self::with_base_url(api_key, business_id, DEFAULT_BASE_URL)
    }

    /// Point the client at a non-default service URL (staging, local mocks).
    pub fn with_base_url(
        api_key: impl Into<String>,
        business_id: impl Into<String>,
        base_url: impl Into<String>,
    ) -> MilestonResult<Self> {
        Ok(Self {
            client: ApiClient::new(api_key, business_id, base_url)?,
        })
    }

    pub async fn send_payment(
        &self,
        payload: SendPayoutRequest,
    ) -> MilestonResult<SendPayoutResponse> {
        self.client
            .dispatch("/user/send-payment", Method::POST, Some(&payload))
            .await
    }
}
