use reqwest::Method;

use crate::client::ApiClient;
use crate::errors::MilestonResult;
use crate::types::payment_link::{
    CreatePaymentLinkPayload, CreatePaymentLinkResponse, DeletePaymentLinkResponse,
    GetAllPaymentLinkResponse, UpdatePaymentLinkPayload, UpdatePaymentLinkResponse,
};

const DEFAULT_BASE_URL: &str = "https://payment-service.mileston.co/payment-link";

/// Client for the Mileston payment link service.
pub struct PaymentLink {
    client: ApiClient,
}

impl PaymentLink {
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

    pub async fn create(
        &self,
        payload: CreatePaymentLinkPayload,
    ) -> MilestonResult<CreatePaymentLinkResponse> {
        self.client
            .dispatch("/create", Method::POST, Some(&payload))
            .await
    }

    pub async fn get(&self, id: &str) -> MilestonResult<UpdatePaymentLinkResponse> {
        let endpoint = format!("/{}", urlencoding::encode(id));
        self.client
            .dispatch(&endpoint, Method::GET, None::<&()>)
            .await
    }

    /// Retrieve up to `limit` payment links.
    pub async fn get_all(&self, limit: u32) -> MilestonResult<GetAllPaymentLinkResponse> {
        let endpoint = format!("?limit={limit}");
        self.client
            .dispatch(&endpoint, Method::GET, None::<&()>)
            .await
    }

    pub async fn update(
        &self,
        payload: UpdatePaymentLinkPayload,
    ) -> MilestonResult<UpdatePaymentLinkResponse> {
        self.client
            .dispatch("/update", Method::PATCH, Some(&payload))
            .await
    }

    pub async fn delete(&self, id: &str) -> MilestonResult<DeletePaymentLinkResponse> {
        let endpoint = format!("/delete/{}", urlencoding::encode(id));
        self.client
            .dispatch(&endpoint, Method::DELETE, None::<&()>)
            .await
    }
}
