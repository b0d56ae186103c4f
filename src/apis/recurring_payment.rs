use reqwest::Method;

use crate::client::ApiClient;
use crate::errors::MilestonResult;
use crate::types::recurring_payment::{
    CreateRecurringPaymentPayload, CreateRecurringPaymentResponse, DeleteRecurringPaymentResponse,
    GetAllRecurringPaymentResponse, UpdateRecurringPaymentPayload, UpdateRecurringPaymentResponse,
};

const DEFAULT_BASE_URL: &str = "https://recurring-service.mileston.co/recurring-payment";

/// Client for the Mileston recurring payment service.
pub struct RecurringPayment {
    client: ApiClient,
}

impl RecurringPayment {
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

    /// Create a new recurring payment. `addPdf` defaults to `true` when the
    /// caller leaves it unset.
    pub async fn create(
        &self,
        business_name: &str,
        payload: CreateRecurringPaymentPayload,
    ) -> MilestonResult<CreateRecurringPaymentResponse> {
        let mut payload = payload;
        if payload.add_pdf.is_none() {
            payload.add_pdf = Some(true);
        }
        let endpoint = format!("/create?businessName={}", urlencoding::encode(business_name));
        self.client
            .dispatch(&endpoint, Method::POST, Some(&payload))
            .await
    }

    pub async fn get(&self, id: &str) -> MilestonResult<UpdateRecurringPaymentResponse> {
        let endpoint = format!("/{}", urlencoding::encode(id));
        self.client
            .dispatch(&endpoint, Method::GET, None::<&()>)
            .await
    }

    /// Retrieve up to `limit` recurring payments.
    pub async fn get_all(&self, limit: u32) -> MilestonResult<GetAllRecurringPaymentResponse> {
        let endpoint = format!("?limit={limit}");
        self.client
            .dispatch(&endpoint, Method::GET, None::<&()>)
            .await
    }

    pub async fn update(
        &self,
        payload: UpdateRecurringPaymentPayload,
    ) -> MilestonResult<UpdateRecurringPaymentResponse> {
        self.client
            .dispatch("/update", Method::PATCH, Some(&payload))
            .await
    }

    pub async fn delete(&self, id: &str) -> MilestonResult<DeleteRecurringPaymentResponse> {
        let endpoint = format!("/delete/{}", urlencoding::encode(id));
        self.client
            .dispatch(&endpoint, Method::DELETE, None::<&()>)
            .await
    }
}
