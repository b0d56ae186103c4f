use reqwest::Method;
use serde_json::Value;

use crate::client::ApiClient;
use crate::errors::MilestonResult;
use crate::types::wallet::{
    BatchPaymentPayload, BatchPaymentResponse, CreateNewSubWalletResponseData,
    CreateSubWalletPayload, CreateSubWalletResponseData, GetAllSubWalletsResponseData,
    GetSubWalletResponseData, SendFundsPayload, SendFundsResponse, TransactionStatusResponse,
    WalletResponse,
};

const DEFAULT_BASE_URL: &str = "https://user-service.mileston.co/user";

/// Client for the Mileston multi-chain wallet service.
///
/// The wallet service authorizes mutations with a per-request HMAC, so this
/// client requires a signing secret in addition to the shared auth headers.
pub struct Wallet {
    client: ApiClient,
}

impl Wallet {
    pub fn new(
        api_key: impl Into<String>,
        business_id: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> MilestonResult<Self> {
        Self::with_base_url(api_key, business_id, secret_key, DEFAULT_BASE_URL)
    }

    /// Point the client at a non-default service URL (staging, local mocks).
    pub fn with_base_url(
        api_key: impl Into<String>,
        business_id: impl Into<String>,
        secret_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> MilestonResult<Self> {
        let client = ApiClient::builder(api_key, business_id, base_url)
            .with_signing_secret(secret_key)
            .build()?;
        Ok(Self { client })
    }

    /// Send a payment from the main wallet.
    pub async fn send_payment(&self, payload: SendFundsPayload) -> MilestonResult<SendFundsResponse> {
        self.client
            .dispatch("/send-payment", Method::POST, Some(&payload))
            .await
    }

    /// Create a new sub wallet with a server-assigned UUID.
    pub async fn create_sub_wallet(&self) -> MilestonResult<CreateSubWalletResponseData> {
        self.client
            .dispatch("/sub-wallet", Method::POST, None::<&()>)
            .await
    }

    /// Create a wallet of a specific chain type under an existing sub wallet.
    pub async fn create_new_sub_wallet(
        &self,
        payload: CreateSubWalletPayload,
    ) -> MilestonResult<CreateNewSubWalletResponseData> {
        self.client
            .dispatch("/sub-wallet/create", Method::POST, Some(&payload))
            .await
    }

    pub async fn get_sub_wallet(
        &self,
        sub_wallet_uuid: &str,
    ) -> MilestonResult<GetSubWalletResponseData> {
        let endpoint = format!("/sub-wallet/{}", urlencoding::encode(sub_wallet_uuid));
        self.client
            .dispatch(&endpoint, Method::GET, None::<&()>)
            .await
    }

    pub async fn get_all_sub_wallets(
        &self,
    ) -> MilestonResult<WalletResponse<GetAllSubWalletsResponseData>> {
        self.client
            .dispatch("/sub-wallet/all", Method::GET, None::<&()>)
            .await
    }

    /// Send funds from a specific sub wallet.
    pub async fn send_funds(
        &self,
        sub_wallet_uuid: &str,
        payload: SendFundsPayload,
    ) -> MilestonResult<SendFundsResponse> {
        let endpoint = format!("/sub-wallet/{}/send", urlencoding::encode(sub_wallet_uuid));
        self.client
            .dispatch(&endpoint, Method::POST, Some(&payload))
            .await
    }

    pub async fn delete_sub_wallet(
        &self,
        sub_wallet_uuid: &str,
    ) -> MilestonResult<WalletResponse<Option<Value>>> {
        let endpoint = format!("/sub-wallet/{}", urlencoding::encode(sub_wallet_uuid));
        self.client
            .dispatch(&endpoint, Method::DELETE, None::<&()>)
            .await
    }

    /// Send several payments from the main wallet in one call.
    pub async fn batch_payment(
        &self,
        payload: BatchPaymentPayload,
    ) -> MilestonResult<BatchPaymentResponse> {
        self.client
            .dispatch("/batch-payment", Method::POST, Some(&payload))
            .await
    }

    pub async fn get_transaction_status(
        &self,
        transaction_uuid: &str,
    ) -> MilestonResult<TransactionStatusResponse> {
        let endpoint = format!(
            "/transaction-status/{}",
            urlencoding::encode(transaction_uuid)
        );
        self.client
            .dispatch(&endpoint, Method::GET, None::<&()>)
            .await
    }
}
