use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Chains a Mileston wallet can operate on. `All` addresses every chain at
/// once and only appears in balance queries and send operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WalletType {
    Sui,
    Eth,
    Avax,
    Pol,
    Base,
    Arb,
    Solana,
    All,
}

/// Per-chain addresses of one wallet.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct WalletAddresses {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sui: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eth: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avax: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arb: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solana: Option<String>,
}

/// Per-chain balances of one wallet.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct WalletBalances {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sui: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eth: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avax: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arb: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solana: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubWalletPayload {
    pub sub_wallet_uuid: String,
    pub wallet_type: WalletType,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendFundsPayload {
    pub amount: String,
    pub recipient_address: String,
    pub wallet_type: WalletType,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendFundsResponse {
    pub status_code: u16,
    pub message: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubWalletResponseData {
    pub public_key: String,
    pub uuid: String,
    pub recovery_phrase: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreateNewSubWalletResponseData {
    #[serde(rename = "type")]
    pub wallet_type: WalletType,
    pub address: String,
    pub balance: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GetSubWalletResponseData {
    #[serde(rename = "type")]
    pub wallet_type: WalletType,
    pub address: WalletAddresses,
    /// Total balance across all chains.
    pub balance: String,
    pub balances: WalletBalances,
}

/// Aggregate view over every sub wallet, keyed by sub wallet UUID.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GetAllSubWalletsResponseData {
    #[serde(rename = "type")]
    pub wallet_type: WalletType,
    pub address: HashMap<String, WalletAddresses>,
    pub balance: String,
    pub balances: HashMap<String, WalletBalances>,
}

/// Envelope used by wallet operations that wrap their data field.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletResponse<T = Value> {
    pub status_code: u16,
    pub message: String,
    pub data: T,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchPaymentPayload {
    pub payments: Vec<SendFundsPayload>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchPaymentResponse {
    pub status_code: u16,
    pub message: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionStatusResponse {
    pub status_code: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}
