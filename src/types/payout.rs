use serde::{Deserialize, Serialize};

use crate::types::wallet::WalletType;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendPayoutRequest {
    /// Secret phrase for wallets with copied secrets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_phrase: Option<String>,
    /// Amount to send, in USDC.
    pub amount: String,
    pub recipient_address: String,
    pub wallet_type: WalletType,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendPayoutResponse {
    pub status_code: u16,
    pub message: String,
}
