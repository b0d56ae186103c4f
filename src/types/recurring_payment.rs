use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurrentPaymentStatus {
    Paid,
    Unpaid,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecurringPaymentPayload {
    pub amount: String,
    /// Name of the subscription, e.g. "Premium Plan".
    pub subscription_name: String,
    pub subscriber_full_name: String,
    pub subscriber_email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscriber_wallet_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_payment_status: Option<CurrentPaymentStatus>,
    /// Date the recurring payment starts.
    pub recurring_date: DateTime<Utc>,
    /// Interval between charges, in days.
    pub recurring_interval: u32,
    /// Whether to generate a PDF for each charge. Defaults to `true` when
    /// left unset on create.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub add_pdf: Option<bool>,
}

/// Update payload; every field except `recurring_payment_id` is optional and
/// only fields the caller sets are transmitted.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRecurringPaymentPayload {
    pub recurring_payment_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscriber_full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscriber_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscriber_wallet_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_payment_status: Option<CurrentPaymentStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurring_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurring_interval: Option<u32>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecurringPaymentResponse {
    pub status_code: u16,
    pub message: String,
    pub recurring_payment_data: UpdateRecurringPaymentPayload,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRecurringPaymentResponse {
    pub status_code: u16,
    pub message: String,
    pub recurring_payment_data: UpdateRecurringPaymentPayload,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetAllRecurringPaymentResponse {
    pub status_code: u16,
    pub message: String,
    pub recurring_payment_data: Vec<UpdateRecurringPaymentPayload>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteRecurringPaymentResponse {
    pub status_code: u16,
    pub message: String,
}
