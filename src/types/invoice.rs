use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInvoicePayload {
    pub amount: String,
    pub item_name: String,
    pub customer_email: String,
    pub due_date: DateTime<Utc>,
    /// Whether to generate a PDF for the invoice. Defaults to `true` when
    /// left unset on create.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub add_pdf: Option<bool>,
}

/// Update payload; every field except `invoice_id` is optional and only
/// fields the caller sets are transmitted.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInvoicePayload {
    pub invoice_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub add_pdf: Option<bool>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInvoiceResponse {
    pub status_code: u16,
    pub message: String,
    pub invoice_link: String,
    pub invoice_data: UpdateInvoicePayload,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInvoiceResponse {
    pub status_code: u16,
    pub message: String,
    pub invoice_link: String,
    pub invoice_data: UpdateInvoicePayload,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetAllInvoiceResponse {
    pub status_code: u16,
    pub message: String,
    pub invoice_data: Vec<UpdateInvoicePayload>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteInvoiceResponse {
    pub status_code: u16,
    pub message: String,
}
