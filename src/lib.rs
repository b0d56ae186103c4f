pub mod apis;
pub mod client;
pub mod errors;
pub mod signing;
pub mod types;

pub use apis::{Invoice, PaymentLink, Payout, RecurringPayment, Wallet};
pub use client::ApiClient;
pub use errors::{MilestonError, MilestonResult};
