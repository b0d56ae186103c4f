mod invoice;
mod payment_link;
mod payout;
mod recurring_payment;
mod wallet;

pub use invoice::Invoice;
pub use payment_link::PaymentLink;
pub use payout::Payout;
pub use recurring_payment::RecurringPayment;
pub use wallet::Wallet;
