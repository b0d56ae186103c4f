pub mod invoice;
pub mod payment_link;
pub mod payout;
pub mod recurring_payment;
pub mod wallet;

pub use invoice::*;
pub use payment_link::*;
pub use payout::*;
pub use recurring_payment::*;
pub use wallet::*;
