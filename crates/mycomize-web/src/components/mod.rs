//! UI Components

pub mod checkout;
pub mod layout;
pub mod status;

pub use checkout::CheckoutModal;
pub use layout::{Divider, Footer, Header, SupportLine};
pub use status::StatusPanel;
