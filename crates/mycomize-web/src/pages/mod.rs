//! Page Components

mod blog;
mod contact;
mod guides;
mod landing;
mod not_found;
mod order_status;

pub use blog::BlogPage;
pub use contact::ContactPage;
pub use guides::GuidesPage;
pub use landing::LandingPage;
pub use not_found::NotFoundPage;
pub use order_status::OrderStatusPage;
