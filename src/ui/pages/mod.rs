//! Application pages module
//!
//! - Landing page (home)
//! - Dashboard (post-login destination)
//! - Not found

mod dashboard;
mod landing;
mod not_found;

pub use dashboard::DashboardPage;
pub use landing::LandingPage;
pub use not_found::NotFoundPage;
