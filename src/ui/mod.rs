pub mod auth;
pub mod dom;
pub mod effects;
pub mod icon;
pub mod pages;

pub use auth::{AuthContext, provide_auth_context, use_auth_context};
pub use icon::{Icon, icons};
