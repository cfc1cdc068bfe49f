//! Authentication UI module
//!
//! Browser side of the auth collaborator used by the pages.

mod context;

pub use context::{AuthContext, provide_auth_context, use_auth_context};
