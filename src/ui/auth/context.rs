//! Auth context for the signed-in user
//!
//! The session itself lives with the external auth provider. After login it
//! leaves the user's profile in localStorage, which this context restores
//! once the page has hydrated.

use leptos::prelude::*;

use crate::core::auth::{AuthCollaborator, LOGIN_ROUTE, User};
use crate::ui::dom;

const STORAGE_KEY_USER: &str = "flipcut_user";

/// Auth context providing the current user and the login action
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// Signed-in user, `None` when anonymous
    pub user: RwSignal<Option<User>>,
}

impl AuthContext {
    /// Check if user is authenticated
    pub fn is_authenticated(&self) -> bool {
        self.user.with(|u| u.is_some())
    }

    /// Forget the stored session
    pub fn sign_out(&self) {
        clear_storage();
        self.user.set(None);
    }
}

impl AuthCollaborator for AuthContext {
    /// Uses get_untracked() since this is called from event handlers
    fn current_user(&self) -> Option<User> {
        self.user.get_untracked()
    }

    fn login(&self) {
        dom::redirect(LOGIN_ROUTE);
    }
}

/// Provide auth context to the component tree
pub fn provide_auth_context() -> AuthContext {
    // Anonymous on both server and client to avoid hydration mismatch
    let user = RwSignal::new(None::<User>);
    let ctx = AuthContext { user };

    #[cfg(not(feature = "ssr"))]
    {
        Effect::new(move |_| {
            if let Some(stored) = load_from_storage() {
                user.set(Some(stored));
            }
        });
    }

    provide_context(ctx);
    ctx
}

/// Get the auth context provided by [`provide_auth_context`]
pub fn use_auth_context() -> AuthContext {
    expect_context::<AuthContext>()
}

#[cfg(not(feature = "ssr"))]
fn load_from_storage() -> Option<User> {
    use leptos::web_sys;

    let storage = web_sys::window()?.local_storage().ok()??;
    let json = storage.get_item(STORAGE_KEY_USER).ok()??;
    match serde_json::from_str::<User>(&json) {
        Ok(user) => Some(user),
        Err(e) => {
            leptos::logging::warn!("Discarding unreadable stored user: {}", e);
            let _ = storage.remove_item(STORAGE_KEY_USER);
            None
        }
    }
}

#[cfg(not(feature = "ssr"))]
fn clear_storage() {
    use leptos::web_sys;

    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.remove_item(STORAGE_KEY_USER);
        }
    }
}

#[cfg(feature = "ssr")]
fn clear_storage() {}
