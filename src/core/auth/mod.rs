//! Session boundary of the landing page
//!
//! The landing page never talks to the authentication backend directly. It
//! sees two small capabilities:
//! - [`AuthCollaborator`]: who is signed in, and how to start signing in
//! - [`Navigator`]: move to another route of the app
//!
//! [`handle_get_started`] is the only branching decision on the page.

#[cfg(feature = "ssr")]
pub mod api;

use serde::{Deserialize, Serialize};

/// Where authenticated users go from "Get started"
pub const DASHBOARD_ROUTE: &str = "/dashboard";

/// Server endpoint that forwards to the external login flow
pub const LOGIN_ROUTE: &str = "/auth/login";

/// Signed-in user as reported by the auth provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub picture: Option<String>,
}

/// Current-user presence plus a way to begin login
pub trait AuthCollaborator {
    fn current_user(&self) -> Option<User>;

    /// Start the login/signup flow. Failures are the collaborator's concern.
    fn login(&self);
}

/// Client-side route changes
pub trait Navigator {
    fn navigate_to(&self, route: &str);
}

impl<F> Navigator for F
where
    F: Fn(&str),
{
    fn navigate_to(&self, route: &str) {
        self(route)
    }
}

/// Outcome of pressing a "Get started" button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GetStarted {
    OpenDashboard,
    BeginLogin,
}

/// Decide what "Get started" does for the given session
pub fn get_started_action(user: Option<&User>) -> GetStarted {
    match user {
        Some(_) => GetStarted::OpenDashboard,
        None => GetStarted::BeginLogin,
    }
}

/// Run the "Get started" action against the collaborators
pub fn handle_get_started<A, N>(auth: &A, navigator: &N) -> GetStarted
where
    A: AuthCollaborator + ?Sized,
    N: Navigator + ?Sized,
{
    let user = auth.current_user();
    let action = get_started_action(user.as_ref());

    match action {
        GetStarted::OpenDashboard => {
            tracing::debug!(route = DASHBOARD_ROUTE, "get started: opening dashboard");
            navigator.navigate_to(DASHBOARD_ROUTE);
        }
        GetStarted::BeginLogin => {
            tracing::debug!("get started: no session, starting login");
            auth.login();
        }
    }

    action
}

/// Label for a "Get started" button
pub fn get_started_label(signed_in: bool, anonymous_label: &'static str) -> &'static str {
    if signed_in {
        "Go to Dashboard"
    } else {
        anonymous_label
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    struct FakeAuth {
        user: Option<User>,
        login_calls: Cell<usize>,
    }

    impl FakeAuth {
        fn new(user: Option<User>) -> Self {
            Self {
                user,
                login_calls: Cell::new(0),
            }
        }
    }

    impl AuthCollaborator for FakeAuth {
        fn current_user(&self) -> Option<User> {
            self.user.clone()
        }

        fn login(&self) {
            self.login_calls.set(self.login_calls.get() + 1);
        }
    }

    fn alice() -> User {
        User {
            id: "user-1".to_string(),
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            picture: None,
        }
    }

    #[test]
    fn test_anonymous_user_begins_login() {
        let auth = FakeAuth::new(None);
        let routes = RefCell::new(Vec::<String>::new());
        let navigate = |route: &str| routes.borrow_mut().push(route.to_string());

        let action = handle_get_started(&auth, &navigate);

        assert_eq!(action, GetStarted::BeginLogin);
        assert_eq!(auth.login_calls.get(), 1);
        assert!(routes.borrow().is_empty());
    }

    #[test]
    fn test_signed_in_user_opens_dashboard() {
        let auth = FakeAuth::new(Some(alice()));
        let routes = RefCell::new(Vec::<String>::new());
        let navigate = |route: &str| routes.borrow_mut().push(route.to_string());

        let action = handle_get_started(&auth, &navigate);

        assert_eq!(action, GetStarted::OpenDashboard);
        assert_eq!(auth.login_calls.get(), 0);
        assert_eq!(*routes.borrow(), vec![DASHBOARD_ROUTE.to_string()]);
    }

    #[test]
    fn test_get_started_label() {
        assert_eq!(get_started_label(true, "Start for Free"), "Go to Dashboard");
        assert_eq!(get_started_label(false, "Start for Free"), "Start for Free");
    }

    #[test]
    fn test_user_deserializes_without_picture() {
        let json = r#"{"id":"u1","name":"Bob","email":"bob@example.com"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.name, "Bob");
        assert!(user.picture.is_none());
    }
}
