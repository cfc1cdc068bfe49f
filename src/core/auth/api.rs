//! Auth API endpoints
//!
//! - GET /auth/login - Redirect to the external auth provider's login page

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    routing::get,
};
use std::sync::Arc;
use thiserror::Error;

use super::{DASHBOARD_ROUTE, LOGIN_ROUTE};
use crate::core::config::Config;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthRedirectError {
    #[error("login is unavailable: AUTH_PROVIDER_URL is not configured")]
    NotConfigured,
}

impl IntoResponse for AuthRedirectError {
    fn into_response(self) -> Response {
        let status = match self {
            AuthRedirectError::NotConfigured => StatusCode::SERVICE_UNAVAILABLE,
        };
        (status, self.to_string()).into_response()
    }
}

/// Provider login URL carrying the dashboard as the post-login destination
pub fn login_redirect_url(config: &Config, site_addr: &str) -> Result<String, AuthRedirectError> {
    let provider = config
        .auth_provider_url
        .as_deref()
        .ok_or(AuthRedirectError::NotConfigured)?;

    let return_to = format!("{}{}", config.public_url_or(site_addr), DASHBOARD_ROUTE);
    let separator = if provider.contains('?') { '&' } else { '?' };

    Ok(format!(
        "{}{}redirect={}",
        provider,
        separator,
        urlencoding::encode(&return_to)
    ))
}

/// Auth API state
#[derive(Debug, Clone)]
pub struct AuthApiState {
    pub config: Config,
    pub site_addr: String,
}

async fn login_handler(
    State(state): State<Arc<AuthApiState>>,
) -> Result<Redirect, AuthRedirectError> {
    match login_redirect_url(&state.config, &state.site_addr) {
        Ok(url) => {
            tracing::info!("Redirecting to auth provider");
            Ok(Redirect::to(&url))
        }
        Err(e) => {
            tracing::warn!("Login requested but no auth provider is configured");
            Err(e)
        }
    }
}

/// Create the auth API router
pub fn auth_api_router(state: AuthApiState) -> Router {
    Router::new()
        .route(LOGIN_ROUTE, get(login_handler))
        .with_state(Arc::new(state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, header};
    use tower::ServiceExt;

    fn configured() -> Config {
        Config::from_vars(
            Some("https://auth.example.com/login".to_string()),
            Some("https://flipcut.app".to_string()),
        )
    }

    #[test]
    fn test_redirect_url_encodes_return_address() {
        let url = login_redirect_url(&configured(), "127.0.0.1:3000").unwrap();
        assert_eq!(
            url,
            "https://auth.example.com/login?redirect=https%3A%2F%2Fflipcut.app%2Fdashboard"
        );
    }

    #[test]
    fn test_redirect_url_appends_to_existing_query() {
        let config = Config::from_vars(
            Some("https://auth.example.com/?app=flipcut".to_string()),
            None,
        );
        let url = login_redirect_url(&config, "127.0.0.1:3000").unwrap();
        assert_eq!(
            url,
            "https://auth.example.com/?app=flipcut&redirect=http%3A%2F%2F127.0.0.1%3A3000%2Fdashboard"
        );
    }

    #[test]
    fn test_redirect_url_requires_provider() {
        let result = login_redirect_url(&Config::default(), "127.0.0.1:3000");
        assert_eq!(result, Err(AuthRedirectError::NotConfigured));
    }

    #[tokio::test]
    async fn test_login_endpoint_redirects() {
        let app = auth_api_router(AuthApiState {
            config: configured(),
            site_addr: "127.0.0.1:3000".to_string(),
        });

        let response = app
            .oneshot(Request::get(LOGIN_ROUTE).body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        let location = response.headers().get(header::LOCATION).unwrap();
        assert!(
            location
                .to_str()
                .unwrap()
                .starts_with("https://auth.example.com/login?redirect=")
        );
    }

    #[tokio::test]
    async fn test_login_endpoint_unconfigured_is_unavailable() {
        let app = auth_api_router(AuthApiState {
            config: Config::default(),
            site_addr: "127.0.0.1:3000".to_string(),
        });

        let response = app
            .oneshot(Request::get(LOGIN_ROUTE).body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(String::from_utf8_lossy(&body).contains("AUTH_PROVIDER_URL"));
    }
}
