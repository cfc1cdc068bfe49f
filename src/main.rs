#![recursion_limit = "512"]
#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use axum::Router;
    use flipcut::app::*;
    use flipcut::core::auth::api::{AuthApiState, auth_api_router};
    use flipcut::core::config::Config;
    use leptos::logging::log;
    use leptos::prelude::*;
    use leptos_axum::{LeptosRoutes, generate_route_list};
    use tower_http::compression::{CompressionLayer, CompressionLevel};
    use tower_http::services::ServeDir;

    // Load .env file (if exists)
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration from Cargo.toml [package.metadata.leptos]
    // Can be overridden via LEPTOS_SITE_ADDR env var for Docker/K8s
    let conf = match get_configuration(None) {
        Ok(conf) => conf,
        Err(e) => {
            tracing::error!("Invalid Leptos configuration: {}", e);
            std::process::exit(1);
        }
    };
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;

    // Load application config from environment variables
    let config = Config::from_env().with_site_addr(&addr.to_string());
    tracing::info!(
        "Config loaded: auth_provider={}, public_url={}",
        config.has_auth_provider(),
        config.public_url_or(&addr.to_string())
    );

    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(App);

    // Serves .br (brotli) and .gz (gzip) variants when present
    let pkg_service = ServeDir::new(format!("{}/pkg", leptos_options.site_root))
        .precompressed_br()
        .precompressed_gzip();

    // Build the Leptos router
    let leptos_router = Router::new()
        .nest_service("/pkg", pkg_service)
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptos_options);

    let auth_api = auth_api_router(AuthApiState {
        config,
        site_addr: addr.to_string(),
    });

    // Build the main application router with compression
    let app = Router::new()
        // GET /auth/login -> external auth provider
        .merge(auth_api)
        // Leptos routes (nested to avoid state conflicts)
        .merge(leptos_router)
        .layer(
            CompressionLayer::new()
                .br(true)
                .gzip(true)
                .quality(CompressionLevel::Best),
        );

    log!("listening on http://{}", &addr);

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };
    if let Err(e) = axum::serve(listener, app.into_make_service()).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}
