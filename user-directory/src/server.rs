//! HTTP server with graceful shutdown

use axum::Router;
use http::{HeaderValue, Method, StatusCode};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::{
    catch_panic::CatchPanicLayer,
    compression::CompressionLayer,
    cors::{AllowOrigin, CorsLayer},
    limit::RequestBodyLimitLayer,
    timeout::TimeoutLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};

use crate::{
    config::Config,
    error::{Error, Result},
    middleware::{header_name, request_id_layer, request_id_propagation_layer, sensitive_headers_layer},
};

/// Server instance
pub struct Server {
    config: Config,
}

impl Server {
    /// Create a new server instance
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Wrap `app` in the middleware stack
    ///
    /// Layers are applied inside out: the last `.layer` call is the
    /// outermost and sees the request first.
    pub fn with_middleware(&self, app: Router) -> Result<Router> {
        let middleware = &self.config.middleware;
        let body_limit = middleware.body_limit_mb * 1024 * 1024;
        let request_id_header = header_name(&middleware.request_id_header)?;
        let cors_layer = self.build_cors_layer()?;

        let app = app
            .layer(CatchPanicLayer::new())
            .layer(CompressionLayer::new())
            .layer(RequestBodyLimitLayer::new(body_limit))
            .layer(TimeoutLayer::with_status_code(
                StatusCode::REQUEST_TIMEOUT,
                self.config.service.timeout(),
            ))
            .layer(cors_layer)
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(DefaultMakeSpan::new().include_headers(true))
                    .on_response(DefaultOnResponse::new().include_headers(true)),
            )
            .layer(sensitive_headers_layer())
            .layer(request_id_propagation_layer(request_id_header.clone()))
            .layer(request_id_layer(request_id_header));

        Ok(app)
    }

    /// Run the server with the given router
    pub async fn serve(self, app: Router) -> Result<()> {
        let addr = SocketAddr::from(([0, 0, 0, 0], self.config.service.port));

        tracing::info!("Starting {} on {}", self.config.service.name, addr);
        self.log_middleware_config();

        let app = self.with_middleware(app)?;

        let listener = TcpListener::bind(&addr).await?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");

        Ok(())
    }

    fn log_middleware_config(&self) {
        let middleware = &self.config.middleware;
        tracing::info!("Middleware configuration:");
        tracing::info!("  - Panic recovery: enabled");
        tracing::info!("  - Request ID header: {}", middleware.request_id_header);
        tracing::info!("  - Request body limit: {} MB", middleware.body_limit_mb);
        tracing::info!("  - Compression: enabled");
        tracing::info!("  - CORS origin: {}", middleware.cors_allowed_origin);
        tracing::info!(
            "  - Request timeout: {} seconds",
            self.config.service.timeout_secs
        );
    }

    /// CORS restricted to the configured origin, read-only methods
    ///
    /// Requests from any other origin get no `Access-Control-Allow-Origin`.
    fn build_cors_layer(&self) -> Result<CorsLayer> {
        let origin = &self.config.middleware.cors_allowed_origin;
        if origin == "*" {
            return Err(Error::InvalidConfig(
                "CORS origin must be a single origin, not `*`".to_string(),
            ));
        }
        let origin = HeaderValue::from_str(origin).map_err(|e| {
            Error::InvalidConfig(format!("invalid CORS origin `{origin}`: {e}"))
        })?;

        Ok(CorsLayer::new()
            .allow_origin(AllowOrigin::list([origin]))
            .allow_methods([Method::GET, Method::HEAD]))
    }
}

/// Wait for shutdown signal (SIGTERM or SIGINT)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl+C), starting graceful shutdown");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        },
    }

    tracing::info!("Shutdown signal received, draining requests...");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{routes::router, state::AppState};
    use axum::body::Body;
    use http::{header, Request};
    use tower::ServiceExt;

    fn app(config: Config) -> Router {
        let server = Server::new(config.clone());
        let state = AppState::seeded(config).unwrap();
        server.with_middleware(router(state)).unwrap()
    }

    #[test]
    fn test_server_creation() {
        let config = Config::default();
        let server = Server::new(config.clone());
        assert_eq!(server.config().service.port, config.service.port);
    }

    #[test]
    fn test_invalid_cors_origin_rejected() {
        let mut config = Config::default();
        config.middleware.cors_allowed_origin = "bad\norigin".to_string();
        let server = Server::new(config);
        assert!(matches!(
            server.with_middleware(Router::new()),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_wildcard_cors_origin_rejected() {
        let mut config = Config::default();
        config.middleware.cors_allowed_origin = "*".to_string();
        let server = Server::new(config);
        assert!(matches!(
            server.with_middleware(Router::new()),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[tokio::test]
    async fn test_cors_allows_configured_origin() {
        let response = app(Config::default())
            .oneshot(
                Request::get("/api/users")
                    .header(header::ORIGIN, "http://localhost:3001")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "http://localhost:3001"
        );
    }

    #[tokio::test]
    async fn test_cors_ignores_other_origins() {
        let response = app(Config::default())
            .oneshot(
                Request::get("/api/users")
                    .header(header::ORIGIN, "http://evil.example")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none());
    }

    #[tokio::test]
    async fn test_cors_preflight_from_other_origin_not_allowed() {
        let response = app(Config::default())
            .oneshot(
                Request::options("/api/users")
                    .header(header::ORIGIN, "http://evil.example")
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert!(response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none());
    }

    #[tokio::test]
    async fn test_request_id_generated_and_propagated() {
        let response = app(Config::default())
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert!(response.headers().get("x-request-id").is_some());

        let response = app(Config::default())
            .oneshot(
                Request::get("/health")
                    .header("x-request-id", "abc-123")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.headers().get("x-request-id").unwrap(), "abc-123");
    }
}
