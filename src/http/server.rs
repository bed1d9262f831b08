//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the index handler
//! - Wire up middleware (tracing, timeout, request ID)
//! - Bind server to listener
//! - Render the encoding report per request
//! - Observability (metrics, correlation IDs)

use axum::{
    body::Body,
    http::{Request, StatusCode},
    response::{IntoResponse, Response},
    routing::any,
    Router,
};
use std::time::{Duration, Instant};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ServiceConfig;
use crate::encoding::MESSAGE;
use crate::http::request::{MakeUuidRequestId, RequestIdExt};
use crate::http::response::report;
use crate::observability::metrics;

/// Errors that stop the server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Failed to bind the configured address.
    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },
    /// The accept loop failed.
    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// HTTP server for the encoding report.
pub struct HttpServer {
    router: Router,
    config: ServiceConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ServiceConfig) -> Self {
        let router = Self::build_router(&config);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &ServiceConfig) -> Router {
        Router::new()
            .route("/", any(index_handler))
            .route("/{*path}", any(index_handler))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::x_request_id(MakeUuidRequestId))
    }

    /// Bind the configured listener address. Failure here is fatal to startup.
    pub async fn bind(&self) -> Result<TcpListener, ServerError> {
        let address = self.config.listener.bind_address();
        TcpListener::bind(&address)
            .await
            .map_err(|source| ServerError::Bind { address, source })
    }

    /// A clone of the fully layered router, for in-process use.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), ServerError> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }
}

/// Index handler. Serves every method and path.
async fn index_handler(request: Request<Body>) -> Response {
    let start_time = Instant::now();
    let method = request.method().to_string();

    tracing::debug!(
        request_id = %request.request_id(),
        method = %method,
        path = %request.uri().path(),
        "Rendering encodings"
    );

    match report(MESSAGE) {
        Ok(body) => {
            metrics::record_request(&method, 200, start_time);
            (StatusCode::OK, body).into_response()
        }
        Err(e) => {
            tracing::error!(request_id = %request.request_id(), error = %e, "Failed to write response");
            metrics::record_request(&method, 500, start_time);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::X_REQUEST_ID;
    use tower::ServiceExt;

    async fn send(request: Request<Body>) -> Response {
        HttpServer::new(ServiceConfig::default())
            .router()
            .oneshot(request)
            .await
            .unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_root_returns_report() {
        let response = send(Request::get("/").body(Body::empty()).unwrap()).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key(X_REQUEST_ID));
        assert_eq!(body_text(response).await, report(MESSAGE).unwrap());
    }

    #[tokio::test]
    async fn test_any_method_and_path() {
        let request = Request::post("/some/nested/path").body(Body::empty()).unwrap();
        let response = send(request).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await.lines().count(), 13);
    }

    #[test]
    fn test_config_is_retained() {
        let mut config = ServiceConfig::default();
        config.listener.port = 4321;
        config.timeouts.request_secs = 5;
        let server = HttpServer::new(config.clone());
        assert_eq!(server.config(), &config);
        assert_eq!(server.config().listener.bind_address(), "0.0.0.0:4321");
    }

    #[tokio::test]
    async fn test_client_request_id_is_echoed() {
        let request = Request::get("/")
            .header(X_REQUEST_ID, "trace-me")
            .body(Body::empty())
            .unwrap();
        let response = send(request).await;
        assert_eq!(response.headers()[X_REQUEST_ID], "trace-me");
    }
}
