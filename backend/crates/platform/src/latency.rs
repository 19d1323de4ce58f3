//! Request Latency Logging
//!
//! Middleware that times every request and logs it at a level that
//! escalates with the duration.

use axum::body::Body;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use std::time::{Duration, Instant};

/// Requests faster than this are logged at `info`
pub const SLOW_REQUEST: Duration = Duration::from_millis(100);

/// Requests at or above this are logged at `error`
pub const VERY_SLOW_REQUEST: Duration = Duration::from_millis(500);

/// Log severity chosen for a request duration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LatencyLevel {
    Normal,
    Slow,
    VerySlow,
}

impl LatencyLevel {
    pub fn classify(duration: Duration) -> Self {
        if duration < SLOW_REQUEST {
            LatencyLevel::Normal
        } else if duration < VERY_SLOW_REQUEST {
            LatencyLevel::Slow
        } else {
            LatencyLevel::VerySlow
        }
    }
}

/// Middleware: `axum::middleware::from_fn(log_request_latency)`
pub async fn log_request_latency(req: Request<Body>, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let started = Instant::now();

    let response = next.run(req).await;

    let duration = started.elapsed();
    let status = response.status().as_u16();
    let duration_ms = duration.as_secs_f64() * 1000.0;

    match LatencyLevel::classify(duration) {
        LatencyLevel::Normal => {
            tracing::info!(%method, %path, status, duration_ms, "Request completed");
        }
        LatencyLevel::Slow => {
            tracing::warn!(%method, %path, status, duration_ms, "Slow request");
        }
        LatencyLevel::VerySlow => {
            tracing::error!(%method, %path, status, duration_ms, "Very slow request");
        }
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Router;
    use axum::routing::get;
    use tower::ServiceExt;

    #[test]
    fn test_classify_thresholds() {
        assert_eq!(LatencyLevel::classify(Duration::from_millis(0)), LatencyLevel::Normal);
        assert_eq!(LatencyLevel::classify(Duration::from_millis(99)), LatencyLevel::Normal);
        assert_eq!(LatencyLevel::classify(Duration::from_millis(100)), LatencyLevel::Slow);
        assert_eq!(LatencyLevel::classify(Duration::from_millis(499)), LatencyLevel::Slow);
        assert_eq!(LatencyLevel::classify(Duration::from_millis(500)), LatencyLevel::VerySlow);
        assert_eq!(LatencyLevel::classify(Duration::from_secs(3)), LatencyLevel::VerySlow);
    }

    #[tokio::test]
    async fn test_middleware_passes_response_through() {
        let app = Router::new()
            .route("/ping", get(|| async { "pong" }))
            .layer(axum::middleware::from_fn(log_request_latency));

        let response = app
            .oneshot(Request::builder().uri("/ping").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), 200);
    }
}
