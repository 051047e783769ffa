//! No-cache headers middleware
//!
//! Readings change minute to minute, so no response may be cached by the
//! browser or an intermediary. Headers set on every response, errors and
//! static files included:
//! - `Cache-Control: no-cache, no-store, must-revalidate`
//! - `Pragma: no-cache`
//! - `Expires: 0`
//!
//! Existing values are overwritten.
//!
//! # Example
//!
//! ```ignore
//! use presentation_http::middleware::NoCacheLayer;
//!
//! let app = Router::new()
//!     .route("/forecast", get(handler))
//!     .layer(NoCacheLayer::new());
//! ```

use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};

use axum::{
    extract::Request,
    http::{
        HeaderValue,
        header::{CACHE_CONTROL, EXPIRES, PRAGMA},
    },
    response::Response,
};
use tower::{Layer, Service};

/// Layer that disables caching on all responses
#[derive(Clone, Debug, Default)]
pub struct NoCacheLayer;

impl NoCacheLayer {
    /// Create a new no-cache layer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl<S> Layer<S> for NoCacheLayer {
    type Service = NoCache<S>;

    fn layer(&self, inner: S) -> Self::Service {
        NoCache { inner }
    }
}

/// Middleware service that adds no-cache headers
#[derive(Clone, Debug)]
pub struct NoCache<S> {
    inner: S,
}

impl<S> Service<Request> for NoCache<S>
where
    S: Service<Request, Response = Response> + Clone + Send + 'static,
    S::Future: Send,
{
    type Response = Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request) -> Self::Future {
        let mut inner = self.inner.clone();

        Box::pin(async move {
            let mut response = inner.call(req).await?;

            let headers = response.headers_mut();
            headers.insert(
                CACHE_CONTROL,
                HeaderValue::from_static("no-cache, no-store, must-revalidate"),
            );
            headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));
            headers.insert(EXPIRES, HeaderValue::from_static("0"));

            Ok(response)
        })
    }
}
