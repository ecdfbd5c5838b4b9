pub mod root;

use axum::{
    body::{Body, HttpBody},
    extract::Request,
    http::Uri,
    middleware::{self, Next},
    response::{IntoResponse, Result},
    routing::get,
    Router,
};
use tower::Layer;
use tower_http::{
    cors::{Any, CorsLayer},
    normalize_path::{NormalizePath, NormalizePathLayer},
};

use crate::error::RouteError;

pub fn app() -> NormalizePath<Router<()>> {
    NormalizePathLayer::trim_trailing_slash().layer(router())
}
pub fn router() -> Router<()> {
    Router::new()
        .route("/", get(root::root))
        .fallback(not_found)
        .layer(cors())
        .layer(middleware::from_fn(logging))
}

/// Wildcard policy: any origin, method, header. Credentials stay disabled,
/// the wildcard origin cannot be combined with them.
pub fn cors() -> CorsLayer {
    CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any)
}

pub async fn not_found(uri: Uri) -> Result<()> {
    Err(RouteError::not_found(uri.to_string()))?
}

pub async fn logging(req: Request<Body>, next: Next) -> impl IntoResponse {
    let (method, uri) = (req.method().clone(), req.uri().clone());
    let res = next.run(req).await;
    let (status, bytes) = (res.status(), res.size_hint().lower());
    tracing::info!("{} {} {} {}", status, method, uri, bytes);
    res
}
