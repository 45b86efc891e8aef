use crate::config::ConfigSource;
use axum::extract::Extension;
use axum::routing::any;
use axum::Router;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

pub mod root;

pub fn app(config: Arc<dyn ConfigSource>) -> Router {
    Router::new().route("/", any(root::root)).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(Extension(config)),
    )
}
