use crate::config::ConfigSource;
use crate::redirect::{self, TemporaryRedirect};
use axum::extract::Extension;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::error;
use serde_json::json;
use std::sync::Arc;

pub async fn root(Extension(config): Extension<Arc<dyn ConfigSource>>) -> Response {
    match redirect::resolve_and_redirect(config.as_ref(), &TemporaryRedirect) {
        Ok(response) => response,
        Err(e) => {
            error!("{}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "message": e.to_string() })),
            )
                .into_response()
        }
    }
}
