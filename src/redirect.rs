use crate::config::{ConfigSource, DEFAULT_CHANNEL_VAR, FALLBACK_CHANNEL};
use axum::http::header::{InvalidHeaderValue, CACHE_CONTROL, LOCATION};
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use log::debug;
use std::error::Error;

#[derive(Debug)]
pub enum RedirectError {
    InvalidTarget { path: String, source: InvalidHeaderValue },
}

impl Error for RedirectError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            RedirectError::InvalidTarget { source, .. } => Some(source),
        }
    }
}

impl std::fmt::Display for RedirectError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            RedirectError::InvalidTarget { path, source } => {
                write!(f, "Cannot redirect to '{path}': {source}")
            }
        }
    }
}

/// The host's way of ending a request with a redirect.
pub trait Redirector {
    type Output;

    fn redirect(&self, path: &str) -> Self::Output;
}

/// Answers with `307 Temporary Redirect`. The target is never cached downstream.
#[derive(Clone, Copy, Debug, Default)]
pub struct TemporaryRedirect;

impl Redirector for TemporaryRedirect {
    type Output = Result<Response, RedirectError>;

    fn redirect(&self, path: &str) -> Self::Output {
        // Sent as-is: spaces and non-ASCII bytes are allowed, control characters are not
        let location = HeaderValue::from_bytes(path.as_bytes()).map_err(|source| {
            RedirectError::InvalidTarget {
                path: path.to_string(),
                source,
            }
        })?;
        Ok((
            StatusCode::TEMPORARY_REDIRECT,
            [
                (LOCATION, location),
                (CACHE_CONTROL, HeaderValue::from_static("no-store")),
            ],
        )
            .into_response())
    }
}

/// Reads the default channel. Only a missing value falls back; an empty
/// string is returned as-is.
pub fn resolve_channel(config: &dyn ConfigSource) -> String {
    match config.get(DEFAULT_CHANNEL_VAR) {
        Some(channel) => {
            debug!("Using configured default channel '{}'", channel);
            channel
        }
        None => {
            debug!(
                "{} is not set, falling back to '{}'",
                DEFAULT_CHANNEL_VAR, FALLBACK_CHANNEL
            );
            String::from(FALLBACK_CHANNEL)
        }
    }
}

pub fn target_path(channel: &str) -> String {
    format!("/{channel}")
}

pub fn resolve_and_redirect<R: Redirector>(
    config: &dyn ConfigSource,
    redirector: &R,
) -> R::Output {
    let path = target_path(&resolve_channel(config));
    debug!("Redirecting to {}", path);
    redirector.redirect(&path)
}
