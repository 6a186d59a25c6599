//! Host and scheme matching
//!
//! Every route is scoped to one host and plain `http`; requests addressed
//! elsewhere fall through to the generic not-found response.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::header::HOST;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::error::SodaError;

/// The host that routes answer for
#[derive(Debug, Clone)]
pub struct RoutedHost {
    host: Arc<str>,
}

impl RoutedHost {
    pub fn new(host: &str) -> Self {
        let host = host.trim_start_matches('[').trim_end_matches(']');
        Self { host: host.into() }
    }

    /// Whether `authority` (`host` or `host:port`) names this host
    ///
    /// The port is ignored and hostnames compare case-insensitively.
    pub fn matches(&self, authority: &str) -> bool {
        strip_port(authority).eq_ignore_ascii_case(&self.host)
    }
}

fn strip_port(authority: &str) -> &str {
    if let Some(rest) = authority.strip_prefix('[') {
        return rest.split(']').next().unwrap_or(rest);
    }
    match authority.rsplit_once(':') {
        Some((host, port)) if !host.contains(':') && port.bytes().all(|b| b.is_ascii_digit()) => {
            host
        }
        _ => authority,
    }
}

pub async fn match_host(State(routed): State<RoutedHost>, request: Request, next: Next) -> Response {
    let scheme_ok = matches!(request.uri().scheme_str(), None | Some("http"));

    let authority = request
        .headers()
        .get(HOST)
        .and_then(|value| value.to_str().ok())
        .or_else(|| request.uri().authority().map(|a| a.as_str()));
    let host_ok = authority.is_some_and(|a| routed.matches(a));

    if scheme_ok && host_ok {
        next.run(request).await
    } else {
        tracing::debug!(host = ?authority, uri = %request.uri(), "No route for host");
        SodaError::RouteNotFound.into_response()
    }
}
