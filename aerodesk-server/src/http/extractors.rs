//! Custom Axum extractors

use std::convert::Infallible;
use std::sync::Arc;

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use super::server::AppState;
use crate::orchestrator::RequestContext;

/// Caller identity from `Authorization: Bearer <token>`.
///
/// With no token configured every caller is authenticated. A wrong or
/// missing token yields an anonymous context rather than a rejection; the
/// orchestrator decides what anonymous callers may see.
pub struct Identity(pub RequestContext);

impl FromRequestParts<Arc<AppState>> for Identity {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let Some(expected) = state.api_token.as_deref() else {
            return Ok(Self(RequestContext::authenticated("local")));
        };

        let presented = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .map(str::trim);

        match presented {
            Some(token) if token == expected => Ok(Self(RequestContext::authenticated("api"))),
            Some(_) => {
                tracing::warn!("rejected bearer token");
                Ok(Self(RequestContext::anonymous()))
            }
            None => Ok(Self(RequestContext::anonymous())),
        }
    }
}
