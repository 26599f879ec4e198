//! Generic entity endpoints
//!
//! - GET  /{entity}/              list (page, per_page, q, column=value)
//! - GET  /{entity}/{id}/         detail
//! - POST /{entity}/add/          create
//! - POST /{entity}/{id}/edit/    update
//! - POST /{entity}/{id}/delete/  delete
//!
//! Form bodies are `application/x-www-form-urlencoded`.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::{
        rejection::{FormRejection, QueryRejection},
        Path, Query, State,
    },
    routing::{get, post},
    Form, Router,
};

use aerodesk_core::FormData;

use crate::db::{Pagination, PaginationParams};
use crate::http::error::ApiError;
use crate::http::extractors::Identity;
use crate::http::server::AppState;
use crate::orchestrator::{ListRequest, OperationKind, OperationRequest, Presentation};

/// Split raw query parameters into paging, search and equality filters.
pub fn list_request(mut params: BTreeMap<String, String>) -> ListRequest {
    let paging = PaginationParams {
        page: params.remove("page").and_then(|p| p.parse().ok()),
        per_page: params.remove("per_page").and_then(|p| p.parse().ok()),
    };
    let q = params.remove("q").filter(|q| !q.trim().is_empty());

    ListRequest {
        page: Pagination::from(paging),
        q,
        equals: params,
    }
}

/// GET /{entity}/
async fn list(
    State(state): State<Arc<AppState>>,
    Identity(ctx): Identity,
    Path(entity): Path<String>,
    query: Result<Query<BTreeMap<String, String>>, QueryRejection>,
) -> Result<Presentation, ApiError> {
    let Query(params) = query?;
    let request = OperationRequest::new(entity, OperationKind::List(list_request(params)));
    Ok(state.orchestrator.handle(&ctx, request).await)
}

/// GET /{entity}/{id}/
async fn detail(
    State(state): State<Arc<AppState>>,
    Identity(ctx): Identity,
    Path((entity, id)): Path<(String, String)>,
) -> Presentation {
    let request = OperationRequest::new(entity, OperationKind::Detail { id });
    state.orchestrator.handle(&ctx, request).await
}

/// POST /{entity}/add/
async fn create(
    State(state): State<Arc<AppState>>,
    Identity(ctx): Identity,
    Path(entity): Path<String>,
    form: Result<Form<FormData>, FormRejection>,
) -> Result<Presentation, ApiError> {
    let Form(fields) = form?;
    let request = OperationRequest::new(entity, OperationKind::Create { fields });
    Ok(state.orchestrator.handle(&ctx, request).await)
}

/// POST /{entity}/{id}/edit/
async fn update(
    State(state): State<Arc<AppState>>,
    Identity(ctx): Identity,
    Path((entity, id)): Path<(String, String)>,
    form: Result<Form<FormData>, FormRejection>,
) -> Result<Presentation, ApiError> {
    let Form(fields) = form?;
    let request = OperationRequest::new(entity, OperationKind::Update { id, fields });
    Ok(state.orchestrator.handle(&ctx, request).await)
}

/// POST /{entity}/{id}/delete/
async fn delete(
    State(state): State<Arc<AppState>>,
    Identity(ctx): Identity,
    Path((entity, id)): Path<(String, String)>,
) -> Presentation {
    let request = OperationRequest::new(entity, OperationKind::Delete { id });
    state.orchestrator.handle(&ctx, request).await
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/{entity}/", get(list))
        .route("/{entity}/add/", post(create))
        .route("/{entity}/{id}/", get(detail))
        .route("/{entity}/{id}/edit/", post(update))
        .route("/{entity}/{id}/delete/", post(delete))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn list_params_are_split() {
        let request = list_request(params(&[
            ("page", "3"),
            ("per_page", "500"),
            ("q", "ada"),
            ("countrycode", "44"),
        ]));

        assert_eq!(request.page, Pagination::new(3, 100));
        assert_eq!(request.q.as_deref(), Some("ada"));
        assert_eq!(request.equals, params(&[("countrycode", "44")]));
    }

    #[test]
    fn unparsable_paging_falls_back_to_defaults() {
        let request = list_request(params(&[("page", "two"), ("q", "  ")]));
        assert_eq!(request.page, Pagination::default());
        assert_eq!(request.q, None);
        assert!(request.equals.is_empty());
    }
}
