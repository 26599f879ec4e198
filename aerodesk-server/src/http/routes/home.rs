//! Dashboard and cross-entity search

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Router,
};
use serde::Deserialize;

use crate::http::extractors::Identity;
use crate::http::server::AppState;
use crate::orchestrator::Presentation;

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

/// GET / - counts and recent flights
async fn dashboard(State(state): State<Arc<AppState>>, Identity(ctx): Identity) -> Presentation {
    state.orchestrator.dashboard(&ctx).await
}

/// GET /search/?q= - flights, airlines, airports and passengers
async fn search(
    State(state): State<Arc<AppState>>,
    Identity(ctx): Identity,
    Query(params): Query<SearchParams>,
) -> Presentation {
    state.orchestrator.search(&ctx, &params.q).await
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(dashboard))
        .route("/search/", get(search))
}
