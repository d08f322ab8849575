use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use aerovia_core::Flight;
use serde::Deserialize;

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
struct SearchParams {
    q: Option<String>,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/v1/flights", get(search_flights))
}

async fn search_flights(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<Flight>>, AppError> {
    let flights = state
        .catalog
        .search(params.q.as_deref())
        .await
        .map_err(AppError::internal)?;
    Ok(Json(flights))
}
