use aerovia_core::Wallet;
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/v1/wallet/{user_id}", get(get_wallet))
}

async fn get_wallet(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Wallet>, AppError> {
    let wallet = state
        .ledger
        .balance_of(&user_id)
        .await
        .map_err(AppError::internal)?
        .ok_or_else(|| AppError::NotFound(format!("Wallet not found: {user_id}")))?;
    Ok(Json(wallet))
}
