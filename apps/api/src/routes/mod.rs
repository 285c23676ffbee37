use axum::{routing::post, Router};

use crate::roadmap::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/generate", post(handlers::handle_generate))
        .with_state(state)
}
