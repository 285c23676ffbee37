//! Axum route handler for the Roadmap API.

use axum::{extract::State, Json};
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use crate::errors::AppError;
use crate::roadmap::generator::generate_roadmap;
use crate::roadmap::models::{RoadmapRequest, RoadmapResponse};
use crate::state::AppState;

/// POST /generate
///
/// Builds prompts from the request, makes one generator call and returns the
/// narrative plus the structured roadmap object. Any failure is a 500.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<RoadmapRequest>,
) -> Result<Json<RoadmapResponse>, AppError> {
    let span = info_span!(
        "generate",
        request_id = %Uuid::new_v4(),
        company = %request.company_name
    );

    async move {
        let options = state.generation_options();
        info!(
            "Generating roadmap: profile={}, previous_data={}, feedback={}",
            options.profile,
            request.previous_data.is_some(),
            request.current_prompt_data.is_some()
        );
        let response = generate_roadmap(state.gateway.as_ref(), options, &request).await?;
        Ok::<_, AppError>(Json(response))
    }
    .instrument(span)
    .await
}
