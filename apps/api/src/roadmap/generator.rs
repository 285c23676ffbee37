//! Roadmap Generation — prompt build → gateway call → split → shape check.
//!
//! Stateless: everything lives for one request. Failures are terminal; there is
//! no retry and no partial response.

use tracing::{debug, info, warn};

use crate::errors::AppError;
use crate::llm_client::CompletionGateway;
use crate::roadmap::builder::build_prompts;
use crate::roadmap::models::{RoadmapRequest, RoadmapResponse};
use crate::roadmap::profile::RoadmapProfile;
use crate::roadmap::splitter::{split_response, ExtractionError};

/// Per-request generation settings, copied out of `AppState`.
#[derive(Debug, Clone, Copy)]
pub struct GenerationOptions {
    pub profile: RoadmapProfile,
    /// Fail the request when structured data does not match the profile schema.
    pub strict_schema: bool,
}

pub async fn generate_roadmap(
    gateway: &dyn CompletionGateway,
    options: GenerationOptions,
    request: &RoadmapRequest,
) -> Result<RoadmapResponse, AppError> {
    let prompts = build_prompts(options.profile, request);
    debug!(
        "Built prompts: system={} chars, user={} chars",
        prompts.system.len(),
        prompts.user.len()
    );

    let raw = gateway.complete(&prompts.system, &prompts.user).await?;
    debug!("Generator returned {} chars", raw.len());

    let split = split_response(&raw)?;

    if let Err(reason) = options.profile.check_schema(&split.structured) {
        if options.strict_schema {
            return Err(ExtractionError::SchemaMismatch {
                profile: options.profile.to_string(),
                reason,
            }
            .into());
        }
        warn!(
            "Structured data does not match the {} schema: {reason}",
            options.profile
        );
    }

    info!(
        "Roadmap generated: narrative={} chars, top-level keys={}",
        split.narrative.len(),
        split.structured.len()
    );

    Ok(RoadmapResponse {
        generated_output: split.narrative,
        structured_data: split.structured,
    })
}
