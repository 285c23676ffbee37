//! Prompt Builder — turns a `RoadmapRequest` into the (system, user) prompt pair.
//!
//! User prompt layout, each section separated by a blank line:
//!   company line → Program Design → Financial Model → Customer Analysis →
//!   Previous Roadmap → feedback
//! Empty fields contribute nothing. Any non-empty text, whitespace included,
//! is forwarded verbatim.

use crate::roadmap::models::{CurrentPromptData, PreviousData, RoadmapRequest};
use crate::roadmap::profile::RoadmapProfile;
use crate::roadmap::prompts::{
    CUSTOMER_ANALYSIS_HEADING, FEEDBACK_HEADING, FINANCIAL_MODEL_HEADING, PREVIOUS_ROADMAP_HEADING,
    PROGRAM_DESIGN_HEADING,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoadmapPrompts {
    pub system: String,
    pub user: String,
}

pub fn build_prompts(profile: RoadmapProfile, request: &RoadmapRequest) -> RoadmapPrompts {
    RoadmapPrompts {
        system: profile.system_prompt(),
        user: build_user_prompt(
            profile,
            &request.company_name,
            request.previous_data.as_ref(),
            request.current_prompt_data.as_ref(),
        ),
    }
}

pub fn build_user_prompt(
    profile: RoadmapProfile,
    company_name: &str,
    previous: Option<&PreviousData>,
    refinement: Option<&CurrentPromptData>,
) -> String {
    let mut prompt = profile.company_line(company_name);

    if let Some(previous) = previous {
        push_section(
            &mut prompt,
            PROGRAM_DESIGN_HEADING,
            previous.loyalty_program_design.as_deref(),
        );
        push_section(
            &mut prompt,
            FINANCIAL_MODEL_HEADING,
            previous.financial_model.as_deref(),
        );
        push_section(
            &mut prompt,
            CUSTOMER_ANALYSIS_HEADING,
            previous.customer_analysis.as_deref(),
        );
    }

    // Previous output without feedback (or vice versa) gives the model nothing to act on.
    if let Some(refinement) = refinement {
        if !refinement.existing_generated_output.is_empty()
            && !refinement.user_feedback.is_empty()
        {
            push_section(
                &mut prompt,
                PREVIOUS_ROADMAP_HEADING,
                Some(&refinement.existing_generated_output),
            );
            push_section(
                &mut prompt,
                FEEDBACK_HEADING,
                Some(&refinement.user_feedback),
            );
        }
    }

    prompt
}

fn push_section(prompt: &mut String, heading: &str, body: Option<&str>) {
    let Some(body) = body.filter(|b| !b.is_empty()) else {
        return;
    };
    prompt.push_str("\n\n");
    prompt.push_str(heading);
    prompt.push('\n');
    prompt.push_str(body);
}
