//! Request/response bodies for `POST /generate` and the typed roadmap schemas
//! advertised by each profile.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Previously-produced artifacts used to ground the generation.
/// Union of both profiles' fields; any subset may be supplied.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PreviousData {
    #[serde(default)]
    pub loyalty_program_design: Option<String>,
    #[serde(default)]
    pub financial_model: Option<String>,
    #[serde(default)]
    pub customer_analysis: Option<String>,
}

/// Refinement context. Both fields are required when the object is present.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentPromptData {
    pub existing_generated_output: String,
    pub user_feedback: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RoadmapRequest {
    pub company_name: String,
    #[serde(default)]
    pub previous_data: Option<PreviousData>,
    #[serde(default)]
    pub current_prompt_data: Option<CurrentPromptData>,
    /// Accepted for forward compatibility; not used in prompt construction.
    #[serde(default)]
    #[allow(dead_code)]
    pub other_input_data: Option<Map<String, Value>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoadmapResponse {
    pub generated_output: String,
    pub structured_data: Map<String, Value>,
}

// ────────────────────────────────────────────────────────────────────────────
// Profile schemas (shape check only — responses carry the raw JSON object)
// ────────────────────────────────────────────────────────────────────────────

/// Top-level wrapper shared by both profiles: `{"roadmap": {...}}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoadmapDocument<P> {
    pub roadmap: P,
}

/// Plan body for the implementation profile. `key_risks` is required here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImplementationPlan {
    pub phases: Vec<ImplementationPhase>,
    pub total_duration: String,
    pub critical_dependencies: Vec<String>,
    pub key_risks: Vec<String>,
}

/// Plan body for the technical profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TechnicalPlan {
    pub phases: Vec<TechnicalPhase>,
    pub total_duration: String,
    pub critical_dependencies: Vec<String>,
}

/// Phase entry for the implementation profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImplementationPhase {
    pub name: String,
    pub duration: String,
    pub start_date: String,
    pub key_milestones: Vec<String>,
    pub deliverables: Vec<String>,
    pub resource_requirements: Vec<String>,
    pub dependencies: Vec<String>,
    pub risks: Vec<String>,
}

/// Phase entry for the technical profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TechnicalPhase {
    pub name: String,
    pub duration: String,
    pub key_objectives: Vec<String>,
    pub technical_requirements: Vec<String>,
    pub dependencies: Vec<String>,
    pub estimated_effort: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_minimal_request_deserializes() {
        let request: RoadmapRequest =
            serde_json::from_value(json!({"company_name": "Acme"})).unwrap();
        assert_eq!(request.company_name, "Acme");
        assert!(request.previous_data.is_none());
        assert!(request.current_prompt_data.is_none());
        assert!(request.other_input_data.is_none());
    }

    #[test]
    fn test_request_without_company_name_fails() {
        let result: Result<RoadmapRequest, _> =
            serde_json::from_value(json!({"previous_data": {"financial_model": "x"}}));
        assert!(result.is_err());
    }

    #[test]
    fn test_current_prompt_data_requires_both_fields() {
        let result: Result<RoadmapRequest, _> = serde_json::from_value(json!({
            "company_name": "Acme",
            "current_prompt_data": {"existing_generated_output": "old"}
        }));
        assert!(
            result.is_err(),
            "refinement context without user_feedback must be rejected"
        );
    }

    #[test]
    fn test_previous_data_accepts_any_subset() {
        let request: RoadmapRequest = serde_json::from_value(json!({
            "company_name": "Acme",
            "previous_data": {"customer_analysis": "Segments: A, B"},
            "other_input_data": {"region": "EU", "tiers": 3}
        }))
        .unwrap();
        let previous = request.previous_data.unwrap();
        assert_eq!(previous.customer_analysis.as_deref(), Some("Segments: A, B"));
        assert!(previous.loyalty_program_design.is_none());
        assert_eq!(request.other_input_data.unwrap()["tiers"], 3);
    }

    #[test]
    fn test_other_input_data_must_be_object() {
        let result: Result<RoadmapRequest, _> = serde_json::from_value(json!({
            "company_name": "Acme",
            "other_input_data": [1, 2]
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_technical_document_deserializes_without_key_risks() {
        let doc: RoadmapDocument<TechnicalPlan> = serde_json::from_value(json!({
            "roadmap": {
                "phases": [{
                    "name": "Foundation",
                    "duration": "6 weeks",
                    "key_objectives": ["Stand up points ledger"],
                    "technical_requirements": ["POS integration"],
                    "dependencies": [],
                    "estimated_effort": "12 person-weeks"
                }],
                "total_duration": "6 months",
                "critical_dependencies": ["POS vendor API"]
            }
        }))
        .unwrap();
        assert_eq!(doc.roadmap.phases.len(), 1);
        assert_eq!(doc.roadmap.phases[0].estimated_effort, "12 person-weeks");
    }
}
