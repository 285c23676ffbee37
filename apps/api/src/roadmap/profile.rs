//! Roadmap profiles — one service, two prompt/schema pairings.
//!
//! A profile decides the system instruction (and the schema it advertises),
//! the wording of the company line, and the typed schema used by the
//! structured-data shape check. Selected once at startup from `ROADMAP_PROFILE`.

use std::fmt;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::llm_client::prompts::DUAL_FORMAT_INSTRUCTION;
use crate::roadmap::models::{ImplementationPlan, RoadmapDocument, TechnicalPlan};
use crate::roadmap::prompts::{
    IMPLEMENTATION_COMPANY_LINE, IMPLEMENTATION_SYSTEM, TECHNICAL_COMPANY_LINE, TECHNICAL_SYSTEM,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RoadmapProfile {
    /// Phases with milestones, deliverables, resources and risks.
    #[default]
    Implementation,
    /// Phases with objectives, technical requirements and effort estimates.
    Technical,
}

impl RoadmapProfile {
    /// Full system instruction: profile body followed by the marker contract.
    pub fn system_prompt(&self) -> String {
        let body = match self {
            RoadmapProfile::Implementation => IMPLEMENTATION_SYSTEM,
            RoadmapProfile::Technical => TECHNICAL_SYSTEM,
        };
        format!("{body}\n{DUAL_FORMAT_INSTRUCTION}\n")
    }

    pub fn company_line(&self, company_name: &str) -> String {
        let template = match self {
            RoadmapProfile::Implementation => IMPLEMENTATION_COMPANY_LINE,
            RoadmapProfile::Technical => TECHNICAL_COMPANY_LINE,
        };
        template.replace("{company_name}", company_name)
    }

    /// Checks `structured` against this profile's advertised schema.
    /// Returns the deserialization error text on mismatch.
    pub fn check_schema(&self, structured: &Map<String, Value>) -> Result<(), String> {
        match self {
            RoadmapProfile::Implementation => {
                check_as::<RoadmapDocument<ImplementationPlan>>(structured)
            }
            RoadmapProfile::Technical => check_as::<RoadmapDocument<TechnicalPlan>>(structured),
        }
    }
}

fn check_as<T: DeserializeOwned>(structured: &Map<String, Value>) -> Result<(), String> {
    serde_json::from_value::<T>(Value::Object(structured.clone()))
        .map(|_| ())
        .map_err(|e| e.to_string())
}

impl fmt::Display for RoadmapProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoadmapProfile::Implementation => f.write_str("implementation"),
            RoadmapProfile::Technical => f.write_str("technical"),
        }
    }
}

impl FromStr for RoadmapProfile {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "implementation" => Ok(RoadmapProfile::Implementation),
            "technical" => Ok(RoadmapProfile::Technical),
            other => anyhow::bail!("unknown roadmap profile '{other}'"),
        }
    }
}
