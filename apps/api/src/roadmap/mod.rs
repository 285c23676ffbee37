// Roadmap generation: prompt building, the single generator call, and
// marker-based splitting of the reply into narrative + structured data.
// All LLM calls go through llm_client::CompletionGateway.

pub mod builder;
pub mod generator;
pub mod handlers;
pub mod models;
pub mod profile;
pub mod prompts;
pub mod splitter;
