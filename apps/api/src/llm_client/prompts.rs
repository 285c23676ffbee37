// Shared prompt constants for dual-format (narrative + JSON) generations.
// Profile-specific prompts live in roadmap/prompts.rs.

/// Marker the model must emit immediately before the structured JSON block.
pub const JSON_START_MARKER: &str = "[JSON_START]";

/// Marker the model must emit immediately after the structured JSON block.
pub const JSON_END_MARKER: &str = "[JSON_END]";

/// Closing instruction appended to every dual-format system prompt.
pub const DUAL_FORMAT_INSTRUCTION: &str =
    "Separate the two parts with [JSON_START] and [JSON_END] markers.";
