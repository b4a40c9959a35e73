// Shared prompt fragments. Each pipeline step defines its own prompts.rs
// alongside it; this file holds only cross-cutting pieces.

/// System prompt fragment that enforces JSON-only output.
/// Prepended to every extraction step's system prompt.
pub const JSON_ONLY_SYSTEM: &str = "You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";
