// Shared prompt fragments. Each feature that calls the model defines its own
// prompts.rs alongside it and appends these where they apply.

/// Appended to every system prompt whose reply is parsed as JSON.
pub const JSON_ONLY_INSTRUCTION: &str = "You MUST respond with a single valid JSON object only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";
