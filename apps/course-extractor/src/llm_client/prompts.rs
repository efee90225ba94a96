// Shared prompt fragments sent with every model call.
// Extraction templates live in extraction::prompts.

/// System prompt that asks for JSON-only output. Advisory: the reply is still
/// run through the tolerant extractor.
pub const JSON_ONLY_SYSTEM: &str = "You are a precise, structured assistant. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";
