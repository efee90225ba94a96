//! Response Extractor — recovers a JSON value from raw model text.
//!
//! Strategy, in order:
//! 1. Parse the whole reply.
//! 2. Parse the span from the first `{` to the last `}` (inclusive).
//! 3. Optionally, parse the body of the first markdown code fence.
//!
//! The bracket span is naive: a reply holding several separate `{...}` fragments
//! is spanned from the first one to the last one and usually fails to parse.
//! Only syntax is checked; the recovered value may have any shape.

use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("no '{{' ... '}}' pair found in model reply")]
    NoBracketPair,

    #[error("closing brace at byte {close} does not follow opening brace at byte {open}")]
    DegenerateBrackets { open: usize, close: usize },

    #[error("bracketed span is not valid JSON: {0}")]
    Salvage(#[source] serde_json::Error),
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ResponseExtractor {
    fenced_blocks: bool,
}

impl ResponseExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a last-resort stage that parses the first ```` ``` ```` fenced block.
    /// Runs only after the whole-reply and bracket stages have both failed.
    pub fn with_fenced_blocks(mut self, enabled: bool) -> Self {
        self.fenced_blocks = enabled;
        self
    }

    pub fn extract(&self, raw: &str) -> Result<Value, ExtractionError> {
        if let Ok(value) = serde_json::from_str::<Value>(raw) {
            return Ok(value);
        }
        debug!("Reply is not JSON as a whole, trying bracket span");

        let err = match salvage_bracket_span(raw) {
            Ok(value) => return Ok(value),
            Err(err) => err,
        };

        if self.fenced_blocks {
            if let Some(value) = fenced_block(raw)
                .and_then(|block| serde_json::from_str::<Value>(block).ok())
            {
                debug!("Recovered JSON from fenced block");
                return Ok(value);
            }
        }

        warn!("Error parsing response: {err}");
        Err(err)
    }
}

/// Extracts JSON with the default extractor (no fenced-block stage).
pub fn extract_json(raw: &str) -> Result<Value, ExtractionError> {
    ResponseExtractor::default().extract(raw)
}

fn salvage_bracket_span(raw: &str) -> Result<Value, ExtractionError> {
    let (Some(open), Some(close)) = (raw.find('{'), raw.rfind('}')) else {
        return Err(ExtractionError::NoBracketPair);
    };
    if close <= open {
        return Err(ExtractionError::DegenerateBrackets { open, close });
    }
    serde_json::from_str(&raw[open..=close]).map_err(ExtractionError::Salvage)
}

/// Body of the first ```` ```json ```` block, else of the first bare ```` ``` ```` block.
fn fenced_block(raw: &str) -> Option<&str> {
    ["```json", "```"].into_iter().find_map(|fence| {
        let start = raw.find(fence)? + fence.len();
        let len = raw[start..].find("```")?;
        Some(raw[start..start + len].trim())
    })
}
