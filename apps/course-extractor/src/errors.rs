use thiserror::Error;

use crate::extraction::response::ExtractionError;
use crate::llm_client::LlmError;

/// Outcome of a failed extraction call. Callers must branch on it; nothing
/// from the JSON layer escapes as a panic.
#[derive(Debug, Error)]
pub enum AppError {
    /// The model collaborator could not produce a reply.
    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    /// A reply arrived but no JSON could be recovered from it.
    #[error("Error parsing response: {0}")]
    Extraction(#[from] ExtractionError),
}

impl AppError {
    pub fn is_extraction(&self) -> bool {
        matches!(self, AppError::Extraction(_))
    }
}
