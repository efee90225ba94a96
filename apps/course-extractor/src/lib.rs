//! course-extractor — asks a language model which courses in a block of text match an
//! instruction, and recovers the answer as JSON.

pub mod config;
pub mod errors;
pub mod extraction;
pub mod llm_client;

pub use errors::AppError;
pub use extraction::{
    extract_course_data, extract_json, CourseExtractor, CourseRecord, CourseSelection,
    ExtractionError, ExtractorConfig, OutputShape, PromptBuilder, RenderedPrompt,
    ResponseExtractor,
};
pub use llm_client::{LlmClient, LlmError, ModelClient, ModelReply};
