// Course extraction: prompt rendering, the model round trip, and JSON recovery.
// All model calls go through llm_client::ModelClient.

pub mod extractor;
pub mod models;
pub mod prompt_builder;
pub mod prompts;
pub mod response;

pub use extractor::{extract_course_data, CourseExtractor, ExtractorConfig};
pub use models::{CourseRecord, CourseSelection, ShapeError};
pub use prompt_builder::{OutputShape, ParseShapeError, PromptBuilder, RenderedPrompt};
pub use response::{extract_json, ExtractionError, ResponseExtractor};
