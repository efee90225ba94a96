//! Course Extractor — prompt → model → JSON, one call at a time.
//! All model calls go through the `ModelClient` trait.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

use crate::errors::AppError;
use crate::extraction::prompt_builder::{OutputShape, PromptBuilder};
use crate::extraction::response::ResponseExtractor;
use crate::llm_client::ModelClient;

/// Caller-selected extraction settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractorConfig {
    pub shape: OutputShape,
    /// Try the first markdown fence after the bracket span fails.
    #[serde(default)]
    pub fenced_blocks: bool,
}

/// Stateless pairing of a prompt builder and a response extractor.
/// Safe to share across tasks; every call builds fresh values.
#[derive(Debug, Clone, Copy, Default)]
pub struct CourseExtractor {
    builder: PromptBuilder,
    response: ResponseExtractor,
}

impl CourseExtractor {
    pub fn new(config: ExtractorConfig) -> Self {
        Self {
            builder: PromptBuilder::new(config.shape),
            response: ResponseExtractor::new().with_fenced_blocks(config.fenced_blocks),
        }
    }

    pub fn builder(&self) -> &PromptBuilder {
        &self.builder
    }

    /// Renders the prompt, invokes the model once, and recovers JSON from the reply.
    pub async fn extract(
        &self,
        model: &dyn ModelClient,
        context: &str,
        instruction: &str,
    ) -> Result<Value, AppError> {
        let prompt = self.builder.render(context, instruction);
        debug!(
            "Rendered prompt ({} bytes, shape: {})",
            prompt.as_str().len(),
            self.builder.shape()
        );

        let reply = model.invoke(prompt.as_str()).await?;
        let value = self.response.extract(&reply.content)?;

        info!("Recovered course data from model reply");
        Ok(value)
    }
}

/// Extracts course data with the default configuration (names-with-reason prompt,
/// whole-reply then bracket-span parsing).
pub async fn extract_course_data(
    model: &dyn ModelClient,
    context: &str,
    instruction: &str,
) -> Result<Value, AppError> {
    CourseExtractor::default()
        .extract(model, context, instruction)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use serde_json::json;

    use crate::extraction::response::ExtractionError;
    use crate::llm_client::{LlmError, ModelReply};

    /// Replies with a fixed text and records every prompt it receives.
    struct ScriptedModel {
        reply: Result<String, u16>,
        prompts: Mutex<Vec<String>>,
    }

    impl ScriptedModel {
        fn replying(text: &str) -> Self {
            Self {
                reply: Ok(text.to_string()),
                prompts: Mutex::new(Vec::new()),
            }
        }

        fn failing(status: u16) -> Self {
            Self {
                reply: Err(status),
                prompts: Mutex::new(Vec::new()),
            }
        }

        fn prompts(&self) -> Vec<String> {
            self.prompts.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ModelClient for ScriptedModel {
        async fn invoke(&self, prompt: &str) -> Result<ModelReply, LlmError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            match &self.reply {
                Ok(text) => Ok(ModelReply::new(text.clone())),
                Err(status) => Err(LlmError::Api {
                    status: *status,
                    message: "overloaded".into(),
                }),
            }
        }
    }

    const CONTEXT: &str = "- Computer Science and Engineering (CSE)\n- Data Science (DS)\n- Mechanical Engineering (ME)";
    const INSTRUCTION: &str = "identify only CSE-related courses";

    #[tokio::test]
    async fn test_extract_course_data_strict_reply() {
        let model = ScriptedModel::replying(
            r#"{"courses": ["Computer Science and Engineering", "Data Science"], "reason": "CSE-related"}"#,
        );
        let value = extract_course_data(&model, CONTEXT, INSTRUCTION)
            .await
            .unwrap();
        assert_eq!(
            value,
            json!({"courses": ["Computer Science and Engineering", "Data Science"], "reason": "CSE-related"})
        );
    }

    #[tokio::test]
    async fn test_model_receives_rendered_prompt_once() {
        let model = ScriptedModel::replying("[]");
        let extractor = CourseExtractor::new(ExtractorConfig {
            shape: OutputShape::NamesOnly,
            fenced_blocks: false,
        });
        extractor.extract(&model, CONTEXT, INSTRUCTION).await.unwrap();

        let prompts = model.prompts();
        assert_eq!(prompts.len(), 1);
        assert_eq!(
            prompts[0],
            extractor.builder().render(CONTEXT, INSTRUCTION).into_string()
        );
    }

    #[tokio::test]
    async fn test_chatty_reply_is_salvaged() {
        let model = ScriptedModel::replying(r#"Sure! {"courses": ["CSE101"]} Hope that helps."#);
        let value = extract_course_data(&model, CONTEXT, INSTRUCTION)
            .await
            .unwrap();
        assert_eq!(value, json!({"courses": ["CSE101"]}));
    }

    #[tokio::test]
    async fn test_unparseable_reply_is_extraction_error() {
        let model = ScriptedModel::replying("I could not find any courses.");
        let err = extract_course_data(&model, CONTEXT, INSTRUCTION)
            .await
            .unwrap_err();
        assert!(err.is_extraction());
        assert!(matches!(
            err,
            AppError::Extraction(ExtractionError::NoBracketPair)
        ));
    }

    #[tokio::test]
    async fn test_model_failure_is_llm_error() {
        let model = ScriptedModel::failing(529);
        let err = extract_course_data(&model, CONTEXT, INSTRUCTION)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::Llm(LlmError::Api { status: 529, .. })
        ));
        assert_eq!(model.prompts().len(), 1);
    }

    #[tokio::test]
    async fn test_fenced_config_recovers_bare_array() {
        let model = ScriptedModel::replying("Here:\n```json\n[\"CSE101\"]\n```");
        let extractor = CourseExtractor::new(ExtractorConfig {
            shape: OutputShape::NamesOnly,
            fenced_blocks: true,
        });
        let value = extractor.extract(&model, CONTEXT, INSTRUCTION).await.unwrap();
        assert_eq!(value, json!(["CSE101"]));

        let err = extract_course_data(&model, CONTEXT, INSTRUCTION)
            .await
            .unwrap_err();
        assert!(err.is_extraction());
    }

    #[tokio::test]
    async fn test_concurrent_calls_share_one_extractor() {
        let model = ScriptedModel::replying(r#"{"courses": ["AI"]}"#);
        let extractor = CourseExtractor::default();
        let (a, b) = tokio::join!(
            extractor.extract(&model, "first", INSTRUCTION),
            extractor.extract(&model, "second", INSTRUCTION)
        );
        assert_eq!(a.unwrap(), b.unwrap());
        assert_eq!(model.prompts().len(), 2);
    }

    #[test]
    fn test_extractor_config_deserializes_with_default_fenced() {
        let config: ExtractorConfig =
            serde_json::from_str(r#"{"shape": "object-with-reason-list"}"#).unwrap();
        assert_eq!(config.shape, OutputShape::ObjectWithReasonList);
        assert!(!config.fenced_blocks);
    }
}
