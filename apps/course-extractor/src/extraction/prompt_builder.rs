//! Prompt Builder — renders context and instruction into the fixed extraction template.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::extraction::prompts::{
    COURSE_PROMPT_TEMPLATE, NAMES_ONLY_SHAPE, NAMES_WITH_REASON_SHAPE,
    OBJECT_WITH_REASON_LIST_SHAPE,
};

/// The JSON shape the model is asked to produce. Only changes the prompt text;
/// the response extractor accepts any well-formed JSON.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputShape {
    /// `{"courses": ["name", ...], "reason": "..."}`
    #[default]
    NamesWithReason,
    /// `["name", ...]`
    NamesOnly,
    /// `{"courses": [{"name": "...", "reason": "..."}, ...]}`
    ObjectWithReasonList,
}

impl OutputShape {
    pub const ALL: [OutputShape; 3] = [
        OutputShape::NamesWithReason,
        OutputShape::NamesOnly,
        OutputShape::ObjectWithReasonList,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            OutputShape::NamesWithReason => "names-with-reason",
            OutputShape::NamesOnly => "names-only",
            OutputShape::ObjectWithReasonList => "object-with-reason-list",
        }
    }

    fn description(self) -> &'static str {
        match self {
            OutputShape::NamesWithReason => NAMES_WITH_REASON_SHAPE,
            OutputShape::NamesOnly => NAMES_ONLY_SHAPE,
            OutputShape::ObjectWithReasonList => OBJECT_WITH_REASON_LIST_SHAPE,
        }
    }
}

impl fmt::Display for OutputShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown output shape '{0}' (expected names-with-reason, names-only or object-with-reason-list)")]
pub struct ParseShapeError(String);

impl FromStr for OutputShape {
    type Err = ParseShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        OutputShape::ALL
            .into_iter()
            .find(|shape| shape.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseShapeError(s.to_string()))
    }
}

/// A prompt ready to hand to the model collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPrompt(String);

impl RenderedPrompt {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for RenderedPrompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PromptBuilder {
    shape: OutputShape,
}

impl PromptBuilder {
    pub fn new(shape: OutputShape) -> Self {
        Self { shape }
    }

    pub fn shape(&self) -> OutputShape {
        self.shape
    }

    /// Substitutes `context` and `instruction` into the template. Pure; never fails.
    pub fn render(&self, context: &str, instruction: &str) -> RenderedPrompt {
        RenderedPrompt(fill_template(
            COURSE_PROMPT_TEMPLATE,
            &[
                ("page_content", context),
                ("additional_instruction", instruction),
                ("output_shape", self.shape.description()),
            ],
        ))
    }
}

/// Single-pass `{key}` substitution. Substituted values are never rescanned, so
/// braces in caller text stay literal. Unknown `{...}` sequences are copied through.
fn fill_template(template: &str, vars: &[(&str, &str)]) -> String {
    let extra: usize = vars.iter().map(|(_, v)| v.len()).sum();
    let mut out = String::with_capacity(template.len() + extra);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open..];
        let hit = vars.iter().find(|(key, _)| {
            tail[1..]
                .strip_prefix(key)
                .is_some_and(|after| after.starts_with('}'))
        });
        match hit {
            Some((key, value)) => {
                out.push_str(value);
                rest = &tail[key.len() + 2..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}
