//! Typed view over recovered course JSON.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// A single selected course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRecord {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Courses recovered from a model reply, whichever output shape it used.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseSelection {
    pub courses: Vec<CourseRecord>,
    /// Overall selection reason (names-with-reason shape only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShapeError {
    #[error("expected an array or an object with a `courses` list, got {0}")]
    UnexpectedRoot(&'static str),

    #[error("`courses` must be an array, got {0}")]
    CoursesNotArray(&'static str),

    #[error("course #{index} has no usable name")]
    MissingName { index: usize },

    #[error("`reason` must be a string, got {0}")]
    ReasonNotString(&'static str),
}

impl CourseSelection {
    /// Interprets any of the three supported shapes:
    /// `["a", ...]`, `{"courses": ["a", ...], "reason": "..."}`,
    /// `{"courses": [{"name": "a", "reason": "..."}, ...]}`.
    pub fn from_value(value: &Value) -> Result<Self, ShapeError> {
        match value {
            Value::Array(items) => Ok(Self {
                courses: parse_courses(items)?,
                reason: None,
            }),
            Value::Object(map) => {
                let courses = match map.get("courses") {
                    Some(Value::Array(items)) => parse_courses(items)?,
                    Some(other) => return Err(ShapeError::CoursesNotArray(kind(other))),
                    None => return Err(ShapeError::UnexpectedRoot("an object without `courses`")),
                };
                let reason = optional_string(map.get("reason"))?;
                Ok(Self { courses, reason })
            }
            other => Err(ShapeError::UnexpectedRoot(kind(other))),
        }
    }

    pub fn names(&self) -> Vec<&str> {
        self.courses.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

fn parse_courses(items: &[Value]) -> Result<Vec<CourseRecord>, ShapeError> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::String(name) if !name.trim().is_empty() => Ok(CourseRecord {
                name: name.clone(),
                reason: None,
            }),
            Value::Object(map) => {
                let name = map
                    .get("name")
                    .and_then(Value::as_str)
                    .filter(|n| !n.trim().is_empty())
                    .ok_or(ShapeError::MissingName { index })?;
                Ok(CourseRecord {
                    name: name.to_string(),
                    reason: optional_string(map.get("reason"))?,
                })
            }
            _ => Err(ShapeError::MissingName { index }),
        })
        .collect()
}

fn optional_string(value: Option<&Value>) -> Result<Option<String>, ShapeError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(ShapeError::ReasonNotString(kind(other))),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
