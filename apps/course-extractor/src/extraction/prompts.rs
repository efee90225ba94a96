// Prompt constants for course extraction.
// The model is told which JSON shape to return; nothing here enforces it.

/// Course extraction prompt template.
/// Placeholders: {page_content}, {additional_instruction}, {output_shape}
pub const COURSE_PROMPT_TEMPLATE: &str = r#"### CONTEXT:
{page_content}

### INSTRUCTION:
Analyze the provided context, objectives, and constraints, then {additional_instruction}.
{output_shape}

Return only the JSON containing the relevant courses, excluding unnecessary information. Do not include any preamble or extraneous details."#;

/// Variant A: one object with a name list and a single overall reason.
pub const NAMES_WITH_REASON_SHAPE: &str = r#"Organize results in JSON format with the following structure:
- `courses`: List of course names that match the instruction (e.g., Computer Science and Engineering, Data Science, AI, etc.)
- `reason`: One explanation covering why these courses were selected (workload, schedule, assessments, prerequisites, cost, instructor, add/drop policy).

Example:
{"courses": ["Course A", "Course B"], "reason": "..."}"#;

/// Variant B: a bare array of names.
pub const NAMES_ONLY_SHAPE: &str = r#"Organize results as a JSON array containing only the names of the matching courses.

Example:
["Course A", "Course B"]"#;

/// Variant C: one object whose `courses` list carries a reason per course.
pub const OBJECT_WITH_REASON_LIST_SHAPE: &str = r#"Organize results in JSON format with the following structure:
- `courses`: List of objects, one per matching course, each with:
  - `name`: the course name
  - `reason`: why this course was selected

Example:
{"courses": [{"name": "Course A", "reason": "..."}, {"name": "Course B", "reason": "..."}]}"#;
