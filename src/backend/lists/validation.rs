//! Input validation for lists and elements
//!
//! Turns raw JSON objects into validated drafts, or a `FieldErrors` map
//! describing every offending field. Unknown keys are ignored. Read-only
//! keys (`id`, `created_at`, and `tlist` on elements) never overwrite
//! stored values.

use serde_json::{Map, Value};

use crate::backend::lists::store::{NewElement, NewList};
use crate::shared::error::{FieldErrors, NON_FIELD_ERRORS};
use crate::shared::lists::{Element, TravelList};

pub const NAME_MAX_LEN: usize = 255;
pub const DESCRIPTION_MAX_LEN: usize = 2000;

const REQUIRED: &str = "This field is required.";
const NOT_NULL: &str = "This field may not be null.";
const NOT_BLANK: &str = "This field may not be blank.";
const NOT_A_STRING: &str = "Not a valid string.";
const NOT_AN_INTEGER: &str = "A valid integer is required.";

/// A raw element entry, classified by the presence of an `id`
#[derive(Debug, Clone, PartialEq)]
pub enum ElementEntry {
    /// No `id`: a new element for the list
    Create(Map<String, Value>),
    /// An `id`: a partial update of an existing element
    Update { id: i64, fields: Map<String, Value> },
}

impl ElementEntry {
    /// Classify a raw entry. A falsy `id` (null, `0`, `false` or `""`)
    /// counts as absent, so `{"id": 0}` creates a new element.
    pub fn parse(raw: &Value) -> Result<Self, FieldErrors> {
        let fields = expect_object(raw)?;
        match fields.get("id") {
            None | Some(Value::Null) | Some(Value::Bool(false)) => Ok(Self::Create(fields)),
            Some(Value::Number(n)) if n.as_f64() == Some(0.0) => Ok(Self::Create(fields)),
            Some(Value::String(s)) if s.is_empty() => Ok(Self::Create(fields)),
            Some(id) => match id.as_i64() {
                Some(id) => Ok(Self::Update { id, fields }),
                None => Err(FieldErrors::single("id", NOT_AN_INTEGER)),
            },
        }
    }
}

/// Require a JSON object
pub fn expect_object(value: &Value) -> Result<Map<String, Value>, FieldErrors> {
    match value {
        Value::Object(fields) => Ok(fields.clone()),
        other => Err(FieldErrors::single(
            NON_FIELD_ERRORS,
            format!("Invalid data. Expected a dictionary, but got {}.", json_kind(other)),
        )),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "str",
        Value::Array(_) => "list",
        Value::Object(_) => "dict",
    }
}

fn char_value(value: &Value, max_len: usize, allow_blank: bool) -> Result<String, String> {
    let text = value.as_str().ok_or_else(|| NOT_A_STRING.to_string())?.trim();
    if !allow_blank && text.is_empty() {
        return Err(NOT_BLANK.to_string());
    }
    if text.chars().count() > max_len {
        return Err(format!("Ensure this field has no more than {} characters.", max_len));
    }
    Ok(text.to_string())
}

fn name_value(value: &Value) -> Result<String, String> {
    if value.is_null() {
        return Err(NOT_NULL.to_string());
    }
    char_value(value, NAME_MAX_LEN, false)
}

fn description_value(value: &Value) -> Result<Option<String>, String> {
    if value.is_null() {
        return Ok(None);
    }
    char_value(value, DESCRIPTION_MAX_LEN, true).map(Some)
}

/// Validate `field` with `check` if it is present, recording any error
fn optional<T>(
    fields: &Map<String, Value>,
    field: &str,
    errors: &mut FieldErrors,
    check: impl Fn(&Value) -> Result<T, String>,
) -> Option<T> {
    let value = fields.get(field)?;
    check(value).map_err(|message| errors.add(field, message)).ok()
}

/// Like `optional`, but a missing field is an error too
fn required<T>(
    fields: &Map<String, Value>,
    field: &str,
    errors: &mut FieldErrors,
    check: impl Fn(&Value) -> Result<T, String>,
) -> Option<T> {
    if !fields.contains_key(field) {
        errors.add(field, REQUIRED);
        return None;
    }
    optional(fields, field, errors, check)
}

/// Validate the fields of a new list (`author` already stamped)
pub fn validate_new_list(fields: &Map<String, Value>) -> Result<NewList, FieldErrors> {
    let mut errors = FieldErrors::new();
    let name = required(fields, "name", &mut errors, name_value);
    let author = required(fields, "author", &mut errors, |value| {
        value.as_i64().ok_or_else(|| NOT_AN_INTEGER.to_string())
    });

    match (name, author) {
        (Some(name), Some(author)) if errors.is_empty() => Ok(NewList { name, author }),
        _ => Err(errors),
    }
}

/// Merge a partial update into an existing list
///
/// Only `name` is writable; `author` is fixed at creation.
pub fn validate_list_patch(existing: TravelList, patch: &Map<String, Value>) -> Result<TravelList, FieldErrors> {
    let mut errors = FieldErrors::new();
    let name = optional(patch, "name", &mut errors, name_value);

    errors.into_result(TravelList {
        name: name.unwrap_or(existing.name.clone()),
        ..existing
    })
}

/// Validate the fields of a new element
///
/// Any client-supplied `tlist` is ignored: the owning list is the one the
/// request targets.
pub fn validate_new_element(fields: &Map<String, Value>) -> Result<NewElement, FieldErrors> {
    let mut errors = FieldErrors::new();
    let name = required(fields, "name", &mut errors, name_value);
    let description = optional(fields, "description", &mut errors, description_value).flatten();

    match name {
        Some(name) if errors.is_empty() => Ok(NewElement { name, description }),
        _ => Err(errors),
    }
}

/// Merge a partial update into an existing element
pub fn validate_element_patch(existing: Element, patch: &Map<String, Value>) -> Result<Element, FieldErrors> {
    let mut errors = FieldErrors::new();
    let name = optional(patch, "name", &mut errors, name_value);
    let description = optional(patch, "description", &mut errors, description_value);

    errors.into_result(Element {
        name: name.unwrap_or(existing.name.clone()),
        description: description.unwrap_or(existing.description.clone()),
        ..existing
    })
}
