use std::collections::BTreeMap;

use super::file_upload::FileRef;
use super::state::{Field, FormState};

pub const PRESENTATION_TIME_REQUIRED: &str = "Presentation time is required";
pub const PRESENTATION_TIME_MINIMUM: &str = "Presentation time must be at least 1 minute";

/// A value as it arrives from an input before coercion.
#[derive(Debug, Clone, PartialEq)]
pub enum RawInput {
    Text(String),
    Number(f64),
    Null,
    Undefined,
}

impl From<&str> for RawInput {
    fn from(s: &str) -> Self {
        RawInput::Text(s.to_string())
    }
}

impl From<String> for RawInput {
    fn from(s: String) -> Self {
        RawInput::Text(s)
    }
}

impl From<f64> for RawInput {
    fn from(n: f64) -> Self {
        RawInput::Number(n)
    }
}

/// Presentation time is always stored as text.
pub fn coerce_presentation_time(raw: RawInput) -> String {
    match raw {
        RawInput::Text(s) => s,
        RawInput::Number(n) => n.to_string(),
        RawInput::Null | RawInput::Undefined => String::new(),
    }
}

/// Validation errors keyed by field, in display order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    fn insert(&mut self, field: Field, message: Option<String>) {
        if let Some(message) = message {
            self.0.insert(field, message);
        }
    }
}

fn validate_presentation_time(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some(PRESENTATION_TIME_REQUIRED.to_string());
    }
    match trimmed.parse::<f64>() {
        Ok(minutes) if minutes.is_finite() && minutes >= 1.0 => None,
        _ => Some(PRESENTATION_TIME_MINIMUM.to_string()),
    }
}

fn validate_required(value: &str, field: Field) -> Option<String> {
    if value.is_empty() {
        return Some(format!("{} is required", field.label()));
    }
    None
}

fn validate_required_file(file: Option<&FileRef>, field: Field) -> Option<String> {
    if file.is_none() {
        return Some(format!("{} is required", field.label()));
    }
    None
}

/// Run every rule against the whole form. The slide brief is never checked.
pub fn validate(state: &FormState) -> FieldErrors {
    let mut errors = FieldErrors::default();
    errors.insert(
        Field::PresentationTime,
        validate_presentation_time(&state.presentation_time),
    );
    errors.insert(Field::Notes, validate_required(&state.notes, Field::Notes));
    errors.insert(
        Field::CustomerRequirements,
        validate_required(&state.customer_requirements, Field::CustomerRequirements),
    );
    errors.insert(
        Field::TorDocument,
        validate_required_file(state.tor_document.as_ref(), Field::TorDocument),
    );
    errors.insert(
        Field::ReferenceSlide,
        validate_required_file(state.reference_slide.as_ref(), Field::ReferenceSlide),
    );
    errors
}
