use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use super::file_upload::FileRef;
use super::state::FormState;

/// JSON body sent to the intake route on submit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    pub presentation_time: String,
    pub notes: String,
    pub customer_requirements: String,
    pub tor_document: Option<FileRef>,
    pub reference_slide: Option<FileRef>,
    pub slide_brief: Option<FileRef>,
    pub has_tor_file: bool,
    pub timestamp: String,
}

impl SubmissionPayload {
    pub fn snapshot(state: &FormState, now: DateTime<Utc>) -> Self {
        Self {
            presentation_time: state.presentation_time.clone(),
            notes: state.notes.clone(),
            customer_requirements: state.customer_requirements.clone(),
            tor_document: state.tor_document.clone(),
            reference_slide: state.reference_slide.clone(),
            slide_brief: state.slide_brief.clone(),
            has_tor_file: state.has_tor_file(),
            timestamp: iso_timestamp(now),
        }
    }
}

/// `2026-10-17T09:30:00.000Z`
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}
