//! Shared test infrastructure.
//!
//! - Sample files and a fully valid form
//! - `RecordingIntake`: an in-memory `FormIntake` that records payloads
//! - `spawn_api()`: a real echo API bound to an ephemeral port

#![allow(dead_code)]

use std::sync::Mutex;

use actix_web::{App, HttpServer};
use pitchdeck::client::{FormIntake, SubmitError};
use pitchdeck::form::{FileField, FileRef, PitchingForm, SubmissionPayload};

// ============================================================================
// SAMPLE DATA
// ============================================================================

pub fn tor_file() -> FileRef {
    FileRef::new("tor.pdf", 20_480, "application/pdf")
}

pub fn reference_file() -> FileRef {
    FileRef::new("reference.pptx", 512_000, "application/vnd.openxmlformats-officedocument.presentationml.presentation")
}

pub fn brief_file() -> FileRef {
    FileRef::new("brief.pdf", 4_096, "application/pdf")
}

/// A form that passes every rule.
pub fn filled_form() -> PitchingForm {
    let mut form = PitchingForm::new();
    form.set_presentation_time("30");
    form.set_notes("Customer cares about delivery dates");
    form.set_customer_requirements("Cloud migration in two phases");
    form.set_file(FileField::TorDocument, Some(tor_file()));
    form.set_file(FileField::ReferenceSlide, Some(reference_file()));
    form
}

// ============================================================================
// FAKE INTAKE
// ============================================================================

/// Records every payload it receives and answers like the echo API, or with
/// the configured HTTP status.
#[derive(Default)]
pub struct RecordingIntake {
    pub sent: Mutex<Vec<SubmissionPayload>>,
    pub fail_with: Option<u16>,
}

impl RecordingIntake {
    pub fn failing(status: u16) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail_with: Some(status),
        }
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().expect("lock").len()
    }
}

impl FormIntake for RecordingIntake {
    async fn send(&self, payload: &SubmissionPayload) -> Result<serde_json::Value, SubmitError> {
        self.sent.lock().expect("lock").push(payload.clone());
        match self.fail_with {
            Some(status) => Err(SubmitError::Status(status)),
            None => Ok(serde_json::json!({ "received": payload })),
        }
    }
}

// ============================================================================
// LIVE API
// ============================================================================

/// Start the echo API on an ephemeral port. Must run inside an actix runtime.
pub fn spawn_api() -> String {
    let server = HttpServer::new(|| App::new().configure(pitchdeck::api::configure))
        .workers(1)
        .bind(("127.0.0.1", 0))
        .expect("Failed to bind test server");
    let addr = server.addrs()[0];
    actix_rt::spawn(server.run());
    format!("http://{addr}")
}

/// An address nothing listens on.
pub const UNREACHABLE_API: &str = "http://127.0.0.1:9";
