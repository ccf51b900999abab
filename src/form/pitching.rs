use std::collections::HashSet;

use chrono::{DateTime, Utc};

use super::file_upload::{ExternallyOwned, FileRef, FileUpload, UploadProps};
use super::notify::{Notification, Notifier};
use super::payload::SubmissionPayload;
use super::schema::{self, FieldErrors, RawInput};
use super::state::{Field, FileField, FormState};
use crate::client::{FormIntake, SubmitError};

/// Stand-in text for requirement extraction from the TOR document.
pub const REQUIREMENTS_PLACEHOLDER: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Sed do eiusmod tempor incididunt ut labore et dolore magna aliqua. Ut enim ad minim veniam, quis nostrud exercitation ullamco laboris nisi ut aliquip ex ea commodo consequat. Duis aute irure dolor in reprehenderit in voluptate velit esse cillum dolore eu fugiat nulla pariatur.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Pending,
}

impl SubmitStatus {
    /// Label of the submit button in this state.
    pub fn label(self) -> &'static str {
        match self {
            SubmitStatus::Idle => "Generate Pitch Deck",
            SubmitStatus::Pending => "Generating...",
        }
    }
}

/// Why a submit did not send anything.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitBlocked {
    AlreadyPending,
    Invalid(FieldErrors),
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Sent(serde_json::Value),
    Failed(String),
    Blocked(SubmitBlocked),
}

/// The pitching form: five inputs, validated on every change, submitted as a
/// single JSON payload.
#[derive(Debug, Default)]
pub struct PitchingForm {
    state: FormState,
    errors: FieldErrors,
    touched: HashSet<Field>,
    submit_attempted: bool,
    status: SubmitStatus,
}

impl PitchingForm {
    pub fn new() -> Self {
        let mut form = Self::default();
        form.revalidate();
        form
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Error for a field once the user has touched it or tried to submit.
    pub fn visible_error(&self, field: Field) -> Option<&str> {
        if self.submit_attempted || self.touched.contains(&field) {
            self.errors.get(field)
        } else {
            None
        }
    }

    /// Resume a draft without marking any field as touched.
    pub fn restore(&mut self, state: FormState) {
        self.state = state;
        self.revalidate();
    }

    fn revalidate(&mut self) {
        self.errors = schema::validate(&self.state);
    }

    fn touch(&mut self, field: Field) {
        self.touched.insert(field);
        self.revalidate();
    }

    pub fn set_presentation_time(&mut self, raw: impl Into<RawInput>) {
        self.state.presentation_time = schema::coerce_presentation_time(raw.into());
        self.touch(Field::PresentationTime);
    }

    pub fn set_notes(&mut self, notes: &str) {
        self.state.notes = notes.to_string();
        self.touch(Field::Notes);
    }

    pub fn set_customer_requirements(&mut self, text: &str) {
        self.state.customer_requirements = text.to_string();
        self.touch(Field::CustomerRequirements);
    }

    pub fn set_file(&mut self, field: FileField, file: Option<FileRef>) {
        self.state.set_file(field, file);
        self.touch(field.field());
    }

    pub fn upload_props(&self, field: FileField) -> UploadProps {
        let props = UploadProps::new(field.wire_name(), field.field().label())
            .accept(field.accept())
            .error(self.visible_error(field.field()).map(String::from));
        if field.is_required() {
            props.required()
        } else {
            props.optional()
        }
    }

    /// Upload control for one file field, bound to this form's state.
    pub fn file_control(
        &mut self,
        field: FileField,
    ) -> FileUpload<ExternallyOwned<impl FnMut(Option<FileRef>) + '_>> {
        let value = self.state.file(field).cloned();
        let props = self.upload_props(field);
        FileUpload::controlled(props, value, move |file| self.set_file(field, file))
    }

    pub fn can_generate_requirements(&self) -> bool {
        self.state.has_tor_file()
    }

    /// Fill customer requirements from the TOR document. Does nothing until a
    /// TOR file is held; otherwise overwrites the current text.
    pub fn generate_requirements(&mut self) -> bool {
        if !self.can_generate_requirements() {
            return false;
        }
        self.set_customer_requirements(REQUIREMENTS_PLACEHOLDER);
        true
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmitStatus::Pending
    }

    pub fn submit_label(&self) -> &'static str {
        self.status.label()
    }

    /// Start a submit: build the payload and switch to pending, or report
    /// why nothing can be sent.
    pub fn prepare_submit(&mut self, now: DateTime<Utc>) -> Result<SubmissionPayload, SubmitBlocked> {
        self.submit_attempted = true;
        if self.status == SubmitStatus::Pending {
            return Err(SubmitBlocked::AlreadyPending);
        }
        self.revalidate();
        if !self.errors.is_empty() {
            return Err(SubmitBlocked::Invalid(self.errors.clone()));
        }
        self.status = SubmitStatus::Pending;
        Ok(SubmissionPayload::snapshot(&self.state, now))
    }

    /// Finish a submit started with `prepare_submit`. Field values are kept
    /// either way.
    pub fn complete_submit(
        &mut self,
        result: Result<serde_json::Value, SubmitError>,
        notifier: &mut impl Notifier,
    ) -> SubmitOutcome {
        self.status = SubmitStatus::Idle;
        match result {
            Ok(response) => {
                log::info!("Form submitted, API response: {response}");
                notifier.notify(Notification::Submitted { response: response.clone() });
                SubmitOutcome::Sent(response)
            }
            Err(e) => {
                log::warn!("Form submission failed: {e}");
                let reason = e.to_string();
                notifier.notify(Notification::Failed { reason: reason.clone() });
                SubmitOutcome::Failed(reason)
            }
        }
    }

    /// One submit attempt against `intake`.
    pub async fn submit(&mut self, intake: &impl FormIntake, notifier: &mut impl Notifier) -> SubmitOutcome {
        let payload = match self.prepare_submit(Utc::now()) {
            Ok(payload) => payload,
            Err(blocked) => return SubmitOutcome::Blocked(blocked),
        };
        let result = intake.send(&payload).await;
        self.complete_submit(result, notifier)
    }
}
