use actix_session::Session;
use actix_web::{HttpResponse, web};
use serde::Deserialize;

use crate::auth::csrf;
use crate::auth::session::set_flash;
use crate::client::ApiClient;
use crate::errors::{AppError, render};
use crate::form::{FileField, FileRef, FormState, Notification, Notifications, PitchingForm, SubmitOutcome};
use crate::templates_structs::{PageContext, PitchFormTemplate};

/// Posted draft. File inputs are mirrored into `<field>_name`, `<field>_size`
/// and `<field>_type` by static/js/file-upload.js.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PitchFormInput {
    #[serde(rename = "presentationTime")]
    pub presentation_time: String,
    pub notes: String,
    #[serde(rename = "customerRequirements")]
    pub customer_requirements: String,
    #[serde(rename = "torDocument_name")]
    pub tor_document_name: String,
    #[serde(rename = "torDocument_size")]
    pub tor_document_size: String,
    #[serde(rename = "torDocument_type")]
    pub tor_document_type: String,
    #[serde(rename = "referenceSlide_name")]
    pub reference_slide_name: String,
    #[serde(rename = "referenceSlide_size")]
    pub reference_slide_size: String,
    #[serde(rename = "referenceSlide_type")]
    pub reference_slide_type: String,
    #[serde(rename = "slideBrief_name")]
    pub slide_brief_name: String,
    #[serde(rename = "slideBrief_size")]
    pub slide_brief_size: String,
    #[serde(rename = "slideBrief_type")]
    pub slide_brief_type: String,
    pub action: String,
    pub csrf_token: String,
}

impl PitchFormInput {
    pub fn to_state(&self) -> FormState {
        FormState {
            presentation_time: self.presentation_time.clone(),
            notes: self.notes.clone(),
            customer_requirements: self.customer_requirements.clone(),
            tor_document: FileRef::from_fields(
                &self.tor_document_name,
                &self.tor_document_size,
                &self.tor_document_type,
            ),
            reference_slide: FileRef::from_fields(
                &self.reference_slide_name,
                &self.reference_slide_size,
                &self.reference_slide_type,
            ),
            slide_brief: FileRef::from_fields(
                &self.slide_brief_name,
                &self.slide_brief_size,
                &self.slide_brief_type,
            ),
        }
    }
}

/// Which button posted the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PitchAction {
    Generate,
    Remove(FileField),
    Submit,
}

impl PitchAction {
    pub fn parse(raw: &str) -> Self {
        if raw == "generate" {
            return PitchAction::Generate;
        }
        raw.strip_prefix("remove_")
            .and_then(FileField::from_wire_name)
            .map(PitchAction::Remove)
            .unwrap_or(PitchAction::Submit)
    }
}

/// GET /pitch
pub async fn form_page(session: Session) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(&session);
    let mut form = PitchingForm::new();
    render(PitchFormTemplate::new(ctx, &mut form))
}

/// POST /pitch
/// Replays the posted draft and runs the button's action. Only a successful
/// submit leaves the page; everything else re-renders with the draft intact.
pub async fn submit(
    client: web::Data<ApiClient>,
    session: Session,
    input: web::Form<PitchFormInput>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &input.csrf_token)?;

    let input = input.into_inner();
    let mut form = PitchingForm::new();
    form.restore(input.to_state());

    let mut failure = None;
    match PitchAction::parse(&input.action) {
        PitchAction::Generate => {
            if !form.generate_requirements() {
                log::debug!("Requirement generation requested without a TOR document");
            }
        }
        PitchAction::Remove(field) => {
            form.file_control(field).remove();
        }
        PitchAction::Submit => {
            let mut notifications = Notifications::new();
            let outcome = form.submit(client.get_ref(), &mut notifications).await;
            let message = notifications.last().map(Notification::message);
            match outcome {
                SubmitOutcome::Sent(_) => {
                    set_flash(&session, message.unwrap_or_default())?;
                    return Ok(HttpResponse::SeeOther()
                        .insert_header(("Location", "/pitch"))
                        .finish());
                }
                SubmitOutcome::Failed(_) => failure = message,
                SubmitOutcome::Blocked(_) => {}
            }
        }
    }

    let ctx = PageContext::build(&session);
    let tmpl = PitchFormTemplate::new(ctx, &mut form);
    match failure {
        Some(message) => render(tmpl.with_failure(message)),
        None => render(tmpl),
    }
}
