use askama::Template;

use super::PageContext;
use crate::form::{Field, FileField, FileOwner, FileUpload, PitchingForm, SubmitStatus};

/// One upload control as the template draws it.
pub struct UploadView {
    pub id: String,
    pub label: String,
    pub accept: String,
    pub hint: String,
    pub required: bool,
    pub optional: bool,
    pub error: String,
    pub file_name: String,
    pub file_size: String,
    pub file_type: String,
    pub size_label: String,
}

impl UploadView {
    pub fn from_control<O: FileOwner>(control: &FileUpload<O>) -> Self {
        let props = control.props();
        let file = control.file();
        Self {
            id: props.id.clone(),
            label: props.label.clone(),
            accept: props.accept.as_ref().map(|a| a.to_attr()).unwrap_or_default(),
            hint: control.hint(),
            required: props.required,
            optional: props.optional,
            error: control.error().unwrap_or_default().to_string(),
            file_name: file.map(|f| f.name.clone()).unwrap_or_default(),
            file_size: file.map(|f| f.size.to_string()).unwrap_or_default(),
            file_type: file.map(|f| f.content_type.clone()).unwrap_or_default(),
            size_label: file.map(|f| f.size_label()).unwrap_or_default(),
        }
    }

    pub fn has_file(&self) -> bool {
        !self.file_name.is_empty()
    }
}

fn upload_view(form: &mut PitchingForm, field: FileField) -> UploadView {
    let control = form.file_control(field);
    UploadView::from_control(&control)
}

#[derive(Template)]
#[template(path = "pitch/form.html")]
pub struct PitchFormTemplate {
    pub ctx: PageContext,
    pub presentation_time: String,
    pub presentation_time_error: String,
    pub customer_requirements: String,
    pub customer_requirements_error: String,
    pub notes: String,
    pub notes_error: String,
    pub tor_document: UploadView,
    pub slide_brief: UploadView,
    pub reference_slide: UploadView,
    pub can_generate: bool,
    pub submit_label: String,
    /// Label the page script swaps in while the POST is in flight.
    pub pending_label: String,
    /// Banner shown when the last submit failed.
    pub failure: String,
}

impl PitchFormTemplate {
    pub fn new(ctx: PageContext, form: &mut PitchingForm) -> Self {
        let tor_document = upload_view(form, FileField::TorDocument);
        let slide_brief = upload_view(form, FileField::SlideBrief);
        let reference_slide = upload_view(form, FileField::ReferenceSlide);
        let error = |field: Field| form.visible_error(field).unwrap_or_default().to_string();
        let state = form.state();
        Self {
            ctx,
            presentation_time: state.presentation_time.clone(),
            presentation_time_error: error(Field::PresentationTime),
            customer_requirements: state.customer_requirements.clone(),
            customer_requirements_error: error(Field::CustomerRequirements),
            notes: state.notes.clone(),
            notes_error: error(Field::Notes),
            tor_document,
            slide_brief,
            reference_slide,
            can_generate: form.can_generate_requirements(),
            submit_label: form.submit_label().to_string(),
            pending_label: SubmitStatus::Pending.label().to_string(),
            failure: String::new(),
        }
    }

    pub fn with_failure(mut self, message: &str) -> Self {
        self.failure = message.to_string();
        self
    }
}
