use super::file_upload::FileRef;

/// Every input on the pitching form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    PresentationTime,
    TorDocument,
    CustomerRequirements,
    SlideBrief,
    ReferenceSlide,
    Notes,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::PresentationTime,
        Field::TorDocument,
        Field::CustomerRequirements,
        Field::SlideBrief,
        Field::ReferenceSlide,
        Field::Notes,
    ];

    /// Name used in HTML inputs and in the JSON payload.
    pub fn wire_name(self) -> &'static str {
        match self {
            Field::PresentationTime => "presentationTime",
            Field::TorDocument => "torDocument",
            Field::CustomerRequirements => "customerRequirements",
            Field::SlideBrief => "slideBrief",
            Field::ReferenceSlide => "referenceSlide",
            Field::Notes => "notes",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::PresentationTime => "Presentation time (minutes)",
            Field::TorDocument => "TOR document",
            Field::CustomerRequirements => "Customer requirements",
            Field::SlideBrief => "Slide brief",
            Field::ReferenceSlide => "Reference slide",
            Field::Notes => "Sales notes",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileField {
    TorDocument,
    ReferenceSlide,
    SlideBrief,
}

impl FileField {
    pub const ALL: [FileField; 3] = [
        FileField::TorDocument,
        FileField::SlideBrief,
        FileField::ReferenceSlide,
    ];

    pub fn field(self) -> Field {
        match self {
            FileField::TorDocument => Field::TorDocument,
            FileField::ReferenceSlide => Field::ReferenceSlide,
            FileField::SlideBrief => Field::SlideBrief,
        }
    }

    pub fn wire_name(self) -> &'static str {
        self.field().wire_name()
    }

    pub fn from_wire_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.wire_name() == name)
    }

    pub fn accept(self) -> &'static str {
        match self {
            FileField::TorDocument => ".pdf,.doc,.docx",
            FileField::ReferenceSlide | FileField::SlideBrief => ".pdf,.ppt,.pptx",
        }
    }

    pub fn is_required(self) -> bool {
        !matches!(self, FileField::SlideBrief)
    }
}

/// Transient state of one form session. Lives only as long as the page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub presentation_time: String,
    pub notes: String,
    pub customer_requirements: String,
    pub tor_document: Option<FileRef>,
    pub reference_slide: Option<FileRef>,
    pub slide_brief: Option<FileRef>,
}

impl FormState {
    pub fn file(&self, field: FileField) -> Option<&FileRef> {
        match field {
            FileField::TorDocument => self.tor_document.as_ref(),
            FileField::ReferenceSlide => self.reference_slide.as_ref(),
            FileField::SlideBrief => self.slide_brief.as_ref(),
        }
    }

    /// Replace whatever the slot held; there is no multi-file support.
    pub fn set_file(&mut self, field: FileField, file: Option<FileRef>) {
        let slot = match field {
            FileField::TorDocument => &mut self.tor_document,
            FileField::ReferenceSlide => &mut self.reference_slide,
            FileField::SlideBrief => &mut self.slide_brief,
        };
        *slot = file;
    }

    pub fn has_tor_file(&self) -> bool {
        self.tor_document.is_some()
    }
}
