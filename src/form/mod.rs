//! Form client model: the pitching form, its upload controls and validation,
//! independent of any browser.

pub mod file_upload;
pub mod notify;
pub mod payload;
pub mod pitching;
pub mod schema;
pub mod state;

pub use file_upload::{AcceptList, ExternallyOwned, FileOwner, FileRef, FileUpload, SelfOwned, UploadProps};
pub use notify::{Notification, Notifications, Notifier};
pub use payload::SubmissionPayload;
pub use pitching::{PitchingForm, SubmitBlocked, SubmitOutcome, SubmitStatus, REQUIREMENTS_PLACEHOLDER};
pub use schema::{FieldErrors, RawInput};
pub use state::{Field, FileField, FormState};
