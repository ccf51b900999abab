// Template context structures for Askama templates.

mod common;
mod pitch;

pub use self::common::PageContext;
pub use self::pitch::{PitchFormTemplate, UploadView};
