use serde::{Deserialize, Serialize};

/// A selected file as the form sees it. Only metadata is kept; the bytes stay
/// with the browser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRef {
    pub name: String,
    pub size: u64,
    #[serde(rename = "type")]
    pub content_type: String,
}

impl FileRef {
    pub fn new(name: &str, size: u64, content_type: &str) -> Self {
        Self {
            name: name.to_string(),
            size,
            content_type: content_type.to_string(),
        }
    }

    /// Build a file reference from the hidden inputs the upload script fills in.
    /// An empty name, or a size that is not a byte count, means no file is held.
    pub fn from_fields(name: &str, size: &str, content_type: &str) -> Option<Self> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        let size = match size.trim().parse::<u64>() {
            Ok(size) => size,
            Err(_) => {
                log::debug!("Dropping file '{name}': malformed size '{size}'");
                return None;
            }
        };
        Some(Self {
            name: name.to_string(),
            size,
            content_type: content_type.trim().to_string(),
        })
    }

    /// Size in kilobytes with two decimals, e.g. "1.50 KB".
    pub fn size_label(&self) -> String {
        format!("{:.2} KB", self.size as f64 / 1024.0)
    }
}

/// Comma-separated list of extensions and MIME types, e.g. ".pdf,.doc,.docx".
///
/// Display only: the browser applies it as a picker filter and the control
/// never rejects a file against it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptList(Vec<String>);

impl AcceptList {
    pub fn parse(raw: &str) -> Self {
        let entries = raw
            .split(',')
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();
        AcceptList(entries)
    }

    pub fn entries(&self) -> &[String] {
        &self.0
    }

    /// Value for the `accept` attribute of the file input.
    pub fn to_attr(&self) -> String {
        self.0.join(",")
    }
}

#[derive(Debug, Clone, Default)]
pub struct UploadProps {
    pub id: String,
    pub label: String,
    pub accept: Option<AcceptList>,
    pub required: bool,
    pub optional: bool,
    pub error: Option<String>,
}

impl UploadProps {
    pub fn new(id: &str, label: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            ..Self::default()
        }
    }

    pub fn accept(mut self, raw: &str) -> Self {
        self.accept = Some(AcceptList::parse(raw));
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn error(mut self, error: Option<String>) -> Self {
        self.error = error;
        self
    }
}

/// Who holds the selected file for an upload control.
pub trait FileOwner {
    /// The file the control should display.
    fn current(&self) -> Option<&FileRef>;
    /// Report a new selection (`None` clears it).
    fn change(&mut self, file: Option<FileRef>);
}

type FileObserver = Box<dyn FnMut(Option<&FileRef>)>;

/// The control keeps its own selection.
pub struct SelfOwned {
    file: Option<FileRef>,
    observer: Option<FileObserver>,
}

impl FileOwner for SelfOwned {
    fn current(&self) -> Option<&FileRef> {
        self.file.as_ref()
    }

    fn change(&mut self, file: Option<FileRef>) {
        self.file = file;
        if let Some(observer) = self.observer.as_mut() {
            observer(self.file.as_ref());
        }
    }
}

/// The selection lives with an external owner. The control shows the value it
/// was created with and forwards every change to `on_change`; the owner
/// rebuilds the control to show the new value.
pub struct ExternallyOwned<F> {
    value: Option<FileRef>,
    on_change: F,
}

impl<F: FnMut(Option<FileRef>)> FileOwner for ExternallyOwned<F> {
    fn current(&self) -> Option<&FileRef> {
        self.value.as_ref()
    }

    fn change(&mut self, file: Option<FileRef>) {
        (self.on_change)(file);
    }
}

/// Single-file picker with click-to-browse and drag-and-drop.
pub struct FileUpload<O: FileOwner> {
    props: UploadProps,
    owner: O,
    // Path held by the native <input type="file">.
    picker_value: String,
    dragging: bool,
}

impl FileUpload<SelfOwned> {
    pub fn uncontrolled(props: UploadProps) -> Self {
        Self::with_owner(props, SelfOwned { file: None, observer: None })
    }

    /// Observe selections made on a self-owned control.
    pub fn on_file_change(mut self, observer: impl FnMut(Option<&FileRef>) + 'static) -> Self {
        self.owner.observer = Some(Box::new(observer));
        self
    }
}

impl<F: FnMut(Option<FileRef>)> FileUpload<ExternallyOwned<F>> {
    pub fn controlled(props: UploadProps, value: Option<FileRef>, on_change: F) -> Self {
        Self::with_owner(props, ExternallyOwned { value, on_change })
    }
}

impl<O: FileOwner> FileUpload<O> {
    fn with_owner(props: UploadProps, owner: O) -> Self {
        Self {
            props,
            owner,
            picker_value: String::new(),
            dragging: false,
        }
    }

    pub fn props(&self) -> &UploadProps {
        &self.props
    }

    pub fn file(&self) -> Option<&FileRef> {
        self.owner.current()
    }

    pub fn error(&self) -> Option<&str> {
        self.props.error.as_deref()
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn picker_value(&self) -> &str {
        &self.picker_value
    }

    pub fn hint(&self) -> String {
        match &self.props.accept {
            Some(accept) if !accept.entries().is_empty() => {
                format!("Accepted files: {}", accept.entries().join(", "))
            }
            _ => "All file types accepted".to_string(),
        }
    }

    /// Change event from the picker. Only the first file is kept.
    pub fn input_change(&mut self, files: Vec<FileRef>) {
        self.owner.change(files.into_iter().next());
    }

    /// Choose `path` in the native picker. The element only fires a change
    /// event when the path differs from the one it already holds; returns
    /// whether it fired.
    pub fn pick(&mut self, path: &str, file: FileRef) -> bool {
        if self.picker_value == path {
            return false;
        }
        self.picker_value = path.to_string();
        self.input_change(vec![file]);
        true
    }

    pub fn drag_over(&mut self) {
        self.dragging = true;
    }

    pub fn drag_leave(&mut self) {
        self.dragging = false;
    }

    /// Drop is accepted whether or not a drag-over was seen.
    pub fn drop(&mut self, files: Vec<FileRef>) {
        self.dragging = false;
        self.owner.change(files.into_iter().next());
    }

    /// Clear the selection and reset the picker so the same path can be
    /// chosen again.
    pub fn remove(&mut self) {
        self.picker_value.clear();
        self.owner.change(None);
    }
}
