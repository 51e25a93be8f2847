use formpost_common::file::{FileEntry, FileSelection};
use tokio::task::JoinHandle;

use crate::handler::{ServerResponse, UploadHandler};

/// The cancellable signal raised when a form is submitted.
#[derive(Debug, Default)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Suppresses the default navigation of the submit action.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// A file picker; its selection is read at submit time.
#[derive(Debug, Clone, Default)]
pub struct FileInput {
    files: FileSelection,
}

impl FileInput {
    pub fn new(files: FileSelection) -> Self {
        Self { files }
    }

    pub fn files(&self) -> &FileSelection {
        &self.files
    }

    pub fn select<I: IntoIterator<Item = FileEntry>>(&mut self, files: I) {
        self.files = FileSelection::from(files.into_iter().collect::<Vec<_>>());
    }

    pub fn clear(&mut self) {
        self.files = FileSelection::new();
    }
}

/// What a call to [`UploadForm::submit`] produced.
#[derive(Debug)]
pub struct Submission {
    pub event: SubmitEvent,
    /// The in-flight upload, if a handler took over the submission.
    pub task: Option<JoinHandle<Option<ServerResponse>>>,
}

/// A form with a single file input and at most one submit handler.
#[derive(Default)]
pub struct UploadForm {
    input: FileInput,
    handler: Option<UploadHandler>,
}

impl UploadForm {
    pub fn new(input: FileInput) -> Self {
        Self {
            input,
            handler: None,
        }
    }

    pub fn input(&self) -> &FileInput {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut FileInput {
        &mut self.input
    }

    pub fn on_submit(&mut self, handler: UploadHandler) {
        self.handler = Some(handler);
    }

    /// Fires a submit event. Without a handler the default action is left in
    /// place and nothing is sent. Must be called within a tokio runtime.
    pub fn submit(&self) -> Submission {
        let mut event = SubmitEvent::new();
        let task = self
            .handler
            .as_ref()
            .map(|handler| handler.on_submit(&mut event, &self.input));
        Submission { event, task }
    }
}
