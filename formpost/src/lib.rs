mod alert;
pub use alert::{Alert, AlertLog, TerminalAlert};

mod args;
pub use args::{LogOptions, Opts, UploadOptions};

mod form;
pub use form::{FileInput, SubmitEvent, Submission, UploadForm};

mod handler;
pub use handler::{ServerResponse, TransportFailure, UploadHandler, failure_message};

#[cfg(test)]
mod test_server;
