use std::io::{Write, stdout};

use parking_lot::Mutex;
use tracing::error;

/// Where submission outcomes are shown to the user.
///
/// One call is one dialog; the caller is suspended until it returns.
pub trait Alert: Send + Sync + 'static {
    fn alert(&self, message: &str);
}

/// Prints each alert as its own line on stdout.
#[derive(Debug, Default)]
pub struct TerminalAlert;

impl Alert for TerminalAlert {
    fn alert(&self, message: &str) {
        let mut out = stdout().lock();
        if let Err(err) = writeln!(out, "{message}").and_then(|_| out.flush()) {
            error!("show alert failed: {err}");
        }
    }
}

/// Keeps every alert in memory, in the order they were raised.
#[derive(Debug, Default)]
pub struct AlertLog {
    messages: Mutex<Vec<String>>,
}

impl AlertLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.messages.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.lock().is_empty()
    }
}

impl Alert for AlertLog {
    fn alert(&self, message: &str) {
        self.messages.lock().push(message.to_string());
    }
}
