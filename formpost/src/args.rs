use std::path::PathBuf;

use clap::{Args, Parser};
use faststr::FastStr;
use tracing::Level;

use crate::handler::TransportFailure;

#[derive(Parser, Debug)]
#[command(name = "formpost")]
#[command(author, version, about, long_about = None)]
pub struct Opts {
    #[command(flatten)]
    pub log: LogOptions,
    #[command(flatten)]
    pub upload: UploadOptions,
}

#[derive(Args, Debug, Clone)]
pub struct UploadOptions {
    /// files to post, in selection order
    pub files: Vec<PathBuf>,
    /// show transport errors in an alert instead of only logging them
    #[arg(long)]
    pub alert_on_transport_error: bool,
}

impl UploadOptions {
    pub fn transport_failure(&self) -> TransportFailure {
        if self.alert_on_transport_error {
            TransportFailure::Alert
        } else {
            TransportFailure::Silent
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct LogOptions {
    #[arg(long)]
    pub debug: bool,
    #[arg(long, default_value("./target/logs"))]
    pub log_path: FastStr,
}

/// Crates whose events pass the filter at the configured level.
const LOG_TARGETS: [&str; 2] = ["formpost", "formpost_common"];

impl LogOptions {
    pub fn level(&self) -> Level {
        if self.debug { Level::DEBUG } else { Level::INFO }
    }

    /// `EnvFilter` directives, one per workspace crate.
    pub fn directives(&self) -> Vec<String> {
        let level = self.level();
        LOG_TARGETS
            .iter()
            .map(|target| format!("{target}={level}"))
            .collect()
    }
}
