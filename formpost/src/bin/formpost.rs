use std::{io::stdout, sync::Arc};

use clap::Parser;
use formpost::{FileInput, LogOptions, Opts, TerminalAlert, UploadForm, UploadHandler};
use formpost_common::file::FileSelection;
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Registry, fmt, fmt::writer::MakeWriterExt, layer::SubscriberExt,
    util::SubscriberInitExt,
};

fn log_init(opts: &LogOptions) -> Result<(), Box<dyn std::error::Error>> {
    let level = opts.level();

    let mut env_filter = EnvFilter::from_default_env();
    for directive in opts.directives() {
        env_filter = env_filter.add_directive(directive.parse()?);
    }

    let formatting_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_ansi(true)
        .with_line_number(true)
        .with_writer(stdout.with_max_level(level));

    let file_appender =
        tracing_appender::rolling::daily(opts.log_path.as_str(), "formpost-client.log");

    let file_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .with_line_number(true)
        .with_writer(file_appender.with_max_level(level));

    Registry::default()
        .with(env_filter)
        .with(formatting_layer)
        .with(file_layer)
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let opts = Opts::parse();
    log_init(&opts.log)?;
    info!("opts: {:?}", opts);

    let selection = FileSelection::load(&opts.upload.files).await?;
    info!("selected {} files", selection.len());

    let handler = UploadHandler::new(Arc::new(TerminalAlert))?
        .transport_failure(opts.upload.transport_failure());

    let mut form = UploadForm::new(FileInput::new(selection));
    form.on_submit(handler);

    let submission = form.submit();
    if let Some(task) = submission.task {
        task.await?;
    }
    Ok(())
}
