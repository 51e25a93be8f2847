use std::sync::Arc;

use formpost_common::{
    Result,
    consts::{ERROR_PREFIX, UPLOAD_URL},
    http::{HTTP_CLIENT, parse_url, post_multipart},
    multipart::MultipartPayload,
};
use reqwest::{Client, StatusCode};
use tokio::task::JoinHandle;
use tracing::{debug, error, info};
use url::Url;

use crate::{
    alert::Alert,
    form::{FileInput, SubmitEvent},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServerResponse {
    Success { status: StatusCode, body: String },
    Failure { status: StatusCode },
}

impl ServerResponse {
    pub fn status(&self) -> StatusCode {
        match self {
            ServerResponse::Success { status, .. } => *status,
            ServerResponse::Failure { status } => *status,
        }
    }
}

/// What to do when the request fails before a response arrives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TransportFailure {
    /// Log it and show nothing.
    #[default]
    Silent,
    /// Log it and raise an alert with the error text.
    Alert,
}

pub fn failure_message(status: StatusCode) -> String {
    format!("{ERROR_PREFIX}{}", status.as_u16())
}

/// Replaces the default form submission with a multipart POST.
#[derive(Clone)]
pub struct UploadHandler {
    endpoint: Url,
    client: Client,
    alert: Arc<dyn Alert>,
    transport_failure: TransportFailure,
}

impl UploadHandler {
    pub fn new(alert: Arc<dyn Alert>) -> Result<Self> {
        Self::with_endpoint(UPLOAD_URL, alert)
    }

    pub(crate) fn with_endpoint<U: AsRef<str>>(endpoint: U, alert: Arc<dyn Alert>) -> Result<Self> {
        Ok(Self {
            endpoint: parse_url(endpoint)?,
            client: HTTP_CLIENT.clone(),
            alert,
            transport_failure: TransportFailure::default(),
        })
    }

    pub fn transport_failure(mut self, policy: TransportFailure) -> Self {
        self.transport_failure = policy;
        self
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Takes over a submit event: the default action is suppressed and the
    /// current selection is posted on a new task. Nothing guards against a
    /// second submission while one is in flight, each gets its own request.
    pub fn on_submit(
        &self,
        event: &mut SubmitEvent,
        input: &FileInput,
    ) -> JoinHandle<Option<ServerResponse>> {
        event.prevent_default();

        let payload = MultipartPayload::from_selection(input.files());
        debug!("submit {payload} to {}", self.endpoint);

        let handler = self.clone();
        tokio::spawn(async move {
            match handler.upload(payload).await {
                Ok(response) => Some(response),
                Err(err) if err.is_transport() => {
                    error!("upload to {} failed: {err}", handler.endpoint);
                    if handler.transport_failure == TransportFailure::Alert {
                        handler.alert.alert(&format!("{ERROR_PREFIX}{err}"));
                    }
                    None
                }
                Err(err) => {
                    error!("build upload request failed: {err}");
                    None
                }
            }
        })
    }

    async fn upload(&self, payload: MultipartPayload) -> Result<ServerResponse> {
        let form = payload.into_form()?;
        let response = post_multipart(&self.client, self.endpoint.clone(), form).await?;
        info!("response: {response:?}");

        let status = response.status();
        if status.is_success() {
            let body = response.text().await?;
            self.alert.alert(&body);
            Ok(ServerResponse::Success { status, body })
        } else {
            self.alert.alert(&failure_message(status));
            Ok(ServerResponse::Failure { status })
        }
    }
}
