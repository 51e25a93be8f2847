#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),
    #[error("Url parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Other error: {0}")]
    Other(#[from] Box<dyn std::error::Error + Sync + Send>),
    #[error("{0}")]
    String(String),
}

pub type Result<T> = core::result::Result<T, Error>;

impl From<String> for Error {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl Error {
    /// Whether the error happened while talking to the server, as opposed to
    /// preparing the request locally.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Reqwest(err) if !err.is_builder())
    }
}
