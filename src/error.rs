use thiserror::Error;

use crate::dates::SUPPORTED_FORMATS;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Could not parse date '{0}'.\nSupported formats: {formats}", formats = SUPPORTED_FORMATS)]
    DateParse(String),

    /// Network failure or non-2xx status
    #[error("{0}")]
    Transport(String),

    #[error("unexpected response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("response contained no usable data")]
    EmptyResult,

    #[error("configuration error: {0}")]
    Config(String),
}

impl From<ureq::Error> for Error {
    fn from(e: ureq::Error) -> Self {
        Error::Transport(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
