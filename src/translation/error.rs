//! Error kinds produced by a translation call.

use thiserror::Error;

/// Boxed error used to carry the underlying transport failure.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Failure of a single translation request.
///
/// Every variant carries enough context (status code and/or raw body) to
/// diagnose the failure without re-issuing the request. Underlying causes are
/// exposed through `source()`, not repeated in the message.
#[derive(Debug, Error)]
pub enum TranslateError {
    /// The text to translate was empty. No request was sent.
    #[error("empty text provided for translation")]
    InvalidInput,

    /// The request could not be completed (DNS, connection, timeout, body read).
    #[error("request to {url} failed")]
    Network {
        url: String,
        #[source]
        source: BoxError,
    },

    /// The service answered with a status other than 200.
    #[error("API returned non-OK status: {status}, body: {body}")]
    Upstream { status: u16, body: String },

    /// The response body is not valid JSON.
    #[error("error parsing response body: {body}")]
    Parse {
        #[source]
        source: serde_json::Error,
        body: String,
    },

    /// The response parsed but contained no translated segments.
    #[error("could not extract translation from response: {body}")]
    Extraction { body: String },
}

impl TranslateError {
    /// Raw response body attached to this error, if the service answered at all.
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Upstream { body, .. } | Self::Parse { body, .. } | Self::Extraction { body } => {
                Some(body)
            }
            Self::InvalidInput | Self::Network { .. } => None,
        }
    }

    /// Process exit code for this error kind (sysexits conventions).
    pub const fn exit_code(&self) -> exitcode::ExitCode {
        match self {
            Self::InvalidInput => exitcode::DATAERR,
            Self::Network { .. } | Self::Upstream { .. } => exitcode::UNAVAILABLE,
            Self::Parse { .. } | Self::Extraction { .. } => exitcode::PROTOCOL,
        }
    }
}
