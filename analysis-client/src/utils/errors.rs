//! Error taxonomy for the submission workflow
//!
//! Every failure a submission can hit is one of the closed set below, and
//! each maps to exactly one user-facing message via [`SubmitError::user_message`].
//! Transport failures are classified through `reqwest`'s error predicates
//! rather than substring matching on error text.

use crate::utils::validation::ValidationError;
use thiserror::Error;

/// Fixed message shown when the input fails local validation.
pub const INVALID_URL_MESSAGE: &str = "Insira uma URL válida";

const CONNECTION_FAILED_MESSAGE: &str =
    "Could not connect to the analysis server. Check that the service is running.";
const GENERIC_NETWORK_MESSAGE: &str = "Network error while contacting the analysis server.";

#[derive(Debug, Error)]
pub enum SubmitError {
    /// Input rejected locally; never reaches the network.
    #[error("invalid URL input: {0}")]
    Validation(#[from] ValidationError),

    /// Server reachable but answered with a non-2xx status.
    #[error("analysis service returned HTTP {0}")]
    HttpStatus(u16),

    /// No response obtained from the server.
    #[error("transport failure: {message}")]
    Transport {
        kind: TransportKind,
        message: String,
    },

    /// Response body did not match the expected shape.
    #[error("unexpected response body: {0}")]
    Parse(String),
}

/// Sub-classification of transport failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportKind {
    /// Connection refused or timed out before a response arrived.
    ConnectionFailed,
    /// Request-level network failure.
    Network,
    /// Anything the classifier cannot place.
    Other,
}

impl SubmitError {
    /// Human-readable message for the presentation layer.
    ///
    /// Parse failures share the generic network message: the service not
    /// speaking the expected shape is indistinguishable from a broken
    /// connection as far as the user is concerned.
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::Validation(_) => INVALID_URL_MESSAGE.to_string(),
            SubmitError::HttpStatus(status) => {
                format!("The analysis service returned HTTP {status}. Please try again.")
            }
            SubmitError::Transport {
                kind: TransportKind::ConnectionFailed,
                ..
            } => CONNECTION_FAILED_MESSAGE.to_string(),
            SubmitError::Transport {
                kind: TransportKind::Network,
                ..
            } => GENERIC_NETWORK_MESSAGE.to_string(),
            SubmitError::Transport {
                kind: TransportKind::Other,
                message,
            } => message.clone(),
            SubmitError::Parse(_) => GENERIC_NETWORK_MESSAGE.to_string(),
        }
    }
}

impl From<reqwest::Error> for SubmitError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return SubmitError::Parse(err.to_string());
        }
        if let Some(status) = err.status() {
            return SubmitError::HttpStatus(status.as_u16());
        }

        let kind = if err.is_connect() || err.is_timeout() {
            TransportKind::ConnectionFailed
        } else if err.is_request() {
            TransportKind::Network
        } else {
            TransportKind::Other
        };

        SubmitError::Transport {
            kind,
            message: err.to_string(),
        }
    }
}
