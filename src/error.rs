use thiserror::Error;

/// Failures talking to the Domoticz controller.
///
/// The snapshot builder treats every variant as fatal to the sync in
/// progress. The action executor turns them into a reply string.
#[derive(Debug, Error)]
pub enum ControllerError {
    /// Connection refused, DNS failure, timeout, truncated body.
    #[error("transport error: {0}")]
    Transport(String),

    /// Credentials rejected (HTTP 401/403).
    #[error("authentication rejected by controller (HTTP {status})")]
    Auth { status: u16 },

    /// Any other non-success HTTP status.
    #[error("unexpected HTTP status {status} from controller")]
    UnexpectedStatus { status: u16 },

    /// Response body did not match the expected shape.
    #[error("failed to decode controller response: {0}")]
    Decode(String),

    #[error("invalid controller url: {0}")]
    InvalidUrl(String),

    /// The controller answered with `"status": "ERR"`, usually under HTTP 200.
    #[error("command rejected by controller: {message}")]
    CommandRejected { message: String },
}

impl ControllerError {
    /// Whether the controller could not be reached or answered garbage.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Transport(_) | Self::UnexpectedStatus { .. } | Self::Decode(_)
        )
    }

    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Auth { .. })
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::CommandRejected { .. })
    }
}

impl From<hyper::Error> for ControllerError {
    fn from(e: hyper::Error) -> Self {
        ControllerError::Transport(e.to_string())
    }
}

impl From<hyper::http::Error> for ControllerError {
    fn from(e: hyper::http::Error) -> Self {
        ControllerError::InvalidUrl(e.to_string())
    }
}

impl From<hyper::http::uri::InvalidUri> for ControllerError {
    fn from(e: hyper::http::uri::InvalidUri) -> Self {
        ControllerError::InvalidUrl(e.to_string())
    }
}

impl From<serde_path_to_error::Error<serde_json::Error>> for ControllerError {
    fn from(e: serde_path_to_error::Error<serde_json::Error>) -> Self {
        ControllerError::Decode(e.to_string())
    }
}

impl From<url::ParseError> for ControllerError {
    fn from(e: url::ParseError) -> Self {
        ControllerError::InvalidUrl(e.to_string())
    }
}
