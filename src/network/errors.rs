use thiserror::Error;

// * Transport-level failures. Messages never carry the URL or request body.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("request to remote API timed out")]
    Timeout,

    #[error("request to remote API failed: {0}")]
    Request(reqwest::Error),

    #[error("failed to encode request body as JSON")]
    Encode(#[source] serde_json::Error),

    #[error("failed to build HTTP client: {0}")]
    Client(reqwest::Error),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout
        } else {
            TransportError::Request(err.without_url())
        }
    }
}

// * Why a response body was not accepted
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseFault {
    #[error("response is not valid JSON")]
    InvalidJson,

    #[error("response is not a JSON object")]
    NotAnObject,

    #[error("response status is not OK")]
    StatusNotOk,

    #[error("response has no token")]
    MissingToken,

    #[error("response has no 'data' list")]
    MissingData,
}

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("login rejected: {0}")]
    Rejected(ResponseFault),

    #[error("login failed: {0}")]
    Transport(#[from] TransportError),
}
