use crate::config::ConfigError;
use crate::network::errors::{AuthError, ResponseFault, TransportError};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to download pending records: {0}")]
    Transport(#[from] TransportError),

    #[error("pending records payload rejected: {0}")]
    Malformed(ResponseFault),
}

// * The five remote calls (plus the record-scoped login) a record goes through, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ProvisionStep {
    Login,
    BaseRouting,
    SecondaryRouting,
    UploadPlaceholder,
    CompilePlaceholder,
    UploadWhiteList,
}

impl ProvisionStep {
    pub const ALL: [ProvisionStep; 6] = [
        ProvisionStep::Login,
        ProvisionStep::BaseRouting,
        ProvisionStep::SecondaryRouting,
        ProvisionStep::UploadPlaceholder,
        ProvisionStep::CompilePlaceholder,
        ProvisionStep::UploadWhiteList,
    ];
}

impl fmt::Display for ProvisionStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProvisionStep::Login => write!(f, "Login"),
            ProvisionStep::BaseRouting => write!(f, "UpdateExtension (ivr2:)"),
            ProvisionStep::SecondaryRouting => write!(f, "UpdateExtension (ivr2:1)"),
            ProvisionStep::UploadPlaceholder => write!(f, "UploadTextFile (M1102.tts)"),
            ProvisionStep::CompilePlaceholder => write!(f, "FileAction move (M1102.wav)"),
            ProvisionStep::UploadWhiteList => write!(f, "UploadTextFile (WhiteList.ini)"),
        }
    }
}

#[derive(Debug, Error)]
pub enum StepFailure {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Response(#[from] ResponseFault),
}

// * A record failed at one step; carries no credential values
#[derive(Debug, Error)]
#[error("record {index}: {step} failed: {cause}")]
pub struct ProvisionError {
    pub index: usize,
    pub step: ProvisionStep,
    #[source]
    pub cause: StepFailure,
}

// * Fatal stages of a batch run
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client setup failed: {0}")]
    Client(TransportError),

    #[error("main login failed: {0}")]
    MainLogin(AuthError),

    #[error(transparent)]
    Fetch(#[from] FetchError),
}
