// * Best-effort deletion of the approval file once a batch ends

use crate::config::constants::FILE_ACTION_PATH;
use crate::engine::fetcher::approval_reference;
use crate::network::client::ApiClient;
use crate::network::requests::{FileAction, FileActionRequest};
use crate::network::response::expect_ok;
use crate::network::secret::SessionToken;
use std::fmt;
use tracing::{info, warn};

// * Outcome of the delete call. Failures are reported, never escalated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CleanupOutcome {
    Deleted,
    Warning(String),
}

impl CleanupOutcome {
    pub fn is_deleted(&self) -> bool {
        matches!(self, CleanupOutcome::Deleted)
    }
}

impl fmt::Display for CleanupOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CleanupOutcome::Deleted => write!(f, "source file deleted"),
            CleanupOutcome::Warning(reason) => write!(f, "source file not deleted: {}", reason),
        }
    }
}

pub async fn delete_source_file(
    client: &ApiClient,
    approval_path: &str,
    main_token: &SessionToken,
) -> CleanupOutcome {
    let reference = approval_reference(approval_path);
    let request = FileActionRequest {
        token: main_token.as_str(),
        path: &reference,
        action: FileAction::Delete,
        target: None,
    };

    info!("Deleting source records file");
    let outcome = match client.post(FILE_ACTION_PATH, &request).await {
        Ok(body) => match expect_ok(&body) {
            Ok(_) => CleanupOutcome::Deleted,
            Err(fault) => CleanupOutcome::Warning(fault.to_string()),
        },
        Err(e) => CleanupOutcome::Warning(e.to_string()),
    };

    match &outcome {
        CleanupOutcome::Deleted => info!("FileAction delete succeeded"),
        CleanupOutcome::Warning(reason) => warn!(reason = %reason, "FileAction delete failed"),
    }
    outcome
}
