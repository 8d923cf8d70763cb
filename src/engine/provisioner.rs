// * Per-record provisioning sequence
// * Logs in as the record's own account, then issues the routing calls strictly in order.
// * The first failing step aborts the rest of the sequence for that record.

use crate::config::constants::{
    BASE_EXTENSION, DIALING_PREFIX, FILE_ACTION_PATH, PLACEHOLDER_CONTENTS, PLACEHOLDER_SOURCE,
    PLACEHOLDER_TARGET, SECONDARY_EXTENSION, UPDATE_EXTENSION_PATH, UPLOAD_TEXT_FILE_PATH,
    WHITE_LIST_ERROR_GOTO, WHITE_LIST_FILE,
};
use crate::config::Config;
use crate::engine::errors::{ProvisionError, ProvisionStep, StepFailure};
use crate::engine::record::ProvisioningRecord;
use crate::network::client::ApiClient;
use crate::network::requests::{
    ExtensionSettings, FileAction, FileActionRequest, UpdateExtensionRequest,
    UploadTextFileRequest,
};
use crate::network::response::expect_ok;
use crate::network::secret::SessionToken;
use crate::network::session;
use serde::Serialize;
use tracing::info;
use zeroize::Zeroizing;

// * White-list file body: the dialing prefix is prepended unconditionally,
// * so a phone that already starts with 0 ends up with two
pub fn white_list_contents(phone: &str) -> Zeroizing<String> {
    Zeroizing::new(format!("{}{}", DIALING_PREFIX, phone))
}

pub struct Provisioner<'a> {
    client: &'a ApiClient,
    routing_number: &'a str,
    toll_free_number: &'a str,
}

impl<'a> Provisioner<'a> {
    pub fn new(client: &'a ApiClient, config: &'a Config) -> Self {
        Self {
            client,
            routing_number: &config.routing_number,
            toll_free_number: &config.toll_free_number,
        }
    }

    pub async fn provision(&self, record: ProvisioningRecord) -> Result<(), ProvisionError> {
        let ProvisioningRecord {
            index,
            credentials,
            phone,
        } = record;

        info!(index, user = credentials.username(), "Starting provisioning for record");

        // * Record-scoped token; never outlives this call
        let token = session::login(self.client, credentials)
            .await
            .map_err(|e| ProvisionError {
                index,
                step: ProvisionStep::Login,
                cause: StepFailure::Auth(e),
            })?;

        self.configure_routing(index, &token).await?;
        self.install_placeholder(index, &token).await?;

        let contents = white_list_contents(&phone);
        drop(phone);
        self.step(
            index,
            ProvisionStep::UploadWhiteList,
            UPLOAD_TEXT_FILE_PATH,
            &UploadTextFileRequest {
                token: token.as_str(),
                path: WHITE_LIST_FILE,
                contents: &contents,
            },
        )
        .await?;

        info!(index, "Provisioning finished for record");
        Ok(())
    }

    async fn configure_routing(
        &self,
        index: usize,
        token: &SessionToken,
    ) -> Result<(), ProvisionError> {
        self.step(
            index,
            ProvisionStep::BaseRouting,
            UPDATE_EXTENSION_PATH,
            &UpdateExtensionRequest {
                token: token.as_str(),
                path: BASE_EXTENSION,
                extension: ExtensionSettings::RoutingYemot {
                    routing_yemot_number: self.routing_number,
                    white_list_error_goto: WHITE_LIST_ERROR_GOTO,
                    white_list: "yes",
                },
            },
        )
        .await?;

        self.step(
            index,
            ProvisionStep::SecondaryRouting,
            UPDATE_EXTENSION_PATH,
            &UpdateExtensionRequest {
                token: token.as_str(),
                path: SECONDARY_EXTENSION,
                extension: ExtensionSettings::Routing1800 {
                    routing_1800: self.toll_free_number,
                },
            },
        )
        .await
    }

    // * Uploads a blank TTS source and has the server compile it to its .wav destination
    async fn install_placeholder(
        &self,
        index: usize,
        token: &SessionToken,
    ) -> Result<(), ProvisionError> {
        self.step(
            index,
            ProvisionStep::UploadPlaceholder,
            UPLOAD_TEXT_FILE_PATH,
            &UploadTextFileRequest {
                token: token.as_str(),
                path: PLACEHOLDER_SOURCE,
                contents: PLACEHOLDER_CONTENTS,
            },
        )
        .await?;

        self.step(
            index,
            ProvisionStep::CompilePlaceholder,
            FILE_ACTION_PATH,
            &FileActionRequest {
                token: token.as_str(),
                path: PLACEHOLDER_SOURCE,
                action: FileAction::Move,
                target: Some(PLACEHOLDER_TARGET),
            },
        )
        .await
    }

    async fn step<B: Serialize>(
        &self,
        index: usize,
        step: ProvisionStep,
        endpoint: &str,
        body: &B,
    ) -> Result<(), ProvisionError> {
        let fail = |cause: StepFailure| ProvisionError { index, step, cause };

        let resp = self
            .client
            .post(endpoint, body)
            .await
            .map_err(|e| fail(e.into()))?;
        expect_ok(&resp).map_err(|e| fail(e.into()))?;

        info!(index, step = %step, "Provisioning step succeeded");
        Ok(())
    }
}
