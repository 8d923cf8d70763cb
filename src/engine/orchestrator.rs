// * Batch Orchestrator
// * Init -> Authenticated -> Fetched -> Processing(i) -> Done
// * Cleanup runs exactly once whenever a main token was obtained, whatever happened after.
// * Config, main login and fetch failures are fatal; per-record failures are collected.

use crate::config::Config;
use crate::engine::cleanup::{self, CleanupOutcome};
use crate::engine::errors::{BatchError, ProvisionError};
use crate::engine::fetcher;
use crate::engine::provisioner::Provisioner;
use crate::engine::record::{ProvisioningRecord, RecordRejection};
use crate::network::client::ApiClient;
use crate::network::secret::{Credentials, SessionToken};
use crate::network::session;
use std::fmt;
use tracing::{error, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchStage {
    Init,
    Authenticated,
    Fetched,
    Processing(usize),
    Done,
}

impl fmt::Display for BatchStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BatchStage::Init => write!(f, "init"),
            BatchStage::Authenticated => write!(f, "authenticated"),
            BatchStage::Fetched => write!(f, "fetched"),
            BatchStage::Processing(i) => write!(f, "processing({})", i),
            BatchStage::Done => write!(f, "done"),
        }
    }
}

#[derive(Debug, Default)]
pub struct BatchReport {
    pub total: usize,
    pub provisioned: Vec<usize>,
    pub skipped: Vec<RecordRejection>,
    pub failed: Vec<ProvisionError>,
    pub cleanup: Option<CleanupOutcome>,
}

impl BatchReport {
    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }
}

impl fmt::Display for BatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} record(s): {} provisioned, {} skipped, {} failed",
            self.total,
            self.provisioned.len(),
            self.skipped.len(),
            self.failed.len()
        )
    }
}

pub struct BatchRunner<'a> {
    client: &'a ApiClient,
    config: &'a Config,
}

impl<'a> BatchRunner<'a> {
    pub fn new(client: &'a ApiClient, config: &'a Config) -> Self {
        Self { client, config }
    }

    pub async fn run(&self, credentials: Credentials) -> Result<BatchReport, BatchError> {
        let main_token = match session::login(self.client, credentials).await {
            Ok(token) => token,
            Err(e) => {
                warn!("Skipping source file deletion: no main session token was obtained");
                return Err(BatchError::MainLogin(e));
            }
        };
        info!(stage = %BatchStage::Authenticated, "Main session established");

        let result = self.fetch_and_process(&main_token).await;

        let outcome =
            cleanup::delete_source_file(self.client, &self.config.approval_path, &main_token).await;
        drop(main_token);

        result.map(|mut report| {
            report.cleanup = Some(outcome);
            report
        })
    }

    async fn fetch_and_process(
        &self,
        main_token: &SessionToken,
    ) -> Result<BatchReport, BatchError> {
        let entries =
            fetcher::fetch_records(self.client, &self.config.approval_path, main_token).await?;
        info!(stage = %BatchStage::Fetched, "Pending records fetched");

        let mut report = BatchReport {
            total: entries.len(),
            ..Default::default()
        };

        if entries.is_empty() {
            info!("No records in file");
        } else {
            info!(count = entries.len(), "Records found for processing");
        }

        let provisioner = Provisioner::new(self.client, self.config);
        // * Each entry is consumed by its own iteration; its secrets are wiped before the next one
        for (index, entry) in entries.into_iter().enumerate() {
            info!(stage = %BatchStage::Processing(index), "Processing record");

            let record = match ProvisioningRecord::from_entry(index, entry) {
                Ok(record) => record,
                Err(rejection) => {
                    warn!(index, "{}; skipping", rejection);
                    report.skipped.push(rejection);
                    continue;
                }
            };

            match provisioner.provision(record).await {
                Ok(()) => report.provisioned.push(index),
                Err(e) => {
                    error!(index, step = %e.step, "Record processing stopped: {}", e);
                    report.failed.push(e);
                }
            }
        }

        info!(stage = %BatchStage::Done, summary = %report, "Finished processing all records");
        Ok(report)
    }
}

// * Builds the HTTP client from `config` and runs one batch
pub async fn run_batch(
    config: &Config,
    credentials: Credentials,
) -> Result<BatchReport, BatchError> {
    info!(stage = %BatchStage::Init, "Starting provisioning batch");
    let client = ApiClient::new(config.api_base.clone()).map_err(BatchError::Client)?;
    BatchRunner::new(&client, config).run(credentials).await
}

// * 0 unless a fatal stage failed; per-record failures count only in strict mode
pub fn exit_code(result: &Result<BatchReport, BatchError>, strict_records: bool) -> u8 {
    match result {
        Ok(report) if strict_records && report.has_failures() => 1,
        Ok(_) => 0,
        Err(_) => 1,
    }
}
