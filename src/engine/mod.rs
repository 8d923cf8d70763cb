pub mod cleanup;
pub mod errors;
pub mod fetcher;
pub mod orchestrator;
pub mod provisioner;
pub mod record;

pub use cleanup::CleanupOutcome;
pub use errors::{BatchError, FetchError, ProvisionError, ProvisionStep, StepFailure};
pub use orchestrator::{exit_code, run_batch, BatchReport, BatchRunner, BatchStage};
pub use provisioner::Provisioner;
pub use record::{ProvisioningRecord, RecordRejection};
