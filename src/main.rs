use std::process::ExitCode;

use tracing::{error, info};
use ym_provision::config::{Config, LogFormat};
use ym_provision::engine::{exit_code, run_batch, BatchError};
use ym_provision::ops::telemetry;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    telemetry::init_tracing_with_format(LogFormat::from_env());

    info!("Starting pending-records download and user provisioning");

    // * Init: nothing touches the network until configuration is valid
    let (config, credentials) = match Config::from_env() {
        Ok(loaded) => loaded,
        Err(e) => {
            error!("{}", BatchError::from(e));
            return ExitCode::from(1);
        }
    };

    let result = run_batch(&config, credentials).await;
    match &result {
        Ok(report) => {
            if let Some(cleanup) = &report.cleanup {
                info!(cleanup = %cleanup, "Cleanup finished");
            }
            info!(summary = %report, "Process finished");
        }
        Err(e) => error!("Fatal error in main process: {}", e),
    }

    ExitCode::from(exit_code(&result, config.strict_records))
}
