// * Downloads the pending-records file rendered as JSON

use crate::config::constants::{REMOTE_PREFIX, RENDER_PATH};
use crate::engine::errors::FetchError;
use crate::network::client::ApiClient;
use crate::network::errors::ResponseFault;
use crate::network::requests::RenderFileRequest;
use crate::network::response::decode_object;
use crate::network::secret::SessionToken;
use serde_json::Value;
use tracing::info;
use zeroize::Zeroizing;

// * Remote reference of the approval file, e.g. `ivr2:/7/Approval.ymgr`
pub fn approval_reference(approval_path: &str) -> String {
    format!("{}{}", REMOTE_PREFIX, approval_path)
}

// * Returns the `data` list verbatim; each entry is validated later by the orchestrator
pub async fn fetch_records(
    client: &ApiClient,
    approval_path: &str,
    main_token: &SessionToken,
) -> Result<Vec<Value>, FetchError> {
    let reference = approval_reference(approval_path);
    let request = RenderFileRequest {
        token: main_token.as_str(),
        path: &reference,
        convert_type: "json",
        not_load_lang: "0",
    };

    info!("Downloading pending records file");
    // * The rendered file carries every record's password
    let body = Zeroizing::new(client.post(RENDER_PATH, &request).await?);
    let records = parse_records(&body).map_err(FetchError::Malformed)?;

    info!(count = records.len(), "Pending records file downloaded");
    Ok(records)
}

fn parse_records(body: &str) -> Result<Vec<Value>, ResponseFault> {
    let mut object = decode_object(body)?;
    match object.remove("data") {
        Some(Value::Array(items)) => Ok(items),
        _ => Err(ResponseFault::MissingData),
    }
}
