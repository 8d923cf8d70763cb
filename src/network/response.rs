// * Decoding of remote API bodies
// * HTTP status is ignored; the JSON `responseStatus` field is authoritative

use crate::network::errors::ResponseFault;
use serde_json::{Map, Value};

const STATUS_FIELD: &str = "responseStatus";

pub type JsonObject = Map<String, Value>;

// * Parses a body that must be a JSON object
pub fn decode_object(body: &str) -> Result<JsonObject, ResponseFault> {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(ResponseFault::NotAnObject),
        Err(_) => Err(ResponseFault::InvalidJson),
    }
}

pub fn is_status_ok(object: &JsonObject) -> bool {
    object
        .get(STATUS_FIELD)
        .and_then(Value::as_str)
        .map(|s| s.eq_ignore_ascii_case("OK"))
        .unwrap_or(false)
}

// * Decodes the body and requires `responseStatus` == OK (case-insensitive)
pub fn expect_ok(body: &str) -> Result<JsonObject, ResponseFault> {
    let object = decode_object(body)?;
    if is_status_ok(&object) {
        Ok(object)
    } else {
        Err(ResponseFault::StatusNotOk)
    }
}
