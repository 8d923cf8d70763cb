#![allow(dead_code)]

use serde_json::{json, Value};
use std::time::Duration;
use url::Url;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};
use ym_provision::config::Config;
use ym_provision::network::ApiClient;

pub const LOGIN: &str = "/ym/api/Login";
pub const RENDER: &str = "/ym/api/RenderYMGRFile";
pub const UPDATE_EXTENSION: &str = "/ym/api/UpdateExtension";
pub const UPLOAD_TEXT_FILE: &str = "/ym/api/UploadTextFile";
pub const FILE_ACTION: &str = "/ym/api/FileAction";

pub const APPROVAL_PATH: &str = "/7/Approval.ymgr";
pub const MAIN_TOKEN: &str = "main-token";

pub fn config_for(server: &MockServer) -> Config {
    Config {
        api_base: Url::parse(&server.uri()).unwrap(),
        approval_path: APPROVAL_PATH.to_string(),
        routing_number: "0771112222".to_string(),
        toll_free_number: "1800123456".to_string(),
        strict_records: false,
    }
}

pub fn client_for(config: &Config) -> ApiClient {
    ApiClient::new(config.api_base.clone()).unwrap()
}

// * Same client with a timeout short enough to trip on a delayed mock
pub fn short_timeout_client(config: &Config) -> ApiClient {
    ApiClient::with_timeout(config.api_base.clone(), Duration::from_millis(300)).unwrap()
}

// * Answers after the short client has already given up
pub fn stalled() -> ResponseTemplate {
    ok().set_delay(Duration::from_secs(2))
}

pub fn html() -> ResponseTemplate {
    ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>")
}

pub fn ok() -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({"responseStatus": "OK"}))
}

// * The service reports failures in the body, often alongside a 500
pub fn api_error() -> ResponseTemplate {
    ResponseTemplate::new(500).set_body_json(json!({"responseStatus": "ERROR"}))
}

pub async fn mount_login(server: &MockServer, username: &str, token: &str) {
    Mock::given(method("POST"))
        .and(path(LOGIN))
        .and(body_partial_json(json!({ "username": username })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"responseStatus": "OK", "token": token})),
        )
        .mount(server)
        .await;
}

pub async fn mount_rejected_login(server: &MockServer, username: &str) {
    Mock::given(method("POST"))
        .and(path(LOGIN))
        .and(body_partial_json(json!({ "username": username })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"responseStatus": "ERROR", "message": "bad login"})),
        )
        .mount(server)
        .await;
}

pub async fn mount_records(server: &MockServer, records: Value) {
    Mock::given(method("POST"))
        .and(path(RENDER))
        .and(body_partial_json(json!({
            "token": MAIN_TOKEN,
            "what": format!("ivr2:{}", APPROVAL_PATH),
            "convertType": "json",
            "notLoadLang": "0"
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"responseStatus": "OK", "data": records})),
        )
        .mount(server)
        .await;
}

pub async fn mount_delete(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path(FILE_ACTION))
        .and(body_partial_json(json!({"action": "delete"})))
        .respond_with(response)
        .mount(server)
        .await;
}

// * Request matcher for each provisioning call after the record login, in order
pub fn step_matchers() -> Vec<(&'static str, &'static str, Value)> {
    vec![
        ("base", UPDATE_EXTENSION, json!({"path": "ivr2:"})),
        ("secondary", UPDATE_EXTENSION, json!({"path": "ivr2:1"})),
        ("placeholder", UPLOAD_TEXT_FILE, json!({"what": "ivr2:/M1102.tts"})),
        ("compile", FILE_ACTION, json!({"action": "move"})),
        ("whitelist", UPLOAD_TEXT_FILE, json!({"what": "ivr2:WhiteList.ini"})),
    ]
}

// * Mounts every provisioning step as OK, except `failing` which answers ERROR
pub async fn mount_steps(server: &MockServer, failing: Option<&str>) {
    mount_steps_with(server, failing, api_error()).await;
}

// * Mounts every provisioning step as OK, except `failing` which answers `response`
pub async fn mount_steps_with(
    server: &MockServer,
    failing: Option<&str>,
    response: ResponseTemplate,
) {
    for (label, endpoint, body) in step_matchers() {
        let response = if Some(label) == failing { response.clone() } else { ok() };
        Mock::given(method("POST"))
            .and(path(endpoint))
            .and(body_partial_json(body))
            .respond_with(response)
            .mount(server)
            .await;
    }
}

pub fn body_of(request: &Request) -> Value {
    serde_json::from_slice(&request.body).unwrap_or(Value::Null)
}

// * Labels a captured request with the call it represents
pub fn classify(request: &Request) -> &'static str {
    let body = body_of(request);
    match request.url.path() {
        LOGIN => "login",
        RENDER => "render",
        UPDATE_EXTENSION if body["path"] == "ivr2:" => "base",
        UPDATE_EXTENSION if body["path"] == "ivr2:1" => "secondary",
        UPLOAD_TEXT_FILE if body["what"] == "ivr2:/M1102.tts" => "placeholder",
        UPLOAD_TEXT_FILE if body["what"] == "ivr2:WhiteList.ini" => "whitelist",
        FILE_ACTION if body["action"] == "move" => "compile",
        FILE_ACTION if body["action"] == "delete" => "delete",
        _ => "unknown",
    }
}

pub async fn received(server: &MockServer) -> Vec<Request> {
    server.received_requests().await.unwrap_or_default()
}

pub async fn labels(server: &MockServer) -> Vec<&'static str> {
    received(server).await.iter().map(classify).collect()
}

pub async fn count(server: &MockServer, label: &str) -> usize {
    labels(server).await.into_iter().filter(|l| *l == label).count()
}

pub fn complete_record(user: &str, pass: &str, phone: &str) -> Value {
    json!({"P050": user, "P051": pass, "P052": phone})
}
