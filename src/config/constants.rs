// * Configuration Constants
// * Fixed surface of the remote telephony-management API

use std::time::Duration;

// * Per-request timeout for every POST issued by the transport
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

// * Endpoint paths, relative to the API base
pub const LOGIN_PATH: &str = "/ym/api/Login";
pub const RENDER_PATH: &str = "/ym/api/RenderYMGRFile";
pub const UPDATE_EXTENSION_PATH: &str = "/ym/api/UpdateExtension";
pub const UPLOAD_TEXT_FILE_PATH: &str = "/ym/api/UploadTextFile";
pub const FILE_ACTION_PATH: &str = "/ym/api/FileAction";

// * Every remote file reference lives under this prefix
pub const REMOTE_PREFIX: &str = "ivr2:";

// * Provisioning targets
pub const BASE_EXTENSION: &str = "ivr2:";
pub const SECONDARY_EXTENSION: &str = "ivr2:1";
pub const WHITE_LIST_ERROR_GOTO: &str = "/1";
pub const PLACEHOLDER_SOURCE: &str = "ivr2:/M1102.tts";
pub const PLACEHOLDER_TARGET: &str = "ivr2:/M1102.wav";
pub const PLACEHOLDER_CONTENTS: &str = " ";
pub const WHITE_LIST_FILE: &str = "ivr2:WhiteList.ini";

// * Local dialing prefix prepended to the phone before the white-list upload
pub const DIALING_PREFIX: &str = "0";

// * Record field keys in the rendered approval file
pub const FIELD_USERNAME: &str = "P050";
pub const FIELD_PASSWORD: &str = "P051";
pub const FIELD_PHONE: &str = "P052";

// * Environment variable names
pub const ENV_TOKEN: &str = "YM_TOKEN";
pub const ENV_API_DOMAIN: &str = "YM_API_DOMAIN";
pub const ENV_APPROVAL_PATH: &str = "YM_APPROVAL_PATH";
pub const ENV_ROUTING_NUMBER: &str = "YM_ROUTING_NUMBER";
pub const ENV_TOLL_FREE_NUMBER: &str = "YM_1800_NUMBER";
pub const ENV_STRICT_RECORDS: &str = "YM_STRICT_RECORDS";
pub const ENV_LOG_FORMAT: &str = "YM_LOG_FORMAT";
