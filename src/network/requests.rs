// * Typed request bodies for the fixed API surface
// * Fields borrow from their owners so secrets are never copied into intermediate JSON values
//
// * The remote path-reference key is spelled `what` on every endpoint here. Older
// * revisions of the service client used `wath` on some calls; confirm against the
// * live API before changing it.

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderFileRequest<'a> {
    pub token: &'a str,
    #[serde(rename = "what")]
    pub path: &'a str,
    pub convert_type: &'static str,
    pub not_load_lang: &'static str,
}

// * UpdateExtension body; the type-specific fields depend on `type`
#[derive(Debug, Serialize)]
pub struct UpdateExtensionRequest<'a> {
    pub token: &'a str,
    pub path: &'a str,
    #[serde(flatten)]
    pub extension: ExtensionSettings<'a>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub enum ExtensionSettings<'a> {
    #[serde(rename = "routing_yemot")]
    RoutingYemot {
        routing_yemot_number: &'a str,
        white_list_error_goto: &'a str,
        white_list: &'static str,
    },
    #[serde(rename = "routing_1800")]
    Routing1800 { routing_1800: &'a str },
}

#[derive(Debug, Serialize)]
pub struct UploadTextFileRequest<'a> {
    pub token: &'a str,
    #[serde(rename = "what")]
    pub path: &'a str,
    pub contents: &'a str,
}

#[derive(Debug, Serialize)]
pub struct FileActionRequest<'a> {
    pub token: &'a str,
    #[serde(rename = "what")]
    pub path: &'a str,
    pub action: FileAction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<&'a str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileAction {
    Move,
    Delete,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_request_shape() {
        let body = RenderFileRequest {
            token: "t",
            path: "ivr2:/7/Approval.ymgr",
            convert_type: "json",
            not_load_lang: "0",
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "token": "t",
                "what": "ivr2:/7/Approval.ymgr",
                "convertType": "json",
                "notLoadLang": "0"
            })
        );
    }

    #[test]
    fn test_extension_type_is_inlined() {
        let body = UpdateExtensionRequest {
            token: "t",
            path: "ivr2:",
            extension: ExtensionSettings::RoutingYemot {
                routing_yemot_number: "0771112222",
                white_list_error_goto: "/1",
                white_list: "yes",
            },
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "token": "t",
                "path": "ivr2:",
                "type": "routing_yemot",
                "routing_yemot_number": "0771112222",
                "white_list_error_goto": "/1",
                "white_list": "yes"
            })
        );
    }

    #[test]
    fn test_delete_omits_target() {
        let body = FileActionRequest {
            token: "t",
            path: "ivr2:/x",
            action: FileAction::Delete,
            target: None,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"token": "t", "what": "ivr2:/x", "action": "delete"})
        );
    }
}
