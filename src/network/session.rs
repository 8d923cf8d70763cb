// * Login exchange: username/password in, short-lived session token out

use crate::config::constants::LOGIN_PATH;
use crate::network::client::ApiClient;
use crate::network::errors::{AuthError, ResponseFault};
use crate::network::requests::LoginRequest;
use crate::network::response::decode_object;
use crate::network::secret::{Credentials, SessionToken};
use serde_json::Value;
use tracing::info;
use zeroize::Zeroizing;

// * Consumes the credentials; the password buffer is wiped when this returns
pub async fn login(
    client: &ApiClient,
    credentials: Credentials,
) -> Result<SessionToken, AuthError> {
    info!(user = credentials.username(), "Logging in to API");

    let body = {
        let request = LoginRequest {
            username: credentials.username(),
            password: credentials.password(),
        };
        Zeroizing::new(client.post(LOGIN_PATH, &request).await?)
    };
    drop(credentials);

    let token = extract_token(&body).map_err(AuthError::Rejected)?;
    info!("Login succeeded, session token issued");
    Ok(token)
}

fn extract_token(body: &str) -> Result<SessionToken, ResponseFault> {
    let object = decode_object(body)?;
    match object.get("token") {
        Some(Value::String(token)) if !token.is_empty() => Ok(SessionToken::new(token.as_str())),
        _ => Err(ResponseFault::MissingToken),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_token() {
        let token = extract_token(r#"{"responseStatus":"OK","token":"abc:123"}"#).unwrap();
        assert_eq!(token.as_str(), "abc:123");
    }

    #[test]
    fn test_extract_token_failures() {
        assert_eq!(extract_token("nope").unwrap_err(), ResponseFault::InvalidJson);
        assert_eq!(extract_token("[]").unwrap_err(), ResponseFault::NotAnObject);
        assert_eq!(
            extract_token(r#"{"responseStatus":"ERROR"}"#).unwrap_err(),
            ResponseFault::MissingToken
        );
        assert_eq!(
            extract_token(r#"{"token":""}"#).unwrap_err(),
            ResponseFault::MissingToken
        );
        assert_eq!(
            extract_token(r#"{"token":42}"#).unwrap_err(),
            ResponseFault::MissingToken
        );
    }
}
