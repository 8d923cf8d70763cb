// * Secret holders for login material and session tokens
// * Buffers are wiped on drop and never printed through Debug

use std::fmt;
use zeroize::Zeroizing;

// * A username/password pair, alive only until the login exchange consumes it
pub struct Credentials {
    username: String,
    password: Zeroizing<String>,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: Zeroizing::new(password.into()),
        }
    }

    // * Takes ownership of an already-wiped-on-drop password without copying it
    pub(crate) fn from_secret(username: String, password: Zeroizing<String>) -> Self {
        Self { username, password }
    }

    // * Splits `username:password` on the first colon
    // * Returns None if there is no colon or either half is empty
    pub fn from_pair(raw: &str) -> Option<Self> {
        let (username, password) = raw.split_once(':')?;
        if username.is_empty() || password.is_empty() {
            return None;
        }
        Some(Self::new(username, password))
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub(crate) fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

// * Opaque token issued by the remote Login endpoint
pub struct SessionToken(Zeroizing<String>);

impl SessionToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(Zeroizing::new(token.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionToken([REDACTED])")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_splits_on_first_colon() {
        let creds = Credentials::from_pair("admin:pa:ss").unwrap();
        assert_eq!(creds.username(), "admin");
        assert_eq!(creds.password(), "pa:ss");
    }

    #[test]
    fn test_pair_rejects_missing_halves() {
        assert!(Credentials::from_pair("abc").is_none());
        assert!(Credentials::from_pair(":secret").is_none());
        assert!(Credentials::from_pair("admin:").is_none());
    }

    #[test]
    fn test_debug_never_prints_secrets() {
        let creds = Credentials::new("admin", "hunter2");
        let token = SessionToken::new("tok-123");

        let rendered = format!("{:?} {:?}", creds, token);
        assert!(rendered.contains("admin"));
        assert!(!rendered.contains("hunter2"));
        assert!(!rendered.contains("tok-123"));
    }
}
