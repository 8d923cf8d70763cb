// * Extraction and validation of one pending provisioning record

use crate::config::constants::{FIELD_PASSWORD, FIELD_PHONE, FIELD_USERNAME};
use crate::network::secret::Credentials;
use serde_json::Value;
use std::fmt;
use zeroize::Zeroizing;

pub struct ProvisioningRecord {
    pub index: usize,
    pub credentials: Credentials,
    pub phone: Zeroizing<String>,
}

impl fmt::Debug for ProvisioningRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProvisioningRecord")
            .field("index", &self.index)
            .field("credentials", &self.credentials)
            .field("phone", &"[REDACTED]")
            .finish()
    }
}

// * Names the required fields that were absent or empty, never their values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordRejection {
    pub index: usize,
    pub missing: Vec<&'static str>,
}

impl fmt::Display for RecordRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "record {} is incomplete (missing or empty: {})",
            self.index,
            self.missing.join("/")
        )
    }
}

impl ProvisioningRecord {
    // * Consumes the entry; present fields are moved out, never copied
    pub fn from_entry(index: usize, mut entry: Value) -> Result<Self, RecordRejection> {
        let username = take_field(&mut entry, FIELD_USERNAME);
        let password = take_field(&mut entry, FIELD_PASSWORD);
        let phone = take_field(&mut entry, FIELD_PHONE);
        drop(entry);

        match (username, password, phone) {
            (Some(mut username), Some(password), Some(phone)) => Ok(Self {
                index,
                credentials: Credentials::from_secret(std::mem::take(&mut *username), password),
                phone,
            }),
            (username, password, phone) => {
                let missing = [
                    (FIELD_USERNAME, username.is_none()),
                    (FIELD_PASSWORD, password.is_none()),
                    (FIELD_PHONE, phone.is_none()),
                ]
                .into_iter()
                .filter_map(|(name, absent)| absent.then_some(name))
                .collect();
                Err(RecordRejection { index, missing })
            }
        }
    }
}

// * Non-empty strings and unsigned integers count as present; anything else is absent.
// * The value is taken out of `entry`, leaving null in its place.
fn take_field(entry: &mut Value, key: &str) -> Option<Zeroizing<String>> {
    match entry.get_mut(key)?.take() {
        Value::String(s) => {
            let s = Zeroizing::new(s);
            (!s.is_empty()).then_some(s)
        }
        Value::Number(n) if n.is_u64() => Some(Zeroizing::new(n.to_string())),
        _ => None,
    }
}
