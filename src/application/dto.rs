use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::{Page, Result, StoreError, UserRecord};

/// Body of the create and update routes: `{"user": {...}}`.
#[derive(Debug, Deserialize)]
pub struct UserEnvelope {
    #[serde(default)]
    pub user: Option<Value>,
}

impl UserEnvelope {
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        serde_json::from_slice(body).map_err(|err| {
            StoreError::malformed_payload(format!("body must be a JSON object: {}", err))
        })
    }

    /// Presence checks only: every field must be there as a string and the
    /// id must not be blank.
    pub fn into_record(self) -> Result<UserRecord> {
        let user = match self.user {
            Some(user @ Value::Object(_)) => user,
            Some(_) => return Err(StoreError::malformed_payload("`user` must be an object")),
            None => return Err(StoreError::malformed_payload("missing `user` object")),
        };

        let record: UserRecord = serde_json::from_value(user)
            .map_err(|err| StoreError::malformed_payload(format!("invalid `user`: {}", err)))?;

        if record.id.trim().is_empty() {
            return Err(StoreError::malformed_payload("`user.id` must not be blank"));
        }

        Ok(record)
    }
}

#[derive(Debug, Serialize)]
pub struct UserPageResponse {
    pub users: Vec<UserRecord>,
    pub pages: u64,
    pub page: u64,
}

impl From<Page<UserRecord>> for UserPageResponse {
    fn from(value: Page<UserRecord>) -> Self {
        Self {
            users: value.items,
            pages: value.pages,
            page: value.page,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
