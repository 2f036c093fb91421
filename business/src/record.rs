//! User records as served by the members resource.

use serde::{Deserialize, Deserializer, Serialize};
use ustr::Ustr;

/// Stable record identifier. Interned because ids are compared on every selection lookup.
pub type RecordId = Ustr;

/// One user entity.
///
/// All fields are opaque strings. `id` never changes after the record is loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub role: String,
}

impl UserRecord {
    pub fn new(
        id: impl AsRef<str>,
        name: impl Into<String>,
        email: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            id: Ustr::from(id.as_ref()),
            name: name.into(),
            email: email.into(),
            role: role.into(),
        }
    }
}

/// Accepts `"id": "7"` as well as `"id": 7`.
fn deserialize_id<'de, D>(deserializer: D) -> Result<RecordId, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(u64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(text) => Ustr::from(&text),
        RawId::Number(number) => Ustr::from(&number.to_string()),
    })
}
