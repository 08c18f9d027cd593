//! Request payloads for the prompt endpoints.

use serde::{Deserialize, Deserializer};

use crate::models::prompt::PromptId;

/// A field in a partial update.
///
/// Keeps "not sent" apart from "sent as null", which plain `Option<T>` cannot.
/// Fields using it need `#[serde(default)]` so a missing key becomes `Absent`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FieldUpdate<T> {
    #[default]
    Absent,
    Null,
    Value(T),
}

impl<'de, T> Deserialize<'de> for FieldUpdate<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(value) => FieldUpdate::Value(value),
            None => FieldUpdate::Null,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePromptRequest {
    pub prompt: String,
    pub prompt_title: String,
    pub prompt_description: String,
    pub created_by: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePromptRequest {
    /// Echo of the record id. Accepted for client compatibility; the path id is authoritative.
    #[serde(default)]
    pub id: Option<PromptId>,
    #[serde(default)]
    pub prompt: FieldUpdate<String>,
    #[serde(default)]
    pub prompt_title: FieldUpdate<String>,
    #[serde(default)]
    pub prompt_description: FieldUpdate<String>,
    #[serde(default)]
    pub updated_by: Option<String>,
}

pub const DEFAULT_SEED_RECORDS: i64 = 10;
pub const MAX_SEED_RECORDS: i64 = 100;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedQuery {
    pub num_records: Option<i64>,
}
