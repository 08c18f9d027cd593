use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Externally visible prompt identifier.
///
/// Always the string form of whatever key the backing store assigns; the store
/// implementation is the only code that knows how to turn it back into a native key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PromptId(String);

impl PromptId {
    pub fn new(id: impl Into<String>) -> Self {
        PromptId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PromptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A persisted prompt record as returned over the API.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Prompt {
    pub id: PromptId,
    pub prompt: String,
    pub prompt_title: String,
    pub prompt_description: String,
    pub created_by: String,
    pub created_date_time: DateTime<Utc>,
    pub last_updated_by: String,
    pub last_updated_date_time: DateTime<Utc>,
}

/// A prompt that has not been stored yet. The store assigns its id on insert.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPrompt {
    pub prompt: String,
    pub prompt_title: String,
    pub prompt_description: String,
    pub created_by: String,
    pub created_date_time: DateTime<Utc>,
    pub last_updated_by: String,
    pub last_updated_date_time: DateTime<Utc>,
}

impl NewPrompt {
    pub fn with_id(self, id: PromptId) -> Prompt {
        Prompt {
            id,
            prompt: self.prompt,
            prompt_title: self.prompt_title,
            prompt_description: self.prompt_description,
            created_by: self.created_by,
            created_date_time: self.created_date_time,
            last_updated_by: self.last_updated_by,
            last_updated_date_time: self.last_updated_date_time,
        }
    }
}

/// Partial update applied to an existing prompt.
/// `None` leaves the stored value untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptChanges {
    pub prompt: Option<String>,
    pub prompt_title: Option<String>,
    pub prompt_description: Option<String>,
    pub updated_by: String,
    pub updated_at: DateTime<Utc>,
}

impl PromptChanges {
    /// Applies the changes in place. `last_updated_date_time` never moves backwards.
    pub fn apply_to(&self, prompt: &mut Prompt) {
        if let Some(text) = &self.prompt {
            prompt.prompt = text.clone();
        }
        if let Some(title) = &self.prompt_title {
            prompt.prompt_title = title.clone();
        }
        if let Some(description) = &self.prompt_description {
            prompt.prompt_description = description.clone();
        }
        prompt.last_updated_by = self.updated_by.clone();
        prompt.last_updated_date_time = prompt.last_updated_date_time.max(self.updated_at);
    }
}
