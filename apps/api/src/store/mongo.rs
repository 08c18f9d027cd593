//! MongoDB-backed prompt store.
//!
//! This is the single place where `ObjectId` and the string `PromptId` meet.

use anyhow::anyhow;
use async_trait::async_trait;
use bson::{doc, oid::ObjectId, Document};
use chrono::{DateTime, Utc};
use futures::TryStreamExt;
use mongodb::{options::ReturnDocument, Collection, Database};
use serde::{Deserialize, Serialize};

use super::PromptStore;
use crate::errors::AppError;
use crate::models::prompt::{NewPrompt, Prompt, PromptChanges, PromptId};

/// On-disk shape of a prompt. Field names match the API's camelCase keys.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    prompt: String,
    prompt_title: String,
    prompt_description: String,
    created_by: String,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    created_date_time: DateTime<Utc>,
    last_updated_by: String,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    last_updated_date_time: DateTime<Utc>,
}

impl From<NewPrompt> for PromptDocument {
    fn from(p: NewPrompt) -> Self {
        PromptDocument {
            id: None,
            prompt: p.prompt,
            prompt_title: p.prompt_title,
            prompt_description: p.prompt_description,
            created_by: p.created_by,
            created_date_time: p.created_date_time,
            last_updated_by: p.last_updated_by,
            last_updated_date_time: p.last_updated_date_time,
        }
    }
}

impl PromptDocument {
    fn into_prompt(self) -> Result<Prompt, AppError> {
        let id = self
            .id
            .ok_or_else(|| anyhow!("prompt document is missing its _id"))?;
        Ok(Prompt {
            id: to_prompt_id(id),
            prompt: self.prompt,
            prompt_title: self.prompt_title,
            prompt_description: self.prompt_description,
            created_by: self.created_by,
            created_date_time: self.created_date_time,
            last_updated_by: self.last_updated_by,
            last_updated_date_time: self.last_updated_date_time,
        })
    }
}

fn to_prompt_id(id: ObjectId) -> PromptId {
    PromptId::new(id.to_hex())
}

/// `None` when the id is not a well-formed ObjectId; such ids cannot match any document.
fn to_object_id(id: &PromptId) -> Option<ObjectId> {
    ObjectId::parse_str(id.as_str()).ok()
}

/// Builds the update document for a partial change.
///
/// `lastUpdatedDateTime` goes through `$max` so a lagging clock cannot rewind it.
fn update_document(changes: &PromptChanges) -> Document {
    let mut set = doc! { "lastUpdatedBy": changes.updated_by.as_str() };
    if let Some(text) = &changes.prompt {
        set.insert("prompt", text.as_str());
    }
    if let Some(title) = &changes.prompt_title {
        set.insert("promptTitle", title.as_str());
    }
    if let Some(description) = &changes.prompt_description {
        set.insert("promptDescription", description.as_str());
    }

    doc! {
        "$set": set,
        "$max": { "lastUpdatedDateTime": bson::DateTime::from_chrono(changes.updated_at) },
    }
}

#[derive(Clone)]
pub struct MongoPromptStore {
    database: Database,
    collection: Collection<PromptDocument>,
}

impl MongoPromptStore {
    pub fn new(database: &Database, collection: &str) -> Self {
        Self {
            database: database.clone(),
            collection: database.collection::<PromptDocument>(collection),
        }
    }
}

#[async_trait]
impl PromptStore for MongoPromptStore {
    async fn ping(&self) -> Result<(), AppError> {
        self.database.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Prompt>, AppError> {
        let documents: Vec<PromptDocument> =
            self.collection.find(doc! {}).await?.try_collect().await?;
        documents.into_iter().map(PromptDocument::into_prompt).collect()
    }

    async fn insert(&self, prompt: NewPrompt) -> Result<Prompt, AppError> {
        let result = self
            .collection
            .insert_one(PromptDocument::from(prompt.clone()))
            .await?;
        let id = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| anyhow!("store returned a non-ObjectId key: {}", result.inserted_id))?;
        Ok(prompt.with_id(to_prompt_id(id)))
    }

    async fn insert_many(&self, prompts: Vec<NewPrompt>) -> Result<usize, AppError> {
        if prompts.is_empty() {
            return Ok(0);
        }
        let documents: Vec<PromptDocument> = prompts.into_iter().map(Into::into).collect();
        let result = self.collection.insert_many(documents).await?;
        Ok(result.inserted_ids.len())
    }

    async fn update(
        &self,
        id: &PromptId,
        changes: PromptChanges,
    ) -> Result<Option<Prompt>, AppError> {
        let Some(object_id) = to_object_id(id) else {
            return Ok(None);
        };
        let updated = self
            .collection
            .find_one_and_update(doc! { "_id": object_id }, update_document(&changes))
            .return_document(ReturnDocument::After)
            .await?;
        updated.map(PromptDocument::into_prompt).transpose()
    }

    async fn delete(&self, id: &PromptId) -> Result<bool, AppError> {
        let Some(object_id) = to_object_id(id) else {
            return Ok(false);
        };
        let result = self.collection.delete_one(doc! { "_id": object_id }).await?;
        Ok(result.deleted_count > 0)
    }
}
