//! In-memory prompt store

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::PromptStore;
use crate::errors::AppError;
use crate::models::prompt::{NewPrompt, Prompt, PromptChanges, PromptId};

/// Keeps prompts in insertion order. Ids are hyphenless v4 UUIDs.
#[derive(Debug, Default)]
pub struct InMemoryPromptStore {
    prompts: RwLock<Vec<Prompt>>,
}

impl InMemoryPromptStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id() -> PromptId {
        PromptId::new(Uuid::new_v4().simple().to_string())
    }
}

#[async_trait]
impl PromptStore for InMemoryPromptStore {
    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Prompt>, AppError> {
        Ok(self.prompts.read().await.clone())
    }

    async fn insert(&self, prompt: NewPrompt) -> Result<Prompt, AppError> {
        let stored = prompt.with_id(Self::next_id());
        self.prompts.write().await.push(stored.clone());
        Ok(stored)
    }

    async fn insert_many(&self, prompts: Vec<NewPrompt>) -> Result<usize, AppError> {
        let mut guard = self.prompts.write().await;
        let count = prompts.len();
        guard.extend(prompts.into_iter().map(|p| p.with_id(Self::next_id())));
        Ok(count)
    }

    async fn update(
        &self,
        id: &PromptId,
        changes: PromptChanges,
    ) -> Result<Option<Prompt>, AppError> {
        let mut guard = self.prompts.write().await;
        Ok(guard.iter_mut().find(|p| &p.id == id).map(|prompt| {
            changes.apply_to(prompt);
            prompt.clone()
        }))
    }

    async fn delete(&self, id: &PromptId) -> Result<bool, AppError> {
        let mut guard = self.prompts.write().await;
        let before = guard.len();
        guard.retain(|p| &p.id != id);
        Ok(guard.len() != before)
    }
}
