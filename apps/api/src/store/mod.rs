//! Prompt persistence.
//!
//! `PromptStore` is the only seam between request logic and the backing
//! database. Implementations own the mapping between their native key type and
//! the string `PromptId` the API exposes; nothing above this module sees a
//! store-native identifier.
//!
//! `AppState` holds an `Arc<dyn PromptStore>`, chosen at startup via config.

pub mod memory;
pub mod mongo;

use async_trait::async_trait;

use crate::errors::AppError;
use crate::models::prompt::{NewPrompt, Prompt, PromptChanges, PromptId};

pub use memory::InMemoryPromptStore;
pub use mongo::MongoPromptStore;

#[async_trait]
pub trait PromptStore: Send + Sync {
    /// Cheap round-trip used by the health endpoint.
    async fn ping(&self) -> Result<(), AppError>;

    /// All prompts in the store's natural iteration order.
    async fn list(&self) -> Result<Vec<Prompt>, AppError>;

    /// Inserts one prompt and returns it with its store-assigned id.
    async fn insert(&self, prompt: NewPrompt) -> Result<Prompt, AppError>;

    /// Inserts a batch in a single store call. Returns how many were inserted.
    async fn insert_many(&self, prompts: Vec<NewPrompt>) -> Result<usize, AppError>;

    /// Applies `changes` and returns the updated prompt, or `None` if no prompt has `id`.
    async fn update(&self, id: &PromptId, changes: PromptChanges)
        -> Result<Option<Prompt>, AppError>;

    /// Hard-deletes a prompt. Returns `false` if no prompt has `id`.
    async fn delete(&self, id: &PromptId) -> Result<bool, AppError>;
}
