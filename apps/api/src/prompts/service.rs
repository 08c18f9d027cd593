//! Prompt operations. One store call per operation.

use chrono::{DateTime, SubsecRound, Utc};
use tracing::{debug, info};

use crate::errors::AppError;
use crate::models::prompt::{NewPrompt, Prompt, PromptChanges, PromptId};
use crate::prompts::requests::{
    CreatePromptRequest, FieldUpdate, UpdatePromptRequest, DEFAULT_SEED_RECORDS,
    MAX_SEED_RECORDS,
};
use crate::prompts::seed;
use crate::store::PromptStore;

/// Current time at the store's timestamp precision (milliseconds), so the
/// value a caller sees is exactly the value that was persisted.
fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

pub async fn list_prompts(store: &dyn PromptStore) -> Result<Vec<Prompt>, AppError> {
    store.list().await
}

pub async fn create_prompt(
    store: &dyn PromptStore,
    req: CreatePromptRequest,
) -> Result<Prompt, AppError> {
    let now = now();
    let prompt = store
        .insert(NewPrompt {
            prompt: req.prompt,
            prompt_title: req.prompt_title,
            prompt_description: req.prompt_description,
            last_updated_by: req.created_by.clone(),
            created_by: req.created_by,
            created_date_time: now,
            last_updated_date_time: now,
        })
        .await?;

    info!("Created prompt {} by {}", prompt.id, prompt.created_by);
    Ok(prompt)
}

fn required_field(name: &str, field: FieldUpdate<String>) -> Result<Option<String>, AppError> {
    match field {
        FieldUpdate::Absent => Ok(None),
        FieldUpdate::Null => Err(AppError::UnprocessableEntity(format!(
            "{name} cannot be null"
        ))),
        FieldUpdate::Value(value) => Ok(Some(value)),
    }
}

pub async fn update_prompt(
    store: &dyn PromptStore,
    id: &PromptId,
    req: UpdatePromptRequest,
) -> Result<Prompt, AppError> {
    let updated_by = match req.updated_by {
        Some(name) if !name.trim().is_empty() => name,
        _ => return Err(AppError::Forbidden("User missing from request".to_string())),
    };

    let changes = PromptChanges {
        prompt: required_field("prompt", req.prompt)?,
        prompt_title: required_field("promptTitle", req.prompt_title)?,
        prompt_description: required_field("promptDescription", req.prompt_description)?,
        updated_by,
        updated_at: now(),
    };

    if let Some(body_id) = req.id.as_ref().filter(|body_id| *body_id != id) {
        debug!("Ignoring body id {body_id}; updating path id {id}");
    }

    let prompt = store
        .update(id, changes)
        .await?
        .ok_or_else(|| AppError::NotFound("Prompt not found".to_string()))?;

    info!("Updated prompt {} by {}", prompt.id, prompt.last_updated_by);
    Ok(prompt)
}

pub async fn delete_prompt(store: &dyn PromptStore, id: &PromptId) -> Result<(), AppError> {
    if !store.delete(id).await? {
        return Err(AppError::NotFound("Prompt not found".to_string()));
    }
    info!("Deleted prompt {id}");
    Ok(())
}

/// Resolves the requested seed size, defaulting when absent.
pub fn seed_count(num_records: Option<i64>) -> Result<usize, AppError> {
    let n = num_records.unwrap_or(DEFAULT_SEED_RECORDS);
    if !(1..=MAX_SEED_RECORDS).contains(&n) {
        return Err(AppError::Validation(format!(
            "num_records must be between 1 and {MAX_SEED_RECORDS}, got {n}"
        )));
    }
    Ok(n as usize)
}

/// Inserts a batch of generated prompts. Returns the count the store reports.
pub async fn seed_prompts(
    store: &dyn PromptStore,
    num_records: Option<i64>,
) -> Result<usize, AppError> {
    let count = seed_count(num_records)?;
    let records = {
        let mut rng = rand::thread_rng();
        seed::generate(&mut rng, count, now())
    };

    let inserted = store.insert_many(records).await?;
    info!("Seeded {inserted} prompts");
    Ok(inserted)
}
