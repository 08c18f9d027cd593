//! Axum route handlers for the Prompt API.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use serde::Serialize;

use crate::errors::AppError;
use crate::models::prompt::{Prompt, PromptId};
use crate::prompts::requests::{CreatePromptRequest, SeedQuery, UpdatePromptRequest};
use crate::prompts::service;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SeedResponse {
    pub message: String,
}

/// GET /prompts
pub async fn handle_list_prompts(
    State(state): State<AppState>,
) -> Result<Json<Vec<Prompt>>, AppError> {
    Ok(Json(service::list_prompts(state.store.as_ref()).await?))
}

/// POST /prompt
pub async fn handle_create_prompt(
    State(state): State<AppState>,
    payload: Result<Json<CreatePromptRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Prompt>), AppError> {
    let Json(req) = payload?;
    let prompt = service::create_prompt(state.store.as_ref(), req).await?;
    Ok((StatusCode::CREATED, Json(prompt)))
}

/// PUT /prompt/:id
pub async fn handle_update_prompt(
    State(state): State<AppState>,
    Path(id): Path<PromptId>,
    payload: Result<Json<UpdatePromptRequest>, JsonRejection>,
) -> Result<Json<Prompt>, AppError> {
    let Json(req) = payload?;
    let prompt = service::update_prompt(state.store.as_ref(), &id, req).await?;
    Ok(Json(prompt))
}

/// DELETE /prompt/:id
pub async fn handle_delete_prompt(
    State(state): State<AppState>,
    Path(id): Path<PromptId>,
) -> Result<StatusCode, AppError> {
    service::delete_prompt(state.store.as_ref(), &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /create-seed-data?num_records=N
pub async fn handle_create_seed_data(
    State(state): State<AppState>,
    query: Result<Query<SeedQuery>, QueryRejection>,
) -> Result<Json<SeedResponse>, AppError> {
    let Query(params) = query?;
    let created = service::seed_prompts(state.store.as_ref(), params.num_records).await?;
    Ok(Json(SeedResponse {
        message: format!("{created} prompts created successfully"),
    }))
}
