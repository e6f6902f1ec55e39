//! Handlers for the `/characters` resource.
//!
//! Every mutation goes through one serialized load-modify-save cycle in the
//! store and answers with the complete post-mutation list, only after the
//! write has landed on disk. Mutations run on their own task so a request
//! timeout cannot abandon a write half way.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use std::future::Future;

use axum::Json;
use charcat_core::character::ENTITY;
use charcat_core::error::CoreError;
use charcat_core::types::DbId;
use charcat_db::models::character::{CreateCharacter, UpdateCharacter};
use charcat_db::repositories::CharacterRepo;
use charcat_db::StoreError;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::response::{CharacterResponse, CharactersResponse, MutationResponse};
use crate::state::AppState;

/// GET /api/characters
///
/// Never fails: an unreadable data file reads as an empty catalog.
pub async fn list(State(state): State<AppState>) -> Json<CharactersResponse> {
    let characters = CharacterRepo::list(&state.store).await;
    Json(CharactersResponse { characters })
}

/// GET /api/characters/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
) -> AppResult<Json<CharacterResponse>> {
    let id = path_id(id)?;
    let character = CharacterRepo::find_by_id(&state.store, id)
        .await
        .ok_or(not_found(id))?;
    Ok(Json(CharacterResponse { character }))
}

/// POST /api/characters
///
/// Requires `name`, `realName` and `universe`, all non-empty.
pub async fn create(
    State(state): State<AppState>,
    input: Result<Json<CreateCharacter>, JsonRejection>,
) -> AppResult<Json<MutationResponse>> {
    let Json(input) = input.map_err(bad_body)?;
    input.validate()?;

    let store = state.store;
    let characters =
        run_to_completion(async move { CharacterRepo::create(&store, &input).await }).await?;
    Ok(Json(MutationResponse {
        message: "Character added",
        characters,
    }))
}

/// PUT /api/characters/{id}
///
/// Partial update: only the fields present in the body are replaced.
pub async fn update(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
    input: Result<Json<UpdateCharacter>, JsonRejection>,
) -> AppResult<Json<MutationResponse>> {
    let id = path_id(id)?;
    let Json(input) = input.map_err(bad_body)?;
    input.validate()?;

    let store = state.store;
    let characters =
        run_to_completion(async move { CharacterRepo::update(&store, id, &input).await })
            .await?
            .ok_or(not_found(id))?;
    Ok(Json(MutationResponse {
        message: "Character updated",
        characters,
    }))
}

/// DELETE /api/characters/{id}
pub async fn delete(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
) -> AppResult<Json<MutationResponse>> {
    let id = path_id(id)?;
    let store = state.store;
    let characters = run_to_completion(async move { CharacterRepo::delete(&store, id).await })
        .await?
        .ok_or(not_found(id))?;
    Ok(Json(MutationResponse {
        message: "Character deleted",
        characters,
    }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Drive a store mutation on a spawned task and wait for its outcome.
///
/// If the request future is dropped the task still finishes its write.
async fn run_to_completion<T, F>(mutation: F) -> AppResult<T>
where
    T: Send + 'static,
    F: Future<Output = Result<T, StoreError>> + Send + 'static,
{
    tokio::spawn(mutation)
        .await
        .map_err(|err| AppError::InternalError(format!("Store task failed: {err}")))?
        .map_err(AppError::from)
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: ENTITY, id })
}

fn path_id(id: Result<Path<DbId>, PathRejection>) -> AppResult<DbId> {
    id.map(|Path(id)| id)
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
}

fn bad_body(rejection: JsonRejection) -> AppError {
    AppError::BadRequest(rejection.body_text())
}
