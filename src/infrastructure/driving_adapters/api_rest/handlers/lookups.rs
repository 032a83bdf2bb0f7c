//! Lookup Handlers
//!
//! HTTP handlers for role and user status CRUD operations. The same router
//! is mounted once per resource; the `LookupState` it is given decides
//! which table it serves.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use crate::domain::models::EntityId;
use crate::infrastructure::driving_adapters::api_rest::dto::{LookupResponseDto, NamePayloadDto};
use crate::infrastructure::driving_adapters::api_rest::LookupState;
use crate::shared::envelope::Envelope;
use crate::shared::errors::ApiError;

/// Create the router for one lookup resource
pub fn router() -> Router<LookupState> {
    Router::new()
        .route("/", post(create_entry).get(list_entries))
        .route(
            "/{id}",
            get(get_entry_by_id).put(update_entry).delete(delete_entry),
        )
}

fn parse_id(raw: &str) -> Result<EntityId, ApiError> {
    raw.parse::<EntityId>()
        .map_err(|_| ApiError::InvalidId(raw.to_string()))
}

fn parse_body(payload: Result<Json<NamePayloadDto>, JsonRejection>) -> Result<NamePayloadDto, ApiError> {
    payload
        .map(|Json(dto)| dto)
        .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))
}

/// POST / - Create a new entry
///
/// # Responses
///
/// * 201 Created - Entry created successfully
/// * 400 Bad Request - Name missing, not a string, blank, or already in use
#[axum::debug_handler]
async fn create_entry(
    State(state): State<LookupState>,
    payload: Result<Json<NamePayloadDto>, JsonRejection>,
) -> Result<Envelope<LookupResponseDto>, ApiError> {
    let name = state.name_validator.validate(parse_body(payload)?, None).await?;

    let entry = state.create_entry_use_case.execute(name).await?;

    Ok(Envelope::created(
        format!("{} created successfully", state.kind.label()),
        LookupResponseDto::from(entry),
    ))
}

/// GET / - List all entries
///
/// # Responses
///
/// * 200 OK - List of entries ordered by ID (possibly empty)
#[axum::debug_handler]
async fn list_entries(
    State(state): State<LookupState>,
) -> Result<Envelope<Vec<LookupResponseDto>>, ApiError> {
    let entries = state.list_entries_use_case.execute().await?;

    let response: Vec<LookupResponseDto> = entries.into_iter().map(LookupResponseDto::from).collect();
    Ok(Envelope::ok(
        format!("{} fetched successfully", state.kind.plural_label()),
        response,
    ))
}

/// GET /{id} - Get an entry by ID
///
/// # Responses
///
/// * 200 OK - Entry found
/// * 400 Bad Request - ID is not an integer
/// * 404 Not Found - Entry does not exist
#[axum::debug_handler]
async fn get_entry_by_id(
    State(state): State<LookupState>,
    Path(id): Path<String>,
) -> Result<Envelope<LookupResponseDto>, ApiError> {
    let id = parse_id(&id)?;

    let entry = state.get_entry_by_id_use_case.execute(id).await?;

    Ok(Envelope::ok(
        format!("{} fetched successfully", state.kind.label()),
        LookupResponseDto::from(entry),
    ))
}

/// PUT /{id} - Replace the name of an entry
///
/// # Responses
///
/// * 200 OK - Entry updated successfully
/// * 400 Bad Request - Invalid ID or name
/// * 404 Not Found - Entry does not exist
#[axum::debug_handler]
async fn update_entry(
    State(state): State<LookupState>,
    Path(id): Path<String>,
    payload: Result<Json<NamePayloadDto>, JsonRejection>,
) -> Result<Envelope<LookupResponseDto>, ApiError> {
    let id = parse_id(&id)?;
    let name = state.name_validator.validate(parse_body(payload)?, Some(id)).await?;

    let entry = state.update_entry_use_case.execute(id, name).await?;

    Ok(Envelope::ok(
        format!("{} updated successfully", state.kind.label()),
        LookupResponseDto::from(entry),
    ))
}

/// DELETE /{id} - Delete an entry
///
/// # Responses
///
/// * 204 No Content - Entry deleted successfully
/// * 400 Bad Request - ID is not an integer
/// * 404 Not Found - Entry does not exist
#[axum::debug_handler]
async fn delete_entry(
    State(state): State<LookupState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;

    state.delete_entry_use_case.execute(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
