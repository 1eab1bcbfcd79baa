//! Thing CRUD route handlers.
//!
//! Mounted twice: once publicly and once behind the bearer-token gate.
//! Both trees operate on the single shared record store.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use thing_server_core::ThingId;

use crate::error::ApiError;
use crate::models::{Thing, ThingDraft};
use crate::state::AppState;
use crate::store::StoreError;

/// Response body for the collection listing.
#[derive(Serialize)]
pub struct ThingsResponse {
    pub msg: String,
    pub things: Vec<Thing>,
}

/// Response body for single-record operations.
#[derive(Serialize)]
pub struct ThingResponse {
    pub msg: String,
    pub thing: Thing,
}

/// Response body for deletions, echoing the removed record.
#[derive(Serialize)]
pub struct DeletedThingResponse {
    pub msg: String,
    #[serde(rename = "deletedThing")]
    pub deleted_thing: Thing,
}

/// Parse a path id, rejecting non-numeric input with a 400.
fn parse_id(raw: &str) -> Result<ThingId, ApiError> {
    raw.parse::<ThingId>()
        .map_err(|_| ApiError::BadRequest("Invalid ID for thing".to_string()))
}

/// Unwrap a JSON body into a draft. A body that is missing, is not
/// valid JSON, or carries wrong-typed fields validates the same way as
/// one with both fields absent, so every bad shape reports 400 rather
/// than leaking the extractor's own rejection status.
fn draft_from_body(body: Result<Json<ThingDraft>, JsonRejection>) -> ThingDraft {
    body.map_or_else(|_| ThingDraft::default(), |Json(draft)| draft)
}

/// `GET /things` - list the full collection.
pub async fn list(State(state): State<AppState>) -> Result<Json<ThingsResponse>, ApiError> {
    let things = state.things().list()?;
    Ok(Json(ThingsResponse {
        msg: "Successful GET for things".to_string(),
        things,
    }))
}

/// `GET /things/{id}` - fetch one record.
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ThingResponse>, ApiError> {
    let id = parse_id(&id)?;
    let thing = state.things().get(id).map_err(|err| match err {
        StoreError::NotFound => ApiError::NotFound(format!("Failed to GET thing with id {id}")),
        other => other.into(),
    })?;

    Ok(Json(ThingResponse {
        msg: format!("Successful GET for thing with id {id}"),
        thing,
    }))
}

/// `POST /things` - validate and insert a new record.
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<ThingDraft>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let thing = state.things().create(draft_from_body(body))?;

    Ok((
        StatusCode::CREATED,
        Json(ThingResponse {
            msg: "Successfully POSTed thing".to_string(),
            thing,
        }),
    ))
}

/// `PUT /things/{id}` - full-record replacement keyed by id.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<ThingDraft>, JsonRejection>,
) -> Result<Json<ThingResponse>, ApiError> {
    let id = parse_id(&id)?;
    let thing = state.things().update(id, draft_from_body(body))?;

    Ok(Json(ThingResponse {
        msg: "Successfully PUT thing".to_string(),
        thing,
    }))
}

/// `DELETE /things/{id}` - remove a record, echoing it back.
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeletedThingResponse>, ApiError> {
    let id = parse_id(&id)?;
    let deleted_thing = state.things().remove(id)?;

    Ok(Json(DeletedThingResponse {
        msg: "Successfully DELETEd thing".to_string(),
        deleted_thing,
    }))
}
