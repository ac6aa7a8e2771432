//! Handlers for the `/drills` resource.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::header::LOCATION;
use axum::http::{HeaderName, StatusCode};
use axum::Json;
use serde::Deserialize;
use toolhub_core::drill::{ENTITY, SORT_SAFELIST};
use toolhub_core::error::CoreError;
use toolhub_core::filters::{validate_filters, Filters, DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
use toolhub_core::types::DbId;
use toolhub_core::validator::Validator;
use toolhub_db::models::drill::{
    validate_drill, validate_new_drill, CreateDrill, Drill, UpdateDrill,
};
use toolhub_db::repositories::DrillRepo;
use toolhub_db::DbError;

use crate::error::{AppError, AppResult};
use crate::query::{read_float_csv, read_id_param, read_int, read_string};
use crate::response::{DataResponse, ListResponse, MessageResponse};
use crate::state::AppState;

/// Raw list query parameters. Parsed by the `query` readers so bad values
/// surface as field errors.
#[derive(Debug, Default, Deserialize)]
pub struct ListDrillsParams {
    pub name: Option<String>,
    /// Comma-separated weights, e.g. `?weight=1.5,2.0`.
    pub weight: Option<String>,
    pub page: Option<String>,
    pub page_size: Option<String>,
    pub sort: Option<String>,
}

/// Attach the drill id to not-found and conflict errors.
fn drill_error(id: DbId) -> impl FnOnce(DbError) -> AppError {
    move |err| match err {
        DbError::RecordNotFound => CoreError::NotFound { entity: ENTITY, id }.into(),
        DbError::EditConflict => CoreError::EditConflict { entity: ENTITY, id }.into(),
        other => other.into(),
    }
}

/// POST /api/v1/drills
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateDrill>, JsonRejection>,
) -> AppResult<(StatusCode, [(HeaderName, String); 1], Json<DataResponse<Drill>>)> {
    let Json(input) = payload?;
    let mut drill = Drill::from(input);

    let mut v = Validator::new();
    validate_new_drill(&mut v, &drill);
    v.finish()?;

    DrillRepo::insert(&state.pool, &mut drill).await?;
    tracing::info!(drill_id = drill.id, name = %drill.name, "Drill created");

    let location = format!("/api/v1/drills/{}", drill.id);
    Ok((
        StatusCode::CREATED,
        [(LOCATION, location)],
        Json(DataResponse { data: drill }),
    ))
}

/// GET /api/v1/drills
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListDrillsParams>,
) -> AppResult<Json<ListResponse<Drill>>> {
    let mut v = Validator::new();

    let name = read_string(params.name.as_deref(), "");
    let weights = read_float_csv(params.weight.as_deref(), "weight", &mut v);

    let mut filters = Filters::new(SORT_SAFELIST);
    filters.page = read_int(params.page.as_deref(), DEFAULT_PAGE, "page", &mut v);
    filters.page_size = read_int(
        params.page_size.as_deref(),
        DEFAULT_PAGE_SIZE,
        "page_size",
        &mut v,
    );
    filters.sort = read_string(params.sort.as_deref(), "id");

    validate_filters(&mut v, &filters);
    v.finish()?;

    let (drills, metadata) = DrillRepo::get_all(&state.pool, &weights, &name, &filters).await?;
    Ok(Json(ListResponse {
        data: drills,
        metadata,
    }))
}

/// GET /api/v1/drills/{id}
pub async fn show(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<DataResponse<Drill>>> {
    let id = read_id_param(&raw_id)?;
    let drill = DrillRepo::get(&state.pool, id)
        .await
        .map_err(drill_error(id))?;
    Ok(Json(DataResponse { data: drill }))
}

/// PATCH /api/v1/drills/{id}
///
/// Merges the fields present in the body onto the stored drill, validates
/// the result and writes it back. The row is matched on its current name,
/// so a body that renames the drill fails with 409.
pub async fn update(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    payload: Result<Json<UpdateDrill>, JsonRejection>,
) -> AppResult<Json<DataResponse<Drill>>> {
    let id = read_id_param(&raw_id)?;
    let mut drill = DrillRepo::get(&state.pool, id)
        .await
        .map_err(drill_error(id))?;

    let Json(input) = payload?;
    drill.apply(input);

    let mut v = Validator::new();
    validate_drill(&mut v, &drill);
    v.finish()?;

    DrillRepo::update(&state.pool, &mut drill)
        .await
        .map_err(drill_error(id))?;
    tracing::info!(drill_id = id, "Drill updated");

    Ok(Json(DataResponse { data: drill }))
}

/// DELETE /api/v1/drills/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<DataResponse<MessageResponse>>> {
    let id = read_id_param(&raw_id)?;
    DrillRepo::delete(&state.pool, id)
        .await
        .map_err(drill_error(id))?;
    tracing::info!(drill_id = id, "Drill deleted");

    Ok(Json(DataResponse {
        data: MessageResponse {
            message: "drill successfully deleted".to_string(),
        },
    }))
}
