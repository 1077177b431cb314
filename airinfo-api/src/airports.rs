use airinfo_core::{Airport, Metar};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};

use crate::{error::AppError, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(all_airports))
        .route("/{id}", get(airport_by_id))
        .route("/metar/{id}", get(metar))
}

/// GET /
async fn all_airports(State(state): State<AppState>) -> Result<Json<Vec<Airport>>, AppError> {
    let airports = state.service.all_airports().await?;
    Ok(Json(airports))
}

/// GET /{id}
///
/// An unknown id answers 200 with an empty body.
async fn airport_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    match state.service.airport_by_id(&id).await? {
        Some(airport) => Ok(Json(airport).into_response()),
        None => Ok(StatusCode::OK.into_response()),
    }
}

/// GET /metar/{id}
async fn metar(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Metar>, AppError> {
    let report = state.service.metar(&id).await?;
    Ok(Json(report))
}
