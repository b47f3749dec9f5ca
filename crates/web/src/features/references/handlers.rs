use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use storage::dto::reference::{CategoryResponse, TrainingCenterResponse};

use crate::error::WebError;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/api/categories",
    responses(
        (status = 200, description = "List all categories", body = Vec<CategoryResponse>)
    ),
    tag = "references"
)]
pub async fn list_categories(State(state): State<AppState>) -> Result<Response, WebError> {
    let categories = state.store().list_categories().await?;

    let response: Vec<CategoryResponse> =
        categories.into_iter().map(CategoryResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/training-centers",
    responses(
        (status = 200, description = "List all training centers", body = Vec<TrainingCenterResponse>)
    ),
    tag = "references"
)]
pub async fn list_training_centers(State(state): State<AppState>) -> Result<Response, WebError> {
    let centers = state.store().list_training_centers().await?;

    let response: Vec<TrainingCenterResponse> = centers
        .into_iter()
        .map(TrainingCenterResponse::from)
        .collect();

    Ok(Json(response).into_response())
}
