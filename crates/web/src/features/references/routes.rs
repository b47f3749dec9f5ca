use axum::{Router, routing::get};

use super::handlers::{list_categories, list_training_centers};
use crate::state::AppState;

pub fn category_routes() -> Router<AppState> {
    Router::new().route("/", get(list_categories))
}

pub fn training_center_routes() -> Router<AppState> {
    Router::new().route("/", get(list_training_centers))
}
