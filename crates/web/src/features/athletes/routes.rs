use axum::{Router, routing::get};

use super::handlers::{
    create_athlete, delete_athlete, get_athlete, get_athlete_by_name, get_athlete_by_national_id,
    list_athletes, update_athlete,
};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_athletes).post(create_athlete))
        .route(
            "/:id",
            get(get_athlete).patch(update_athlete).delete(delete_athlete),
        )
        .route("/by-name/:name", get(get_athlete_by_name))
        .route("/by-cpf/:cpf", get(get_athlete_by_national_id))
}
