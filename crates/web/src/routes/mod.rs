use axum::Router;

use crate::features::{athletes, references};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .nest("/athletes", athletes::routes::routes())
        .nest("/categories", references::routes::category_routes())
        .nest(
            "/training-centers",
            references::routes::training_center_routes(),
        );

    Router::new().nest("/api", api).with_state(state)
}
