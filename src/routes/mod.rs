pub mod users;

use axum::routing::{get, post};
use axum::Router;

use crate::state::SharedState;

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        .route("/users", post(users::create))
        .route("/users/login", post(users::login))
        .route(
            "/users/{user_id}",
            get(users::get)
                .put(users::update)
                .patch(users::patch)
                .delete(users::delete),
        )
        .route("/internal/users/search", get(users::search))
}
