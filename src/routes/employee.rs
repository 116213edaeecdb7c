//! Employee CRUD routes.

use crate::handlers::employee::{create, delete as delete_handler, list, read, update};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn employee_routes(state: AppState) -> Router {
    Router::new()
        .route("/employees", get(list).post(create))
        .route(
            "/employees/:id",
            get(read).patch(update).delete(delete_handler),
        )
        .with_state(state)
}
