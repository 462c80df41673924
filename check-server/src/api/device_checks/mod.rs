//! Device Check API Module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// Device check router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/device-checks", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/employee/{employee_id}", get(handler::list_for_employee))
        .route(
            "/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
}
