//! Dropdown Option API Module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// Dropdown option router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/dropdown-options", routes())
}

fn routes() -> Router<ServerState> {
    Router::new().route("/", get(handler::list).post(handler::save))
}
