use axum::{Router, routing::get};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new().route(
        "/api/shows",
        get(handlers::shows::list_shows).post(handlers::shows::create_show),
    )
}
