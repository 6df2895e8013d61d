use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/venues",
            get(handlers::venues::list_venues).post(handlers::venues::create_venue),
        )
        .route("/api/venues/search", post(handlers::venues::search_venues))
        .route(
            "/api/venues/:id",
            get(handlers::venues::get_venue)
                .put(handlers::venues::update_venue)
                .delete(handlers::venues::delete_venue),
        )
}
