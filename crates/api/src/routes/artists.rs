use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/artists",
            get(handlers::artists::list_artists).post(handlers::artists::create_artist),
        )
        .route("/api/artists/search", post(handlers::artists::search_artists))
        .route(
            "/api/artists/:id",
            get(handlers::artists::get_artist)
                .put(handlers::artists::update_artist)
                .delete(handlers::artists::delete_artist),
        )
}
