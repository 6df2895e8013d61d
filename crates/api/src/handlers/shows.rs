//! # Show Handlers
//!
//! Listing and booking of shows. A booking is accepted only if its venue
//! exists and the availability rules in
//! [`AvailabilityValidator`](gigbook_core::availability::AvailabilityValidator)
//! pass for its artist.
//!
//! The check reads the artist's current shows and then inserts, with no lock
//! held in between. Two concurrent bookings for the same artist can therefore
//! both pass the conflict check.

use axum::{Json, extract::State, http::StatusCode};
use gigbook_core::{
    errors::BookingError,
    models::show::{NewShowRequest, Show, ShowListing},
};
use std::sync::Arc;
use tracing::{info, warn};

use crate::{ApiState, middleware::error_handling::AppError};

pub async fn list_shows(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<ShowListing>>, AppError> {
    Ok(Json(state.store.list_shows().await?))
}

/// Books a show.
///
/// # Errors
///
/// * `BookingError::Reference` - Unknown venue or artist
/// * `BookingError::Format` - Start time is not `YYYY-MM-DD HH:MM`
/// * `BookingError::OutOfAvailability` - Outside the artist's declared window
/// * `BookingError::Conflict` - Too close to another show of the artist
/// * `BookingError::Storage` - Database failure
pub async fn create_show(
    State(state): State<Arc<ApiState>>,
    Json(request): Json<NewShowRequest>,
) -> Result<(StatusCode, Json<Show>), AppError> {
    if state.store.find_venue(request.venue_id).await?.is_none() {
        return Err(AppError(BookingError::Reference {
            entity: "Venue",
            id: request.venue_id,
        }));
    }

    let artist = state.store.find_artist(request.artist_id).await?;
    let existing = match &artist {
        Some(artist) => state.store.find_shows_by_artist(artist.id).await?,
        None => Vec::new(),
    };

    let new_show = state
        .validator
        .validate_new_show(artist.as_ref(), &request, &existing)
        .inspect_err(|e| {
            warn!(
                "Rejected show for artist {} at venue {}: {}",
                request.artist_id, request.venue_id, e
            );
        })?;

    let show = state.store.create_show(&new_show).await?;
    info!(
        "Show was successfully listed (id={}, artist_id={}, venue_id={}, start_time={})",
        show.id, show.artist_id, show.venue_id, show.start_time
    );

    Ok((StatusCode::CREATED, Json(show)))
}
