//! # Venue Handlers
//!
//! Listing, detail, create, edit, delete and search for venues. The listing
//! groups venues by location and counts their upcoming shows; the count uses
//! a single fetch of all future shows rather than one query per venue.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use gigbook_core::{
    directory::group_venues_by_location,
    errors::BookingError,
    forms::VenueForm,
    models::{
        show::{ShowMatch, ShowTimeline},
        venue::{LocationGroup, Venue, VenueDetail},
    },
    search::{SearchResults, search},
};
use std::sync::Arc;
use tracing::{info, warn};

use super::{DeleteResponse, SearchRequest, now};
use crate::{ApiState, middleware::error_handling::AppError};

fn venue_not_found(id: i32) -> AppError {
    AppError(BookingError::NotFound(format!("Venue with ID {} not found", id)))
}

pub async fn list_venues(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<LocationGroup>>, AppError> {
    let now = now();
    let venues = state.store.list_venues().await?;
    let future_shows = state.store.find_shows_after(now).await?;

    Ok(Json(group_venues_by_location(&venues, &future_shows)))
}

pub async fn get_venue(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<i32>,
) -> Result<Json<VenueDetail>, AppError> {
    let venue = state
        .store
        .find_venue(id)
        .await?
        .ok_or_else(|| venue_not_found(id))?;
    let listings = state.store.listings_for_venue(id).await?;

    Ok(Json(VenueDetail {
        venue,
        shows: ShowTimeline::split(listings, now()),
    }))
}

pub async fn create_venue(
    State(state): State<Arc<ApiState>>,
    Json(form): Json<VenueForm>,
) -> Result<(StatusCode, Json<Venue>), AppError> {
    let existing = state.store.list_venues().await?;
    let new_venue = form.validate(None, &existing).inspect_err(|e| {
        warn!("Rejected venue '{}': {}", form.name, e);
    })?;

    let venue = state.store.create_venue(&new_venue).await?;
    info!("Venue {} was successfully listed (id={})", venue.name, venue.id);

    Ok((StatusCode::CREATED, Json(venue)))
}

pub async fn update_venue(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<i32>,
    Json(form): Json<VenueForm>,
) -> Result<Json<Venue>, AppError> {
    let existing = state.store.list_venues().await?;
    if !existing.iter().any(|venue| venue.id == id) {
        return Err(venue_not_found(id));
    }

    let new_venue = form.validate(Some(id), &existing).inspect_err(|e| {
        warn!("Rejected edit of venue {}: {}", id, e);
    })?;

    let venue = state
        .store
        .update_venue(id, &new_venue)
        .await?
        .ok_or_else(|| venue_not_found(id))?;
    info!("Venue {} was successfully edited (id={})", venue.name, venue.id);

    Ok(Json(venue))
}

pub async fn delete_venue(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<i32>,
) -> Result<Json<DeleteResponse>, AppError> {
    if !state.store.delete_venue(id).await? {
        return Err(venue_not_found(id));
    }
    info!("Venue {} was successfully deleted", id);

    Ok(Json(DeleteResponse { success: true }))
}

pub async fn search_venues(
    State(state): State<Arc<ApiState>>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<SearchResults>, AppError> {
    let term = request.term()?;
    let venues = state.store.search_venues(term).await?;
    let future_shows = state.store.find_shows_after(now()).await?;

    Ok(Json(search(
        term,
        &venues,
        Some((future_shows.as_slice(), ShowMatch::Venue)),
    )))
}
