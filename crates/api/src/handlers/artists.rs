use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use gigbook_core::{
    errors::BookingError,
    forms::ArtistForm,
    models::{
        artist::{Artist, ArtistDetail, ArtistSummary},
        show::{ShowMatch, ShowTimeline},
    },
    search::{SearchResults, search},
};
use std::sync::Arc;
use tracing::{info, warn};

use super::{DeleteResponse, SearchRequest, now};
use crate::{ApiState, middleware::error_handling::AppError};

fn artist_not_found(id: i32) -> AppError {
    AppError(BookingError::NotFound(format!("Artist with ID {} not found", id)))
}

pub async fn list_artists(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<ArtistSummary>>, AppError> {
    Ok(Json(state.store.list_artists().await?))
}

pub async fn get_artist(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<i32>,
) -> Result<Json<ArtistDetail>, AppError> {
    let artist = state
        .store
        .find_artist(id)
        .await?
        .ok_or_else(|| artist_not_found(id))?;
    let listings = state.store.listings_for_artist(id).await?;

    Ok(Json(ArtistDetail {
        artist,
        shows: ShowTimeline::split(listings, now()),
    }))
}

pub async fn create_artist(
    State(state): State<Arc<ApiState>>,
    Json(form): Json<ArtistForm>,
) -> Result<(StatusCode, Json<Artist>), AppError> {
    let existing = state.store.list_artists().await?;
    let new_artist = form.validate(None, &existing).inspect_err(|e| {
        warn!("Rejected artist '{}': {}", form.name, e);
    })?;

    let artist = state.store.create_artist(&new_artist).await?;
    info!("Artist {} was successfully listed (id={})", artist.name, artist.id);

    Ok((StatusCode::CREATED, Json(artist)))
}

pub async fn update_artist(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<i32>,
    Json(form): Json<ArtistForm>,
) -> Result<Json<Artist>, AppError> {
    let existing = state.store.list_artists().await?;
    if !existing.iter().any(|artist| artist.id == id) {
        return Err(artist_not_found(id));
    }

    let new_artist = form.validate(Some(id), &existing).inspect_err(|e| {
        warn!("Rejected edit of artist {}: {}", id, e);
    })?;

    let artist = state
        .store
        .update_artist(id, &new_artist)
        .await?
        .ok_or_else(|| artist_not_found(id))?;
    info!("Artist {} was successfully edited (id={})", artist.name, artist.id);

    Ok(Json(artist))
}

pub async fn delete_artist(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<i32>,
) -> Result<Json<DeleteResponse>, AppError> {
    if !state.store.delete_artist(id).await? {
        return Err(artist_not_found(id));
    }
    info!("Artist {} was successfully deleted", id);

    Ok(Json(DeleteResponse { success: true }))
}

pub async fn search_artists(
    State(state): State<Arc<ApiState>>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<SearchResults>, AppError> {
    let term = request.term()?;
    let artists = state.store.search_artists(term).await?;
    let future_shows = state.store.find_shows_after(now()).await?;

    Ok(Json(search(
        term,
        &artists,
        Some((future_shows.as_slice(), ShowMatch::Artist)),
    )))
}
