use async_trait::async_trait;
use chrono::NaiveDateTime;
use eyre::Result;
use gigbook_core::{
    models::{
        artist::{Artist, ArtistSummary, NewArtist},
        show::{NewShow, Show, ShowListing},
        venue::{NewVenue, Venue, VenueSummary},
    },
    store::BookingStore,
};

use crate::{
    DbPool,
    repositories::{artist, show, venue},
};

/// `BookingStore` backed by PostgreSQL. Each call checks a connection out of
/// the pool and returns it when the query completes or fails.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn convert<R, T: From<R>>(rows: Vec<R>) -> Vec<T> {
    rows.into_iter().map(T::from).collect()
}

#[async_trait]
impl BookingStore for PgStore {
    async fn list_venues(&self) -> Result<Vec<VenueSummary>> {
        Ok(convert(venue::list_venue_summaries(&self.pool).await?))
    }

    async fn find_venue(&self, id: i32) -> Result<Option<Venue>> {
        Ok(venue::get_venue_by_id(&self.pool, id).await?.map(Venue::from))
    }

    async fn create_venue(&self, new_venue: &NewVenue) -> Result<Venue> {
        Ok(venue::create_venue(&self.pool, new_venue).await?.into())
    }

    async fn update_venue(&self, id: i32, new_venue: &NewVenue) -> Result<Option<Venue>> {
        Ok(venue::update_venue(&self.pool, id, new_venue)
            .await?
            .map(Venue::from))
    }

    async fn delete_venue(&self, id: i32) -> Result<bool> {
        venue::delete_venue(&self.pool, id).await
    }

    async fn search_venues(&self, term: &str) -> Result<Vec<VenueSummary>> {
        Ok(convert(venue::search_venues(&self.pool, term).await?))
    }

    async fn list_artists(&self) -> Result<Vec<ArtistSummary>> {
        Ok(convert(artist::list_artist_summaries(&self.pool).await?))
    }

    async fn find_artist(&self, id: i32) -> Result<Option<Artist>> {
        Ok(artist::get_artist_by_id(&self.pool, id)
            .await?
            .map(Artist::from))
    }

    async fn create_artist(&self, new_artist: &NewArtist) -> Result<Artist> {
        Ok(artist::create_artist(&self.pool, new_artist).await?.into())
    }

    async fn update_artist(&self, id: i32, new_artist: &NewArtist) -> Result<Option<Artist>> {
        Ok(artist::update_artist(&self.pool, id, new_artist)
            .await?
            .map(Artist::from))
    }

    async fn delete_artist(&self, id: i32) -> Result<bool> {
        artist::delete_artist(&self.pool, id).await
    }

    async fn search_artists(&self, term: &str) -> Result<Vec<ArtistSummary>> {
        Ok(convert(artist::search_artists(&self.pool, term).await?))
    }

    async fn list_shows(&self) -> Result<Vec<ShowListing>> {
        Ok(convert(show::list_show_listings(&self.pool).await?))
    }

    async fn find_shows_by_artist(&self, artist_id: i32) -> Result<Vec<Show>> {
        Ok(convert(show::get_shows_by_artist_id(&self.pool, artist_id).await?))
    }

    async fn listings_for_artist(&self, artist_id: i32) -> Result<Vec<ShowListing>> {
        Ok(convert(show::get_listings_by_artist_id(&self.pool, artist_id).await?))
    }

    async fn listings_for_venue(&self, venue_id: i32) -> Result<Vec<ShowListing>> {
        Ok(convert(show::get_listings_by_venue_id(&self.pool, venue_id).await?))
    }

    async fn find_shows_after(&self, instant: NaiveDateTime) -> Result<Vec<Show>> {
        Ok(convert(show::get_shows_after(&self.pool, instant).await?))
    }

    async fn create_show(&self, new_show: &NewShow) -> Result<Show> {
        Ok(show::create_show(&self.pool, new_show).await?.into())
    }
}
