use async_trait::async_trait;
use chrono::NaiveDateTime;
use eyre::Result;

use crate::models::{
    artist::{Artist, ArtistSummary, NewArtist},
    show::{NewShow, Show, ShowListing},
    venue::{NewVenue, Venue, VenueSummary},
};

/// Persistence operations the booking directory relies on.
///
/// Implementations own connection handling; callers hold the store behind an
/// `Arc` and never see a session.
#[async_trait]
pub trait BookingStore: Send + Sync {
    /// All venues, ordered by name.
    async fn list_venues(&self) -> Result<Vec<VenueSummary>>;
    async fn find_venue(&self, id: i32) -> Result<Option<Venue>>;
    async fn create_venue(&self, venue: &NewVenue) -> Result<Venue>;
    /// Returns `None` when no venue has the given id.
    async fn update_venue(&self, id: i32, venue: &NewVenue) -> Result<Option<Venue>>;
    /// Deletes the venue and its shows. Returns whether a venue was removed.
    async fn delete_venue(&self, id: i32) -> Result<bool>;
    async fn search_venues(&self, term: &str) -> Result<Vec<VenueSummary>>;

    async fn list_artists(&self) -> Result<Vec<ArtistSummary>>;
    async fn find_artist(&self, id: i32) -> Result<Option<Artist>>;
    async fn create_artist(&self, artist: &NewArtist) -> Result<Artist>;
    async fn update_artist(&self, id: i32, artist: &NewArtist) -> Result<Option<Artist>>;
    async fn delete_artist(&self, id: i32) -> Result<bool>;
    async fn search_artists(&self, term: &str) -> Result<Vec<ArtistSummary>>;

    async fn list_shows(&self) -> Result<Vec<ShowListing>>;
    async fn find_shows_by_artist(&self, artist_id: i32) -> Result<Vec<Show>>;
    async fn listings_for_artist(&self, artist_id: i32) -> Result<Vec<ShowListing>>;
    async fn listings_for_venue(&self, venue_id: i32) -> Result<Vec<ShowListing>>;
    /// Shows starting strictly after `instant`.
    async fn find_shows_after(&self, instant: NaiveDateTime) -> Result<Vec<Show>>;
    async fn create_show(&self, show: &NewShow) -> Result<Show>;
}
