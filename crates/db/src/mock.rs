use async_trait::async_trait;
use chrono::NaiveDateTime;
use gigbook_core::{
    models::{
        artist::{Artist, ArtistSummary, NewArtist},
        show::{NewShow, Show, ShowListing},
        venue::{NewVenue, Venue, VenueSummary},
    },
    store::BookingStore,
};
use mockall::mock;

// Mock store for testing handlers without a database
mock! {
    pub BookingStore {}

    #[async_trait]
    impl BookingStore for BookingStore {
        async fn list_venues(&self) -> eyre::Result<Vec<VenueSummary>>;
        async fn find_venue(&self, id: i32) -> eyre::Result<Option<Venue>>;
        async fn create_venue(&self, venue: &NewVenue) -> eyre::Result<Venue>;
        async fn update_venue(&self, id: i32, venue: &NewVenue) -> eyre::Result<Option<Venue>>;
        async fn delete_venue(&self, id: i32) -> eyre::Result<bool>;
        async fn search_venues(&self, term: &str) -> eyre::Result<Vec<VenueSummary>>;

        async fn list_artists(&self) -> eyre::Result<Vec<ArtistSummary>>;
        async fn find_artist(&self, id: i32) -> eyre::Result<Option<Artist>>;
        async fn create_artist(&self, artist: &NewArtist) -> eyre::Result<Artist>;
        async fn update_artist(&self, id: i32, artist: &NewArtist) -> eyre::Result<Option<Artist>>;
        async fn delete_artist(&self, id: i32) -> eyre::Result<bool>;
        async fn search_artists(&self, term: &str) -> eyre::Result<Vec<ArtistSummary>>;

        async fn list_shows(&self) -> eyre::Result<Vec<ShowListing>>;
        async fn find_shows_by_artist(&self, artist_id: i32) -> eyre::Result<Vec<Show>>;
        async fn listings_for_artist(&self, artist_id: i32) -> eyre::Result<Vec<ShowListing>>;
        async fn listings_for_venue(&self, venue_id: i32) -> eyre::Result<Vec<ShowListing>>;
        async fn find_shows_after(&self, instant: NaiveDateTime) -> eyre::Result<Vec<Show>>;
        async fn create_show(&self, show: &NewShow) -> eyre::Result<Show>;
    }
}
