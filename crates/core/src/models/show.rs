use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Show {
    pub id: i32,
    pub artist_id: i32,
    pub venue_id: i32,
    pub start_time: NaiveDateTime,
}

/// A booking that passed validation and is ready to be persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewShow {
    pub artist_id: i32,
    pub venue_id: i32,
    pub start_time: NaiveDateTime,
}

/// A booking as submitted, with the start time still in its raw form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewShowRequest {
    pub artist_id: i32,
    pub venue_id: i32,
    pub start_time: String,
}

/// A show joined with the display fields of its artist and venue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowListing {
    pub venue_id: i32,
    pub venue_name: String,
    pub venue_image_link: String,
    pub artist_id: i32,
    pub artist_name: String,
    pub artist_image_link: String,
    pub start_time: NaiveDateTime,
}

/// Which foreign key on a show ties it to a searched entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowMatch {
    Artist,
    Venue,
}

impl ShowMatch {
    pub fn key(self, show: &Show) -> i32 {
        match self {
            ShowMatch::Artist => show.artist_id,
            ShowMatch::Venue => show.venue_id,
        }
    }

    /// Number of shows whose matching foreign key equals `id`.
    pub fn count(self, shows: &[Show], id: i32) -> usize {
        shows.iter().filter(|show| self.key(show) == id).count()
    }
}

/// Past and upcoming shows of a single artist or venue.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowTimeline {
    pub past_shows: Vec<ShowListing>,
    pub upcoming_shows: Vec<ShowListing>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

impl ShowTimeline {
    /// Splits shows around `now`. A show starting exactly at `now` counts as past.
    pub fn split(shows: Vec<ShowListing>, now: NaiveDateTime) -> Self {
        let (upcoming_shows, past_shows): (Vec<_>, Vec<_>) =
            shows.into_iter().partition(|show| show.start_time > now);

        Self {
            past_shows_count: past_shows.len(),
            upcoming_shows_count: upcoming_shows.len(),
            past_shows,
            upcoming_shows,
        }
    }
}
