use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{Named, show::ShowTimeline};

pub const DEFAULT_ARTIST_IMAGE: &str = "https://placekitten.com/2000/2000";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artist {
    pub id: i32,
    pub name: String,
    pub genres: Vec<String>,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
    pub image_link: String,
    pub available_start: Option<NaiveDateTime>,
    pub available_end: Option<NaiveDateTime>,
}

impl Artist {
    /// The declared booking window. Only meaningful when both ends are set.
    pub fn availability(&self) -> Option<AvailabilityWindow> {
        match (self.available_start, self.available_end) {
            (Some(start), Some(end)) => Some(AvailabilityWindow { start, end }),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl AvailabilityWindow {
    /// Strict containment: both bounds are excluded.
    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        self.start < instant && instant < self.end
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewArtist {
    pub name: String,
    pub genres: Vec<String>,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
    pub image_link: String,
    pub available_start: Option<NaiveDateTime>,
    pub available_end: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistSummary {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtistDetail {
    #[serde(flatten)]
    pub artist: Artist,
    #[serde(flatten)]
    pub shows: ShowTimeline,
}

impl Named for Artist {
    fn id(&self) -> i32 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for ArtistSummary {
    fn id(&self) -> i32 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}
