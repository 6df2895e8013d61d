use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use gigbook_core::models::{
    artist::{Artist, ArtistSummary},
    show::{Show, ShowListing},
    venue::{Venue, VenueSummary},
};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbVenue {
    pub id: i32,
    pub name: String,
    pub genres: Option<String>,
    pub address: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
    pub image_link: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbVenueSummary {
    pub id: i32,
    pub name: String,
    pub city: String,
    pub state: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbArtist {
    pub id: i32,
    pub name: String,
    pub genres: Option<String>,
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

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbArtistSummary {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbShow {
    pub id: i32,
    pub artist_id: i32,
    pub venue_id: i32,
    pub start_time: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbShowListing {
    pub venue_id: i32,
    pub venue_name: String,
    pub venue_image_link: String,
    pub artist_id: i32,
    pub artist_name: String,
    pub artist_image_link: String,
    pub start_time: NaiveDateTime,
}

/// Genres are stored as one comma-joined column.
pub fn join_genres(genres: &[String]) -> String {
    genres.join(",")
}

pub fn split_genres(genres: Option<&str>) -> Vec<String> {
    genres
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|genre| !genre.is_empty())
        .map(str::to_string)
        .collect()
}

impl From<DbVenue> for Venue {
    fn from(row: DbVenue) -> Self {
        Venue {
            id: row.id,
            genres: split_genres(row.genres.as_deref()),
            name: row.name,
            address: row.address,
            city: row.city,
            state: row.state,
            phone: row.phone,
            website: row.website,
            facebook_link: row.facebook_link,
            seeking_talent: row.seeking_talent,
            seeking_description: row.seeking_description,
            image_link: row.image_link,
        }
    }
}

impl From<DbVenueSummary> for VenueSummary {
    fn from(row: DbVenueSummary) -> Self {
        VenueSummary {
            id: row.id,
            name: row.name,
            city: row.city,
            state: row.state,
        }
    }
}

impl From<DbArtist> for Artist {
    fn from(row: DbArtist) -> Self {
        Artist {
            id: row.id,
            genres: split_genres(row.genres.as_deref()),
            name: row.name,
            city: row.city,
            state: row.state,
            phone: row.phone,
            website: row.website,
            facebook_link: row.facebook_link,
            seeking_venue: row.seeking_venue,
            seeking_description: row.seeking_description,
            image_link: row.image_link,
            available_start: row.available_start,
            available_end: row.available_end,
        }
    }
}

impl From<DbArtistSummary> for ArtistSummary {
    fn from(row: DbArtistSummary) -> Self {
        ArtistSummary {
            id: row.id,
            name: row.name,
        }
    }
}

impl From<DbShow> for Show {
    fn from(row: DbShow) -> Self {
        Show {
            id: row.id,
            artist_id: row.artist_id,
            venue_id: row.venue_id,
            start_time: row.start_time,
        }
    }
}

impl From<DbShowListing> for ShowListing {
    fn from(row: DbShowListing) -> Self {
        ShowListing {
            venue_id: row.venue_id,
            venue_name: row.venue_name,
            venue_image_link: row.venue_image_link,
            artist_id: row.artist_id,
            artist_name: row.artist_name,
            artist_image_link: row.artist_image_link,
            start_time: row.start_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(None, vec![])]
    #[case(Some(""), vec![])]
    #[case(Some("Jazz"), vec!["Jazz"])]
    #[case(Some("Jazz,R&B, Hip-Hop"), vec!["Jazz", "R&B", "Hip-Hop"])]
    #[case(Some("Jazz,,Folk,"), vec!["Jazz", "Folk"])]
    fn test_split_genres(#[case] stored: Option<&str>, #[case] expected: Vec<&str>) {
        assert_eq!(split_genres(stored), expected);
    }

    #[test]
    fn test_genres_survive_storage() {
        let genres = vec!["Rock n Roll".to_string(), "Musical Theatre".to_string()];
        assert_eq!(split_genres(Some(&join_genres(&genres))), genres);
    }

    #[test]
    fn test_artist_row_conversion() {
        let row = DbArtist {
            id: 5,
            name: "Matt Quevedo".to_string(),
            genres: Some("Jazz".to_string()),
            city: "New York".to_string(),
            state: "NY".to_string(),
            phone: "300-400-5000".to_string(),
            website: None,
            facebook_link: Some("https://www.facebook.com/mattquevedo923251523".to_string()),
            seeking_venue: false,
            seeking_description: None,
            image_link: "https://placekitten.com/2000/2000".to_string(),
            available_start: None,
            available_end: None,
        };

        let artist = Artist::from(row);

        assert_eq!(artist.id, 5);
        assert_eq!(artist.genres, vec!["Jazz".to_string()]);
        assert_eq!(artist.availability(), None);
    }
}
