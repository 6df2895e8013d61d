//! Venue and artist submissions as received from clients, and the rules that
//! turn them into storable records.

use serde::{Deserialize, Serialize};

use crate::{
    errors::BookingResult,
    models::{
        Named,
        artist::{DEFAULT_ARTIST_IMAGE, NewArtist},
        venue::{DEFAULT_VENUE_IMAGE, NewVenue},
    },
    validation::{
        IMAGE_LINK_MAX_LEN, LINK_MAX_LEN, NAME_MAX_LEN, TEXT_MAX_LEN, normalize_phone,
        require_if_checked, validate_availability, validate_genres, validate_state, validate_text,
        validate_unique_name, validate_url,
    },
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VenueForm {
    pub name: String,
    #[serde(default)]
    pub genres: Vec<String>,
    pub address: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    #[serde(default)]
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
    pub image_link: Option<String>,
}

impl VenueForm {
    /// Validates the submission against the venues already listed.
    ///
    /// `own_id` is the id of the venue being edited, if any, so that an
    /// unchanged name does not collide with itself.
    pub fn validate<E: Named>(&self, own_id: Option<i32>, existing: &[E]) -> BookingResult<NewVenue> {
        let name = validate_text("name", &self.name, NAME_MAX_LEN)?;
        validate_unique_name("name", &name, own_id, existing)?;

        Ok(NewVenue {
            name,
            city: validate_text("city", &self.city, TEXT_MAX_LEN)?,
            state: validate_state(&self.state)?,
            address: validate_text("address", &self.address, TEXT_MAX_LEN)?,
            phone: normalize_phone(&self.phone)?,
            image_link: validate_url("image_link", self.image_link.as_deref(), IMAGE_LINK_MAX_LEN)?
                .unwrap_or_else(|| DEFAULT_VENUE_IMAGE.to_string()),
            genres: validate_genres(&self.genres)?,
            website: validate_url("website", self.website.as_deref(), LINK_MAX_LEN)?,
            facebook_link: validate_url("facebook_link", self.facebook_link.as_deref(), LINK_MAX_LEN)?,
            seeking_talent: self.seeking_talent,
            seeking_description: require_if_checked(
                "seeking_description",
                self.seeking_talent,
                self.seeking_description.as_deref(),
            )?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArtistForm {
    pub name: String,
    #[serde(default)]
    pub genres: Vec<String>,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    #[serde(default)]
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
    pub image_link: Option<String>,
    pub available_start: Option<String>,
    pub available_end: Option<String>,
}

impl ArtistForm {
    /// Validates the submission against the artists already listed.
    ///
    /// An artist seeking a venue must describe what they are looking for and
    /// declare when they are available.
    pub fn validate<E: Named>(&self, own_id: Option<i32>, existing: &[E]) -> BookingResult<NewArtist> {
        let name = validate_text("name", &self.name, NAME_MAX_LEN)?;
        validate_unique_name("name", &name, own_id, existing)?;

        let window = validate_availability(
            self.available_start.as_deref(),
            self.available_end.as_deref(),
        )?;
        if self.seeking_venue && window.is_none() {
            require_if_checked("available_start", true, None)?;
        }

        Ok(NewArtist {
            name,
            city: validate_text("city", &self.city, TEXT_MAX_LEN)?,
            state: validate_state(&self.state)?,
            phone: normalize_phone(&self.phone)?,
            image_link: validate_url("image_link", self.image_link.as_deref(), IMAGE_LINK_MAX_LEN)?
                .unwrap_or_else(|| DEFAULT_ARTIST_IMAGE.to_string()),
            genres: validate_genres(&self.genres)?,
            website: validate_url("website", self.website.as_deref(), LINK_MAX_LEN)?,
            facebook_link: validate_url("facebook_link", self.facebook_link.as_deref(), LINK_MAX_LEN)?,
            seeking_venue: self.seeking_venue,
            seeking_description: require_if_checked(
                "seeking_description",
                self.seeking_venue,
                self.seeking_description.as_deref(),
            )?,
            available_start: window.map(|window| window.start),
            available_end: window.map(|window| window.end),
        })
    }
}
