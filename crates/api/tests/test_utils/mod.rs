#![allow(dead_code)]

use std::sync::Arc;

use axum_test::TestServer;
use chrono::{Duration, Local, NaiveDate, NaiveDateTime};
use gigbook_api::ApiState;
use gigbook_core::{
    availability::AvailabilityValidator,
    models::{
        artist::{Artist, ArtistSummary},
        show::{Show, ShowListing},
        venue::{Venue, VenueSummary},
    },
};
use gigbook_db::mock::MockBookingStore;

/// Builds a test server whose handlers talk to `store`.
pub fn server(store: MockBookingStore) -> TestServer {
    server_with_validator(store, AvailabilityValidator::default())
}

pub fn server_with_validator(
    store: MockBookingStore,
    validator: AvailabilityValidator,
) -> TestServer {
    let state = Arc::new(ApiState::new(Arc::new(store), validator));
    TestServer::new(gigbook_api::router(state)).expect("failed to build test server")
}

pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

/// An instant far enough from the wall clock to be unambiguously past or future.
pub fn days_from_now(days: i64) -> NaiveDateTime {
    Local::now().naive_local() + Duration::days(days)
}

pub fn venue(id: i32, name: &str) -> Venue {
    Venue {
        id,
        name: name.to_string(),
        genres: vec!["Jazz".to_string(), "Folk".to_string()],
        address: "1015 Folsom Street".to_string(),
        city: "San Francisco".to_string(),
        state: "CA".to_string(),
        phone: "123-123-1234".to_string(),
        website: Some("https://www.themusicalhop.com".to_string()),
        facebook_link: None,
        seeking_talent: false,
        seeking_description: None,
        image_link: "https://placebear.com/400/400".to_string(),
    }
}

pub fn venue_summary(id: i32, name: &str, city: &str, state: &str) -> VenueSummary {
    VenueSummary {
        id,
        name: name.to_string(),
        city: city.to_string(),
        state: state.to_string(),
    }
}

pub fn artist(id: i32, name: &str) -> Artist {
    Artist {
        id,
        name: name.to_string(),
        genres: vec!["Rock n Roll".to_string()],
        city: "San Francisco".to_string(),
        state: "CA".to_string(),
        phone: "326-123-5000".to_string(),
        website: None,
        facebook_link: None,
        seeking_venue: false,
        seeking_description: None,
        image_link: "https://placekitten.com/2000/2000".to_string(),
        available_start: None,
        available_end: None,
    }
}

pub fn artist_summary(id: i32, name: &str) -> ArtistSummary {
    ArtistSummary {
        id,
        name: name.to_string(),
    }
}

pub fn show(id: i32, artist_id: i32, venue_id: i32, start_time: NaiveDateTime) -> Show {
    Show {
        id,
        artist_id,
        venue_id,
        start_time,
    }
}

pub fn listing(artist_id: i32, venue_id: i32, start_time: NaiveDateTime) -> ShowListing {
    ShowListing {
        venue_id,
        venue_name: "The Musical Hop".to_string(),
        venue_image_link: "https://placebear.com/400/400".to_string(),
        artist_id,
        artist_name: "Guns N Petals".to_string(),
        artist_image_link: "https://placekitten.com/2000/2000".to_string(),
        start_time,
    }
}
