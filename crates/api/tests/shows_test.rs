mod test_utils;

use axum::http::StatusCode;
use gigbook_core::{
    availability::AvailabilityValidator,
    models::show::{Show, ShowListing},
};
use gigbook_db::mock::MockBookingStore;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};

use test_utils::*;

/// Artist 4 is available through April 2035 and already plays venue 1 at
/// 2035-04-10 20:00.
fn booking_store() -> MockBookingStore {
    let mut store = MockBookingStore::new();
    store
        .expect_find_venue()
        .returning(|id| Ok((id != 99).then(|| venue(id, "The Musical Hop"))));
    store.expect_find_artist().returning(|id| {
        Ok((id == 4).then(|| {
            let mut artist = artist(id, "Guns N Petals");
            artist.available_start = Some(at(2035, 4, 1, 0, 0));
            artist.available_end = Some(at(2035, 4, 30, 0, 0));
            artist
        }))
    });
    store
        .expect_find_shows_by_artist()
        .returning(|artist_id| Ok(vec![show(1, artist_id, 1, at(2035, 4, 10, 20, 0))]));
    store
}

fn booking(artist_id: i32, venue_id: i32, start_time: &str) -> Value {
    json!({
        "artist_id": artist_id,
        "venue_id": venue_id,
        "start_time": start_time,
    })
}

#[tokio::test]
async fn test_list_shows() {
    let mut store = MockBookingStore::new();
    store
        .expect_list_shows()
        .returning(|| Ok(vec![listing(4, 1, at(2019, 5, 21, 21, 30))]));

    let response = server(store).get("/api/shows").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let shows: Vec<ShowListing> = response.json();
    assert_eq!(shows.len(), 1);
    assert_eq!(shows[0].artist_name, "Guns N Petals");
}

#[test_log::test(tokio::test)]
async fn test_create_show_within_window() {
    let mut store = booking_store();
    store
        .expect_create_show()
        .withf(|new| new.artist_id == 4 && new.venue_id == 2 && new.start_time == at(2035, 4, 15, 20, 0))
        .times(1)
        .returning(|new| {
            Ok(Show {
                id: 21,
                artist_id: new.artist_id,
                venue_id: new.venue_id,
                start_time: new.start_time,
            })
        });

    let response = server(store)
        .post("/api/shows")
        .json(&booking(4, 2, "2035-04-15 20:00"))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let created: Show = response.json();
    assert_eq!(created.id, 21);
}

#[rstest]
#[case::unknown_venue(booking(4, 99, "2035-04-15 20:00"), StatusCode::BAD_REQUEST)]
#[case::unknown_artist(booking(7, 1, "2035-04-15 20:00"), StatusCode::BAD_REQUEST)]
#[case::bad_format(booking(4, 1, "15/04/2035 8pm"), StatusCode::BAD_REQUEST)]
#[case::six_digit_year(booking(4, 1, "+262142-12-31 23:00"), StatusCode::BAD_REQUEST)]
#[case::window_start_excluded(booking(4, 1, "2035-04-01 00:00"), StatusCode::UNPROCESSABLE_ENTITY)]
#[case::after_window(booking(4, 1, "2035-05-02 20:00"), StatusCode::UNPROCESSABLE_ENTITY)]
#[case::buffer_edge_included(booking(4, 2, "2035-04-10 22:00"), StatusCode::CONFLICT)]
#[case::same_time(booking(4, 2, "2035-04-10 20:00"), StatusCode::CONFLICT)]
#[tokio::test]
async fn test_create_show_rejections(#[case] body: Value, #[case] expected: StatusCode) {
    let response = server(booking_store()).post("/api/shows").json(&body).await;

    assert_eq!(response.status_code(), expected);
}

#[tokio::test]
async fn test_conflict_reports_existing_show() {
    let response = server(booking_store())
        .post("/api/shows")
        .json(&booking(4, 3, "2035-04-10 19:00"))
        .await;

    assert_eq!(response.status_code(), StatusCode::CONFLICT);
    let body: Value = response.json();
    assert_eq!(body["venue_id"], 1);
    assert_eq!(body["start_time"], "2035-04-10 20:00");
}

#[tokio::test]
async fn test_out_of_availability_reports_window() {
    let response = server(booking_store())
        .post("/api/shows")
        .json(&booking(4, 1, "2035-03-31 20:00"))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json();
    assert_eq!(body["available_start"], "2035-04-01 00:00");
    assert_eq!(body["available_end"], "2035-04-30 00:00");
}

#[tokio::test]
async fn test_custom_buffer_allows_closer_bookings() {
    let mut store = booking_store();
    store.expect_create_show().returning(|new| {
        Ok(Show {
            id: 22,
            artist_id: new.artist_id,
            venue_id: new.venue_id,
            start_time: new.start_time,
        })
    });

    let response = server_with_validator(store, AvailabilityValidator::with_buffer_hours(1))
        .post("/api/shows")
        .json(&booking(4, 2, "2035-04-10 21:30"))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
}
