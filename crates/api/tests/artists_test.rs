mod test_utils;

use axum::http::StatusCode;
use gigbook_core::errors::BookingError;
use gigbook_core::models::artist::{Artist, ArtistDetail, NewArtist};
use gigbook_core::search::SearchResults;
use gigbook_db::mock::MockBookingStore;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use test_utils::*;

fn artist_form(name: &str) -> Value {
    json!({
        "name": name,
        "genres": ["Rock n Roll"],
        "city": "San Francisco",
        "state": "CA",
        "phone": "326-123-5000",
        "seeking_venue": true,
        "seeking_description": "Looking for shows to perform at in the San Francisco Bay Area!",
        "available_start": "2035-04-01 18:00",
        "available_end": "2035-04-30 23:00"
    })
}

fn stored(id: i32, new: &NewArtist) -> Artist {
    Artist {
        id,
        name: new.name.clone(),
        genres: new.genres.clone(),
        city: new.city.clone(),
        state: new.state.clone(),
        phone: new.phone.clone(),
        website: new.website.clone(),
        facebook_link: new.facebook_link.clone(),
        seeking_venue: new.seeking_venue,
        seeking_description: new.seeking_description.clone(),
        image_link: new.image_link.clone(),
        available_start: new.available_start,
        available_end: new.available_end,
    }
}

#[tokio::test]
async fn test_list_artists_returns_id_and_name() {
    let mut store = MockBookingStore::new();
    store.expect_list_artists().returning(|| {
        Ok(vec![
            artist_summary(4, "Guns N Petals"),
            artist_summary(5, "Matt Quevedo"),
        ])
    });

    let response = server(store).get("/api/artists").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>(),
        json!([
            { "id": 4, "name": "Guns N Petals" },
            { "id": 5, "name": "Matt Quevedo" }
        ])
    );
}

#[tokio::test]
async fn test_get_artist_includes_show_timeline() {
    let mut store = MockBookingStore::new();
    store
        .expect_find_artist()
        .returning(|id| Ok(Some(artist(id, "Guns N Petals"))));
    store
        .expect_listings_for_artist()
        .withf(|artist_id| *artist_id == 4)
        .returning(|artist_id| Ok(vec![listing(artist_id, 1, days_from_now(-3))]));

    let response = server(store).get("/api/artists/4").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let detail: ArtistDetail = response.json();
    assert_eq!(detail.artist.id, 4);
    assert_eq!(detail.shows.past_shows_count, 1);
    assert_eq!(detail.shows.upcoming_shows, vec![]);
}

#[tokio::test]
async fn test_get_unknown_artist_is_not_found() {
    let mut store = MockBookingStore::new();
    store.expect_find_artist().returning(|_| Ok(None));

    let response = server(store).get("/api/artists/404").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[test_log::test(tokio::test)]
async fn test_create_artist_stores_availability_window() {
    let mut store = MockBookingStore::new();
    store
        .expect_list_artists()
        .returning(|| Ok(vec![artist_summary(4, "Guns N Petals")]));
    store
        .expect_create_artist()
        .withf(|new| {
            new.available_start == Some(at(2035, 4, 1, 18, 0))
                && new.available_end == Some(at(2035, 4, 30, 23, 0))
                && new.image_link == "https://placekitten.com/2000/2000"
        })
        .times(1)
        .returning(|new| Ok(stored(9, new)));

    let response = server(store)
        .post("/api/artists")
        .json(&artist_form("The Wild Sax Band"))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let created: Artist = response.json();
    assert_eq!(created.id, 9);
    assert_eq!(created.name, "The Wild Sax Band");
}

#[tokio::test]
async fn test_create_artist_rejects_backwards_window() {
    let mut store = MockBookingStore::new();
    store.expect_list_artists().returning(|| Ok(vec![]));

    let mut form = artist_form("The Wild Sax Band");
    form["available_end"] = json!("2035-03-01 18:00");

    let response = server(store).post("/api/artists").json(&form).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_artist_seeking_venue_requires_window() {
    let mut store = MockBookingStore::new();
    store.expect_list_artists().returning(|| Ok(vec![]));

    let mut form = artist_form("The Wild Sax Band");
    form["available_start"] = Value::Null;
    form["available_end"] = Value::Null;

    let response = server(store).post("/api/artists").json(&form).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["field"], "available_start");
}

#[tokio::test]
async fn test_create_artist_name_is_unique() {
    let mut store = MockBookingStore::new();
    store
        .expect_list_artists()
        .returning(|| Ok(vec![artist_summary(4, "Guns N Petals")]));

    let response = server(store)
        .post("/api/artists")
        .json(&artist_form("Guns N Petals "))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["field"], "name");
}

#[tokio::test]
async fn test_update_artist_rejects_name_of_another_artist() {
    let mut store = MockBookingStore::new();
    store.expect_list_artists().returning(|| {
        Ok(vec![
            artist_summary(4, "Guns N Petals"),
            artist_summary(5, "Matt Quevedo"),
        ])
    });

    let response = server(store)
        .put("/api/artists/5")
        .json(&artist_form("Guns N Petals"))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_artist_losing_a_name_race_is_a_validation_error() {
    let mut store = MockBookingStore::new();
    store
        .expect_list_artists()
        .returning(|| Ok(vec![artist_summary(5, "Matt Quevedo")]));
    store.expect_update_artist().returning(|_, new| {
        Err(eyre::Report::new(BookingError::validation(
            "name",
            format!("'{}' is already listed.", new.name),
        )))
    });

    let response = server(store)
        .put("/api/artists/5")
        .json(&artist_form("Matt Quevedo Trio"))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["field"], "name");
}

#[tokio::test]
async fn test_update_artist() {
    let mut store = MockBookingStore::new();
    store
        .expect_list_artists()
        .returning(|| Ok(vec![artist_summary(5, "Matt Quevedo")]));
    store
        .expect_update_artist()
        .withf(|id, new| *id == 5 && new.name == "Matt Quevedo Trio")
        .returning(|id, new| Ok(Some(stored(id, new))));

    let response = server(store)
        .put("/api/artists/5")
        .json(&artist_form("Matt Quevedo Trio"))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let updated: Artist = response.json();
    assert_eq!(updated.id, 5);
    assert_eq!(updated.name, "Matt Quevedo Trio");
}

#[tokio::test]
async fn test_delete_unknown_artist_is_not_found() {
    let mut store = MockBookingStore::new();
    store.expect_delete_artist().returning(|_| Ok(false));

    let response = server(store).delete("/api/artists/12").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_search_artists_is_case_insensitive() {
    let mut store = MockBookingStore::new();
    store.expect_search_artists().returning(|_| {
        Ok(vec![
            artist_summary(4, "Guns N Petals"),
            artist_summary(6, "The Wild Sax Band"),
        ])
    });
    store.expect_find_shows_after().returning(|_| {
        Ok(vec![
            show(1, 6, 3, days_from_now(7)),
            show(2, 6, 3, days_from_now(14)),
        ])
    });

    let response = server(store)
        .post("/api/artists/search")
        .json(&json!({ "search_term": "BAND" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let results: SearchResults = response.json();
    assert_eq!(results.count, 1);
    assert_eq!(results.data[0].name, "The Wild Sax Band");
    assert_eq!(results.data[0].num_upcoming_shows, Some(2));
}
