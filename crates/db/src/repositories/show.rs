use chrono::NaiveDateTime;
use eyre::Result;
use gigbook_core::models::show::NewShow;
use sqlx::{Pool, Postgres};

use crate::models::{DbShow, DbShowListing};

const LISTING_SELECT: &str = r#"
    SELECT s.venue_id, v.name AS venue_name, v.image_link AS venue_image_link,
           s.artist_id, a.name AS artist_name, a.image_link AS artist_image_link,
           s.start_time
    FROM shows s
    JOIN venues v ON v.id = s.venue_id
    JOIN artists a ON a.id = s.artist_id
"#;

pub async fn create_show(pool: &Pool<Postgres>, show: &NewShow) -> Result<DbShow> {
    let created = sqlx::query_as::<_, DbShow>(
        r#"
        INSERT INTO shows (artist_id, venue_id, start_time)
        VALUES ($1, $2, $3)
        RETURNING id, artist_id, venue_id, start_time
        "#,
    )
    .bind(show.artist_id)
    .bind(show.venue_id)
    .bind(show.start_time)
    .fetch_one(pool)
    .await?;

    tracing::debug!(
        "Show created successfully: id={}, artist_id={}, venue_id={}",
        created.id,
        created.artist_id,
        created.venue_id
    );
    Ok(created)
}

pub async fn get_shows_by_artist_id(pool: &Pool<Postgres>, artist_id: i32) -> Result<Vec<DbShow>> {
    let shows = sqlx::query_as::<_, DbShow>(
        r#"
        SELECT id, artist_id, venue_id, start_time
        FROM shows
        WHERE artist_id = $1
        ORDER BY start_time ASC
        "#,
    )
    .bind(artist_id)
    .fetch_all(pool)
    .await?;

    Ok(shows)
}

pub async fn get_shows_after(pool: &Pool<Postgres>, instant: NaiveDateTime) -> Result<Vec<DbShow>> {
    let shows = sqlx::query_as::<_, DbShow>(
        r#"
        SELECT id, artist_id, venue_id, start_time
        FROM shows
        WHERE start_time > $1
        "#,
    )
    .bind(instant)
    .fetch_all(pool)
    .await?;

    Ok(shows)
}

pub async fn list_show_listings(pool: &Pool<Postgres>) -> Result<Vec<DbShowListing>> {
    let query = format!("{LISTING_SELECT} ORDER BY s.start_time ASC");

    let listings = sqlx::query_as::<_, DbShowListing>(&query)
        .fetch_all(pool)
        .await?;

    Ok(listings)
}

pub async fn get_listings_by_artist_id(
    pool: &Pool<Postgres>,
    artist_id: i32,
) -> Result<Vec<DbShowListing>> {
    let query = format!("{LISTING_SELECT} WHERE s.artist_id = $1 ORDER BY s.start_time ASC");

    let listings = sqlx::query_as::<_, DbShowListing>(&query)
        .bind(artist_id)
        .fetch_all(pool)
        .await?;

    Ok(listings)
}

pub async fn get_listings_by_venue_id(
    pool: &Pool<Postgres>,
    venue_id: i32,
) -> Result<Vec<DbShowListing>> {
    let query = format!("{LISTING_SELECT} WHERE s.venue_id = $1 ORDER BY s.start_time ASC");

    let listings = sqlx::query_as::<_, DbShowListing>(&query)
        .bind(venue_id)
        .fetch_all(pool)
        .await?;

    Ok(listings)
}
