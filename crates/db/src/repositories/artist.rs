use eyre::Result;
use gigbook_core::models::artist::NewArtist;
use sqlx::{Pool, Postgres};

use super::{like_pattern, name_taken};
use crate::models::{DbArtist, DbArtistSummary, join_genres};

const ARTIST_COLUMNS: &str = "id, name, genres, city, state, phone, website, facebook_link, \
                              seeking_venue, seeking_description, image_link, \
                              available_start, available_end";

pub async fn create_artist(pool: &Pool<Postgres>, artist: &NewArtist) -> Result<DbArtist> {
    tracing::debug!(
        "Creating artist: name={}, has_availability={}",
        artist.name,
        artist.available_start.is_some()
    );

    let query = format!(
        r#"
        INSERT INTO artists (name, genres, city, state, phone, website, facebook_link,
                             seeking_venue, seeking_description, image_link,
                             available_start, available_end)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
        RETURNING {ARTIST_COLUMNS}
        "#
    );

    let created = sqlx::query_as::<_, DbArtist>(&query)
        .bind(&artist.name)
        .bind(join_genres(&artist.genres))
        .bind(&artist.city)
        .bind(&artist.state)
        .bind(&artist.phone)
        .bind(&artist.website)
        .bind(&artist.facebook_link)
        .bind(artist.seeking_venue)
        .bind(&artist.seeking_description)
        .bind(&artist.image_link)
        .bind(artist.available_start)
        .bind(artist.available_end)
        .fetch_one(pool)
        .await
        .map_err(|e| name_taken(e, &artist.name))?;

    tracing::debug!("Artist created successfully: id={}", created.id);
    Ok(created)
}

pub async fn get_artist_by_id(pool: &Pool<Postgres>, id: i32) -> Result<Option<DbArtist>> {
    let query = format!("SELECT {ARTIST_COLUMNS} FROM artists WHERE id = $1");

    let artist = sqlx::query_as::<_, DbArtist>(&query)
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(artist)
}

pub async fn list_artist_summaries(pool: &Pool<Postgres>) -> Result<Vec<DbArtistSummary>> {
    let artists = sqlx::query_as::<_, DbArtistSummary>(
        r#"
        SELECT id, name
        FROM artists
        ORDER BY name ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(artists)
}

pub async fn update_artist(
    pool: &Pool<Postgres>,
    id: i32,
    artist: &NewArtist,
) -> Result<Option<DbArtist>> {
    tracing::debug!("Updating artist: id={}, name={}", id, artist.name);

    let query = format!(
        r#"
        UPDATE artists
        SET name = $2, genres = $3, city = $4, state = $5, phone = $6, website = $7,
            facebook_link = $8, seeking_venue = $9, seeking_description = $10,
            image_link = $11, available_start = $12, available_end = $13
        WHERE id = $1
        RETURNING {ARTIST_COLUMNS}
        "#
    );

    let updated = sqlx::query_as::<_, DbArtist>(&query)
        .bind(id)
        .bind(&artist.name)
        .bind(join_genres(&artist.genres))
        .bind(&artist.city)
        .bind(&artist.state)
        .bind(&artist.phone)
        .bind(&artist.website)
        .bind(&artist.facebook_link)
        .bind(artist.seeking_venue)
        .bind(&artist.seeking_description)
        .bind(&artist.image_link)
        .bind(artist.available_start)
        .bind(artist.available_end)
        .fetch_optional(pool)
        .await
        .map_err(|e| name_taken(e, &artist.name))?;

    Ok(updated)
}

/// Shows of the artist are removed by the cascading foreign key.
pub async fn delete_artist(pool: &Pool<Postgres>, id: i32) -> Result<bool> {
    let result = sqlx::query(
        r#"
        DELETE FROM artists
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    tracing::debug!("Deleted artist: id={}, rows={}", id, result.rows_affected());
    Ok(result.rows_affected() > 0)
}

pub async fn search_artists(pool: &Pool<Postgres>, term: &str) -> Result<Vec<DbArtistSummary>> {
    let artists = sqlx::query_as::<_, DbArtistSummary>(
        r#"
        SELECT id, name
        FROM artists
        WHERE name ILIKE $1
        ORDER BY name ASC
        "#,
    )
    .bind(like_pattern(term))
    .fetch_all(pool)
    .await?;

    Ok(artists)
}
