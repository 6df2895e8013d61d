use eyre::Result;
use gigbook_core::models::venue::NewVenue;
use sqlx::{Pool, Postgres};

use super::{like_pattern, name_taken};
use crate::models::{DbVenue, DbVenueSummary, join_genres};

const VENUE_COLUMNS: &str = "id, name, genres, address, city, state, phone, website, \
                             facebook_link, seeking_talent, seeking_description, image_link";

pub async fn create_venue(pool: &Pool<Postgres>, venue: &NewVenue) -> Result<DbVenue> {
    tracing::debug!("Creating venue: name={}", venue.name);

    let query = format!(
        r#"
        INSERT INTO venues (name, genres, address, city, state, phone, website,
                            facebook_link, seeking_talent, seeking_description, image_link)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
        RETURNING {VENUE_COLUMNS}
        "#
    );

    let created = sqlx::query_as::<_, DbVenue>(&query)
        .bind(&venue.name)
        .bind(join_genres(&venue.genres))
        .bind(&venue.address)
        .bind(&venue.city)
        .bind(&venue.state)
        .bind(&venue.phone)
        .bind(&venue.website)
        .bind(&venue.facebook_link)
        .bind(venue.seeking_talent)
        .bind(&venue.seeking_description)
        .bind(&venue.image_link)
        .fetch_one(pool)
        .await
        .map_err(|e| name_taken(e, &venue.name))?;

    tracing::debug!("Venue created successfully: id={}", created.id);
    Ok(created)
}

pub async fn get_venue_by_id(pool: &Pool<Postgres>, id: i32) -> Result<Option<DbVenue>> {
    let query = format!("SELECT {VENUE_COLUMNS} FROM venues WHERE id = $1");

    let venue = sqlx::query_as::<_, DbVenue>(&query)
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(venue)
}

pub async fn list_venue_summaries(pool: &Pool<Postgres>) -> Result<Vec<DbVenueSummary>> {
    let venues = sqlx::query_as::<_, DbVenueSummary>(
        r#"
        SELECT id, name, city, state
        FROM venues
        ORDER BY name ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(venues)
}

pub async fn update_venue(
    pool: &Pool<Postgres>,
    id: i32,
    venue: &NewVenue,
) -> Result<Option<DbVenue>> {
    tracing::debug!("Updating venue: id={}, name={}", id, venue.name);

    let query = format!(
        r#"
        UPDATE venues
        SET name = $2, genres = $3, address = $4, city = $5, state = $6, phone = $7,
            website = $8, facebook_link = $9, seeking_talent = $10,
            seeking_description = $11, image_link = $12
        WHERE id = $1
        RETURNING {VENUE_COLUMNS}
        "#
    );

    let updated = sqlx::query_as::<_, DbVenue>(&query)
        .bind(id)
        .bind(&venue.name)
        .bind(join_genres(&venue.genres))
        .bind(&venue.address)
        .bind(&venue.city)
        .bind(&venue.state)
        .bind(&venue.phone)
        .bind(&venue.website)
        .bind(&venue.facebook_link)
        .bind(venue.seeking_talent)
        .bind(&venue.seeking_description)
        .bind(&venue.image_link)
        .fetch_optional(pool)
        .await
        .map_err(|e| name_taken(e, &venue.name))?;

    Ok(updated)
}

/// Shows at the venue are removed by the cascading foreign key.
pub async fn delete_venue(pool: &Pool<Postgres>, id: i32) -> Result<bool> {
    let result = sqlx::query(
        r#"
        DELETE FROM venues
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    tracing::debug!("Deleted venue: id={}, rows={}", id, result.rows_affected());
    Ok(result.rows_affected() > 0)
}

pub async fn search_venues(pool: &Pool<Postgres>, term: &str) -> Result<Vec<DbVenueSummary>> {
    let venues = sqlx::query_as::<_, DbVenueSummary>(
        r#"
        SELECT id, name, city, state
        FROM venues
        WHERE name ILIKE $1
        ORDER BY name ASC
        "#,
    )
    .bind(like_pattern(term))
    .fetch_all(pool)
    .await?;

    Ok(venues)
}
