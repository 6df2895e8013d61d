use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Create venues table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS venues (
            id SERIAL PRIMARY KEY,
            name VARCHAR(120) NOT NULL UNIQUE,
            genres VARCHAR NULL,
            address VARCHAR(120) NOT NULL,
            city VARCHAR(120) NOT NULL,
            state VARCHAR(2) NOT NULL,
            phone VARCHAR(12) NOT NULL,
            website VARCHAR(120) NULL,
            facebook_link VARCHAR(120) NULL,
            seeking_talent BOOLEAN NOT NULL DEFAULT FALSE,
            seeking_description VARCHAR(500) NULL,
            image_link VARCHAR(500) NOT NULL DEFAULT 'https://placebear.com/400/400'
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create artists table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS artists (
            id SERIAL PRIMARY KEY,
            name VARCHAR(120) NOT NULL UNIQUE,
            genres VARCHAR NULL,
            city VARCHAR(120) NOT NULL,
            state VARCHAR(2) NOT NULL,
            phone VARCHAR(12) NOT NULL,
            website VARCHAR(120) NULL,
            facebook_link VARCHAR(120) NULL,
            seeking_venue BOOLEAN NOT NULL DEFAULT FALSE,
            seeking_description VARCHAR(500) NULL,
            image_link VARCHAR(500) NOT NULL DEFAULT 'https://placekitten.com/2000/2000',
            available_start TIMESTAMP NULL,
            available_end TIMESTAMP NULL,
            CONSTRAINT valid_availability CHECK (
                (available_start IS NULL AND available_end IS NULL)
                OR (available_start IS NOT NULL AND available_end IS NOT NULL
                    AND available_end > available_start)
            )
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create shows table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS shows (
            id SERIAL PRIMARY KEY,
            artist_id INTEGER NOT NULL REFERENCES artists(id) ON DELETE CASCADE,
            venue_id INTEGER NOT NULL REFERENCES venues(id) ON DELETE CASCADE,
            start_time TIMESTAMP NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes
    for statement in [
        "CREATE INDEX IF NOT EXISTS idx_shows_artist_id ON shows(artist_id)",
        "CREATE INDEX IF NOT EXISTS idx_shows_venue_id ON shows(venue_id)",
        "CREATE INDEX IF NOT EXISTS idx_shows_start_time ON shows(start_time)",
        "CREATE INDEX IF NOT EXISTS idx_venues_location ON venues(state, city)",
    ] {
        sqlx::query(statement).execute(pool).await?;
    }

    info!("Database schema initialized successfully.");
    Ok(())
}
