use chrono::NaiveDateTime;
use thiserror::Error;

use crate::models::artist::AvailabilityWindow;

#[derive(Error, Debug)]
pub enum BookingError {
    #[error("Invalid start time '{input}': expected YYYY-MM-DD HH:MM")]
    Format { input: String },

    #[error("{entity} with ID {id} does not exist")]
    Reference { entity: &'static str, id: i32 },

    #[error(
        "Artist is only available between {} and {}",
        .window.start,
        .window.end
    )]
    OutOfAvailability { window: AvailabilityWindow },

    #[error("Artist is already booked at venue {venue_id} on {start_time}")]
    Conflict {
        venue_id: i32,
        start_time: NaiveDateTime,
    },

    #[error("Validation error on {field}: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Storage(#[from] eyre::Report),
}

impl BookingError {
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        BookingError::Validation {
            field,
            message: message.into(),
        }
    }
}

pub type BookingResult<T> = Result<T, BookingError>;
