pub mod artists;
pub mod shows;
pub mod venues;

use chrono::{Local, NaiveDateTime};
use gigbook_core::errors::{BookingError, BookingResult};
use serde::{Deserialize, Serialize};

/// Body of the venue and artist search endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    pub search_term: String,
}

impl SearchRequest {
    /// The trimmed term. Blank terms are rejected before any lookup happens.
    pub fn term(&self) -> BookingResult<&str> {
        let term = self.search_term.trim();
        if term.is_empty() {
            return Err(BookingError::validation(
                "search_term",
                "Please enter a search term.",
            ));
        }
        Ok(term)
    }
}

/// Response of the delete endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub success: bool,
}

/// The evaluation instant for "upcoming" versus "past", read once per request.
/// Show times are stored as local wall-clock times.
pub(crate) fn now() -> NaiveDateTime {
    Local::now().naive_local()
}
