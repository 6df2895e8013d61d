//! # Booking Availability
//!
//! Decides whether a proposed show may be booked for an artist. A proposal is
//! checked, in order, for:
//!
//! 1. A start time in the fixed `YYYY-MM-DD HH:MM` format
//! 2. Strict containment in the artist's declared availability window, if any
//! 3. Separation of more than the conflict buffer from every other show of the
//!    same artist
//!
//! The window check excludes its bounds while the buffer check includes them.
//! Only the first failure is reported.
//!
//! Validation reads pre-fetched rows and never writes. Persisting the accepted
//! show is the caller's job, and so is serializing concurrent bookings for one
//! artist if that matters.

use chrono::{Duration, NaiveDateTime};

use crate::{
    errors::{BookingError, BookingResult},
    models::{
        artist::{Artist, AvailabilityWindow},
        parse_time,
        show::{NewShow, NewShowRequest, Show},
    },
};

pub const DEFAULT_BUFFER_HOURS: i64 = 2;
/// Largest accepted conflict buffer: one year.
pub const MAX_BUFFER_HOURS: i64 = 24 * 366;

/// Parses a start time in the fixed `YYYY-MM-DD HH:MM` format.
pub fn parse_start_time(input: &str) -> BookingResult<NaiveDateTime> {
    parse_time(input.trim()).ok_or_else(|| BookingError::Format {
        input: input.to_string(),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvailabilityValidator {
    buffer: Duration,
}

impl Default for AvailabilityValidator {
    fn default() -> Self {
        Self::with_buffer_hours(DEFAULT_BUFFER_HOURS)
    }
}

impl AvailabilityValidator {
    /// `hours` is clamped to `0..=MAX_BUFFER_HOURS`.
    pub fn with_buffer_hours(hours: i64) -> Self {
        Self {
            buffer: Duration::try_hours(hours.clamp(0, MAX_BUFFER_HOURS)).unwrap_or_default(),
        }
    }

    pub fn buffer(&self) -> Duration {
        self.buffer
    }

    /// Validates a proposed show against its artist and the artist's bookings.
    ///
    /// # Arguments
    ///
    /// * `artist` - The artist named by the request, or `None` if no such artist exists
    /// * `request` - The submitted booking
    /// * `existing` - Shows already booked for the artist
    ///
    /// # Errors
    ///
    /// * `BookingError::Reference` - The artist does not exist
    /// * `BookingError::Format` - The start time is malformed
    /// * `BookingError::OutOfAvailability` - The start time is outside the artist's window
    /// * `BookingError::Conflict` - The start time is within the buffer of another show
    pub fn validate_new_show(
        &self,
        artist: Option<&Artist>,
        request: &NewShowRequest,
        existing: &[Show],
    ) -> BookingResult<NewShow> {
        let artist = artist.ok_or(BookingError::Reference {
            entity: "Artist",
            id: request.artist_id,
        })?;

        let start_time = parse_start_time(&request.start_time)?;

        self.check_window(artist.availability().as_ref(), start_time)?;

        let own_shows: Vec<Show> = existing
            .iter()
            .filter(|show| show.artist_id == artist.id)
            .cloned()
            .collect();
        self.check_conflicts(start_time, &own_shows)?;

        Ok(NewShow {
            artist_id: artist.id,
            venue_id: request.venue_id,
            start_time,
        })
    }

    /// No window means no constraint.
    pub fn check_window(
        &self,
        window: Option<&AvailabilityWindow>,
        start_time: NaiveDateTime,
    ) -> BookingResult<()> {
        match window {
            Some(window) if !window.contains(start_time) => {
                Err(BookingError::OutOfAvailability { window: *window })
            }
            _ => Ok(()),
        }
    }

    /// Rejects `start_time` if it lies within the buffer of any show, bounds
    /// included. The first conflicting show in input order is reported.
    ///
    /// Near the ends of the representable range the buffer saturates at
    /// `NaiveDateTime::MIN` / `NaiveDateTime::MAX`.
    pub fn check_conflicts(&self, start_time: NaiveDateTime, shows: &[Show]) -> BookingResult<()> {
        let conflict = shows.iter().find(|show| {
            let earliest = show
                .start_time
                .checked_sub_signed(self.buffer)
                .unwrap_or(NaiveDateTime::MIN);
            let latest = show
                .start_time
                .checked_add_signed(self.buffer)
                .unwrap_or(NaiveDateTime::MAX);
            earliest <= start_time && start_time <= latest
        });

        match conflict {
            Some(show) => Err(BookingError::Conflict {
                venue_id: show.venue_id,
                start_time: show.start_time,
            }),
            None => Ok(()),
        }
    }
}
