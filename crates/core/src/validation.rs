//! Field-level rules for venue and artist submissions.
//!
//! Every rule takes the values it depends on as arguments and reports failure
//! as `BookingError::Validation` naming the offending field.

use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    errors::{BookingError, BookingResult},
    models::{Named, artist::AvailabilityWindow, parse_time},
};

pub const NAME_MAX_LEN: usize = 120;
pub const TEXT_MAX_LEN: usize = 120;
pub const LINK_MAX_LEN: usize = 120;
pub const IMAGE_LINK_MAX_LEN: usize = 500;
pub const DESCRIPTION_MAX_LEN: usize = 500;

pub const STATES: [&str; 51] = [
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "DC", "FL", "GA", "HI", "ID", "IL", "IN", "IA",
    "KS", "KY", "LA", "ME", "MT", "NE", "NV", "NH", "NJ", "NM", "NY", "NC", "ND", "OH", "OK", "OR",
    "MD", "MA", "MI", "MN", "MS", "MO", "PA", "RI", "SC", "SD", "TN", "TX", "UT", "VT", "VA", "WA",
    "WV", "WI", "WY",
];

pub const GENRES: [&str; 19] = [
    "Alternative",
    "Blues",
    "Classical",
    "Country",
    "Electronic",
    "Folk",
    "Funk",
    "Hip-Hop",
    "Heavy Metal",
    "Instrumental",
    "Jazz",
    "Musical Theatre",
    "Pop",
    "Punk",
    "R&B",
    "Reggae",
    "Rock n Roll",
    "Soul",
    "Other",
];

static DASHED_PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{3}-[0-9]{3}-[0-9]{4}$").expect("valid phone regex"));
static DIGIT_PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("valid phone regex"));
static URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https?://[^\s/?#]+\.[^\s/?#]+(?:[/?#]\S*)?$").expect("valid url regex"));

/// Trims `value` and requires it to be non-empty and at most `max` characters.
pub fn validate_text(field: &'static str, value: &str, max: usize) -> BookingResult<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(BookingError::validation(field, "This field is required."));
    }
    if value.chars().count() > max {
        return Err(BookingError::validation(
            field,
            format!("Can't be more than {} characters", max),
        ));
    }
    Ok(value.to_string())
}

/// Rejects `candidate` when another record already uses the same trimmed name.
/// The record being edited, identified by `own_id`, is ignored.
pub fn validate_unique_name<E: Named>(
    field: &'static str,
    candidate: &str,
    own_id: Option<i32>,
    existing: &[E],
) -> BookingResult<()> {
    let candidate = candidate.trim();
    let taken = existing
        .iter()
        .any(|record| record.name().trim() == candidate && Some(record.id()) != own_id);

    if taken {
        return Err(BookingError::validation(
            field,
            format!("'{}' is already listed.", candidate),
        ));
    }
    Ok(())
}

/// Accepts `123-456-7890` as is and normalizes `1234567890` to that form.
pub fn normalize_phone(raw: &str) -> BookingResult<String> {
    let raw = raw.trim();
    if DASHED_PHONE_RE.is_match(raw) {
        Ok(raw.to_string())
    } else if DIGIT_PHONE_RE.is_match(raw) {
        Ok(format!("{}-{}-{}", &raw[..3], &raw[3..6], &raw[6..]))
    } else {
        Err(BookingError::validation(
            "phone",
            "Please enter a valid US phone number (\"123-456-7890\" or \"1234567890\")",
        ))
    }
}

pub fn validate_state(state: &str) -> BookingResult<String> {
    let state = state.trim();
    if STATES.contains(&state) {
        Ok(state.to_string())
    } else {
        Err(BookingError::validation("state", "Please select a valid state."))
    }
}

pub fn validate_genres(genres: &[String]) -> BookingResult<Vec<String>> {
    if genres.is_empty() {
        return Err(BookingError::validation("genres", "This field is required."));
    }
    if let Some(unknown) = genres.iter().find(|genre| !GENRES.contains(&genre.as_str())) {
        return Err(BookingError::validation(
            "genres",
            format!("'{}' is not a valid genre.", unknown),
        ));
    }
    Ok(genres.to_vec())
}

/// Optional URL: blank input is treated as absent.
pub fn validate_url(
    field: &'static str,
    value: Option<&str>,
    max: usize,
) -> BookingResult<Option<String>> {
    let Some(value) = value.map(str::trim).filter(|value| !value.is_empty()) else {
        return Ok(None);
    };

    if !URL_RE.is_match(value) {
        return Err(BookingError::validation(
            field,
            "Please enter a valid URL (\"http://\" or \"https://\" is required)",
        ));
    }
    if value.chars().count() > max {
        return Err(BookingError::validation(
            field,
            format!("Can't be more than {} characters", max),
        ));
    }
    Ok(Some(value.to_string()))
}

/// Requires non-blank `text` when `checked` is set. Returns the trimmed text,
/// or `None` when it is blank.
pub fn require_if_checked(
    field: &'static str,
    checked: bool,
    text: Option<&str>,
) -> BookingResult<Option<String>> {
    let text = text.map(str::trim).filter(|text| !text.is_empty());

    match text {
        None if checked => Err(BookingError::validation(field, "Please enter details below.")),
        None => Ok(None),
        Some(text) if text.chars().count() > DESCRIPTION_MAX_LEN => Err(BookingError::validation(
            field,
            format!("Can't be more than {} characters", DESCRIPTION_MAX_LEN),
        )),
        Some(text) => Ok(Some(text.to_string())),
    }
}

/// Availability is declared as a pair or not at all, and must run forwards.
pub fn validate_availability(
    start: Option<&str>,
    end: Option<&str>,
) -> BookingResult<Option<AvailabilityWindow>> {
    let start = start.map(str::trim).filter(|value| !value.is_empty());
    let end = end.map(str::trim).filter(|value| !value.is_empty());

    let (start, end) = match (start, end) {
        (None, None) => return Ok(None),
        (Some(start), Some(end)) => (start, end),
        (None, Some(_)) => {
            return Err(BookingError::validation(
                "available_start",
                "An availability start is required when an end is given.",
            ));
        }
        (Some(_), None) => {
            return Err(BookingError::validation(
                "available_end",
                "An availability end is required when a start is given.",
            ));
        }
    };

    let start = parse_field_time("available_start", start)?;
    let end = parse_field_time("available_end", end)?;

    if start >= end {
        return Err(BookingError::validation(
            "available_start",
            "The availability start must be before its end.",
        ));
    }
    Ok(Some(AvailabilityWindow { start, end }))
}

fn parse_field_time(field: &'static str, value: &str) -> BookingResult<NaiveDateTime> {
    parse_time(value).ok_or_else(|| {
        BookingError::validation(field, "Please enter a date as YYYY-MM-DD HH:MM.")
    })
}
