use std::error::Error;

use chrono::NaiveDate;
use gigbook_core::{
    errors::{BookingError, BookingResult},
    models::artist::AvailabilityWindow,
};

#[test]
fn test_booking_error_display() {
    let start = NaiveDate::from_ymd_opt(2035, 4, 1).unwrap().and_hms_opt(10, 0, 0).unwrap();
    let end = NaiveDate::from_ymd_opt(2035, 4, 30).unwrap().and_hms_opt(23, 0, 0).unwrap();

    let format = BookingError::Format { input: "tomorrow".to_string() };
    let reference = BookingError::Reference { entity: "Artist", id: 42 };
    let out_of_window = BookingError::OutOfAvailability {
        window: AvailabilityWindow { start, end },
    };
    let conflict = BookingError::Conflict { venue_id: 3, start_time: start };
    let validation = BookingError::validation("phone", "Please enter a valid US phone number");
    let not_found = BookingError::NotFound("Venue with ID 7".to_string());
    let storage = BookingError::Storage(eyre::eyre!("connection refused"));

    assert_eq!(
        format.to_string(),
        "Invalid start time 'tomorrow': expected YYYY-MM-DD HH:MM"
    );
    assert_eq!(reference.to_string(), "Artist with ID 42 does not exist");
    assert_eq!(
        out_of_window.to_string(),
        "Artist is only available between 2035-04-01 10:00:00 and 2035-04-30 23:00:00"
    );
    assert_eq!(
        conflict.to_string(),
        "Artist is already booked at venue 3 on 2035-04-01 10:00:00"
    );
    assert_eq!(
        validation.to_string(),
        "Validation error on phone: Please enter a valid US phone number"
    );
    assert_eq!(not_found.to_string(), "Resource not found: Venue with ID 7");
    assert!(storage.to_string().contains("Storage error:"));
}

#[test]
fn test_storage_error_from_report() {
    let report = eyre::eyre!("relation \"shows\" does not exist");
    let err: BookingError = report.into();

    assert!(matches!(err, BookingError::Storage(_)));
    assert!(err.to_string().contains("does not exist"));
}

#[test]
fn test_domain_errors_have_no_source() {
    let err = BookingError::Reference { entity: "Venue", id: 1 };
    assert!(err.source().is_none());
}

#[test]
fn test_booking_result() {
    let result: BookingResult<i32> = Ok(42);
    assert_eq!(result.unwrap(), 42);

    let result: BookingResult<i32> = Err(BookingError::NotFound("Not found".to_string()));
    assert!(result.is_err());
}
