pub mod artist;
pub mod show;
pub mod venue;

use gigbook_core::errors::BookingError;

/// Wraps a search term for `ILIKE`, escaping its wildcard characters.
pub(crate) fn like_pattern(term: &str) -> String {
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped)
}

/// A write that lost a race on the unique `name` column fails the same way the
/// form check does. The `BookingError` travels inside the report so the API
/// can recover it; any other failure stays a plain storage error.
pub(crate) fn name_taken(err: sqlx::Error, name: &str) -> eyre::Report {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            tracing::debug!("Unique name violation: name={}", name);
            eyre::Report::new(BookingError::validation(
                "name",
                format!("'{}' is already listed.", name),
            ))
        }
        _ => err.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::{like_pattern, name_taken};
    use gigbook_core::errors::BookingError;

    #[test]
    fn test_like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("hop"), "%hop%");
        assert_eq!(like_pattern("100%"), "%100\\%%");
        assert_eq!(like_pattern("a_b"), "%a\\_b%");
    }

    #[test]
    fn test_name_taken_leaves_other_failures_alone() {
        let report = name_taken(sqlx::Error::RowNotFound, "The Musical Hop");

        assert!(report.downcast_ref::<BookingError>().is_none());
        assert!(report.downcast_ref::<sqlx::Error>().is_some());
    }
}
