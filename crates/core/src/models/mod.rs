use chrono::NaiveDateTime;

pub mod artist;
pub mod show;
pub mod venue;

/// Fixed timestamp format accepted for show and availability times.
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Parses `value` under [`TIME_FORMAT`] with a four-digit year.
///
/// chrono's `%Y` also takes signed and longer years such as `+262142`, which
/// fall outside the fixed format.
pub fn parse_time(value: &str) -> Option<NaiveDateTime> {
    let bytes = value.as_bytes();
    if bytes.len() < 5 || !bytes[..4].iter().all(u8::is_ascii_digit) || bytes[4] != b'-' {
        return None;
    }
    NaiveDateTime::parse_from_str(value, TIME_FORMAT).ok()
}

/// A record that can be matched by name, either for keyword search or for
/// name uniqueness checks.
pub trait Named {
    fn id(&self) -> i32;
    fn name(&self) -> &str;
}
