use chrono::{DateTime, Local, Utc};

use crate::constants::{SORT_KEY_FORMAT, TIME_FORMAT};

/// Formats a timestamp for display in local time; empty when unknown.
pub fn format_time(time: Option<DateTime<Utc>>) -> String {
    time.map(|t| t.with_timezone(&Local).format(TIME_FORMAT).to_string())
        .unwrap_or_default()
}

/// Fixed-width UTC form of a timestamp whose string order is chronological.
/// Unknown times sort first.
pub fn sort_key(time: Option<DateTime<Utc>>) -> String {
    time.map(|t| t.format(SORT_KEY_FORMAT).to_string())
        .unwrap_or_default()
}

pub fn short_sha(sha: &str, len: usize) -> &str {
    match sha.char_indices().nth(len) {
        Some((i, _)) => &sha[..i],
        None => sha,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_sort_key_orders_chronologically() {
        let early = Utc.with_ymd_and_hms(2015, 1, 8, 5, 17, 6).unwrap();
        let late = Utc.with_ymd_and_hms(2015, 1, 8, 5, 20, 0).unwrap();
        assert_eq!(sort_key(Some(early)), "2015-01-08T05:17:06Z");
        assert!(sort_key(Some(early)) < sort_key(Some(late)));
        assert!(sort_key(None) < sort_key(Some(early)));
    }

    #[test]
    fn test_unknown_time_formats_empty() {
        assert_eq!(format_time(None), "");
    }

    #[test]
    fn test_short_sha() {
        assert_eq!(short_sha("0123456789abcdef", 7), "0123456");
        assert_eq!(short_sha("abc", 7), "abc");
    }
}
