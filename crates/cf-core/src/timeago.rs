//! # Relative-time formatting
//!
//! Coarse "N units ago" strings for feed timestamps. The server already
//! sends posts with a pre-formatted `created_at`, so the submission flow
//! never calls this; it is kept as a standalone utility for pages that
//! render ages client-side.

use chrono::{DateTime, Utc};

/// Fixed-size buckets, largest first. A month is defined as 30 days.
const UNITS: [(i64, &str); 5] = [
    (31_536_000, "year"),
    (2_592_000, "month"),
    (86_400, "day"),
    (3_600, "hour"),
    (60, "minute"),
];

/// Buckets `elapsed_seconds` into the largest applicable unit and renders
/// it as e.g. `"3 hours ago"`. Anything under a minute is `"Just now"`.
pub fn time_since(elapsed_seconds: i64) -> String {
    for (size, label) in UNITS {
        let count = elapsed_seconds / size;
        if count >= 1 {
            let plural = if count > 1 { "s" } else { "" };
            return format!("{count} {label}{plural} ago");
        }
    }
    "Just now".to_string()
}

/// Typed convenience over [`time_since`]. Timestamps in the future clamp
/// to zero elapsed seconds rather than producing negative buckets.
pub fn relative_age(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = (now - then).num_seconds().max(0);
    time_since(elapsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn buckets_by_largest_unit() {
        assert_eq!(time_since(40), "Just now");
        assert_eq!(time_since(90), "1 minute ago");
        assert_eq!(time_since(3_700), "1 hour ago");
        assert_eq!(time_since(90_000), "1 day ago");
        assert_eq!(time_since(2_600_000), "1 month ago");
        assert_eq!(time_since(63_072_000), "2 years ago");
    }

    #[test]
    fn pluralizes_above_one() {
        assert_eq!(time_since(120), "2 minutes ago");
        assert_eq!(time_since(7_200), "2 hours ago");
    }

    #[test]
    fn boundary_values() {
        assert_eq!(time_since(0), "Just now");
        assert_eq!(time_since(59), "Just now");
        assert_eq!(time_since(60), "1 minute ago");
        assert_eq!(time_since(86_400), "1 day ago");
    }

    #[test]
    fn future_timestamps_clamp_to_just_now() {
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        let later = Utc.with_ymd_and_hms(2025, 6, 1, 13, 0, 0).unwrap();
        assert_eq!(relative_age(later, now), "Just now");
        assert_eq!(relative_age(now, later), "1 hour ago");
    }
}
