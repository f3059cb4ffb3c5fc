//! Strict wire-timestamp handling.
//!
//! Partners send timestamps as `yyyy-MM-ddTHH:mm:ss.fffffffZ` — UTC, exactly
//! seven fractional-second digits, literal uppercase `Z`. The parser is a
//! fixed-pattern check, not a lenient date parser: any deviation in shape is
//! a parse failure.

use chrono::{DateTime, Duration, NaiveDateTime, TimeZone, Timelike, Utc};

/// Tolerated clock skew between partner and server, inclusive.
pub const FRESHNESS_WINDOW_SECS: i64 = 300;

/// `yyyy-MM-ddTHH:mm:ss` + `.` + 7 digits + `Z`.
const WIRE_LEN: usize = 28;
const SECONDS_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Parses a wire timestamp, rejecting anything that does not match the
/// pattern byte-for-byte. Returns the instant interpreted as UTC.
pub fn parse_wire_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let bytes = raw.as_bytes();
    if bytes.len() != WIRE_LEN || bytes[19] != b'.' || bytes[27] != b'Z' {
        return None;
    }

    let fraction = &raw[20..27];
    if !fraction.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let seconds = NaiveDateTime::parse_from_str(&raw[..19], SECONDS_FORMAT).ok()?;
    // Seven digits of hundreds of nanoseconds.
    let nanos = fraction.parse::<u32>().ok()? * 100;
    let instant = seconds.with_nanosecond(nanos)?;

    Some(Utc.from_utc_datetime(&instant))
}

/// Renders an instant back into the wire pattern.
pub fn format_wire_timestamp(instant: DateTime<Utc>) -> String {
    format!(
        "{}.{:07}Z",
        instant.format(SECONDS_FORMAT),
        instant.nanosecond() / 100
    )
}

/// Renders the 14-digit `yyyyMMddHHmmss` form used in the signature payload.
pub fn format_compact(instant: DateTime<Utc>) -> String {
    instant.format("%Y%m%d%H%M%S").to_string()
}

/// A timestamp is fresh when it lies within the window of `now`, in either
/// direction. The boundary itself is accepted.
pub fn is_fresh(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    let skew = (now - timestamp).abs();
    skew <= Duration::seconds(FRESHNESS_WINDOW_SECS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn parses_exact_pattern() {
        let parsed = parse_wire_timestamp("2024-01-01T00:00:00.0000000Z").unwrap();
        assert_eq!(format_compact(parsed), "20240101000000");
        assert_eq!(parsed.nanosecond(), 0);
    }

    #[test]
    fn parses_fractional_digits() {
        let parsed = parse_wire_timestamp("2024-06-15T12:34:56.1234567Z").unwrap();
        assert_eq!(parsed.nanosecond(), 123_456_700);
    }

    #[test]
    fn rejects_wrong_fraction_width() {
        assert!(parse_wire_timestamp("2024-01-01T00:00:00.000000Z").is_none());
        assert!(parse_wire_timestamp("2024-01-01T00:00:00.00000000Z").is_none());
        assert!(parse_wire_timestamp("2024-01-01T00:00:00Z").is_none());
    }

    #[test]
    fn rejects_wrong_zone_marker() {
        assert!(parse_wire_timestamp("2024-01-01T00:00:00.0000000z").is_none());
        assert!(parse_wire_timestamp("2024-01-01T00:00:00.0000000+00:00").is_none());
        assert!(parse_wire_timestamp("2024-01-01T00:00:00.0000000").is_none());
    }

    #[test]
    fn rejects_non_digit_fraction() {
        assert!(parse_wire_timestamp("2024-01-01T00:00:00.00x0000Z").is_none());
    }

    #[test]
    fn rejects_impossible_dates() {
        assert!(parse_wire_timestamp("2024-13-01T00:00:00.0000000Z").is_none());
        assert!(parse_wire_timestamp("2024-02-30T00:00:00.0000000Z").is_none());
        assert!(parse_wire_timestamp("2024-01-01T24:00:00.0000000Z").is_none());
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_wire_timestamp("").is_none());
        assert!(parse_wire_timestamp("not a timestamp, definitely").is_none());
    }

    #[test]
    fn round_trips_through_wire_format() {
        let raw = "2024-06-15T12:34:56.1234567Z";
        let parsed = parse_wire_timestamp(raw).unwrap();
        assert_eq!(format_wire_timestamp(parsed), raw);
    }

    #[test]
    fn window_boundary_is_inclusive() {
        let now = parse_wire_timestamp("2024-01-01T12:00:00.0000000Z").unwrap();

        let exactly_five_min_old = now - Duration::seconds(FRESHNESS_WINDOW_SECS);
        assert!(is_fresh(exactly_five_min_old, now));

        let just_over = now - Duration::seconds(FRESHNESS_WINDOW_SECS) - Duration::milliseconds(1);
        assert!(!is_fresh(just_over, now));
    }

    #[test]
    fn window_is_symmetric() {
        let now = parse_wire_timestamp("2024-01-01T12:00:00.0000000Z").unwrap();

        let future_edge = now + Duration::seconds(FRESHNESS_WINDOW_SECS);
        assert!(is_fresh(future_edge, now));

        let too_far_ahead = now + Duration::seconds(FRESHNESS_WINDOW_SECS + 1);
        assert!(!is_fresh(too_far_ahead, now));
    }
}
