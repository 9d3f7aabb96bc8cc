//! Utilities for date and time handling.
//!
//! The backend serialises timestamps as ISO-8601 UTC strings
//! (`YYYY-MM-DDTHH:mm:ss[.sss]Z`); the UI shows dates as `dd/MM/yyyy`.

use chrono::{DateTime, Utc};

/// Parse a strict ISO-8601 UTC timestamp.
///
/// Accepts `2024-03-15T14:02:26Z` and `2024-03-15T14:02:26.123Z`; anything
/// without the `T` separator or the trailing `Z` is rejected, so plain text
/// never gets mistaken for a date.
pub fn parse_iso_timestamp(value: &str) -> Option<DateTime<Utc>> {
    if !value.contains('T') || !value.ends_with('Z') {
        return None;
    }
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Format a timestamp as `dd/MM/yyyy`.
pub fn format_fecha(fecha: &DateTime<Utc>) -> String {
    fecha.format("%d/%m/%Y").to_string()
}

/// Canonical ISO-8601 form with milliseconds, as the backend emits it.
pub fn format_iso(fecha: &DateTime<Utc>) -> String {
    fecha.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}

/// Format an ISO timestamp string as `dd/MM/yyyy`.
/// Example: "2024-03-15T14:02:26.123Z" -> "15/03/2024"
///
/// Falls back to the input when it is not an ISO timestamp.
pub fn format_fecha_iso(value: &str) -> String {
    match parse_iso_timestamp(value) {
        Some(dt) => format_fecha(&dt),
        None => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_iso_timestamp() {
        assert!(parse_iso_timestamp("2024-03-15T14:02:26.123Z").is_some());
        assert!(parse_iso_timestamp("2024-03-15T14:02:26Z").is_some());
        assert!(parse_iso_timestamp("2024-03-15").is_none());
        assert!(parse_iso_timestamp("15/03/2024").is_none());
        assert!(parse_iso_timestamp("2024-03-15T14:02:26+02:00").is_none());
        assert!(parse_iso_timestamp("taladro").is_none());
    }

    #[test]
    fn test_format_fecha_iso() {
        assert_eq!(format_fecha_iso("2024-03-15T14:02:26.123Z"), "15/03/2024");
        assert_eq!(format_fecha_iso("2024-12-31T23:59:59Z"), "31/12/2024");
        assert_eq!(format_fecha_iso("sin fecha"), "sin fecha");
    }

    #[test]
    fn test_format_iso_round_trip() {
        let iso = "2024-03-15T00:00:00.000Z";
        let parsed = parse_iso_timestamp(iso).unwrap();
        assert_eq!(format_iso(&parsed), iso);
    }
}
