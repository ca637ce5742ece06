//! Leg timestamp formatting: the API sends local ISO-8601 datetimes, the
//! cards show "Jun 1, 2025, 5:30 AM".

use chrono::NaiveDateTime;

const WIRE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];

/// Format a departure/arrival string for display. Input that does not parse
/// is rendered verbatim rather than dropped.
pub fn format_leg_time(raw: &str) -> String {
    for format in WIRE_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(raw, format) {
            return datetime.format("%b %-d, %Y, %-I:%M %p").to_string();
        }
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_morning_time() {
        assert_eq!(format_leg_time("2025-06-01T05:30:00"), "Jun 1, 2025, 5:30 AM");
    }

    #[test]
    fn formats_afternoon_time_without_zero_padding() {
        assert_eq!(format_leg_time("2024-02-20T12:35:00"), "Feb 20, 2024, 12:35 PM");
        assert_eq!(format_leg_time("2024-12-09T19:05:00"), "Dec 9, 2024, 7:05 PM");
    }

    #[test]
    fn accepts_minute_precision() {
        assert_eq!(format_leg_time("2025-06-01T05:30"), "Jun 1, 2025, 5:30 AM");
    }

    #[test]
    fn unparseable_input_passes_through() {
        assert_eq!(format_leg_time("whenever"), "whenever");
        assert_eq!(format_leg_time(""), "");
    }
}
