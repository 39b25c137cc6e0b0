/// Utilities for date and time formatting
///
/// Provides consistent date/time formatting across the application and the
/// conversions between `<input type="date|datetime-local">` state and UTC
/// timestamps used by the contracts.
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Format ISO datetime string to DD.MM.YYYY HH:MM:SS format
/// Example: "2024-03-15T14:02:26.123Z" -> "15.03.2024 14:02:26"
pub fn format_datetime(datetime_str: &str) -> String {
    if let Some((date_part, time_part)) = datetime_str.split_once('T') {
        if let Some((year, rest)) = date_part.split_once('-') {
            if let Some((month, day)) = rest.split_once('-') {
                let time = time_part.split('.').next().unwrap_or(time_part);
                let time = time.trim_end_matches('Z');
                return format!("{}.{}.{} {}", day, month, year, time);
            }
        }
    }
    datetime_str.to_string()
}

/// Format ISO date string to DD.MM.YYYY format
/// Example: "2024-03-15" or "2024-03-15T14:02:26Z" -> "15.03.2024"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            return format!("{}.{}.{}", day, month, year);
        }
    }
    date_str.to_string()
}

/// Parse the value of an `<input type="date">` ("2024-03-15") into UTC midnight
pub fn parse_date_input(value: &str) -> Option<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()?;
    Some(Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0)?))
}

/// Parse the value of an `<input type="datetime-local">` ("2024-03-15T14:02")
pub fn parse_datetime_input(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    let naive = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S"))
        .ok()?;
    Some(Utc.from_utc_datetime(&naive))
}

/// Render a timestamp as `<input type="date">` value
pub fn to_date_input(value: &DateTime<Utc>) -> String {
    value.format("%Y-%m-%d").to_string()
}

/// Render a timestamp as `<input type="datetime-local">` value
pub fn to_datetime_input(value: &DateTime<Utc>) -> String {
    value.format("%Y-%m-%dT%H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        assert_eq!(
            format_datetime("2024-03-15T14:02:26.123Z"),
            "15.03.2024 14:02:26"
        );
        assert_eq!(
            format_datetime("2024-12-31T23:59:59Z"),
            "31.12.2024 23:59:59"
        );
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15.03.2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15.03.2024");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_date("invalid"), "invalid");
    }

    #[test]
    fn test_date_input_roundtrip() {
        let parsed = parse_date_input("2024-03-15").unwrap();
        assert_eq!(to_date_input(&parsed), "2024-03-15");
        assert!(parse_date_input("15.03.2024").is_none());
    }

    #[test]
    fn test_datetime_input_roundtrip() {
        let parsed = parse_datetime_input("2024-03-15T14:02").unwrap();
        assert_eq!(to_datetime_input(&parsed), "2024-03-15T14:02");
        assert!(parse_datetime_input("2024-03-15").is_none());
    }
}
