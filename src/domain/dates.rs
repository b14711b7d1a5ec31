//! Lenient date and timestamp decoding.
//!
//! Backends disagree on how they render dates: some send RFC 3339 timestamps,
//! others send offset-less date-times (`2023-01-15T00:00:00`) or bare dates.
//! Offset-less values are read as UTC.

use jiff::{Timestamp, civil, tz::TimeZone};
use serde::{Deserialize, Deserializer, de::Error as _};

pub(crate) fn parse_timestamp(raw: &str) -> Result<Timestamp, jiff::Error> {
    if let Ok(timestamp) = raw.parse::<Timestamp>() {
        return Ok(timestamp);
    }

    let datetime = match raw.parse::<civil::DateTime>() {
        Ok(datetime) => datetime,
        Err(_) => raw.parse::<civil::Date>()?.to_datetime(civil::Time::midnight()),
    };

    Ok(datetime.to_zoned(TimeZone::UTC)?.timestamp())
}

pub(crate) fn parse_date(raw: &str) -> Result<civil::Date, jiff::Error> {
    if let Ok(date) = raw.parse::<civil::Date>() {
        return Ok(date);
    }

    if let Ok(datetime) = raw.parse::<civil::DateTime>() {
        return Ok(datetime.date());
    }

    Ok(raw.parse::<Timestamp>()?.to_zoned(TimeZone::UTC).date())
}

pub(crate) fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<Timestamp, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;

    parse_timestamp(&raw).map_err(D::Error::custom)
}

pub(crate) fn deserialize_date<'de, D>(deserializer: D) -> Result<civil::Date, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;

    parse_date(&raw).map_err(D::Error::custom)
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn offset_less_datetimes_are_read_as_utc() -> TestResult {
        let parsed = parse_timestamp("2024-03-01T09:30:00.1234567")?;
        let expected: Timestamp = "2024-03-01T09:30:00.1234567Z".parse()?;

        assert_eq!(parsed, expected);

        Ok(())
    }

    #[test]
    fn rfc3339_timestamps_keep_their_offset() -> TestResult {
        let parsed = parse_timestamp("2024-03-01T09:30:00+02:00")?;
        let expected: Timestamp = "2024-03-01T07:30:00Z".parse()?;

        assert_eq!(parsed, expected);

        Ok(())
    }

    #[test]
    fn hire_dates_accept_dates_and_datetimes() -> TestResult {
        assert_eq!(parse_date("2021-06-14")?, date(2021, 6, 14));
        assert_eq!(parse_date("2021-06-14T00:00:00")?, date(2021, 6, 14));
        assert_eq!(parse_date("2021-06-14T23:00:00Z")?, date(2021, 6, 14));

        Ok(())
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(parse_timestamp("yesterday").is_err());
        assert!(parse_date("14/06/2021").is_err());
    }
}
