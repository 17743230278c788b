//! parsers and serde codecs for the day and time labels found in toll
//! tables and toll configuration files. times use HH:MM:SS format and
//! days use English weekday names.
use chrono::{NaiveTime, Weekday};
use serde::{de::Error, Deserialize, Deserializer, Serializer};

pub const TIME_FORMAT: &str = "%H:%M:%S";
const SHORT_TIME_FORMAT: &str = "%H:%M";

/// parses HH:MM:SS, falling back to HH:MM.
pub fn parse_time(time: &str) -> Result<NaiveTime, chrono::ParseError> {
    let time = time.trim();
    NaiveTime::parse_from_str(time, TIME_FORMAT)
        .or_else(|_| NaiveTime::parse_from_str(time, SHORT_TIME_FORMAT))
}

/// parses a weekday name such as "Monday" or "mon", ignoring case.
pub fn parse_weekday(day: &str) -> Result<Weekday, chrono::ParseWeekdayError> {
    day.trim().parse::<Weekday>()
}

/// full English name of a weekday, as written in toll tables.
pub fn weekday_name(day: &Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

pub fn deserialize_naive_time<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
where
    D: Deserializer<'de>,
{
    let time_str: String = String::deserialize(deserializer)?;
    parse_time(&time_str).map_err(|e| D::Error::custom(format!("Invalid time format: {e}")))
}

pub fn serialize_naive_time<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&time.format(TIME_FORMAT).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_time() {
        let expected = NaiveTime::from_hms_opt(9, 30, 0).unwrap();
        assert_eq!(parse_time("09:30:00").unwrap(), expected);
        assert_eq!(parse_time(" 09:30 ").unwrap(), expected);
        assert!(parse_time("25:00:00").is_err());
        assert!(parse_time("noon").is_err());
    }

    #[test]
    fn test_parse_weekday() {
        assert_eq!(parse_weekday("Monday").unwrap(), Weekday::Mon);
        assert_eq!(parse_weekday("sat").unwrap(), Weekday::Sat);
        assert_eq!(parse_weekday("SUNDAY").unwrap(), Weekday::Sun);
        assert!(parse_weekday("Funday").is_err());
    }

    #[test]
    fn test_weekday_name_round_trips() {
        for day in [Weekday::Mon, Weekday::Wed, Weekday::Sun] {
            assert_eq!(parse_weekday(weekday_name(&day)).unwrap(), day);
        }
    }
}
