//! Serde adapters for the admin console's wire formats: space-separated
//! datetimes, `HH:MM[:SS]` times and `0`/`1` booleans.

use chrono::{NaiveDateTime, NaiveTime};
use serde::{de, Deserialize, Deserializer, Serializer};

pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub const TIME_FORMAT: &str = "%H:%M:%S";

pub fn parse_time(raw: &str) -> Result<NaiveTime, chrono::ParseError> {
    NaiveTime::parse_from_str(raw, TIME_FORMAT)
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
}

pub fn parse_datetime(raw: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(raw, DATETIME_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M"))
}

/// `NaiveDateTime` as `"YYYY-MM-DD HH:MM:SS"`.
pub mod datetime {
    use super::*;

    pub fn serialize<S: Serializer>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.format(DATETIME_FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_datetime(&raw).map_err(de::Error::custom)
    }
}

/// `NaiveTime` as `"HH:MM:SS"`, accepting `"HH:MM"` on input.
pub mod time {
    use super::*;

    pub fn serialize<S: Serializer>(value: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.format(TIME_FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_time(&raw).map_err(de::Error::custom)
    }
}

/// `Option<NaiveTime>`, `null` when absent.
pub mod opt_time {
    use super::*;

    pub fn serialize<S: Serializer>(value: &Option<NaiveTime>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(t) => time::serialize(t, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<NaiveTime>, D::Error> {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw {
            Some(s) => parse_time(&s).map(Some).map_err(de::Error::custom),
            None => Ok(None),
        }
    }
}

/// Double-`Option` for partial updates: field absent means "leave
/// unchanged", explicit `null` means "clear".
pub mod double_opt_time {
    use super::*;

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Option<NaiveTime>>, D::Error> {
        opt_time::deserialize(deserializer).map(Some)
    }
}

/// Booleans transmitted as `0`/`1` (accepting real booleans as well).
pub mod bool_as_int {
    use super::*;

    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(if *value { 1 } else { 0 })
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum IntOrBool {
            Int(i64),
            Bool(bool),
        }

        match IntOrBool::deserialize(deserializer)? {
            IntOrBool::Bool(b) => Ok(b),
            IntOrBool::Int(0) => Ok(false),
            IntOrBool::Int(1) => Ok(true),
            IntOrBool::Int(other) => Err(de::Error::custom(format!(
                "expected 0 or 1, got {other}"
            ))),
        }
    }
}

/// `Option<bool>` as `0`/`1`, for partial updates.
pub mod opt_bool_as_int {
    use super::*;

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<bool>, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum IntOrBool {
            Int(i64),
            Bool(bool),
        }

        match Option::<IntOrBool>::deserialize(deserializer)? {
            None => Ok(None),
            Some(IntOrBool::Bool(b)) => Ok(Some(b)),
            Some(IntOrBool::Int(0)) => Ok(Some(false)),
            Some(IntOrBool::Int(1)) => Ok(Some(true)),
            Some(IntOrBool::Int(other)) => Err(de::Error::custom(format!(
                "expected 0 or 1, got {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn parses_times_with_and_without_seconds() {
        assert_eq!(
            parse_time("09:30").unwrap(),
            NaiveTime::from_hms_opt(9, 30, 0).unwrap()
        );
        assert_eq!(
            parse_time("09:30:15").unwrap(),
            NaiveTime::from_hms_opt(9, 30, 15).unwrap()
        );
        assert!(parse_time("930").is_err());
    }

    #[test]
    fn parses_space_separated_datetimes() {
        let parsed = parse_datetime("2026-09-07 14:00:00").unwrap();
        assert_eq!(
            parsed,
            NaiveDate::from_ymd_opt(2026, 9, 7)
                .unwrap()
                .and_hms_opt(14, 0, 0)
                .unwrap()
        );
    }
}
