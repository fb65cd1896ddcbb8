//! Serde helper for optional calendar dates as `YYYY-MM-DD`.
//!
//! A missing date is written as `""` so the `version.date` key is always
//! present on the wire; `""`, `null` and an absent key all read back as `None`.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serializer};

/// Wire format for version dates.
pub const FORMAT: &str = "%Y-%m-%d";

/// Parses exactly `YYYY-MM-DD`: four-digit year, zero-padded month and day.
///
/// `%Y` alone also accepts unpadded fields and signed years (`2024-1-1`,
/// `-0001-01-01`), so the text must be the canonical form of the parsed date.
pub fn parse_strict(value: &str) -> Option<NaiveDate> {
    let bytes = value.as_bytes();
    let shaped = bytes.len() == 10
        && bytes.iter().enumerate().all(|(index, byte)| match index {
            4 | 7 => *byte == b'-',
            _ => byte.is_ascii_digit(),
        });
    if !shaped {
        return None;
    }
    let date = NaiveDate::parse_from_str(value, FORMAT).ok()?;
    (date.format(FORMAT).to_string() == value).then_some(date)
}

pub fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match date {
        Some(value) => serializer.serialize_str(&value.format(FORMAT).to_string()),
        None => serializer.serialize_str(""),
    }
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => parse_strict(value).map(Some).ok_or_else(|| {
            serde::de::Error::custom(format!("invalid version date `{value}`"))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::parse_strict;
    use chrono::NaiveDate;

    #[test]
    fn parse_strict_requires_canonical_form() {
        assert_eq!(parse_strict("2024-01-01"), NaiveDate::from_ymd_opt(2024, 1, 1));
        for raw in ["2024-1-1", "+12024-01-01", "-0001-01-01", "2024-01-01T00:00"] {
            assert_eq!(parse_strict(raw), None, "{raw} should be rejected");
        }
    }
}
