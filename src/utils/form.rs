//! Deserializers for values coming straight from HTML form fields.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, de::Error};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(serde_json::Number),
    Text(String),
}

/// Whole non-negative month count, given as a JSON number or a numeric string.
pub fn months<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrText::deserialize(deserializer)? {
        NumberOrText::Number(n) => n
            .as_u64()
            .and_then(|v| u32::try_from(v).ok())
            .ok_or_else(|| D::Error::custom(format!("invalid month count: {n}"))),
        NumberOrText::Text(s) => s
            .trim()
            .parse::<u32>()
            .map_err(|_| D::Error::custom(format!("invalid month count: {s:?}"))),
    }
}

/// `YYYY-MM-DD`, with an empty string or null meaning "not set".
pub fn optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Some)
            .map_err(|_| D::Error::custom(format!("invalid date: {s:?}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(deserialize_with = "months")]
        months: u32,
        #[serde(default, deserialize_with = "optional_date")]
        date: Option<NaiveDate>,
    }

    fn parse(raw: &str) -> Result<Probe, serde_json::Error> {
        serde_json::from_str(raw)
    }

    #[test]
    fn months_accept_numbers_and_numeric_text() {
        assert_eq!(parse(r#"{"months": 2}"#).unwrap().months, 2);
        assert_eq!(parse(r#"{"months": " 3 "}"#).unwrap().months, 3);
    }

    #[test]
    fn months_reject_garbage() {
        assert!(parse(r#"{"months": "two"}"#).is_err());
        assert!(parse(r#"{"months": -1}"#).is_err());
        assert!(parse(r#"{"months": 1.5}"#).is_err());
        assert!(parse(r#"{"months": ""}"#).is_err());
        assert!(parse(r#"{"months": null}"#).is_err());
    }

    #[test]
    fn empty_or_missing_date_is_unset() {
        assert_eq!(parse(r#"{"months": 0, "date": ""}"#).unwrap().date, None);
        assert_eq!(parse(r#"{"months": 0, "date": null}"#).unwrap().date, None);
        assert_eq!(parse(r#"{"months": 0}"#).unwrap().date, None);
    }

    #[test]
    fn malformed_date_is_rejected() {
        assert!(parse(r#"{"months": 0, "date": "2023-02-30"}"#).is_err());
        assert!(parse(r#"{"months": 0, "date": "15/01/2023"}"#).is_err());
    }

    #[test]
    fn valid_date_parses() {
        assert_eq!(
            parse(r#"{"months": 0, "date": "2023-01-15"}"#).unwrap().date,
            NaiveDate::from_ymd_opt(2023, 1, 15)
        );
    }
}
