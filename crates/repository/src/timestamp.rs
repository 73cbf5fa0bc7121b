//! Parsing of date properties.
//!
//! Dates reach us as strings: ISO 8601 from the repository itself, or the
//! ECMA-262 style that Sling's JSON renderer writes into content exports.

use time::format_description::BorrowedFormatItem;
use time::format_description::well_known::{Iso8601, Rfc3339};
use time::macros::format_description;
use time::OffsetDateTime;

use crate::models::PropertyValue;

/// `Tue Jan 02 2024 03:04:05 GMT+0100`
const ECMA: &[BorrowedFormatItem<'static>] = format_description!(
    "[weekday repr:short] [month repr:short] [day] [year] [hour]:[minute]:[second] GMT[offset_hour sign:mandatory][offset_minute]"
);

/// Parse a date string in any of the supported formats.
///
/// ```
/// use refscan_repository::parse_timestamp;
/// assert!(parse_timestamp("2024-01-02T03:04:05.678+01:00").is_some());
/// assert!(parse_timestamp("Tue Jan 02 2024 03:04:05 GMT+0100").is_some());
/// assert!(parse_timestamp("yesterday").is_none());
/// ```
pub fn parse(value: &str) -> Option<OffsetDateTime> {
    let value = value.trim();
    OffsetDateTime::parse(value, &Rfc3339)
        .or_else(|_| OffsetDateTime::parse(value, &Iso8601::DEFAULT))
        .or_else(|_| OffsetDateTime::parse(value, ECMA))
        .ok()
}

/// Interpret a property as a date. Anything other than a parseable single
/// string is treated as if the property were not set.
pub(crate) fn from_property(name: &str, value: &PropertyValue) -> Option<OffsetDateTime> {
    let raw = value.as_str()?;
    let parsed = parse(raw);
    if parsed.is_none() {
        tracing::debug!(property = name, value = raw, "Ignoring unparseable date property");
    }
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use time::macros::datetime;

    #[rstest]
    #[case("2024-01-02T03:04:05.678Z", datetime!(2024-01-02 03:04:05.678 UTC))]
    #[case("2024-01-02T03:04:05.678+01:00", datetime!(2024-01-02 02:04:05.678 UTC))]
    #[case("2024-01-02T03:04:05+00:00", datetime!(2024-01-02 03:04:05 UTC))]
    #[case("Tue Jan 02 2024 03:04:05 GMT+0100", datetime!(2024-01-02 02:04:05 UTC))]
    #[case("  2024-01-02T03:04:05Z ", datetime!(2024-01-02 03:04:05 UTC))]
    fn test_parse(#[case] input: &str, #[case] expected: OffsetDateTime) {
        assert_eq!(parse(input), Some(expected));
    }

    #[rstest]
    #[case("")]
    #[case("2024-13-45")]
    #[case("not a date")]
    fn test_parse_invalid(#[case] input: &str) {
        assert_eq!(parse(input), None);
    }

    #[test]
    fn test_from_property_shapes() {
        assert!(from_property("d", &PropertyValue::from("2024-01-02T03:04:05Z")).is_some());
        assert!(from_property("d", &PropertyValue::from(vec!["2024-01-02T03:04:05Z"])).is_none());
        assert!(from_property("d", &PropertyValue::Opaque).is_none());
        assert!(from_property("d", &PropertyValue::Absent).is_none());
    }
}
