use crate::consts::TIMESTAMP_FORMAT;
use crate::error::{ErrorKind, Result};
use exn::ResultExt;
use time::{OffsetDateTime, UtcOffset};

/// Renders a timestamp the way records carry it: `yyyy-MM-dd HH:mm:ss.SSSS`
/// in UTC, or an empty string when there is no timestamp.
///
/// # Examples
///
/// ```
/// use refscan_extract::format_timestamp;
/// use time::macros::datetime;
///
/// let formatted = format_timestamp(Some(datetime!(2024-01-02 03:04:05.6789 UTC))).unwrap();
/// assert_eq!(formatted, "2024-01-02 03:04:05.6789");
/// assert_eq!(format_timestamp(None).unwrap(), "");
/// ```
pub fn format_timestamp(timestamp: Option<OffsetDateTime>) -> Result<String> {
    let Some(timestamp) = timestamp else {
        return Ok(String::new());
    };
    timestamp
        .to_offset(UtcOffset::UTC)
        .format(TIMESTAMP_FORMAT)
        .or_raise(|| ErrorKind::Format {
            field: "timestamp",
            value: timestamp.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use time::macros::datetime;

    #[rstest]
    #[case::four_digits(datetime!(2024-01-02 03:04:05.6789 UTC), "2024-01-02 03:04:05.6789")]
    #[case::truncates(datetime!(2024-01-02 03:04:05.123456 UTC), "2024-01-02 03:04:05.1234")]
    #[case::pads(datetime!(2024-01-02 03:04:05 UTC), "2024-01-02 03:04:05.0000")]
    #[case::twenty_four_hour(datetime!(2023-12-31 23:59:59.5 UTC), "2023-12-31 23:59:59.5000")]
    #[case::converted_to_utc(datetime!(2024-01-02 04:04:05.6789 +01:00), "2024-01-02 03:04:05.6789")]
    fn test_format_timestamp(#[case] timestamp: OffsetDateTime, #[case] expected: &str) {
        assert_eq!(format_timestamp(Some(timestamp)).unwrap(), expected);
    }

    #[test]
    fn test_missing_timestamp_is_empty() {
        assert_eq!(format_timestamp(None).unwrap(), "");
    }
}
