use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

/// Property values starting with this prefix point into the asset library.
pub const DEFAULT_ASSET_PREFIX: &str = "/content/dam";

/// `yyyy-MM-dd HH:mm:ss.SSSS`
pub(crate) const TIMESTAMP_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second].[subsecond digits:4]");
