//! Content path validation and manipulation.
//!
//! Content paths are absolute, slash-delimited strings (`/content/site/en`).
//! They are plain strings rather than [`std::path::Path`] because they never
//! touch the host filesystem and must behave identically on every platform.

use crate::error::{ErrorKind, Result};

const SEPARATOR: char = '/';

/// Validates and normalizes a content path.
///
/// Empty segments and `.` are dropped, `..` removes the previous segment, and
/// trailing slashes are stripped. The repository root `/` is a valid path.
///
/// # Returns
/// Returns the normalized path if valid, or [`InvalidPath`](crate::error::ErrorKind::InvalidPath)
/// if the path is relative, contains a null byte, or escapes the root.
///
/// # Examples
///
/// ```
/// use refscan_repository::normalize_path;
/// // Valid paths
/// assert!(normalize_path("/content/site/en").is_ok());
/// assert!(normalize_path("/content/../apps").is_ok()); // (never leaves the root)
/// // Invalid paths
/// assert!(normalize_path("content/site").is_err());
/// assert!(normalize_path("/content/../../etc").is_err());
/// assert!(normalize_path("/a\0b").is_err());
/// // Paths get resolved
/// assert_eq!(normalize_path("/wrong/../content//./site/").unwrap(), "/content/site");
/// ```
pub fn normalize(path: impl AsRef<str>) -> Result<String> {
    let raw = path.as_ref();
    if !raw.starts_with(SEPARATOR) || raw.contains('\0') {
        exn::bail!(ErrorKind::InvalidPath(raw.to_string()));
    }
    let mut segments: Vec<&str> = Vec::new();
    for segment in raw.split(SEPARATOR) {
        match segment {
            "" | "." => {},
            ".." => {
                if segments.pop().is_none() {
                    exn::bail!(ErrorKind::InvalidPath(raw.to_string()));
                }
            },
            name => segments.push(name),
        }
    }
    let mut normalized = String::with_capacity(raw.len());
    for segment in &segments {
        normalized.push(SEPARATOR);
        normalized.push_str(segment);
    }
    if normalized.is_empty() {
        normalized.push(SEPARATOR);
    }
    Ok(normalized)
}

/// Parent of a normalized path, or `None` for the root.
pub fn parent(path: &str) -> Option<&str> {
    if path == "/" {
        return None;
    }
    match path.rfind(SEPARATOR) {
        Some(0) => Some("/"),
        Some(idx) => Some(&path[..idx]),
        None => None,
    }
}

/// Last segment of a normalized path (empty for the root).
pub fn name(path: &str) -> &str {
    path.rsplit(SEPARATOR).next().unwrap_or_default()
}

/// Append a child segment to a normalized path.
pub fn join(parent: &str, child: &str) -> String {
    match parent {
        "/" => format!("/{child}"),
        _ => format!("{parent}/{child}"),
    }
}

/// Every ancestor of a normalized path, nearest first, ending with the root.
pub fn ancestors(path: &str) -> impl Iterator<Item = &str> {
    std::iter::successors(parent(path), |current| parent(*current))
}
