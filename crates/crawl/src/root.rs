use crate::error::{ErrorKind, Result};
use exn::ResultExt;
use refscan_repository::error::ErrorKind as RepositoryErrorKind;
use refscan_repository::{Node, Repository};

/// Root used when a request doesn't name one.
pub const DEFAULT_ROOT: &str = "/content";

/// Resolves the root of a crawl from an optional, user-supplied path.
///
/// A missing or blank path falls back to `fallback`. The node must exist:
/// placeholders for non-existing resources count as not found.
pub fn resolve_root(repository: &dyn Repository, requested: Option<&str>, fallback: &str) -> Result<Node> {
    let path = requested.map(str::trim).filter(|path| !path.is_empty()).unwrap_or(fallback);
    let node = match repository.resolve(path) {
        Err(err) if matches!(&*err, RepositoryErrorKind::InvalidPath(_)) => {
            return Err(err).or_raise(|| ErrorKind::InvalidPath(path.to_string()));
        },
        result => result.or_raise(|| ErrorKind::Repository)?,
    };
    match node {
        Some(node) if !node.is_non_existing() => Ok(node),
        _ => exn::bail!(ErrorKind::NotFound(path.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use refscan_repository::{MemoryRepository, NodeKind, Properties};
    use rstest::rstest;

    fn repository() -> MemoryRepository {
        let mut repository = MemoryRepository::default().with_nodes([
            ("/content/site", Properties::new()),
            ("/content/other", Properties::new()),
        ]);
        repository.insert("/content/gone", NodeKind::NonExisting, Properties::new()).unwrap();
        repository
    }

    #[rstest]
    #[case::absent(None, "/content")]
    #[case::empty(Some(""), "/content")]
    #[case::blank(Some("  "), "/content")]
    #[case::explicit(Some("/content/site"), "/content/site")]
    #[case::trimmed(Some(" /content/site "), "/content/site")]
    #[case::normalized(Some("/content//site/"), "/content/site")]
    fn test_resolve_root(#[case] requested: Option<&str>, #[case] expected: &str) {
        let node = resolve_root(&repository(), requested, DEFAULT_ROOT).unwrap();
        assert_eq!(node.path(), expected);
    }

    #[test]
    fn test_custom_fallback() {
        let node = resolve_root(&repository(), None, "/content/other").unwrap();
        assert_eq!(node.path(), "/content/other");
    }

    #[rstest]
    #[case::missing("/content/missing")]
    #[case::non_existing("/content/gone")]
    fn test_not_found(#[case] requested: &str) {
        let err = resolve_root(&repository(), Some(requested), DEFAULT_ROOT).unwrap_err();
        assert!(matches!(&*err, ErrorKind::NotFound(path) if path == requested));
    }

    #[rstest]
    #[case::relative("content/site")]
    #[case::escapes_root("/content/../..")]
    fn test_invalid_path(#[case] requested: &str) {
        let err = resolve_root(&repository(), Some(requested), DEFAULT_ROOT).unwrap_err();
        assert!(matches!(&*err, ErrorKind::InvalidPath(_)));
    }

    #[test]
    fn test_unreadable_root() {
        let repository = repository().fail_on_read("/content/site");
        let err = resolve_root(&repository, Some("/content/site"), DEFAULT_ROOT).unwrap_err();
        assert!(matches!(&*err, ErrorKind::Repository));
    }
}
