use eyre::Result;

use crate::error::InvalidSegmentError;

/// Separator between the segments of a namespace path, e.g. `bdsg::algorithms`.
pub const SEPARATOR: &str = "::";

/// Path of the root namespace.
pub const ROOT: &str = "";

/// Join a parent path and a child segment. Children of the root are addressed by their bare name.
pub fn join(parent: &str, child: &str) -> String {
    if parent.is_empty() {
        child.to_string()
    } else {
        format!("{parent}{SEPARATOR}{child}")
    }
}

/// Split a path into its parent path and the last segment. Returns `None` for the root.
pub fn split(path: &str) -> Option<(&str, &str)> {
    if path.is_empty() {
        return None;
    }
    match path.rfind(SEPARATOR) {
        Some(ind) => Some((&path[..ind], &path[ind + SEPARATOR.len()..])),
        None => Some((ROOT, path)),
    }
}

pub fn validate_segment(segment: &str) -> Result<()> {
    if segment.is_empty() || segment.contains(SEPARATOR) {
        return Err(InvalidSegmentError::new(segment).into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join() {
        assert_eq!(join("", "bdsg"), "bdsg");
        assert_eq!(join("bdsg", "algorithms"), "bdsg::algorithms");
        assert_eq!(join("a::b", "c"), "a::b::c");
    }

    #[test]
    fn test_split() {
        assert_eq!(split(""), None);
        assert_eq!(split("bdsg"), Some(("", "bdsg")));
        assert_eq!(split("bdsg::algorithms"), Some(("bdsg", "algorithms")));
        assert_eq!(split("a::b::c"), Some(("a::b", "c")));
    }

    #[test]
    fn test_validate_segment() {
        assert!(validate_segment("algorithms").is_ok());

        for segment in ["", "a::b", "::"] {
            let err = validate_segment(segment).unwrap_err();
            let err = err.downcast_ref::<InvalidSegmentError>().unwrap();
            assert_eq!(err.segment(), segment);
        }
    }
}
