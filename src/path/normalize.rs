use crate::path::{PathError, PathResult};
use memchr::memchr2;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizationOptions {
    pub collapse_duplicate_slashes: bool,
}

/// Cuts the query string and fragment off a request path.
#[inline]
pub fn strip_query(path: &str) -> &str {
    match memchr2(b'?', b'#', path.as_bytes()) {
        Some(end) => &path[..end],
        None => path,
    }
}

/// Brings a request path into the shape compiled patterns are matched against.
///
/// The query string and fragment are removed, a leading `/` is guaranteed and
/// trailing slashes are dropped (the root stays `/`). Repeated slashes are kept
/// unless `collapse_duplicate_slashes` is set, so `//news` and `/news` stay
/// distinct paths.
#[tracing::instrument(level = "trace", skip(path, options), fields(path_len = path.len() as u64))]
pub fn normalize_path(path: &str, options: &NormalizationOptions) -> PathResult<String> {
    let bytes = strip_query(path).as_bytes();

    let mut output = Vec::with_capacity(bytes.len() + 1);
    let mut prev_was_slash = false;
    let mut segment_start = 0usize;
    let mut saw_parent_traversal = false;

    if bytes.first() != Some(&b'/') {
        output.push(b'/');
        prev_was_slash = true;
        segment_start = 1;
    }

    for &byte in bytes {
        if byte == b'/' {
            if options.collapse_duplicate_slashes && prev_was_slash {
                continue;
            }
            finalize_segment(&output, segment_start, &mut saw_parent_traversal);
            output.push(b'/');
            prev_was_slash = true;
            segment_start = output.len();
            continue;
        }

        if byte <= 0x20 || byte == 0x7f {
            return Err(PathError::ControlOrWhitespace {
                input: path.to_string(),
                byte,
            });
        }

        output.push(byte);
        prev_was_slash = false;
    }

    finalize_segment(&output, segment_start, &mut saw_parent_traversal);

    while output.len() > 1 && output.last() == Some(&b'/') {
        output.pop();
    }

    // only ASCII bytes were inserted or removed, so the buffer is still UTF-8
    let normalized = String::from_utf8_lossy(&output).into_owned();

    if saw_parent_traversal {
        return Err(PathError::InvalidParentTraversal {
            input: path.to_string(),
            normalized,
        });
    }

    Ok(normalized)
}

fn finalize_segment(output: &[u8], segment_start: usize, saw_parent_traversal: &mut bool) {
    if segment_start >= output.len() {
        return;
    }

    let segment_len = output.len() - segment_start;
    if segment_len == 2 && output[segment_start..segment_start + 2] == *b".." {
        *saw_parent_traversal = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalize(path: &str) -> String {
        normalize_path(path, &NormalizationOptions::default()).unwrap()
    }

    #[test]
    fn strips_query_and_fragment() {
        assert_eq!(normalize("/news/12?page=2"), "/news/12");
        assert_eq!(normalize("/news#top"), "/news");
        assert_eq!(normalize("/news/?a=1#b"), "/news");
    }

    #[test]
    fn empty_path_and_bare_query_become_root() {
        assert_eq!(normalize(""), "/");
        assert_eq!(normalize("?x=1"), "/");
        assert_eq!(normalize("/"), "/");
    }

    #[test]
    fn adds_leading_slash_and_trims_trailing_slashes() {
        assert_eq!(normalize("news/list///"), "/news/list");
        assert_eq!(normalize("///"), "/");
    }

    #[test]
    fn keeps_duplicate_slashes_by_default() {
        assert_eq!(normalize("//news"), "//news");
        assert_eq!(normalize("/a//b"), "/a//b");
    }

    #[test]
    fn collapses_duplicate_slashes_when_enabled() {
        let options = NormalizationOptions {
            collapse_duplicate_slashes: true,
        };
        let normalized = normalize_path("//foo//bar///", &options).unwrap();
        assert_eq!(normalized, "/foo/bar");
    }

    #[test]
    fn accepts_unicode_input() {
        assert_eq!(normalize("/こんにちは/"), "/こんにちは");
    }

    #[test]
    fn rejects_control_bytes() {
        let err = normalize_path("/foo\tbar", &NormalizationOptions::default()).unwrap_err();
        match err {
            PathError::ControlOrWhitespace { byte, .. } => assert_eq!(byte, b'\t'),
            other => panic!("expected ControlOrWhitespace, got {other:?}"),
        }
    }

    #[test]
    fn rejects_parent_traversal_segments() {
        let err = normalize_path("/foo/../bar", &NormalizationOptions::default()).unwrap_err();
        match err {
            PathError::InvalidParentTraversal { normalized, .. } => {
                assert_eq!(normalized, "/foo/../bar");
            }
            other => panic!("expected InvalidParentTraversal, got {other:?}"),
        }
    }

    #[test]
    fn dots_inside_segments_are_not_traversal() {
        assert_eq!(normalize("/files/a..b"), "/files/a..b");
    }
}
