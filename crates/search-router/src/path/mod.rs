/// Path utilities for validation and segment splitting
///
/// All functions are **pure**: given same input, always produce same output with no side effects.

use std::borrow::Cow;
use std::string::FromUtf8Error;

/// Validates if a path is in canonical form
///
/// # Rules
///
/// - Must start with `/`
/// - Must not contain `//` or `\`
/// - Must not end with `/` (except root `/`)
/// - Must not be empty
///
/// # Examples
///
/// ```
/// use search_router::path::is_valid_path;
///
/// assert!(is_valid_path("/"));
/// assert!(is_valid_path("/explore"));
/// assert!(is_valid_path("/explore/ds123"));
///
/// assert!(!is_valid_path(""));
/// assert!(!is_valid_path("explore")); // Missing leading /
/// assert!(!is_valid_path("/explore/")); // Trailing /
/// assert!(!is_valid_path("/explore//ds123")); // Double //
/// ```
pub fn is_valid_path(path: &str) -> bool {
    if path.is_empty() || !path.starts_with('/') {
        return false;
    }

    if path.contains("//") || path.contains('\\') {
        return false;
    }

    path == "/" || !path.ends_with('/')
}

/// Splits a request path into its segments
///
/// Returns `None` when the path can never match a template:
/// - it does not start with `/`
/// - it contains an empty segment (`/a//b`)
/// - it ends with `/` while `strict_trailing_slash` is set
///
/// Without `strict_trailing_slash` a single trailing `/` is dropped, so
/// `/explore/` splits the same as `/explore`. The root path has no segments.
///
/// # Examples
///
/// ```
/// use search_router::path::split_segments;
///
/// assert_eq!(split_segments("/", false), Some(vec![]));
/// assert_eq!(split_segments("/explore/ds123", false), Some(vec!["explore", "ds123"]));
/// assert_eq!(split_segments("/explore/", false), Some(vec!["explore"]));
/// assert_eq!(split_segments("/explore/", true), None);
/// assert_eq!(split_segments("/a//b", false), None);
/// ```
pub fn split_segments(path: &str, strict_trailing_slash: bool) -> Option<Vec<&str>> {
    let body = path.strip_prefix('/')?;
    if body.is_empty() {
        return Some(Vec::new());
    }

    let body = match body.strip_suffix('/') {
        Some(_) if strict_trailing_slash => return None,
        Some(trimmed) => trimmed,
        None => body,
    };

    let segments: Vec<&str> = body.split('/').collect();
    if segments.iter().any(|s| s.is_empty()) {
        return None;
    }
    Some(segments)
}

/// URI delimiters whose escapes are left as written
const RESERVED: &[u8] = b";/?:@&=+$,#";

/// Percent-decodes a path segment
///
/// Escapes of reserved characters (`; / ? : @ & = + $ , #`) are kept, so
/// `a%2Fb` stays `a%2Fb` while `ds%20123` becomes `ds 123`. Falls back to the
/// raw segment when the escapes do not form valid UTF-8. Zero-copy when the
/// segment holds no escapes.
///
/// # Examples
///
/// ```
/// use search_router::path::decode_segment;
///
/// assert_eq!(decode_segment("ds%20123"), "ds 123");
/// assert_eq!(decode_segment("a%2Fb"), "a%2Fb");
/// assert_eq!(decode_segment("%3Fq%C3%A9"), "%3Fqé");
/// ```
pub fn decode_segment(segment: &str) -> Cow<'_, str> {
    if !segment.contains('%') {
        return Cow::Borrowed(segment);
    }

    match decode_unreserved(segment) {
        Ok(decoded) => decoded,
        Err(err) => {
            tracing::debug!("keeping undecodable segment {:?}: {}", segment, err);
            Cow::Borrowed(segment)
        }
    }
}

/// Decodes everything except reserved escapes, one chunk per reserved escape
fn decode_unreserved(segment: &str) -> Result<Cow<'_, str>, FromUtf8Error> {
    let Some((head, escape, tail)) = split_reserved_escape(segment) else {
        return urlencoding::decode(segment);
    };

    let mut decoded = urlencoding::decode(head)?.into_owned();
    decoded.push_str(escape);
    decoded.push_str(&decode_unreserved(tail)?);
    Ok(Cow::Owned(decoded))
}

/// Splits around the first `%XX` escape of a reserved character
fn split_reserved_escape(segment: &str) -> Option<(&str, &str, &str)> {
    segment.match_indices('%').find_map(|(idx, _)| {
        let hex = segment.get(idx + 1..idx + 3)?;
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let byte = u8::from_str_radix(hex, 16).ok()?;
        RESERVED
            .contains(&byte)
            .then(|| (&segment[..idx], &segment[idx..idx + 3], &segment[idx + 3..]))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_path() {
        assert!(is_valid_path("/"));
        assert!(is_valid_path("/editor"));
        assert!(is_valid_path("/explore/ds123"));

        assert!(!is_valid_path(""));
        assert!(!is_valid_path("editor"));
        assert!(!is_valid_path("/editor/"));
        assert!(!is_valid_path("/explore//ds123"));
        assert!(!is_valid_path("/explore\\ds123"));
    }

    #[test]
    fn test_split_root() {
        assert_eq!(split_segments("/", false), Some(vec![]));
        assert_eq!(split_segments("/", true), Some(vec![]));
    }

    #[test]
    fn test_split_relative_path() {
        assert_eq!(split_segments("", false), None);
        assert_eq!(split_segments("explore", false), None);
    }

    #[test]
    fn test_split_only_one_trailing_slash_tolerated() {
        assert_eq!(split_segments("/explore/", false), Some(vec!["explore"]));
        assert_eq!(split_segments("/explore//", false), None);
        assert_eq!(split_segments("//", false), None);
    }

    #[test]
    fn test_split_three_segments() {
        assert_eq!(
            split_segments("/a/b/c", false),
            Some(vec!["a", "b", "c"])
        );
    }

    #[test]
    fn test_decode_segment() {
        assert!(matches!(decode_segment("ds123"), Cow::Borrowed("ds123")));
        assert_eq!(decode_segment("ds%20123"), "ds 123");
        assert_eq!(decode_segment("%E2%9C%93"), "✓");
    }

    #[test]
    fn test_decode_segment_keeps_reserved_escapes() {
        assert_eq!(decode_segment("a%2Fb"), "a%2Fb");
        assert_eq!(decode_segment("%3Fq"), "%3Fq");
        assert_eq!(decode_segment("a%2fb%20c"), "a%2fb c");
        assert_eq!(decode_segment("%23%E2%9C%93%3B"), "%23✓%3B");
        assert_eq!(decode_segment("100%25"), "100%");
    }

    #[test]
    fn test_decode_segment_invalid_utf8_kept_raw() {
        assert_eq!(decode_segment("%FF%FE"), "%FF%FE");
    }
}
