//! String tokenization helpers used by command-line and config parsing.

/// Split `input` on `separator`, dropping empty chunks.
///
/// Consecutive, leading, or trailing separators produce no empty entries:
/// `split("a,,b,", ',')` yields `["a", "b"]`. Callers that need
/// positional (possibly empty) fields should use `str::split` directly.
pub fn split(input: &str, separator: char) -> Vec<&str> {
    input
        .split(separator)
        .filter(|chunk| !chunk.is_empty())
        .collect()
}

/// Literal prefix test.
///
/// False whenever `prefix` is longer than `s`; an empty prefix always
/// matches.
pub fn starts_with(s: &str, prefix: &str) -> bool {
    s.starts_with(prefix)
}

/// Literal suffix test.
///
/// False whenever `suffix` is longer than `s`; an empty suffix always
/// matches.
pub fn ends_with(s: &str, suffix: &str) -> bool {
    s.ends_with(suffix)
}

/// Strip one matched pair of surrounding double quotes from `s` in place.
///
/// Returns `true` when the input was well-formed: either both quotes were
/// present and stripped, or neither end was quoted (including the empty
/// string). Returns `false` without modifying `s` when exactly one end
/// carries a quote (a lone `"` counts); callers treat that as a format
/// error.
pub fn remove_quotes(s: &mut String) -> bool {
    let bytes = s.as_bytes();
    let leading = bytes.first() == Some(&b'"');
    let trailing = bytes.last() == Some(&b'"');

    if leading && trailing && s.len() >= 2 {
        s.pop();
        s.remove(0);
        true
    } else {
        !leading && !trailing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_drops_empty_chunks() {
        assert_eq!(split("a,,b,", ','), vec!["a", "b"]);
        assert_eq!(split(",,,", ','), Vec::<&str>::new());
        assert_eq!(split("", ','), Vec::<&str>::new());
    }

    #[test]
    fn test_split_without_separator_yields_whole_input() {
        assert_eq!(split("1280x720", ','), vec!["1280x720"]);
        assert_eq!(split("1280x720", 'x'), vec!["1280", "720"]);
    }

    #[test]
    fn test_starts_with() {
        assert!(starts_with("abc", "ab"));
        assert!(starts_with("abc", ""));
        assert!(!starts_with("abc", "abcd"));
        assert!(!starts_with("abc", "bc"));
    }

    #[test]
    fn test_ends_with() {
        assert!(ends_with("abc", "bc"));
        assert!(ends_with("abc", ""));
        assert!(!ends_with("abc", "zabc"));
        assert!(!ends_with("abc", "ab"));
    }

    #[test]
    fn test_remove_quotes_strips_matched_pair() {
        let mut s = String::from("\"hi\"");
        assert!(remove_quotes(&mut s));
        assert_eq!(s, "hi");

        let mut empty_pair = String::from("\"\"");
        assert!(remove_quotes(&mut empty_pair));
        assert_eq!(empty_pair, "");
    }

    #[test]
    fn test_remove_quotes_accepts_unquoted_input() {
        let mut s = String::from("hi");
        assert!(remove_quotes(&mut s));
        assert_eq!(s, "hi");

        let mut empty = String::new();
        assert!(remove_quotes(&mut empty));
        assert_eq!(empty, "");
    }

    #[test]
    fn test_remove_quotes_rejects_asymmetric_input() {
        let mut leading_only = String::from("\"hi");
        assert!(!remove_quotes(&mut leading_only));
        assert_eq!(leading_only, "\"hi");

        let mut trailing_only = String::from("hi\"");
        assert!(!remove_quotes(&mut trailing_only));
        assert_eq!(trailing_only, "hi\"");

        // A lone quote cannot form a matched pair.
        let mut lone = String::from("\"");
        assert!(!remove_quotes(&mut lone));
        assert_eq!(lone, "\"");
    }
}
