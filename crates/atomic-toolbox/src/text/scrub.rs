//! Scrub markup and noise out of attachment metadata.

use regex::Regex;
use std::sync::LazyLock;

static SCRIPT_STYLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<script[^>]*?>.*?</script>|<style[^>]*?>.*?</style>").unwrap()
});

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^<>]*>").unwrap());

static BREAKS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\r\n\t ]+").unwrap());

static OCTET_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)%[a-f0-9]{2}").unwrap());

static SPACES_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r" +").unwrap());

/// Remove `<script>`/`<style>` blocks and every complete tag.
///
/// A lone `<` with no closing `>` is kept as text.
pub fn strip_all_tags(s: &str, remove_breaks: bool) -> String {
    let without_blocks = SCRIPT_STYLE_RE.replace_all(s, "");
    let mut stripped = TAG_RE.replace_all(&without_blocks, "").into_owned();
    if remove_breaks {
        stripped = BREAKS_RE.replace_all(&stripped, " ").into_owned();
    }
    stripped.trim().to_string()
}

/// Clean a text value: strip tags, collapse whitespace, drop percent octets.
pub fn scrub(s: &str, keep_newlines: bool) -> String {
    let mut filtered = if s.contains('<') {
        strip_all_tags(s, false)
    } else {
        s.to_string()
    };

    if !keep_newlines {
        filtered = BREAKS_RE.replace_all(&filtered, " ").into_owned();
    }
    filtered = filtered.trim().to_string();

    // Removing one octet can expose another, e.g. "%%4141".
    let mut found = false;
    while OCTET_RE.is_match(&filtered) {
        filtered = OCTET_RE.replace_all(&filtered, "").into_owned();
        found = true;
    }

    if found {
        filtered = SPACES_RE.replace_all(&filtered, " ").trim().to_string();
    }

    filtered
}

/// Replace every character outside `[a-z0-9_.-]` with `replace_with`.
///
/// Input is lower-cased first.
pub fn sanitize(s: &str, replace_with: &str) -> String {
    s.to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '_' | '-' | '.') {
                c.to_string()
            } else {
                replace_with.to_string()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_all_tags() {
        assert_eq!(strip_all_tags("<b>Blue</b> <i>sky</i>", false), "Blue sky");
        assert_eq!(
            strip_all_tags("a<script type=\"x\">alert(1)</script>b<style>p{}</style>c", false),
            "abc"
        );
        assert_eq!(strip_all_tags("1 < 2", false), "1 < 2");
    }

    #[test]
    fn test_strip_all_tags_breaks() {
        assert_eq!(strip_all_tags("<p>a</p>\n\n<p>b</p>", true), "a b");
        assert_eq!(strip_all_tags("<p>a</p>\n<p>b</p>", false), "a\nb");
    }

    #[test]
    fn test_scrub_collapses_whitespace() {
        assert_eq!(scrub("  red\n\tblue   green ", false), "red blue green");
        assert_eq!(scrub("red\nblue", true), "red\nblue");
    }

    #[test]
    fn test_scrub_strips_markup() {
        assert_eq!(scrub("<em>cats</em> &amp; dogs", false), "cats &amp; dogs");
    }

    #[test]
    fn test_scrub_removes_octets() {
        assert_eq!(scrub("red%20blue", false), "redblue");
        assert_eq!(scrub("red %2F blue", false), "red blue");
        assert_eq!(scrub("x%%4141y", false), "xy");
    }

    #[test]
    fn test_sanitize() {
        assert_eq!(sanitize("Icons Page!", "-"), "icons-page-");
        assert_eq!(sanitize("page_template.php", "-"), "page_template.php");
        assert_eq!(sanitize("a/b", ""), "ab");
    }
}
