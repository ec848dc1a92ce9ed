//! Noise stripping applied before lexicon and model scoring.

use std::sync::LazyLock;

use regex::Regex;

static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://\S+").expect("valid url regex"));
static MENTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@\w+").expect("valid mention regex"));
static HASHTAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#(\w+)").expect("valid hashtag regex"));
static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

/// Strip URLs and `@mentions`, unwrap `#hashtags` to their bare word, and
/// collapse whitespace.
///
/// Total: empty input yields an empty string.
#[must_use]
pub fn normalize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let text = URL_RE.replace_all(text, "");
    let text = MENTION_RE.replace_all(&text, "");
    let text = HASHTAG_RE.replace_all(&text, "$1");
    let text = WHITESPACE_RE.replace_all(&text, " ");

    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_empty_string() {
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn whitespace_only_yields_empty_string() {
        assert_eq!(normalize(" \t\n  "), "");
    }

    #[test]
    fn strips_http_and_https_urls() {
        assert_eq!(
            normalize("look https://example.com/a?b=1 and http://x.io now"),
            "look and now"
        );
    }

    #[test]
    fn strips_mentions() {
        assert_eq!(normalize("@alice thanks @bob_2!"), "thanks !");
    }

    #[test]
    fn keeps_hashtag_word_without_symbol() {
        assert_eq!(normalize("so #blessed today #Happy2024"), "so blessed today Happy2024");
    }

    #[test]
    fn collapses_internal_whitespace() {
        assert_eq!(normalize("  good\t\tnews \n everyone  "), "good news everyone");
    }

    #[test]
    fn leaves_emoji_untouched() {
        assert_eq!(normalize("yay 😊 👍"), "yay 😊 👍");
    }

    #[test]
    fn plain_text_is_unchanged() {
        assert_eq!(normalize("nothing to clean here"), "nothing to clean here");
    }
}
