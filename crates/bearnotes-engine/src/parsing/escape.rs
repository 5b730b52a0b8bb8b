use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use std::borrow::Cow;

/// Bytes escaped inside one path segment. Unreserved characters and the
/// sub-delimiters Bear leaves literal (`$&+:=@`) pass through; `/;,?`,
/// parentheses and everything else non-alphanumeric are escaped.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'$')
    .remove(b'&')
    .remove(b'+')
    .remove(b':')
    .remove(b'=')
    .remove(b'@');

/// Percent-encodes a path one `/`-delimited component at a time, so the
/// separators themselves survive unescaped.
pub fn escape_path(path: &str) -> String {
    path.split('/')
        .map(|component| utf8_percent_encode(component, PATH_SEGMENT).to_string())
        .collect::<Vec<_>>()
        .join("/")
}

/// Percent-decodes a captured location. Decoding that does not yield valid
/// UTF-8 falls back to the raw text.
pub fn unescape_path(raw: &str) -> Cow<'_, str> {
    urlencoding::decode(raw).unwrap_or(Cow::Borrowed(raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("note/my file.pdf", "note/my%20file.pdf")]
    #[case(
        "note_with_nested(parenthesis)/test.jpg",
        "note_with_nested%28parenthesis%29/test.jpg"
    )]
    #[case("image.png", "image.png")]
    #[case("a/b/c", "a/b/c")]
    #[case("/abs/path", "/abs/path")]
    #[case("trailing/", "trailing/")]
    #[case("", "")]
    #[case("dossier/été.png", "dossier/%C3%A9t%C3%A9.png")]
    #[case("what?/100%", "what%3F/100%25")]
    #[case("note/photo@2x.png", "note/photo@2x.png")]
    #[case("note/a+b$c=d.png", "note/a+b$c=d.png")]
    #[case("rock&roll:live.jpg", "rock&roll:live.jpg")]
    #[case("a;b,c!d*e'f.png", "a%3Bb%2Cc%21d%2Ae%27f.png")]
    fn escapes_components_not_separators(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(escape_path(input), expected);
    }

    #[rstest]
    #[case("note/my%20file.pdf", "note/my file.pdf")]
    #[case("dossier/%C3%A9t%C3%A9.png", "dossier/été.png")]
    #[case("plain.png", "plain.png")]
    fn unescapes_percent_sequences(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(unescape_path(input), expected);
    }

    #[test]
    fn invalid_utf8_falls_back_to_raw() {
        assert_eq!(unescape_path("bad%FF.png"), "bad%FF.png");
    }

    #[test]
    fn escape_then_unescape_restores_location() {
        let location = "note_with_nested(parenthesis)/my image #2.jpg";
        assert_eq!(unescape_path(&escape_path(location)), location);
    }
}
