use std::fmt;

use crate::parsing::{
    escape::{escape_path, unescape_path},
    patterns::FILE,
    span::Span,
};

/// A file attachment, written by Bear as an HTML link:
/// `<a href='note/my%20file.pdf'>my file.pdf</a>`.
///
/// Rendered back as a Markdown link: `[my file.pdf](note/my%20file.pdf)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRef {
    /// Decoded path of the attachment.
    pub location: String,
    /// Link text.
    pub display_name: String,
    span: Span,
}

impl FileRef {
    pub fn from_match(raw: &str, span: Span) -> Option<FileRef> {
        let caps = FILE.captures(raw)?;
        Some(FileRef {
            location: unescape_path(&caps[1]).into_owned(),
            display_name: caps[2].to_string(),
            span,
        })
    }

    pub fn span(&self) -> Span {
        self.span
    }
}

impl fmt::Display for FileRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]({})", self.display_name, escape_path(&self.location))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn file(raw: &str) -> FileRef {
        FileRef::from_match(raw, Span::new(0, raw.len())).unwrap()
    }

    #[test]
    fn decodes_location_and_renders_markdown() {
        let f = file("<a href='note/my%20file.pdf'>my file.pdf</a>");
        assert_eq!(f.location, "note/my file.pdf");
        assert_eq!(f.display_name, "my file.pdf");
        assert_eq!(f.to_string(), "[my file.pdf](note/my%20file.pdf)");
    }

    #[test]
    fn double_quotes_and_extra_spaces() {
        let f = file(r#"<a  href="doc.txt">doc</a>"#);
        assert_eq!(f.location, "doc.txt");
        assert_eq!(f.display_name, "doc");
    }

    #[test]
    fn relocated_file_renders_new_location() {
        let mut f = file("<a href='note/report%20v2.pdf'>report v2.pdf</a>");
        f.location = "report v2.pdf".to_string();
        assert_eq!(f.to_string(), "[report v2.pdf](report%20v2.pdf)");
    }

    #[test]
    fn undecodable_location_is_kept_raw() {
        let f = file("<a href='bad%FF.bin'>bad</a>");
        assert_eq!(f.location, "bad%FF.bin");
    }

    #[test]
    fn not_a_link() {
        assert!(FileRef::from_match("<a>nope</a>", Span::new(0, 11)).is_none());
    }
}
