//! # Notes
//!
//! A [`Note`] is the original Markdown text of a Bear note plus the tags,
//! file attachments and images found in it. Callers edit the items in
//! place (rename a tag, relocate an image) and [`Note::render`] rebuilds
//! the text with only the item spans rewritten.
//!
//! ```rust
//! use bearnotes_engine::Note;
//!
//! let mut note = Note::parse("Trip ![](note/map%201.png) #travel/2020\n");
//! note.tags[0].name = "travel".to_string();
//! note.images[0].location = "map 1.png".to_string();
//! assert_eq!(note.render(), "Trip ![](map%201.png) #travel\n");
//! ```

use crate::parsing::{
    kinds::{FileRef, ImageRef, Tag},
    patterns::{Grammar, find_spans},
};
use crate::render::{Replacement, splice};

/// A parsed Bear note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    /// Tags, in order of appearance.
    pub tags: Vec<Tag>,
    /// File attachments, in order of appearance.
    pub files: Vec<FileRef>,
    /// Embedded images, in order of appearance.
    pub images: Vec<ImageRef>,
    content: String,
}

impl Note {
    /// Scans `content` once per grammar. Never fails: text without any
    /// recognised construct yields a note with no items.
    pub fn parse(content: impl Into<String>) -> Note {
        let content = content.into();

        let tags = find_spans(&content, Grammar::Tag)
            .filter_map(|sp| Tag::from_match(&content[sp.start..sp.end], sp))
            .collect();
        let files = find_spans(&content, Grammar::File)
            .filter_map(|sp| FileRef::from_match(&content[sp.start..sp.end], sp))
            .collect();
        let images = find_spans(&content, Grammar::Image)
            .filter_map(|sp| ImageRef::from_match(&content[sp.start..sp.end], sp))
            .collect();

        Note {
            tags,
            files,
            images,
            content,
        }
    }

    /// The original text, as parsed.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Rebuilds the note from the original text and the current state of
    /// its items.
    pub fn render(&self) -> String {
        splice(&self.content, self.replacements())
    }

    /// One replacement per item: tags first, then files, then images.
    /// Spans from different kinds never share a start in parsed notes, but
    /// that order is what breaks a tie if they do.
    fn replacements(&self) -> Vec<Replacement> {
        let tags = self
            .tags
            .iter()
            .map(|t| Replacement::new(t.span(), t.to_string()));
        let files = self
            .files
            .iter()
            .map(|f| Replacement::new(f.span(), f.to_string()));
        let images = self
            .images
            .iter()
            .map(|i| Replacement::new(i.span(), i.to_string()));

        tags.chain(files).chain(images).collect()
    }
}

/// Parses a note. See [`Note::parse`].
pub fn parse(content: &str) -> Note {
    Note::parse(content)
}

/// Renders a note. See [`Note::render`].
pub fn render(note: &Note) -> String {
    note.render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::span::Span;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("")]
    #[case("plain text, nothing to see")]
    #[case("#one #two\n#three")]
    #[case("- #foo\n- #foo/bar@baz\n")]
    #[case("![](note/no-alt.jpg) and ![alt](img%202.png)")]
    #[case("https://www.perdu.com/#trap and a#b and #1")]
    #[case("Traps, traps, traps... #trap#trap \n")]
    #[case("![](note/photo@2x.png)")]
    #[case("![retina](note/a+b$c=d.png) #tag")]
    fn render_without_edits_is_identity(#[case] text: &str) {
        assert_eq!(Note::parse(text).render(), text);
    }

    #[test]
    fn single_tag() {
        let note = Note::parse("#test/123");
        assert_eq!(note.tags.len(), 1);
        assert_eq!(note.tags[0].name, "test/123");
        assert_eq!(note.tags[0].span(), Span::new(0, 9));
    }

    #[test]
    fn glued_tag_is_not_a_tag() {
        assert!(Note::parse("a#b").tags.is_empty());
    }

    #[test]
    fn trailing_marker_is_not_a_tag() {
        assert!(Note::parse(" #trap#").tags.is_empty());
    }

    #[test]
    fn tags_separated_by_one_space() {
        let note = Note::parse("#one #two");
        let names: Vec<_> = note.tags.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["one", "two"]);
        assert_eq!(note.tags[0].span(), Span::new(0, 5));
        assert_eq!(note.tags[1].span(), Span::new(5, 9));
    }

    #[test]
    fn removing_middle_tag_keeps_neighbours() {
        let mut note = Note::parse("start #A middle #B end #C");
        assert_eq!(note.tags.len(), 3);

        note.tags[1].name.clear();

        assert_eq!(note.render(), "start #A middle  end #C");
    }

    #[test]
    fn removing_tag_at_line_start() {
        let mut note = Note::parse("- #foo\n- #bar\n");
        note.tags[0].name.clear();
        assert_eq!(note.render(), "- \n- #bar\n");
    }

    #[test]
    fn file_link_becomes_markdown_link() {
        let note = Note::parse("see <a href='note/my%20file.pdf'>my file.pdf</a>.");
        assert_eq!(note.files.len(), 1);
        assert_eq!(note.files[0].location, "note/my file.pdf");
        assert_eq!(note.files[0].display_name, "my file.pdf");
        assert_eq!(note.render(), "see [my file.pdf](note/my%20file.pdf).");
    }

    #[test]
    fn items_render_in_document_order() {
        // Image at byte 10, tag marker at byte 50 (its span starts on the
        // space before it)
        let text = format!("{}![](a.png){}#tag", " ".repeat(10), " ".repeat(30));
        let mut note = Note::parse(text.as_str());
        assert_eq!(note.images[0].span().start, 10);
        assert_eq!(note.tags[0].span().start, 49);

        note.images[0].location = "IMG".to_string();
        note.tags[0].name = "TAG".to_string();

        let out = note.render();
        let image_at = out.find("![](IMG)").unwrap();
        let tag_at = out.find("#TAG").unwrap();
        assert!(image_at < tag_at);
        assert_eq!(out, format!("{}![](IMG){}#TAG", " ".repeat(10), " ".repeat(30)));
    }

    #[test]
    fn tag_inside_html_link_text_is_kept() {
        let note = Note::parse("<a href='x.pdf'>x</a> #tag");
        assert_eq!(note.files.len(), 1);
        assert_eq!(note.tags.len(), 1);
        assert_eq!(note.render(), "[x](x.pdf) #tag");
    }

    #[test]
    fn free_functions_match_methods() {
        let text = "![](p.png) #t";
        assert_eq!(render(&parse(text)), Note::parse(text).render());
        assert_eq!(parse(text).content(), text);
    }
}
