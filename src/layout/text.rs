use crate::font::Font;
use crate::units::Pt;
use std::iter::FusedIterator;
use std::str::SplitWhitespace;

/// Greedily wraps `text` into lines no wider than `max_width`, measured with
/// `font` at `size`.
///
/// Words are split on any whitespace and re-joined with single spaces. A line
/// is only broken between words: a word that is wider than `max_width` on its
/// own is emitted as a line by itself and overflows. Lines are produced
/// lazily, one per call to [Iterator::next].
///
/// ```
/// use docfill::{Font, StandardFont, Pt};
/// use docfill::layout::wrap;
///
/// let font = Font::standard(StandardFont::Helvetica);
/// let lines: Vec<String> = wrap("the quick brown fox", Pt(60.0), &font, Pt(10.0)).collect();
/// assert_eq!(lines, vec!["the quick", "brown fox"]);
/// ```
pub fn wrap<'a>(text: &'a str, max_width: Pt, font: &'a Font, size: Pt) -> Wrap<'a> {
    Wrap {
        words: text.split_whitespace(),
        pending: None,
        font,
        size,
        max_width,
    }
}

/// Iterator over wrapped lines, created by [wrap]
pub struct Wrap<'a> {
    words: SplitWhitespace<'a>,
    /// the word that didn't fit on the previous line
    pending: Option<&'a str>,
    font: &'a Font,
    size: Pt,
    max_width: Pt,
}

impl Iterator for Wrap<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let mut line = self.pending.take().or_else(|| self.words.next())?.to_string();

        for word in self.words.by_ref() {
            let candidate = format!("{line} {word}");
            if self.font.width_of_text(&candidate, self.size) > self.max_width {
                self.pending = Some(word);
                return Some(line);
            }
            line = candidate;
        }

        Some(line)
    }
}

impl FusedIterator for Wrap<'_> {}
