//! Fonts that can be drawn with and measured.
//!
//! A [Font] is either one of the standard Helvetica faces, which PDF readers
//! provide themselves, or a TrueType / OpenType face that is embedded in the
//! generated file. Whichever it is, the width reported by
//! [Font::width_of_text] is computed from the exact codes that end up in the
//! content stream, so text wrapping never disagrees with what is drawn.

mod embedded;
mod standard;

pub use standard::StandardFont;

use crate::refs::ObjectReferences;
use crate::{PDFError, Pt};
use embedded::EmbeddedFace;
use pdf_writer::Pdf;
use std::collections::BTreeMap;

/// Drawn in place of characters a font has no code for
const SUBSTITUTE: char = '?';

enum FontKind {
    Standard(StandardFont),
    Embedded(EmbeddedFace),
}

/// A single character as written to a content stream: the code the font
/// understands and the character it stands for (after substitution).
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub(crate) struct Code {
    pub value: u16,
    pub ch: char,
}

/// A font that text can be drawn and measured with
pub struct Font {
    kind: FontKind,
}

impl Font {
    /// Use one of the standard faces. These are never embedded and can't
    /// fail to load.
    pub fn standard(font: StandardFont) -> Font {
        Font {
            kind: FontKind::Standard(font),
        }
    }

    /// Load a TrueType or OpenType font from raw bytes, returning an error if
    /// the font could not be parsed. The font is embedded in its entirety.
    pub fn load(bytes: Vec<u8>) -> Result<Font, PDFError> {
        Ok(Font {
            kind: FontKind::Embedded(EmbeddedFace::parse(bytes)?),
        })
    }

    /// Whether text drawn in this font is written as 2-byte glyph ids
    pub(crate) fn is_two_byte(&self) -> bool {
        matches!(self.kind, FontKind::Embedded(_))
    }

    /// Encode text into the codes that will be written to the content
    /// stream. Characters the font can't represent become `?`.
    pub(crate) fn encode(&self, text: &str) -> Vec<Code> {
        text.chars()
            .map(|ch| match self.code_for(ch) {
                Some(value) => Code { value, ch },
                None => {
                    log::warn!("no glyph for {ch:?}, substituting {SUBSTITUTE:?}");
                    Code {
                        value: self.code_for(SUBSTITUTE).unwrap_or_default(),
                        ch: SUBSTITUTE,
                    }
                }
            })
            .collect()
    }

    fn code_for(&self, ch: char) -> Option<u16> {
        match &self.kind {
            FontKind::Standard(_) => standard::winansi(ch).map(u16::from),
            FontKind::Embedded(face) => face.glyph_id(ch).filter(|&gid| gid > 0),
        }
    }

    /// Advance width of an encoded character, in 1/1000 em
    fn code_width(&self, code: u16) -> f32 {
        match &self.kind {
            FontKind::Standard(font) => font.width(code as u8) as f32,
            FontKind::Embedded(face) => face.advance(code),
        }
    }

    /// Calculate the width of a string of text at the given size
    pub fn width_of_text(&self, text: &str, size: Pt) -> Pt {
        let units: f32 = self
            .encode(text)
            .into_iter()
            .map(|code| self.code_width(code.value))
            .sum();
        size * (units / 1000.0)
    }

    /// Calculate the ascent (distance from the baseline to the top of the font) for the given font size
    pub fn ascent(&self, size: Pt) -> Pt {
        let units = match &self.kind {
            FontKind::Standard(font) => font.ascender() as f32,
            FontKind::Embedded(face) => face.ascender(),
        };
        size * (units / 1000.0)
    }

    /// Calculate the descent (distance from the baseline to the bottom of the font) for the given font size.
    /// Note: this is usually negative
    pub fn descent(&self, size: Pt) -> Pt {
        let units = match &self.kind {
            FontKind::Standard(font) => font.descender() as f32,
            FontKind::Embedded(face) => face.descender(),
        };
        size * (units / 1000.0)
    }

    /// The name the font is referred to by inside the PDF
    pub fn name(&self, font_index: usize) -> String {
        match &self.kind {
            FontKind::Standard(font) => font.base_font().to_string(),
            FontKind::Embedded(face) => face.postscript_name(font_index),
        }
    }

    pub(crate) fn write(
        &self,
        refs: &mut ObjectReferences,
        font_index: usize,
        used: &BTreeMap<u16, char>,
        writer: &mut Pdf,
    ) {
        match &self.kind {
            FontKind::Standard(font) => font.write(refs, font_index, writer),
            FontKind::Embedded(face) => face.write(refs, font_index, used, writer),
        }
    }
}
