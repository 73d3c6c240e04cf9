//! The standard (non-embedded) Helvetica faces every PDF reader ships with.
//!
//! Text drawn with these faces is written in WinAnsiEncoding, so the width
//! tables below are indexed by WinAnsi code rather than by Unicode scalar.
//! Widths are the advance widths from the Adobe Core 14 AFM files, in 1/1000
//! of an em.

use crate::refs::{ObjectReferences, RefType};
use pdf_writer::{Name, Pdf};

/// One of the standard Type 1 faces
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum StandardFont {
    Helvetica,
    HelveticaBold,
}

// 0x20..=0x7E
#[rustfmt::skip]
const HELVETICA_ASCII: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD_ASCII: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

// 0xA0..=0xFF, which WinAnsi shares with Latin-1
#[rustfmt::skip]
const HELVETICA_LATIN1: [u16; 96] = [
    278, 333, 556, 556, 556, 556, 260, 556, 333, 737, 370, 556, 584, 333, 737, 333,
    400, 584, 333, 333, 333, 556, 537, 278, 333, 333, 365, 556, 834, 834, 834, 611,
    667, 667, 667, 667, 667, 667, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278,
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611,
    556, 556, 556, 556, 556, 556, 889, 500, 556, 556, 556, 556, 278, 278, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 584, 611, 556, 556, 556, 556, 500, 556, 500,
];

#[rustfmt::skip]
const HELVETICA_BOLD_LATIN1: [u16; 96] = [
    278, 333, 556, 556, 556, 556, 280, 556, 333, 737, 370, 556, 584, 333, 737, 333,
    400, 584, 333, 333, 333, 611, 556, 278, 333, 333, 365, 556, 834, 834, 834, 611,
    722, 722, 722, 722, 722, 722, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278,
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611,
    556, 556, 556, 556, 556, 556, 889, 556, 556, 556, 556, 556, 278, 278, 278, 278,
    611, 611, 611, 611, 611, 611, 611, 584, 611, 611, 611, 611, 611, 556, 611, 556,
];

/// WinAnsi codes 0x80..=0x9F: (character, code, regular width, bold width)
#[rustfmt::skip]
const WINANSI_EXTRA: [(char, u8, u16, u16); 27] = [
    ('\u{20AC}', 0x80, 556, 556),
    ('\u{201A}', 0x82, 222, 278),
    ('\u{0192}', 0x83, 556, 556),
    ('\u{201E}', 0x84, 333, 500),
    ('\u{2026}', 0x85, 1000, 1000),
    ('\u{2020}', 0x86, 556, 556),
    ('\u{2021}', 0x87, 556, 556),
    ('\u{02C6}', 0x88, 333, 333),
    ('\u{2030}', 0x89, 1000, 1000),
    ('\u{0160}', 0x8A, 667, 667),
    ('\u{2039}', 0x8B, 333, 333),
    ('\u{0152}', 0x8C, 1000, 1000),
    ('\u{017D}', 0x8E, 611, 611),
    ('\u{2018}', 0x91, 222, 278),
    ('\u{2019}', 0x92, 222, 278),
    ('\u{201C}', 0x93, 333, 500),
    ('\u{201D}', 0x94, 333, 500),
    ('\u{2022}', 0x95, 350, 350),
    ('\u{2013}', 0x96, 556, 556),
    ('\u{2014}', 0x97, 1000, 1000),
    ('\u{02DC}', 0x98, 333, 333),
    ('\u{2122}', 0x99, 1000, 1000),
    ('\u{0161}', 0x9A, 500, 556),
    ('\u{203A}', 0x9B, 333, 333),
    ('\u{0153}', 0x9C, 944, 944),
    ('\u{017E}', 0x9E, 500, 500),
    ('\u{0178}', 0x9F, 667, 667),
];

/// Map a character onto its WinAnsiEncoding code, if it has one
pub(crate) fn winansi(ch: char) -> Option<u8> {
    match ch as u32 {
        0x20..=0x7E | 0xA0..=0xFF => Some(ch as u8),
        _ => WINANSI_EXTRA
            .iter()
            .find(|&&(c, ..)| c == ch)
            .map(|&(_, code, ..)| code),
    }
}

impl StandardFont {
    /// The PostScript name readers use to find the face
    pub fn base_font(&self) -> &'static str {
        match self {
            StandardFont::Helvetica => "Helvetica",
            StandardFont::HelveticaBold => "Helvetica-Bold",
        }
    }

    /// Advance width of a WinAnsi code, in 1/1000 em. Codes with no glyph
    /// have no advance.
    pub(crate) fn width(&self, code: u8) -> u16 {
        let (ascii, latin1) = match self {
            StandardFont::Helvetica => (&HELVETICA_ASCII, &HELVETICA_LATIN1),
            StandardFont::HelveticaBold => (&HELVETICA_BOLD_ASCII, &HELVETICA_BOLD_LATIN1),
        };
        match code {
            0x20..=0x7E => ascii[(code - 0x20) as usize],
            0xA0..=0xFF => latin1[(code - 0xA0) as usize],
            _ => WINANSI_EXTRA
                .iter()
                .find(|&&(_, c, ..)| c == code)
                .map(|&(_, _, regular, bold)| match self {
                    StandardFont::Helvetica => regular,
                    StandardFont::HelveticaBold => bold,
                })
                .unwrap_or_default(),
        }
    }

    /// Ascender, in 1/1000 em
    pub(crate) fn ascender(&self) -> i16 {
        718
    }

    /// Descender, in 1/1000 em (negative)
    pub(crate) fn descender(&self) -> i16 {
        -207
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, font_index: usize, writer: &mut Pdf) {
        let id = refs.gen(RefType::Font(font_index));
        writer
            .type1_font(id)
            .base_font(Name(self.base_font().as_bytes()))
            .encoding_predefined(Name(b"WinAnsiEncoding"));
    }
}
