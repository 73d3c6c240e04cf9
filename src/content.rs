//! Content stream rendering for a page.

use crate::colour::Colour;
use crate::font::Font;
use crate::page::{FillLayout, LineLayout, PageContents, SpanFont, SpanLayout};
use id_arena::Arena;
use std::collections::BTreeMap;
use std::io::Write;

/// Glyph codes drawn with each font (keyed by font index), with the
/// character each one stands for
pub(crate) type UsedCodes = BTreeMap<usize, BTreeMap<u16, char>>;

/// Renders page contents to a PDF content stream, collecting the codes used
/// per font along the way so the font dictionaries can describe them.
#[allow(clippy::write_with_newline)]
pub(crate) fn render_contents(
    contents: &[PageContents],
    fonts: &Arena<Font>,
    used: &mut UsedCodes,
) -> Result<Vec<u8>, std::io::Error> {
    let mut content: Vec<u8> = Vec::default();

    for page_content in contents.iter() {
        match page_content {
            PageContents::Text(span) => render_span(&mut content, span, fonts, used)?,
            PageContents::Fill(FillLayout { rect, colour }) => {
                write!(&mut content, "q\n")?;
                write_fill_colour(&mut content, *colour)?;
                write!(
                    &mut content,
                    "{} {} {} {} re f\n",
                    rect.x1,
                    rect.y1,
                    rect.width(),
                    rect.height()
                )?;
                write!(&mut content, "Q\n")?;
            }
            PageContents::Line(LineLayout {
                from,
                to,
                thickness,
                colour,
            }) => {
                write!(&mut content, "q\n")?;
                write_stroke_colour(&mut content, *colour)?;
                write!(&mut content, "{thickness} w\n")?;
                write!(&mut content, "{} {} m {} {} l S\n", from.0, from.1, to.0, to.1)?;
                write!(&mut content, "Q\n")?;
            }
        }
    }

    Ok(content)
}

#[allow(clippy::write_with_newline)]
fn render_span(
    content: &mut Vec<u8>,
    span: &SpanLayout,
    fonts: &Arena<Font>,
    used: &mut UsedCodes,
) -> Result<(), std::io::Error> {
    if span.text.is_empty() {
        return Ok(());
    }

    let SpanFont { id, size } = span.font;
    let font = &fonts[id];
    let codes = font.encode(&span.text);

    write!(content, "q\n")?;
    write_fill_colour(content, span.colour)?;
    write!(content, "BT\n")?;
    write!(content, "/F{} {} Tf\n", id.index(), size)?;
    write!(content, "{} {} Td\n", span.coords.0, span.coords.1)?;
    write!(content, "<")?;
    let font_used = used.entry(id.index()).or_default();
    for code in codes {
        if font.is_two_byte() {
            write!(content, "{:04x}", code.value)?;
        } else {
            write!(content, "{:02x}", code.value)?;
        }
        font_used.insert(code.value, code.ch);
    }
    write!(content, "> Tj\n")?;
    write!(content, "ET\n")?;
    write!(content, "Q\n")?;
    Ok(())
}

#[allow(clippy::write_with_newline)]
fn write_fill_colour(content: &mut Vec<u8>, colour: Colour) -> Result<(), std::io::Error> {
    match colour {
        Colour::RGB { r, g, b } => write!(content, "{r} {g} {b} rg\n"),
        Colour::Grey { g } => write!(content, "{g} g\n"),
    }
}

#[allow(clippy::write_with_newline)]
fn write_stroke_colour(content: &mut Vec<u8>, colour: Colour) -> Result<(), std::io::Error> {
    match colour {
        Colour::RGB { r, g, b } => write!(content, "{r} {g} {b} RG\n"),
        Colour::Grey { g } => write!(content, "{g} G\n"),
    }
}
