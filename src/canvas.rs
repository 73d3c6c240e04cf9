//! The drawing surface every document template paints on.

use crate::{
    colour::Colour,
    document::Document,
    font::{Font, StandardFont},
    info::Info,
    page::{FillLayout, LineLayout, Page, SpanFont, SpanLayout, A4},
    rect::Rect,
    units::Pt,
    PDFError,
};
use id_arena::Id;
use std::path::Path;

/// Which of the canvas' two fonts to draw with
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Weight {
    Regular,
    Bold,
}

/// The regular and bold faces a canvas draws with
pub struct FontPair {
    pub regular: Font,
    pub bold: Font,
}

impl FontPair {
    /// Standard Helvetica and Helvetica-Bold. Nothing is embedded.
    pub fn helvetica() -> FontPair {
        FontPair {
            regular: Font::standard(StandardFont::Helvetica),
            bold: Font::standard(StandardFont::HelveticaBold),
        }
    }

    /// Load a regular and a bold TrueType / OpenType face from disk
    pub fn load<P: AsRef<Path>>(regular: P, bold: P) -> Result<FontPair, PDFError> {
        Ok(FontPair {
            regular: Font::load(std::fs::read(regular)?)?,
            bold: Font::load(std::fs::read(bold)?)?,
        })
    }
}

impl Default for FontPair {
    fn default() -> Self {
        FontPair::helvetica()
    }
}

/// A single A4 page with a regular and a bold font.
///
/// Coordinates are in points from the bottom-left corner. Text is placed with
/// its baseline at the given position and is never wrapped or clipped; use
/// [crate::layout::wrap] first. A canvas is consumed by [Canvas::serialize].
pub struct Canvas {
    document: Document,
    regular: Id<Font>,
    bold: Id<Font>,
}

impl Canvas {
    pub fn new(fonts: FontPair) -> Canvas {
        let mut document = Document::new(Page::new(A4));
        let regular = document.add_font(fonts.regular);
        let bold = document.add_font(fonts.bold);
        Canvas {
            document,
            regular,
            bold,
        }
    }

    pub fn width(&self) -> Pt {
        self.document.page.width()
    }

    pub fn height(&self) -> Pt {
        self.document.page.height()
    }

    pub fn set_info(&mut self, info: Info) {
        self.document.set_info(info);
    }

    fn font_id(&self, weight: Weight) -> Id<Font> {
        match weight {
            Weight::Regular => self.regular,
            Weight::Bold => self.bold,
        }
    }

    pub fn font(&self, weight: Weight) -> &Font {
        &self.document.fonts[self.font_id(weight)]
    }

    /// Everything drawn so far
    pub fn page(&self) -> &Page {
        &self.document.page
    }

    pub fn draw_text(&mut self, text: &str, x: Pt, y: Pt, size: Pt, weight: Weight, colour: Colour) {
        let id = self.font_id(weight);
        self.document.page.add_span(SpanLayout {
            text: text.to_string(),
            font: SpanFont { id, size },
            colour,
            coords: (x, y),
        });
    }

    pub fn draw_rectangle(&mut self, x: Pt, y: Pt, width: Pt, height: Pt, colour: Colour) {
        self.document.page.add_fill(FillLayout {
            rect: Rect::from_origin(x, y, width, height),
            colour,
        });
    }

    pub fn draw_line(&mut self, from: (Pt, Pt), to: (Pt, Pt), thickness: Pt, colour: Colour) {
        self.document.page.add_line(LineLayout {
            from,
            to,
            thickness,
            colour,
        });
    }

    /// Width of `text` exactly as [Canvas::draw_text] would draw it
    pub fn measure_text_width(&self, text: &str, weight: Weight, size: Pt) -> Pt {
        self.font(weight).width_of_text(text, size)
    }

    /// Finish the page and write out the complete PDF
    pub fn serialize(self) -> Result<Vec<u8>, PDFError> {
        let mut bytes = Vec::new();
        self.document.write(&mut bytes)?;
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colour::colours;
    use crate::page::PageContents;

    #[test]
    fn canvas_is_a4() {
        let canvas = Canvas::new(FontPair::helvetica());
        assert_eq!(canvas.width(), Pt(595.0));
        assert_eq!(canvas.height(), Pt(842.0));
    }

    #[test]
    fn drawing_records_contents_in_order() {
        let mut canvas = Canvas::new(FontPair::helvetica());
        canvas.draw_rectangle(Pt(0.0), Pt(742.0), Pt(595.0), Pt(100.0), colours::ACCENT);
        canvas.draw_text("INVOICE", Pt(40.0), Pt(764.0), Pt(11.0), Weight::Bold, colours::WHITE);
        canvas.draw_line((Pt(40.0), Pt(579.0)), (Pt(555.0), Pt(579.0)), Pt(0.5), colours::RULE);

        let contents = &canvas.page().contents;
        assert_eq!(contents.len(), 3);
        assert!(matches!(contents[0], PageContents::Fill(_)));
        assert!(matches!(contents[2], PageContents::Line(_)));
        let span = canvas.page().spans().next().expect("one span");
        assert_eq!(span.text, "INVOICE");
        assert_eq!(span.font.id, canvas.font_id(Weight::Bold));
    }

    #[test]
    fn measuring_uses_the_chosen_weight() {
        let canvas = Canvas::new(FontPair::helvetica());
        let regular = canvas.measure_text_width("Total", Weight::Regular, Pt(10.0));
        let bold = canvas.measure_text_width("Total", Weight::Bold, Pt(10.0));
        assert!(bold > regular);
    }

    #[test]
    fn serialized_canvas_is_a_pdf() {
        let mut canvas = Canvas::new(FontPair::helvetica());
        canvas.draw_text("Hello", Pt(40.0), Pt(800.0), Pt(12.0), Weight::Regular, colours::INK);
        let bytes = canvas.serialize().expect("can serialize");
        assert!(bytes.starts_with(b"%PDF-"));
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("/MediaBox [0 0 595 842]"));
        assert!(text.contains("/BaseFont /Helvetica-Bold"));
        assert!(text.contains("/Encoding /WinAnsiEncoding"));
    }

    #[test]
    fn missing_font_files_fail_construction() {
        let result = FontPair::load("/nonexistent/regular.ttf", "/nonexistent/bold.ttf");
        assert!(matches!(result, Err(PDFError::Io(_))));
    }
}
