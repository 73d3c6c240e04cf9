use crate::colour::Colour;
use crate::font::Font;
use crate::rect::Rect;
use crate::units::Pt;
use id_arena::Id;

/// ISO A4 in points, rounded the way most PDF producers round it
pub const A4: (Pt, Pt) = (Pt(595.0), Pt(842.0));

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct SpanFont {
    pub id: Id<Font>,
    pub size: Pt,
}

/// A run of text with its baseline starting at `coords`
#[derive(Clone, PartialEq, Debug)]
pub struct SpanLayout {
    pub text: String,
    pub font: SpanFont,
    pub colour: Colour,
    pub coords: (Pt, Pt),
}

/// A filled, axis-aligned rectangle without a stroke
#[derive(Clone, PartialEq, Debug)]
pub struct FillLayout {
    pub rect: Rect,
    pub colour: Colour,
}

/// A straight line segment
#[derive(Clone, PartialEq, Debug)]
pub struct LineLayout {
    pub from: (Pt, Pt),
    pub to: (Pt, Pt),
    pub thickness: Pt,
    pub colour: Colour,
}

#[derive(Clone, PartialEq, Debug)]
pub enum PageContents {
    Text(SpanLayout),
    Fill(FillLayout),
    Line(LineLayout),
}

/// A single page: its size and everything drawn on it, in painting order
pub struct Page {
    /// The size of the page
    pub media_box: Rect,
    /// The laid out text and graphics
    pub contents: Vec<PageContents>,
}

impl Page {
    pub fn new(size: (Pt, Pt)) -> Page {
        Page {
            media_box: Rect {
                x1: Pt(0.0),
                y1: Pt(0.0),
                x2: size.0,
                y2: size.1,
            },
            contents: Vec::default(),
        }
    }

    pub fn width(&self) -> Pt {
        self.media_box.width()
    }

    pub fn height(&self) -> Pt {
        self.media_box.height()
    }

    pub fn add_span(&mut self, span: SpanLayout) {
        self.contents.push(PageContents::Text(span));
    }

    pub fn add_fill(&mut self, fill: FillLayout) {
        self.contents.push(PageContents::Fill(fill));
    }

    pub fn add_line(&mut self, line: LineLayout) {
        self.contents.push(PageContents::Line(line));
    }

    /// Every text span on the page, in drawing order
    pub fn spans(&self) -> impl Iterator<Item = &SpanLayout> {
        self.contents.iter().filter_map(|c| match c {
            PageContents::Text(span) => Some(span),
            _ => None,
        })
    }
}
