use super::chips::pack_chips;
use super::text::wrap;
use crate::canvas::{Canvas, Weight};
use crate::colour::{colours, Colour};
use crate::units::Pt;

/// The running vertical position of a top-down layout. It starts near the
/// top of the page and only ever moves down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cursor {
    y: Pt,
}

impl Cursor {
    pub fn new(y: Pt) -> Cursor {
        Cursor { y }
    }

    /// The current baseline
    pub fn y(&self) -> Pt {
        self.y
    }

    /// Move down the page by `by`. Negative distances are ignored.
    pub fn advance(&mut self, by: Pt) {
        self.y -= by.max(Pt(0.0));
    }
}

/// Size, weight and colour for a run of text
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub size: Pt,
    pub weight: Weight,
    pub colour: Colour,
}

impl TextStyle {
    pub const fn new(size: f32, weight: Weight, colour: Colour) -> TextStyle {
        TextStyle {
            size: Pt(size),
            weight,
            colour,
        }
    }
}

/// How a section header is drawn: a gap, the upper-cased title, a gap, a
/// rule across the content width, and a final gap before the section body
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionStyle {
    pub title: TextStyle,
    pub space_before: Pt,
    pub space_above_rule: Pt,
    pub space_after: Pt,
    pub rule_thickness: Pt,
    pub rule_colour: Colour,
}

impl Default for SectionStyle {
    fn default() -> Self {
        SectionStyle {
            title: TextStyle::new(9.0, Weight::Bold, colours::ACCENT),
            space_before: Pt(10.0),
            space_above_rule: Pt(6.0),
            space_after: Pt(14.0),
            rule_thickness: Pt(0.5),
            rule_colour: colours::RULE,
        }
    }
}

/// How tag chips are drawn. A chip is its text's width plus `padding` on
/// either side; its box sits `drop` below the baseline of its row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChipStyle {
    pub text: TextStyle,
    pub fill: Colour,
    pub padding: Pt,
    pub height: Pt,
    pub gap: Pt,
    pub drop: Pt,
    pub rise: Pt,
    pub row_advance: Pt,
}

impl Default for ChipStyle {
    fn default() -> Self {
        ChipStyle {
            text: TextStyle::new(9.0, Weight::Regular, colours::INK),
            fill: colours::RULE,
            padding: Pt(8.0),
            height: Pt(18.0),
            gap: Pt(8.0),
            drop: Pt(4.0),
            rise: Pt(2.0),
            row_advance: Pt(22.0),
        }
    }
}

/// A top-down writer over a canvas: draws between a left and a right edge
/// and carries the [Cursor] from one block to the next.
pub struct Flow<'c> {
    canvas: &'c mut Canvas,
    cursor: Cursor,
    left: Pt,
    right: Pt,
}

impl<'c> Flow<'c> {
    /// Start a flow with its first baseline at `top`, between `left` and `right`
    pub fn new(canvas: &'c mut Canvas, top: Pt, left: Pt, right: Pt) -> Flow<'c> {
        Flow {
            canvas,
            cursor: Cursor::new(top),
            left,
            right,
        }
    }

    pub fn y(&self) -> Pt {
        self.cursor.y()
    }

    pub fn content_width(&self) -> Pt {
        self.right - self.left
    }

    pub fn canvas(&mut self) -> &mut Canvas {
        &mut *self.canvas
    }

    pub fn skip(&mut self, by: Pt) {
        self.cursor.advance(by);
    }

    /// Draw text on the current baseline without moving down
    pub fn text_at(&mut self, text: &str, x: Pt, style: TextStyle) {
        let y = self.cursor.y();
        self.canvas
            .draw_text(text, x, y, style.size, style.weight, style.colour);
    }

    /// Draw text at the left edge, then move down by `advance`
    pub fn line(&mut self, text: &str, style: TextStyle, advance: Pt) {
        self.text_at(text, self.left, style);
        self.cursor.advance(advance);
    }

    /// A bold label at the left edge and its value at `value_x` on the same
    /// baseline, then move down by `advance`
    pub fn pair(
        &mut self,
        label: &str,
        value: &str,
        value_x: Pt,
        label_style: TextStyle,
        value_style: TextStyle,
        advance: Pt,
    ) {
        self.text_at(label, self.left, label_style);
        self.text_at(value, value_x, value_style);
        self.cursor.advance(advance);
    }

    /// Draw a section header
    pub fn section(&mut self, title: &str, style: &SectionStyle) {
        self.cursor.advance(style.space_before);
        self.text_at(&title.to_uppercase(), self.left, style.title);
        self.cursor.advance(style.space_above_rule);
        let y = self.cursor.y();
        self.canvas.draw_line(
            (self.left, y),
            (self.right, y),
            style.rule_thickness,
            style.rule_colour,
        );
        self.cursor.advance(style.space_after);
    }

    /// Wrap `text` to the content width and draw it line by line, moving down
    /// by the font size plus `leading` after each line. Returns the number of
    /// lines drawn.
    pub fn paragraph(&mut self, text: &str, style: TextStyle, leading: Pt) -> usize {
        let max_width = self.content_width();
        let lines: Vec<String> =
            wrap(text, max_width, self.canvas.font(style.weight), style.size).collect();
        for line in lines.iter() {
            self.line(line, style, style.size + leading);
        }
        lines.len()
    }

    /// Draw tags as filled chips, packed into rows across the content width.
    /// The cursor is left on the baseline of the last row. Returns the number
    /// of rows used.
    pub fn chips(&mut self, tags: &[&str], style: &ChipStyle) -> usize {
        let widths: Vec<Pt> = tags
            .iter()
            .map(|tag| {
                self.canvas
                    .measure_text_width(tag, style.text.weight, style.text.size)
                    + style.padding * 2.0
            })
            .collect();

        let slots = pack_chips(&widths, self.content_width(), style.gap);
        let mut row = 0;
        for ((tag, width), slot) in tags.iter().zip(widths).zip(slots.iter()) {
            if slot.row > row {
                self.cursor.advance(style.row_advance * (slot.row - row) as f32);
                row = slot.row;
            }
            let x = self.left + slot.x;
            let y = self.cursor.y();
            self.canvas
                .draw_rectangle(x, y - style.drop, width, style.height, style.fill);
            self.canvas.draw_text(
                tag,
                x + style.padding,
                y + style.rise,
                style.text.size,
                style.text.weight,
                style.text.colour,
            );
        }

        slots.last().map(|slot| slot.row + 1).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::FontPair;
    use crate::page::PageContents;

    const BODY: TextStyle = TextStyle::new(10.0, Weight::Regular, colours::INK);

    #[test]
    fn the_cursor_never_moves_up() {
        let mut cursor = Cursor::new(Pt(700.0));
        cursor.advance(Pt(14.0));
        cursor.advance(Pt(-30.0));
        assert_eq!(cursor.y(), Pt(686.0));
    }

    #[test]
    fn sections_draw_title_then_rule() {
        let mut canvas = Canvas::new(FontPair::helvetica());
        let mut flow = Flow::new(&mut canvas, Pt(702.0), Pt(40.0), Pt(555.0));
        flow.section("Professional Summary", &SectionStyle::default());
        assert_eq!(flow.y(), Pt(672.0));

        let contents = &canvas.page().contents;
        match (&contents[0], &contents[1]) {
            (PageContents::Text(title), PageContents::Line(rule)) => {
                assert_eq!(title.text, "PROFESSIONAL SUMMARY");
                assert_eq!(title.coords, (Pt(40.0), Pt(692.0)));
                assert_eq!(rule.from, (Pt(40.0), Pt(686.0)));
                assert_eq!(rule.to, (Pt(555.0), Pt(686.0)));
            }
            other => panic!("unexpected contents {other:?}"),
        }
    }

    #[test]
    fn paragraphs_advance_once_per_line() {
        let mut canvas = Canvas::new(FontPair::helvetica());
        let mut flow = Flow::new(&mut canvas, Pt(600.0), Pt(40.0), Pt(140.0));
        let lines = flow.paragraph(&lipsum::lipsum(40), BODY, Pt(4.0));
        assert!(lines > 1);
        assert_eq!(flow.y(), Pt(600.0) - Pt(14.0) * lines as f32);
        assert_eq!(canvas.page().spans().count(), lines);
    }

    #[test]
    fn chips_wrap_onto_new_rows() {
        let mut canvas = Canvas::new(FontPair::helvetica());
        let mut flow = Flow::new(&mut canvas, Pt(300.0), Pt(40.0), Pt(140.0));
        let rows = flow.chips(&["Rust", "TypeScript", "PostgreSQL", "Go"], &ChipStyle::default());
        assert!(rows >= 2);
        assert_eq!(flow.y(), Pt(300.0) - Pt(22.0) * (rows - 1) as f32);

        let fills: Vec<_> = canvas
            .page()
            .contents
            .iter()
            .filter_map(|c| match c {
                PageContents::Fill(fill) => Some(fill.rect),
                _ => None,
            })
            .collect();
        assert_eq!(fills.len(), 4);
        assert_eq!(fills[0].x1, Pt(40.0));
        assert_eq!(fills[0].y1, Pt(296.0));
        assert_eq!(fills[0].height(), Pt(18.0));
        assert!(fills.iter().all(|r| r.x1 >= Pt(40.0)));
    }

    #[test]
    fn no_chips_use_no_rows() {
        let mut canvas = Canvas::new(FontPair::helvetica());
        let mut flow = Flow::new(&mut canvas, Pt(300.0), Pt(40.0), Pt(555.0));
        assert_eq!(flow.chips(&[], &ChipStyle::default()), 0);
        assert_eq!(flow.y(), Pt(300.0));
    }
}
