use super::flow::TextStyle;
use crate::canvas::Canvas;
use crate::colour::Colour;
use crate::units::Pt;

/// Fill a full-width band of `height` along the top edge of the page
pub fn header_band(canvas: &mut Canvas, height: Pt, colour: Colour) {
    let (width, top) = (canvas.width(), canvas.height());
    canvas.draw_rectangle(Pt(0.0), top - height, width, height, colour);
}

/// Draw `text` so that it ends at `right`. Returns the x it starts at.
pub fn right_aligned(canvas: &mut Canvas, text: &str, right: Pt, y: Pt, style: TextStyle) -> Pt {
    let x = right - canvas.measure_text_width(text, style.weight, style.size);
    canvas.draw_text(text, x, y, style.size, style.weight, style.colour);
    x
}

/// Draw lines of text at `x`, one under the other. Each entry gives its text,
/// its style, and how far below the previous baseline it sits; the first is
/// measured from `y`. Returns the last baseline.
pub fn stacked(canvas: &mut Canvas, x: Pt, y: Pt, lines: &[(&str, TextStyle, Pt)]) -> Pt {
    lines.iter().fold(y, |y, &(text, style, drop)| {
        let y = y - drop;
        canvas.draw_text(text, x, y, style.size, style.weight, style.colour);
        y
    })
}

/// Draw texts side by side on one baseline, each at its own x
pub fn columns(canvas: &mut Canvas, y: Pt, cells: &[(&str, Pt)], style: TextStyle) {
    for &(text, x) in cells {
        canvas.draw_text(text, x, y, style.size, style.weight, style.colour);
    }
}

/// A mark drawn between neighbouring items of a [separated_row], `inset` to
/// the left of the item that follows it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Separator<'s> {
    pub mark: &'s str,
    pub inset: Pt,
    pub colour: Colour,
}

/// Draw items left to right on one baseline starting at `x`, `spacing` apart,
/// with `separator` between neighbours. Empty items are skipped. Returns the x
/// following the last item.
pub fn separated_row(
    canvas: &mut Canvas,
    items: &[&str],
    x: Pt,
    y: Pt,
    style: TextStyle,
    spacing: Pt,
    separator: Separator,
) -> Pt {
    let mut x = x;
    let mut first = true;
    for item in items.iter().filter(|s| !s.is_empty()) {
        if !first {
            canvas.draw_text(
                separator.mark,
                x - separator.inset,
                y,
                style.size,
                style.weight,
                separator.colour,
            );
        }
        canvas.draw_text(item, x, y, style.size, style.weight, style.colour);
        x += canvas.measure_text_width(item, style.weight, style.size) + spacing;
        first = false;
    }
    x
}
