use super::{build, margins, right_edge, BODY, CAPTION};
use crate::canvas::{Canvas, Weight};
use crate::colour::colours;
use crate::config::GeneratorConfig;
use crate::layout::{columns, header_band, right_aligned, stacked, TextStyle};
use crate::record::{format::money, InvoiceParty, InvoiceRecord};
use crate::units::Pt;
use crate::PDFError;

const BAND_HEIGHT: Pt = Pt(100.0);
const TITLE: TextStyle = TextStyle::new(11.0, Weight::Regular, colours::ON_ACCENT_MUTED);
const ON_BAND: TextStyle = TextStyle::new(10.0, Weight::Regular, colours::WHITE);
const LABEL: TextStyle = TextStyle::new(9.0, Weight::Bold, colours::ACCENT);
const NAME: TextStyle = TextStyle::new(11.0, Weight::Bold, colours::INK);
const TABLE_HEADER: TextStyle = TextStyle::new(9.0, Weight::Bold, colours::INK);
const TOTAL_LABEL: TextStyle = TextStyle::new(9.0, Weight::Bold, colours::WHITE);
const TOTAL: TextStyle = TextStyle::new(13.0, Weight::Bold, colours::WHITE);

/// Baselines down the right of the header band: issue date, due date, number
const HEADER_LINES: [Pt; 3] = [Pt(797.0), Pt(780.0), Pt(763.0)];
/// Left edges of the sender and client blocks
const FROM_X: Pt = Pt(40.0);
const TO_X: Pt = Pt(300.0);
const PARTY_TOP: Pt = Pt(712.0);

const TABLE_TOP: Pt = Pt(612.0);
const TABLE_ROW_HEIGHT: Pt = Pt(28.0);
/// Text sits this far above the bottom of its row
const CELL_RISE: Pt = Pt(9.0);
const QUANTITY_X: Pt = Pt(340.0);
const PRICE_X: Pt = Pt(400.0);
const TOTAL_X: Pt = Pt(470.0);

const TOTAL_BOX: (Pt, Pt, Pt, Pt) = (Pt(380.0), Pt(534.0), Pt(175.0), Pt(36.0));
const TOTAL_INSET: Pt = Pt(12.0);

/// Draw an invoice for a single line item
pub fn render_invoice(canvas: &mut Canvas, invoice: &InvoiceRecord, config: &GeneratorConfig) {
    log::debug!("rendering invoice {}", invoice.invoice_number);
    let margins = margins();
    let right = right_edge(canvas);
    let currency = config.invoice_currency.as_str();

    header_band(canvas, BAND_HEIGHT, colours::ACCENT);
    canvas.draw_text("INVOICE", margins.left, Pt(764.0), TITLE.size, TITLE.weight, TITLE.colour);
    let header_lines = [
        format!("Issue Date: {}", invoice.issue_date),
        format!("Due Date: {}", invoice.due_date),
        format!("Invoice No: {}", invoice.invoice_number),
    ];
    for (line, y) in header_lines.iter().zip(HEADER_LINES) {
        right_aligned(canvas, line, right, y, ON_BAND);
    }

    party(canvas, FROM_X, "FROM", &invoice.sender);
    party(canvas, TO_X, "BILL TO", &invoice.client);

    // table header
    let table_width = margins.content_width(canvas.width());
    canvas.draw_rectangle(margins.left, TABLE_TOP, table_width, TABLE_ROW_HEIGHT, colours::RULE);
    columns(
        canvas,
        TABLE_TOP + CELL_RISE,
        &[
            ("DESCRIPTION", margins.left + Pt(5.0)),
            ("QUANTITY", QUANTITY_X),
            ("PRICE", PRICE_X),
            ("TOTAL", TOTAL_X),
        ],
        TABLE_HEADER,
    );

    // the single line item
    let row = TABLE_TOP - TABLE_ROW_HEIGHT;
    let item = &invoice.item;
    let total = money(currency, invoice.total());
    columns(
        canvas,
        row + CELL_RISE,
        &[
            (item.description.as_str(), margins.left + Pt(12.0)),
            (item.quantity.to_string().as_str(), QUANTITY_X),
            (money(currency, item.rate).as_str(), PRICE_X),
            (total.as_str(), TOTAL_X),
        ],
        BODY,
    );
    canvas.draw_line(
        (margins.left, row - Pt(5.0)),
        (right, row - Pt(5.0)),
        Pt(0.5),
        colours::RULE,
    );

    let (x, y, width, height) = TOTAL_BOX;
    canvas.draw_rectangle(x, y, width, height, colours::ACCENT);
    stacked(
        canvas,
        x + TOTAL_INSET,
        y + Pt(22.0),
        &[("GRAND TOTAL", TOTAL_LABEL, Pt(0.0)), (total.as_str(), TOTAL, Pt(14.0))],
    );

    canvas.draw_text(
        "Thank you for your business!",
        margins.left,
        margins.bottom,
        CAPTION.size,
        CAPTION.weight,
        CAPTION.colour,
    );
}

fn party(canvas: &mut Canvas, x: Pt, label: &str, party: &InvoiceParty) {
    stacked(
        canvas,
        x,
        PARTY_TOP,
        &[
            (label, LABEL, Pt(0.0)),
            (party.name.as_str(), NAME, Pt(18.0)),
            (party.email.as_str(), CAPTION, Pt(15.0)),
            (party.address.as_str(), CAPTION, Pt(15.0)),
        ],
    );
}

pub fn generate_invoice(invoice: &InvoiceRecord, config: &GeneratorConfig) -> Result<Vec<u8>, PDFError> {
    build(config, format!("Invoice {}", invoice.invoice_number), "Invoice", |canvas| {
        render_invoice(canvas, invoice, config)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::FontPair;
    use crate::generate::fixtures;
    use crate::page::PageContents;
    use pretty_assertions::assert_eq;

    fn rendered(invoice: &InvoiceRecord) -> Canvas {
        let mut canvas = Canvas::new(FontPair::helvetica());
        render_invoice(&mut canvas, invoice, &GeneratorConfig::default());
        canvas
    }

    fn span_at(canvas: &Canvas, text: &str) -> (Pt, Pt) {
        canvas
            .page()
            .spans()
            .find(|s| s.text == text)
            .map(|s| s.coords)
            .unwrap_or_else(|| panic!("no span {text:?}"))
    }

    #[test]
    fn totals_are_quantity_times_rate() {
        let canvas = rendered(&fixtures::invoice());
        let totals: Vec<(Pt, Pt)> = canvas
            .page()
            .spans()
            .filter(|s| s.text == "$37.50")
            .map(|s| s.coords)
            .collect();
        assert_eq!(totals, vec![(Pt(470.0), Pt(593.0)), (Pt(392.0), Pt(542.0))]);
        assert_eq!(span_at(&canvas, "$12.50"), (Pt(400.0), Pt(593.0)));
        assert_eq!(span_at(&canvas, "3"), (Pt(340.0), Pt(593.0)));
    }

    #[test]
    fn parties_sit_side_by_side() {
        let canvas = rendered(&fixtures::invoice());
        assert_eq!(span_at(&canvas, "FROM"), (Pt(40.0), Pt(712.0)));
        assert_eq!(span_at(&canvas, "Studio Nine"), (Pt(40.0), Pt(694.0)));
        assert_eq!(span_at(&canvas, "hello@studionine.io"), (Pt(40.0), Pt(679.0)));
        assert_eq!(span_at(&canvas, "9 Canal St, Leeds"), (Pt(40.0), Pt(664.0)));
        assert_eq!(span_at(&canvas, "BILL TO"), (Pt(300.0), Pt(712.0)));
        assert_eq!(span_at(&canvas, "1 Road Runner Way"), (Pt(300.0), Pt(664.0)));
    }

    #[test]
    fn header_dates_and_invoice_number_end_at_the_right_margin() {
        let canvas = rendered(&fixtures::invoice());
        for (text, y) in [
            ("Issue Date: 2024-01-01", 797.0),
            ("Due Date: 2024-01-31", 780.0),
            ("Invoice No: INV-001", 763.0),
        ] {
            let (x, baseline) = span_at(&canvas, text);
            let end = x + canvas.measure_text_width(text, Weight::Regular, Pt(10.0));
            assert_eq!(baseline, Pt(y));
            assert!((end.0 - 555.0).abs() < 1e-3, "{text} ends at {end}");
        }
    }

    #[test]
    fn fixed_boxes_are_where_they_belong() {
        let canvas = rendered(&fixtures::invoice());
        let fills: Vec<_> = canvas
            .page()
            .contents
            .iter()
            .filter_map(|c| match c {
                PageContents::Fill(fill) => Some((fill.rect.x1, fill.rect.y1, fill.rect.width(), fill.rect.height())),
                _ => None,
            })
            .collect();
        assert_eq!(
            fills,
            vec![
                (Pt(0.0), Pt(742.0), Pt(595.0), Pt(100.0)),
                (Pt(40.0), Pt(612.0), Pt(515.0), Pt(28.0)),
                (Pt(380.0), Pt(534.0), Pt(175.0), Pt(36.0)),
            ]
        );
        assert_eq!(span_at(&canvas, "GRAND TOTAL"), (Pt(392.0), Pt(556.0)));
        assert_eq!(span_at(&canvas, "Thank you for your business!"), (Pt(40.0), Pt(40.0)));
    }

    #[test]
    fn currency_comes_from_config() {
        let mut canvas = Canvas::new(FontPair::helvetica());
        let config = GeneratorConfig {
            invoice_currency: "€".into(),
            ..GeneratorConfig::default()
        };
        render_invoice(&mut canvas, &fixtures::invoice(), &config);
        span_at(&canvas, "€37.50");
    }
}
