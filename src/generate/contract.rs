use super::{build, margins, right_edge, BODY, CAPTION};
use crate::canvas::{Canvas, Weight};
use crate::colour::colours;
use crate::config::GeneratorConfig;
use crate::layout::{Flow, SectionStyle, TextStyle};
use crate::record::{format::money, ContractRecord};
use crate::units::Pt;
use crate::PDFError;

const TITLE: TextStyle = TextStyle::new(22.0, Weight::Bold, colours::INK);
const PROJECT_TITLE: TextStyle = TextStyle::new(11.0, Weight::Bold, colours::INK);
const LABEL: TextStyle = TextStyle::new(10.0, Weight::Bold, colours::INK);
const SIGNATORY: TextStyle = TextStyle::new(9.0, Weight::Regular, colours::MUTED);
const ROLE: TextStyle = TextStyle::new(8.0, Weight::Bold, colours::MUTED);

const TOP: Pt = Pt(782.0);
const LEADING: Pt = Pt(5.0);
const PAIR_ADVANCE: Pt = Pt(16.0);
const PARTIES_HEIGHT: Pt = Pt(65.0);
const PARTIES_INSET: Pt = Pt(12.0);
/// Where the client's signature block starts
const SECOND_COLUMN: Pt = Pt(320.0);
const SIGNATURE_WIDTH: Pt = Pt(180.0);

/// The closing legal clause
pub fn legal_clause(governing_law: &str) -> String {
    format!(
        "This agreement shall be governed by the laws of {governing_law}. \
         Both parties agree to the terms outlined in this document."
    )
}

/// Draw a one-page service agreement between a provider and a client
pub fn render_contract(canvas: &mut Canvas, contract: &ContractRecord, config: &GeneratorConfig) {
    log::debug!("rendering contract {}", contract.project.title);
    let margins = margins();
    let right = right_edge(canvas);
    let section = SectionStyle::default();
    let mut flow = Flow::new(canvas, TOP, margins.left, right);

    flow.line("SERVICE AGREEMENT", TITLE, Pt(30.0));
    flow.line("This agreement is entered into between:", CAPTION, Pt(20.0));

    // parties box
    let top = flow.y();
    let width = flow.content_width();
    let inner = margins.left + PARTIES_INSET;
    let (provider, client) = (&contract.provider, &contract.client);
    let canvas = flow.canvas();
    canvas.draw_rectangle(margins.left, top - Pt(50.0), width, PARTIES_HEIGHT, colours::RULE);
    canvas.draw_text(
        &format!("Provider: {} ({})", provider.name, provider.email),
        inner,
        top - Pt(10.0),
        BODY.size,
        BODY.weight,
        BODY.colour,
    );
    canvas.draw_text(
        &format!("Client:     {} ({})", client.name, client.email),
        inner,
        top - Pt(28.0),
        BODY.size,
        BODY.weight,
        BODY.colour,
    );
    flow.skip(Pt(70.0));

    flow.section("Scope of Work", &section);
    flow.line(&contract.project.title, PROJECT_TITLE, Pt(16.0));
    let scope_lines = flow.paragraph(&contract.project.description, BODY, LEADING);

    flow.section("Timeline", &section);
    let date_x = margins.left + Pt(70.0);
    flow.pair("Start Date:", &contract.timeline.start_date, date_x, LABEL, BODY, PAIR_ADVANCE);
    flow.pair("End Date:", &contract.timeline.end_date, date_x, LABEL, BODY, PAIR_ADVANCE);

    flow.section("Payment", &section);
    let amount_x = margins.left + Pt(90.0);
    let total = money(&config.contract_currency, contract.payment.total_amount);
    flow.pair("Total Amount:", &total, amount_x, LABEL, BODY, PAIR_ADVANCE);
    flow.pair("Payment Terms:", &contract.payment.terms, amount_x, LABEL, BODY, PAIR_ADVANCE);

    flow.section("Legal", &section);
    flow.paragraph(&legal_clause(&contract.governing_law), BODY, LEADING);

    flow.section("Signatures", &section);
    flow.skip(Pt(10.0));
    let y = flow.y();
    for x in [margins.left, SECOND_COLUMN] {
        flow.canvas()
            .draw_line((x, y), (x + SIGNATURE_WIDTH, y), Pt(0.5), colours::INK);
    }
    flow.skip(Pt(14.0));
    flow.text_at(&provider.name, margins.left, SIGNATORY);
    flow.text_at(&client.name, SECOND_COLUMN, SIGNATORY);
    flow.skip(Pt(12.0));
    flow.text_at("Provider", margins.left, ROLE);
    flow.text_at("Client", SECOND_COLUMN, ROLE);

    log::debug!("contract scope laid out in {scope_lines} lines, ending at y {}", flow.y());
}

pub fn generate_contract(contract: &ContractRecord, config: &GeneratorConfig) -> Result<Vec<u8>, PDFError> {
    build(config, contract.project.title.clone(), "Contract", |canvas| {
        render_contract(canvas, contract, config)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::FontPair;
    use crate::generate::fixtures;
    use crate::page::PageContents;
    use pretty_assertions::assert_eq;

    fn rendered(contract: &ContractRecord) -> Canvas {
        let mut canvas = Canvas::new(FontPair::helvetica());
        render_contract(&mut canvas, contract, &GeneratorConfig::default());
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
    fn opening_is_fixed() {
        let canvas = rendered(&fixtures::contract());
        assert_eq!(span_at(&canvas, "SERVICE AGREEMENT"), (Pt(40.0), Pt(782.0)));
        assert_eq!(
            span_at(&canvas, "This agreement is entered into between:"),
            (Pt(40.0), Pt(752.0))
        );
        assert_eq!(
            span_at(&canvas, "Provider: Ada Lovelace (ada@example.com)"),
            (Pt(52.0), Pt(722.0))
        );
        assert_eq!(
            span_at(&canvas, "Client:     Charles Babbage (charles@example.com)"),
            (Pt(52.0), Pt(704.0))
        );
        match &canvas.page().contents[2] {
            PageContents::Fill(fill) => {
                assert_eq!(fill.rect.y1, Pt(682.0));
                assert_eq!(fill.rect.width(), Pt(515.0));
                assert_eq!(fill.rect.height(), Pt(65.0));
            }
            other => panic!("expected the parties box, got {other:?}"),
        }
        assert_eq!(span_at(&canvas, "SCOPE OF WORK").1, Pt(652.0));
    }

    #[test]
    fn amounts_use_pounds_by_default() {
        let canvas = rendered(&fixtures::contract());
        let (x, y) = span_at(&canvas, "£4200.00");
        assert_eq!(x, Pt(130.0));
        assert_eq!(span_at(&canvas, "Total Amount:"), (Pt(40.0), y));
        assert_eq!(span_at(&canvas, "1842-10-01").0, Pt(110.0));
    }

    #[test]
    fn legal_clause_names_the_law() {
        assert_eq!(
            legal_clause("Scotland"),
            "This agreement shall be governed by the laws of Scotland. \
             Both parties agree to the terms outlined in this document."
        );
    }

    #[test]
    fn signatures_close_the_page() {
        let canvas = rendered(&fixtures::contract());
        let (_, name_y) = span_at(&canvas, "Ada Lovelace");
        assert_eq!(span_at(&canvas, "Charles Babbage"), (Pt(320.0), name_y));
        assert_eq!(span_at(&canvas, "Provider"), (Pt(40.0), name_y - Pt(12.0)));
        assert_eq!(span_at(&canvas, "Client"), (Pt(320.0), name_y - Pt(12.0)));

        let rules: Vec<_> = canvas
            .page()
            .contents
            .iter()
            .filter_map(|c| match c {
                PageContents::Line(line) if line.colour == colours::INK => Some((line.from, line.to)),
                _ => None,
            })
            .collect();
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].0 .0, Pt(40.0));
        assert_eq!(rules[0].1 .0, Pt(220.0));
        assert_eq!(rules[1].0 .0, Pt(320.0));
        assert_eq!(rules[1].1 .0, Pt(500.0));
        assert_eq!(rules[0].0 .1, name_y + Pt(14.0));
    }
}
