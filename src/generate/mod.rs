//! Turns records into finished one-page PDFs.
//!
//! Each template has a `render_*` function that draws a record onto a
//! [Canvas] and a `generate_*` function that builds the canvas, renders, and
//! serializes it. [generate] dispatches on the kind of record. Records are
//! expected to have passed [Validate](crate::Validate) already.

mod contract;
mod cv;
mod invoice;

pub use contract::*;
pub use cv::*;
pub use invoice::*;

use crate::canvas::{Canvas, Weight};
use crate::colour::colours;
use crate::config::GeneratorConfig;
use crate::info::Info;
use crate::layout::{Margins, TextStyle};
use crate::record::DocumentRecord;
use crate::units::Pt;
use crate::PDFError;

/// Body text used by every template
pub(crate) const BODY: TextStyle = TextStyle::new(10.0, Weight::Regular, colours::INK);
/// Secondary text
pub(crate) const CAPTION: TextStyle = TextStyle::new(10.0, Weight::Regular, colours::MUTED);

pub(crate) fn margins() -> Margins {
    Margins::all(Pt(40.0))
}

/// The right edge of the content area
pub(crate) fn right_edge(canvas: &Canvas) -> Pt {
    canvas.width() - margins().right
}

/// Generate any kind of document
pub fn generate(record: &DocumentRecord, config: &GeneratorConfig) -> Result<Vec<u8>, PDFError> {
    match record {
        DocumentRecord::Invoice(invoice) => generate_invoice(invoice, config),
        DocumentRecord::Cv(cv) => generate_cv(cv, config),
        DocumentRecord::Contract(contract) => generate_contract(contract, config),
    }
}

/// Build a canvas with the configured fonts, draw on it, and serialize it
pub(crate) fn build<F>(config: &GeneratorConfig, title: String, subject: &str, render: F) -> Result<Vec<u8>, PDFError>
where
    F: FnOnce(&mut Canvas),
{
    let mut canvas = Canvas::new(config.fonts.load()?);

    let mut info = Info::new();
    info.title(title).subject(subject);
    if let Some(author) = &config.author {
        info.author(author);
    }
    canvas.set_info(info);

    render(&mut canvas);

    let bytes = canvas.serialize()?;
    log::debug!("{subject}: {} bytes", bytes.len());
    Ok(bytes)
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::record::*;

    pub fn invoice() -> InvoiceRecord {
        InvoiceRecord {
            sender: InvoiceParty {
                name: "Studio Nine".into(),
                email: "hello@studionine.io".into(),
                address: "9 Canal St, Leeds".into(),
            },
            client: InvoiceParty {
                name: "Acme Corp".into(),
                email: "ap@acme.com".into(),
                address: "1 Road Runner Way".into(),
            },
            invoice_number: "INV-001".into(),
            issue_date: "2024-01-01".into(),
            due_date: "2024-01-31".into(),
            item: LineItem {
                description: "Brand identity".into(),
                quantity: 3,
                rate: 12.5,
            },
        }
    }

    pub fn cv() -> CvRecord {
        CvRecord {
            personal: PersonalDetails {
                full_name: "Grace Hopper".into(),
                job_title: "Computer Scientist".into(),
                email: "grace@example.com".into(),
                phone: "555-0100".into(),
                location: "Arlington, VA".into(),
                website: Some("grace.dev".into()),
            },
            summary: lipsum::lipsum(60),
            experience: Experience {
                title: "Senior Programmer".into(),
                company: "Eckert-Mauchly".into(),
                dates: "1949 - 1952".into(),
                description: lipsum::lipsum(40),
            },
            education: Education {
                degree: "PhD Mathematics".into(),
                school: "Yale University".into(),
                dates: "1930 - 1934".into(),
            },
            skills: "COBOL, FLOW-MATIC, Compilers, Teaching, Nanoseconds, Debugging".into(),
        }
    }

    pub fn contract() -> ContractRecord {
        ContractRecord {
            provider: ContractParty {
                name: "Ada Lovelace".into(),
                email: "ada@example.com".into(),
            },
            client: ContractParty {
                name: "Charles Babbage".into(),
                email: "charles@example.com".into(),
            },
            project: Project {
                title: "Analytical Engine Notes".into(),
                description: lipsum::lipsum(50),
            },
            timeline: Timeline {
                start_date: "1842-10-01".into(),
                end_date: "1843-07-31".into(),
            },
            payment: Payment {
                total_amount: 4200.0,
                terms: "Half on signing, half on delivery".into(),
            },
            governing_law: "England and Wales".into(),
        }
    }
}
