//! The data a document is generated from.
//!
//! Records deserialize from JSON with camelCase keys. A [DocumentRecord] is
//! tagged with its kind:
//!
//! ```
//! use docfill::DocumentRecord;
//!
//! let record: DocumentRecord = serde_json::from_str(r#"{
//!     "kind": "contract",
//!     "provider": { "name": "Ada Lovelace", "email": "ada@example.com" },
//!     "client": { "name": "Analytical Engines Ltd", "email": "ops@engines.co.uk" },
//!     "project": { "title": "Difference Engine Port", "description": "Port the engine." },
//!     "timeline": { "startDate": "2024-03-01", "endDate": "2024-06-30" },
//!     "payment": { "totalAmount": 4200.0, "terms": "50% upfront" },
//!     "governingLaw": "England and Wales"
//! }"#).expect("valid contract");
//! assert_eq!(record.kind().id(), "contract");
//! assert_eq!(record.file_name(), "contract-difference-engine-port.pdf");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Someone who sends or receives an invoice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceParty {
    pub name: String,
    pub email: String,
    pub address: String,
}

/// The single billed line of an invoice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub description: String,
    pub quantity: u32,
    pub rate: f64,
}

impl LineItem {
    /// Quantity times rate. Always derived, never stored.
    pub fn total(&self) -> f64 {
        self.quantity as f64 * self.rate
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceRecord {
    pub sender: InvoiceParty,
    pub client: InvoiceParty,
    pub invoice_number: String,
    /// Display string, not parsed
    pub issue_date: String,
    /// Display string, not parsed
    pub due_date: String,
    pub item: LineItem,
}

impl InvoiceRecord {
    pub fn total(&self) -> f64 {
        self.item.total()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalDetails {
    pub full_name: String,
    pub job_title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub title: String,
    pub company: String,
    pub dates: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub degree: String,
    pub school: String,
    pub dates: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CvRecord {
    pub personal: PersonalDetails,
    pub summary: String,
    pub experience: Experience,
    pub education: Education,
    /// Comma-delimited, split with [CvRecord::skill_tags]
    pub skills: String,
}

impl CvRecord {
    /// The skills as trimmed, non-empty tags, in the order given
    pub fn skill_tags(&self) -> Vec<&str> {
        self.skills
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .collect()
    }

    /// The contact line items in display order. A missing website is left
    /// empty rather than dropped.
    pub fn contact_items(&self) -> [&str; 4] {
        let p = &self.personal;
        [
            p.email.as_str(),
            p.phone.as_str(),
            p.location.as_str(),
            p.website.as_deref().unwrap_or_default(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractParty {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timeline {
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub total_amount: f64,
    pub terms: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractRecord {
    pub provider: ContractParty,
    pub client: ContractParty,
    pub project: Project,
    pub timeline: Timeline,
    pub payment: Payment,
    pub governing_law: String,
}

/// Any record a document can be generated from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DocumentRecord {
    Invoice(InvoiceRecord),
    Cv(CvRecord),
    Contract(ContractRecord),
}

impl DocumentRecord {
    pub fn kind(&self) -> DocumentKind {
        match self {
            DocumentRecord::Invoice(_) => DocumentKind::Invoice,
            DocumentRecord::Cv(_) => DocumentKind::Cv,
            DocumentRecord::Contract(_) => DocumentKind::Contract,
        }
    }

    /// The conventional name for the generated file, always a valid file name.
    /// Invoice numbers are kept as written apart from path-unsafe characters;
    /// CV names and contract titles are kebab-cased.
    pub fn file_name(&self) -> String {
        let stem = match self {
            DocumentRecord::Invoice(invoice) => format::file_safe(&invoice.invoice_number),
            DocumentRecord::Cv(cv) => format::kebab_case(&cv.personal.full_name),
            DocumentRecord::Contract(contract) => format::kebab_case(&contract.project.title),
        };
        if stem.is_empty() {
            format!("{}.pdf", self.kind().id())
        } else {
            format!("{}-{stem}.pdf", self.kind().id())
        }
    }
}

impl From<InvoiceRecord> for DocumentRecord {
    fn from(record: InvoiceRecord) -> Self {
        DocumentRecord::Invoice(record)
    }
}

impl From<CvRecord> for DocumentRecord {
    fn from(record: CvRecord) -> Self {
        DocumentRecord::Cv(record)
    }
}

impl From<ContractRecord> for DocumentRecord {
    fn from(record: ContractRecord) -> Self {
        DocumentRecord::Contract(record)
    }
}

/// The document templates on offer
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    Invoice,
    Cv,
    Contract,
}

impl DocumentKind {
    /// Every template, in the order they're presented
    pub const ALL: [DocumentKind; 3] = [DocumentKind::Invoice, DocumentKind::Cv, DocumentKind::Contract];

    /// Matches the `kind` tag of a [DocumentRecord]
    pub fn id(&self) -> &'static str {
        match self {
            DocumentKind::Invoice => "invoice",
            DocumentKind::Cv => "cv",
            DocumentKind::Contract => "contract",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DocumentKind::Invoice => "Invoice",
            DocumentKind::Cv => "CV/Resume",
            DocumentKind::Contract => "Contract",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            DocumentKind::Invoice => "Bill a client for your services",
            DocumentKind::Cv => "Fill out a clean professional resume",
            DocumentKind::Contract => "A basic agreement between two Parties",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Text formatting shared by the generators
pub mod format {
    /// A currency prefix followed by the amount with exactly two decimals
    pub fn money(currency: &str, amount: f64) -> String {
        format!("{currency}{amount:.2}")
    }

    /// Lower-case ASCII alphanumeric runs joined by single hyphens
    pub fn kebab_case(text: &str) -> String {
        text.split(|c: char| !c.is_ascii_alphanumeric())
            .filter(|run| !run.is_empty())
            .map(str::to_ascii_lowercase)
            .collect::<Vec<_>>()
            .join("-")
    }

    /// `text` as written, with path separators, `:` and control characters
    /// (plus the other characters Windows refuses in names) replaced by `-`,
    /// and surrounding whitespace trimmed
    pub fn file_safe(text: &str) -> String {
        text.chars()
            .map(|c| match c {
                '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '-',
                c if c.is_control() => '-',
                c => c,
            })
            .collect::<String>()
            .trim()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::format::{file_safe, kebab_case, money};
    use super::*;
    use pretty_assertions::assert_eq;

    fn cv_with_skills(skills: &str) -> CvRecord {
        CvRecord {
            personal: PersonalDetails {
                full_name: "Grace Hopper".into(),
                job_title: "Rear Admiral".into(),
                email: "grace@navy.mil".into(),
                phone: "555-0100".into(),
                location: "Arlington".into(),
                website: None,
            },
            summary: "Compilers.".into(),
            experience: Experience {
                title: "Programmer".into(),
                company: "Harvard".into(),
                dates: "1944 - 1949".into(),
                description: "Mark I.".into(),
            },
            education: Education {
                degree: "PhD Mathematics".into(),
                school: "Yale".into(),
                dates: "1934".into(),
            },
            skills: skills.into(),
        }
    }

    #[test]
    fn skills_split_trimmed_and_in_order() {
        let cv = cv_with_skills("React, TypeScript,  , Node.js");
        assert_eq!(cv.skill_tags(), vec!["React", "TypeScript", "Node.js"]);
        assert!(cv_with_skills(" , ,").skill_tags().is_empty());
    }

    #[test]
    fn missing_website_is_an_empty_contact_item() {
        let cv = cv_with_skills("COBOL");
        assert_eq!(cv.contact_items()[3], "");
    }

    #[test]
    fn totals_are_derived() {
        let item = LineItem {
            description: "Consulting".into(),
            quantity: 3,
            rate: 12.5,
        };
        assert_eq!(money("$", item.total()), "$37.50");
        assert_eq!(money("£", 4200.0), "£4200.00");
    }

    #[test]
    fn kebab_case_keeps_only_alphanumeric_runs() {
        assert_eq!(kebab_case("Grace  Hopper"), "grace-hopper");
        assert_eq!(kebab_case("INV/2024#007"), "inv-2024-007");
        assert_eq!(kebab_case("  Website Redesign! v2 "), "website-redesign-v2");
        assert_eq!(kebab_case("***"), "");
    }

    #[test]
    fn file_safe_only_replaces_path_unsafe_characters() {
        assert_eq!(file_safe("INV-001"), "INV-001");
        assert_eq!(file_safe("INV 2024/007"), "INV 2024-007");
        assert_eq!(file_safe("A\\B:C\tD"), "A-B-C-D");
        assert_eq!(file_safe(" ../.. "), "..-..");
        assert_eq!(file_safe("  "), "");
    }

    #[test]
    fn invoice_numbers_keep_their_case() {
        let mut invoice = crate::generate::fixtures::invoice();
        assert_eq!(DocumentRecord::from(invoice.clone()).file_name(), "invoice-INV-001.pdf");

        invoice.invoice_number = "Q3/2024".into();
        assert_eq!(DocumentRecord::from(invoice.clone()).file_name(), "invoice-Q3-2024.pdf");

        invoice.invoice_number = "//".into();
        assert_eq!(DocumentRecord::from(invoice).file_name(), "invoice---.pdf");
    }

    #[test]
    fn records_are_tagged_by_kind() {
        let record = DocumentRecord::from(cv_with_skills("COBOL"));
        let json = serde_json::to_value(&record).expect("can serialize");
        assert_eq!(json["kind"], "cv");
        assert_eq!(json["personal"]["fullName"], "Grace Hopper");
        assert!(json["personal"].get("website").is_none());

        let back: DocumentRecord = serde_json::from_value(json).expect("can deserialize");
        assert_eq!(back, record);
        assert_eq!(back.file_name(), "cv-grace-hopper.pdf");
    }

    #[test]
    fn unknown_kinds_are_rejected() {
        let result = serde_json::from_str::<DocumentRecord>(r#"{ "kind": "letter" }"#);
        assert!(result.is_err());
    }

    #[test]
    fn catalogue_lists_every_template() {
        let ids: Vec<&str> = DocumentKind::ALL.iter().map(DocumentKind::id).collect();
        assert_eq!(ids, vec!["invoice", "cv", "contract"]);
        assert_eq!(DocumentKind::Cv.to_string(), "CV/Resume");
        assert_eq!(DocumentKind::Contract.description(), "A basic agreement between two Parties");
    }
}
