//! Fill in an invoice, CV, or contract record and get back a one-page PDF.
//!
//! ```
//! use docfill::{generate, DocumentRecord, GeneratorConfig, Validate};
//!
//! let record: DocumentRecord = serde_json::from_str(r#"{
//!     "kind": "invoice",
//!     "sender": { "name": "Studio Nine", "email": "hi@studionine.io", "address": "9 Canal St" },
//!     "client": { "name": "Acme Corp", "email": "ap@acme.com", "address": "1 Road Runner Way" },
//!     "invoiceNumber": "INV-001",
//!     "issueDate": "2024-01-01",
//!     "dueDate": "2024-01-31",
//!     "item": { "description": "Logo design", "quantity": 1, "rate": 100.0 }
//! }"#).expect("valid invoice");
//!
//! record.validate().expect("complete invoice");
//! let pdf = generate(&record, &GeneratorConfig::default()).expect("can generate");
//! assert!(pdf.starts_with(b"%PDF-"));
//! ```

mod canvas;
pub use canvas::*;

mod colour;
pub use colour::*;

pub mod config;
pub use config::{FontConfig, GeneratorConfig};

mod content;

mod document;
pub use document::*;

mod font;
pub use font::*;

/// One generator per document template
pub mod generate;
pub use generate::generate;

mod info;
pub use info::*;

/// Utility functions and structures to lay out text and blocks on a page
pub mod layout;

mod page;
pub use page::*;

pub mod record;
pub use record::{DocumentKind, DocumentRecord};

mod rect;
pub use rect::*;

pub(crate) mod refs;

mod session;
pub use session::*;

mod units;
pub use units::*;

pub mod validate;
pub use validate::{Validate, ValidationErrors};

mod error;
pub use error::*;

/// Re-export PDF-writer functionality
pub use pdf_writer;
