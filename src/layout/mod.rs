//! Layout helpers for placing content on a page.
//!
//! Everything here draws onto a [Canvas](crate::Canvas) with absolute
//! coordinates measured from the bottom-left corner of the page. Nothing is
//! clipped and nothing overflows onto another page: content that runs past the
//! bottom edge is still drawn, just off-page.
//!
//! - [wrap] breaks a paragraph into lines that fit a width
//! - [pack_chips] places a list of widths into rows
//! - [Flow] threads a [Cursor] down the page, drawing sections, paragraphs and
//!   chips as it goes
//! - [header_band], [stacked], [right_aligned], [columns] and
//!   [separated_row] draw the fixed-position blocks that sit around the flow
//!
//! # Example
//!
//! ```
//! use docfill::{Canvas, FontPair, Pt, Weight, colours};
//! use docfill::layout::{Flow, Margins, SectionStyle, TextStyle};
//!
//! let margins = Margins::all(Pt(40.0));
//! let mut canvas = Canvas::new(FontPair::helvetica());
//! let right = canvas.width() - margins.right;
//! let mut flow = Flow::new(&mut canvas, Pt(702.0), margins.left, right);
//!
//! flow.section("Professional Summary", &SectionStyle::default());
//! let body = TextStyle::new(10.0, Weight::Regular, colours::INK);
//! let lines = flow.paragraph("Ships reliable software.", body, Pt(4.0));
//! assert_eq!(lines, 1);
//!
//! let pdf = canvas.serialize().expect("can serialize");
//! assert!(pdf.starts_with(b"%PDF-"));
//! ```

mod blocks;
mod chips;
mod flow;
mod margins;
mod text;

pub use blocks::*;
pub use chips::*;
pub use flow::*;
pub use margins::*;
pub use text::*;
