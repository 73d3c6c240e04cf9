use crate::{
    content::{render_contents, UsedCodes},
    font::Font,
    info::Info,
    page::Page,
    refs::{ObjectReferences, RefType},
    PDFError,
};
use id_arena::{Arena, Id};
use pdf_writer::{Finish, Name, Pdf};
use std::collections::BTreeMap;
use std::io::Write;

/// A single-page document: the page, the fonts it draws with, and optional
/// metadata. Rendered out with a call to [Document::write]
pub struct Document {
    pub info: Option<Info>,
    pub page: Page,
    pub fonts: Arena<Font>,
}

impl Document {
    pub fn new(page: Page) -> Document {
        Document {
            info: None,
            page,
            fonts: Arena::new(),
        }
    }

    /// Sets information about the document. If not provided, no information block will be
    /// written to the PDF
    pub fn set_info(&mut self, info: Info) {
        self.info = Some(info);
    }

    /// Add a font to the document. The page refers to it through the returned id,
    /// and it is written to the page resources as `/F<index>`.
    pub fn add_font(&mut self, font: Font) -> Id<Font> {
        self.fonts.alloc(font)
    }

    /// Write the entire document to the writer. Output only depends on the
    /// document's contents: there are no timestamps or random identifiers.
    pub fn write<W: Write>(&self, w: &mut W) -> Result<(), PDFError> {
        let Document { info, page, fonts } = self;

        let mut refs = ObjectReferences::new();
        let catalog_id = refs.gen(RefType::Catalog);
        let page_tree_id = refs.gen(RefType::PageTree);
        let page_id = refs.gen(RefType::Page);
        let content_id = refs.gen(RefType::ContentForPage);

        let mut writer = Pdf::new();
        writer.catalog(catalog_id).pages(page_tree_id);
        writer.pages(page_tree_id).count(1).kids([page_id]);

        if let Some(info) = info {
            info.write(&mut refs, &mut writer);
        }

        // the content stream has to be rendered before the fonts are written,
        // since embedded fonts only describe the glyphs that were drawn
        let mut used = UsedCodes::new();
        let rendered = render_contents(&page.contents, fonts, &mut used)?;

        let no_codes: BTreeMap<u16, char> = BTreeMap::new();
        for (id, font) in fonts.iter() {
            let font_used = used.get(&id.index()).unwrap_or(&no_codes);
            font.write(&mut refs, id.index(), font_used, &mut writer);
        }

        let mut pdf_page = writer.page(page_id);
        pdf_page.media_box(page.media_box.into());
        pdf_page.parent(page_tree_id);
        pdf_page.contents(content_id);

        let mut resources = pdf_page.resources();
        let mut resource_fonts = resources.fonts();
        for (id, _) in fonts.iter() {
            if let Some(font_ref) = refs.get(RefType::Font(id.index())) {
                resource_fonts.pair(Name(format!("F{}", id.index()).as_bytes()), font_ref);
            }
        }
        resource_fonts.finish();
        resources.finish();
        pdf_page.finish();

        writer.stream(content_id, rendered.as_slice());

        w.write_all(writer.finish().as_slice()).map_err(Into::into)
    }
}
