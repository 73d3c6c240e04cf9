use crate::refs::{ObjectReferences, RefType};
use crate::PDFError;
use owned_ttf_parser::{AsFaceRef, Face, GlyphId, OwnedFace};
use pdf_writer::{
    types::{CidFontType, FontFlags, SystemInfo},
    Filter, Finish, Name, Pdf, Ref, Str,
};
use std::collections::BTreeMap;
use std::ops::Range;

/// A TrueType / OpenType face embedded in its entirety. Text is written as
/// 2-byte glyph ids through an Identity-H encoded Type 0 font.
pub(crate) struct EmbeddedFace {
    face: OwnedFace,
}

impl EmbeddedFace {
    pub(crate) fn parse(bytes: Vec<u8>) -> Result<EmbeddedFace, PDFError> {
        let face = OwnedFace::from_vec(bytes, 0)?;
        if face.as_face_ref().tables().cmap.is_none() {
            return Err(PDFError::MissingCmap);
        }
        Ok(EmbeddedFace { face })
    }

    fn face(&self) -> &Face<'_> {
        self.face.as_face_ref()
    }

    fn scaling(&self) -> f32 {
        1000.0 / self.face().units_per_em() as f32
    }

    pub(crate) fn glyph_id(&self, ch: char) -> Option<u16> {
        self.face().glyph_index(ch).map(|gid| gid.0)
    }

    /// Advance width of a glyph, in 1/1000 em
    pub(crate) fn advance(&self, gid: u16) -> f32 {
        self.face()
            .glyph_hor_advance(GlyphId(gid))
            .unwrap_or_default() as f32
            * self.scaling()
    }

    pub(crate) fn ascender(&self) -> f32 {
        self.face().ascender() as f32 * self.scaling()
    }

    pub(crate) fn descender(&self) -> f32 {
        self.face().descender() as f32 * self.scaling()
    }

    fn name(&self, name_id: u16) -> Option<String> {
        self.face()
            .names()
            .into_iter()
            .find(|name| name.name_id == name_id && name.is_unicode())
            .and_then(|name| name.to_string())
    }

    /// The PostScript name, or a stable stand-in when the face has none
    pub(crate) fn postscript_name(&self, font_index: usize) -> String {
        usable_name(self.name(owned_ttf_parser::name_id::POST_SCRIPT_NAME), font_index)
    }

    /// Write the Type 0 font and everything it depends on. `used` holds every
    /// glyph id drawn with this face along with the character it stands for;
    /// only those glyphs get width and ToUnicode entries.
    pub(crate) fn write(
        &self,
        refs: &mut ObjectReferences,
        font_index: usize,
        used: &BTreeMap<u16, char>,
        writer: &mut Pdf,
    ) {
        let base_font = self.postscript_name(font_index);
        let font_id = refs.gen(RefType::Font(font_index));
        let cid_font_id = self.write_cid(refs, font_index, &base_font, used, writer);
        let to_unicode_id = self.write_to_unicode(refs, font_index, used, writer);

        writer
            .type0_font(font_id)
            .base_font(Name(base_font.as_bytes()))
            .encoding_predefined(Name(b"Identity-H"))
            .descendant_font(cid_font_id)
            .to_unicode(to_unicode_id);
    }

    fn write_cid(
        &self,
        refs: &mut ObjectReferences,
        font_index: usize,
        base_font: &str,
        used: &BTreeMap<u16, char>,
        writer: &mut Pdf,
    ) -> Ref {
        let descriptor_id = self.write_descriptor(refs, font_index, base_font, writer);
        let id = refs.gen(RefType::CidFont(font_index));

        let mut cid_font = writer.cid_font(id);
        cid_font.subtype(CidFontType::Type2);
        cid_font.base_font(Name(base_font.as_bytes()));
        cid_font.system_info(SystemInfo {
            registry: Str(b"Adobe"),
            ordering: Str(b"Identity"),
            supplement: 0,
        });
        cid_font.font_descriptor(descriptor_id);
        cid_font.default_width(self.advance(0));

        let mut widths = cid_font.widths();
        for run in glyph_runs(used.keys().copied()) {
            widths.consecutive(run.start, run.map(|gid| self.advance(gid)));
        }
        widths.finish();

        cid_font.cid_to_gid_map_predefined(Name(b"Identity"));
        id
    }

    fn write_descriptor(
        &self,
        refs: &mut ObjectReferences,
        font_index: usize,
        base_font: &str,
        writer: &mut Pdf,
    ) -> Ref {
        let data_id = refs.gen(RefType::FontData(font_index));
        let data = self.face.as_slice();
        let compressed = miniz_oxide::deflate::compress_to_vec_zlib(
            data,
            miniz_oxide::deflate::CompressionLevel::DefaultCompression as u8,
        );
        writer
            .stream(data_id, compressed.as_slice())
            .filter(Filter::FlateDecode)
            .pair(Name(b"Length1"), data.len() as i32);

        let face = self.face();
        let scaling = self.scaling();
        let bbox = face.global_bounding_box();

        let mut flags = FontFlags::NON_SYMBOLIC;
        if face.is_monospaced() {
            flags.insert(FontFlags::FIXED_PITCH);
        }

        let id = refs.gen(RefType::FontDescriptor(font_index));
        let mut descriptor = writer.font_descriptor(id);
        descriptor.name(Name(base_font.as_bytes()));
        if let Some(family) = self.name(owned_ttf_parser::name_id::FAMILY) {
            descriptor.family(Str(family.as_bytes()));
        }
        descriptor.flags(flags);
        descriptor.bbox(pdf_writer::Rect {
            x1: bbox.x_min as f32 * scaling,
            y1: bbox.y_min as f32 * scaling,
            x2: bbox.x_max as f32 * scaling,
            y2: bbox.y_max as f32 * scaling,
        });
        descriptor.italic_angle(0.0);
        descriptor.ascent(self.ascender());
        descriptor.descent(self.descender());
        descriptor.cap_height(
            face.capital_height()
                .map(|h| h as f32 * scaling)
                .unwrap_or_else(|| self.ascender()),
        );
        // no reliable source for the dominant stem width in the font tables
        descriptor.stem_v(80.0);
        descriptor.font_file2(data_id);
        descriptor.finish();

        id
    }

    fn write_to_unicode(
        &self,
        refs: &mut ObjectReferences,
        font_index: usize,
        used: &BTreeMap<u16, char>,
        writer: &mut Pdf,
    ) -> Ref {
        let id = refs.gen(RefType::ToUnicode(font_index));
        let cmap = to_unicode_cmap(used);
        let compressed = miniz_oxide::deflate::compress_to_vec_zlib(
            cmap.as_bytes(),
            miniz_oxide::deflate::CompressionLevel::DefaultCompression as u8,
        );
        writer
            .stream(id, compressed.as_slice())
            .filter(Filter::FlateDecode);

        id
    }
}

/// A face's own name when it is safe to use as a PDF name, otherwise `F{index}`
fn usable_name(name: Option<String>, font_index: usize) -> String {
    name.filter(|name| !name.is_empty() && name.chars().all(|ch| ch.is_ascii_graphic()))
        .unwrap_or_else(|| format!("F{font_index}"))
}

/// Ascending glyph ids grouped into runs of consecutive ids, one per `/W` entry
fn glyph_runs(gids: impl IntoIterator<Item = u16>) -> Vec<Range<u16>> {
    let mut runs: Vec<Range<u16>> = Vec::new();
    for gid in gids {
        match runs.last_mut() {
            Some(run) if run.end == gid => run.end += 1,
            _ => runs.push(gid..gid + 1),
        }
    }
    runs
}

/// A CMap from glyph ids back to the characters they were drawn for
fn to_unicode_cmap(used: &BTreeMap<u16, char>) -> String {
    let mut cmap = String::from(
        "/CIDInit /ProcSet findresource begin\n\
         12 dict begin\n\
         begincmap\n\
         /CIDSystemInfo << /Registry (Adobe) /Ordering (UCS) /Supplement 0 >> def\n\
         /CMapName /Adobe-Identity-UCS def\n\
         /CMapType 2 def\n\
         1 begincodespacerange\n<0000> <FFFF>\nendcodespacerange\n",
    );

    // bfchar blocks hold at most 100 entries
    let entries: Vec<(&u16, &char)> = used.iter().collect();
    for block in entries.chunks(100) {
        cmap.push_str(&format!("{} beginbfchar\n", block.len()));
        for (gid, ch) in block {
            let mut utf16 = [0u16; 2];
            let target: String = ch
                .encode_utf16(&mut utf16)
                .iter()
                .map(|unit| format!("{unit:04x}"))
                .collect();
            cmap.push_str(&format!("<{gid:04x}> <{target}>\n"));
        }
        cmap.push_str("endbfchar\n");
    }
    cmap.push_str("endcmap\nCMapName currentdict /CMap defineresource pop\nend\nend\n");
    cmap
}
