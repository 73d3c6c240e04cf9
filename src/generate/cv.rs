use super::{build, margins, right_edge, BODY};
use crate::canvas::{Canvas, Weight};
use crate::colour::colours;
use crate::config::GeneratorConfig;
use crate::layout::{header_band, separated_row, ChipStyle, Flow, SectionStyle, Separator, TextStyle};
use crate::record::CvRecord;
use crate::units::Pt;
use crate::PDFError;

const BAND_HEIGHT: Pt = Pt(110.0);
const NAME: TextStyle = TextStyle::new(26.0, Weight::Bold, colours::WHITE);
const JOB_TITLE: TextStyle = TextStyle::new(13.0, Weight::Regular, colours::ON_ACCENT_MUTED);
const CONTACT: TextStyle = TextStyle::new(9.0, Weight::Regular, colours::ON_ACCENT_FAINT);
const ENTRY_TITLE: TextStyle = TextStyle::new(11.0, Weight::Bold, colours::INK);
const ENTRY_DETAIL: TextStyle = TextStyle::new(9.0, Weight::Regular, colours::MUTED);

const CONTACT_SEPARATOR: Separator<'static> = Separator {
    mark: "·",
    inset: Pt(10.0),
    colour: colours::ON_ACCENT_SEPARATOR,
};

/// First baseline below the header band
const BODY_TOP: Pt = Pt(702.0);
const LEADING: Pt = Pt(4.0);
const SECTION_GAP: Pt = Pt(6.0);

/// Draw a one-page CV. Sections grow with their content; anything that runs
/// past the bottom of the page is drawn off-page.
pub fn render_cv(canvas: &mut Canvas, cv: &CvRecord) {
    let personal = &cv.personal;
    log::debug!("rendering cv for {}", personal.full_name);
    let margins = margins();
    let right = right_edge(canvas);

    header_band(canvas, BAND_HEIGHT, colours::ACCENT);
    canvas.draw_text(&personal.full_name, margins.left, Pt(792.0), NAME.size, NAME.weight, NAME.colour);
    canvas.draw_text(
        &personal.job_title,
        margins.left,
        Pt(770.0),
        JOB_TITLE.size,
        JOB_TITLE.weight,
        JOB_TITLE.colour,
    );
    separated_row(
        canvas,
        &cv.contact_items(),
        margins.left,
        Pt(747.0),
        CONTACT,
        Pt(16.0),
        CONTACT_SEPARATOR,
    );

    let section = SectionStyle::default();
    let mut flow = Flow::new(canvas, BODY_TOP, margins.left, right);

    flow.section("Professional Summary", &section);
    let summary_lines = flow.paragraph(&cv.summary, BODY, LEADING);

    flow.skip(SECTION_GAP);
    flow.section("Experience", &section);
    let experience = &cv.experience;
    entry(
        &mut flow,
        &experience.title,
        &format!("{}  ·  {}", experience.company, experience.dates),
    );
    let experience_lines = flow.paragraph(&experience.description, BODY, LEADING);

    flow.skip(SECTION_GAP);
    flow.section("Education", &section);
    let education = &cv.education;
    entry(
        &mut flow,
        &education.degree,
        &format!("{}  ·  {}", education.school, education.dates),
    );

    flow.skip(SECTION_GAP);
    flow.section("Skills", &section);
    let tags = cv.skill_tags();
    let rows = flow.chips(&tags, &ChipStyle::default());

    log::debug!(
        "cv laid out {summary_lines} summary lines, {experience_lines} experience lines, {} skills in {rows} rows",
        tags.len()
    );
}

/// A bold title with a grey detail line beneath it
fn entry(flow: &mut Flow, title: &str, detail: &str) {
    flow.line(title, ENTRY_TITLE, Pt(11.0));
    flow.line(detail, ENTRY_DETAIL, Pt(14.0));
}

pub fn generate_cv(cv: &CvRecord, config: &GeneratorConfig) -> Result<Vec<u8>, PDFError> {
    build(config, format!("{} CV", cv.personal.full_name), "CV", |canvas| render_cv(canvas, cv))
}
