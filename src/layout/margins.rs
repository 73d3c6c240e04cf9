use crate::units::Pt;

/// The blank border around a page's content. Nothing stops drawing from
/// crossing it; layout code uses it to find its edges.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: Pt,
    pub right: Pt,
    pub bottom: Pt,
    pub left: Pt,
}

impl Margins {
    /// The same margin on every side
    pub fn all<D: Into<Pt>>(value: D) -> Margins {
        let value: Pt = value.into();
        Margins {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Width left for content on a page `page_width` wide
    pub fn content_width(&self, page_width: Pt) -> Pt {
        page_width - self.left - self.right
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a4_with_forty_point_margins() {
        let margins = Margins::all(Pt(40.0));
        assert_eq!(margins.left, Pt(40.0));
        assert_eq!(margins.bottom, Pt(40.0));
        assert_eq!(margins.content_width(Pt(595.0)), Pt(515.0));
    }
}
