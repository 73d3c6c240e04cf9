use derive_more::{Add, AddAssign, Display, Div, From, Into, Mul, MulAssign, Sub, SubAssign, Sum};

/// A length in PDF points (1/72 of an inch). All page coordinates are
/// expressed in points, with the origin at the bottom-left of the page.
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    Add,
    AddAssign,
    Sub,
    SubAssign,
    Mul,
    MulAssign,
    Div,
    Sum,
    From,
    Into,
    Display,
)]
pub struct Pt(pub f32);

impl Pt {
    /// The larger of two lengths
    pub fn max(self, other: Pt) -> Pt {
        Pt(self.0.max(other.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_add_and_scale() {
        assert_eq!(Pt(40.0) + Pt(2.0), Pt(42.0));
        assert_eq!(Pt(10.0) * 1.5, Pt(15.0));
        assert_eq!(Pt(9.0) / 3.0, Pt(3.0));
        assert_eq!([Pt(1.0), Pt(2.0)].into_iter().sum::<Pt>(), Pt(3.0));
    }

    #[test]
    fn points_display_without_unit() {
        assert_eq!(Pt(742.0).to_string(), "742");
        assert_eq!(Pt(0.5).to_string(), "0.5");
    }
}
