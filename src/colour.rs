/// A fill or stroke colour, expressed in the RGB or grey colour spaces
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Colour {
    /// DeviceRGB colour; r, g, b, range from 0.0 to 1.0
    RGB { r: f32, g: f32, b: f32 },
    /// DeviceGray colour; g ranges from 0.0 to 1.0
    Grey { g: f32 },
}

impl Colour {
    /// Create a new colour in the RGB space. r, g, and b range from 0.0 to 1.0
    pub const fn new_rgb(r: f32, g: f32, b: f32) -> Colour {
        Colour::RGB { r, g, b }
    }

    /// Create a new colour in the Gray space, g ranges from 0.0 to 1.0
    pub const fn new_grey(g: f32) -> Colour {
        Colour::Grey { g }
    }
}

/// The palette shared by every document template
pub mod colours {
    use super::*;

    pub const BLACK: Colour = Colour::new_grey(0.0);
    pub const WHITE: Colour = Colour::new_grey(1.0);

    /// Header bands, section titles and the grand total box
    pub const ACCENT: Colour = Colour::new_rgb(0.15, 0.39, 0.92);
    /// Body text
    pub const INK: Colour = Colour::new_rgb(0.1, 0.1, 0.1);
    /// Secondary text such as addresses and captions
    pub const MUTED: Colour = Colour::new_rgb(0.45, 0.45, 0.45);
    /// Rules, table header rows and chip backgrounds
    pub const RULE: Colour = Colour::new_rgb(0.93, 0.93, 0.93);

    /// Subdued text on top of an accent band
    pub const ON_ACCENT_MUTED: Colour = Colour::new_rgb(0.85, 0.85, 0.85);
    pub const ON_ACCENT_FAINT: Colour = Colour::new_rgb(0.9, 0.9, 0.9);
    pub const ON_ACCENT_SEPARATOR: Colour = Colour::new_rgb(0.7, 0.7, 0.7);
}
