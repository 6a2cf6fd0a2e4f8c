/// Named symbols used by every drawing routine. Nothing in the renderer
/// refers to a raw code point, so a terminal without box-drawing support
/// can swap in [`Glyphs::ASCII`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glyphs {
    pub horizontal: &'static str,
    pub vertical: &'static str,
    pub top_left: &'static str,
    pub top_right: &'static str,
    pub bottom_left: &'static str,
    pub bottom_right: &'static str,
    /// `├`: vertical line with a branch to the right.
    pub tee_right: &'static str,
    /// `┤`: vertical line with a branch to the left.
    pub tee_left: &'static str,
    /// `┬`: horizontal line with a branch downward.
    pub tee_down: &'static str,
    /// `┴`: horizontal line with a branch upward.
    pub tee_up: &'static str,
    pub cross: &'static str,
    pub arrow_up: &'static str,
    pub arrow_down: &'static str,
    pub arrow_left: &'static str,
    pub arrow_right: &'static str,
    pub shade_light: &'static str,
    pub block_full: &'static str,
}

impl Glyphs {
    pub const UNICODE: Glyphs = Glyphs {
        horizontal: "\u{2500}",
        vertical: "\u{2502}",
        top_left: "\u{250C}",
        top_right: "\u{2510}",
        bottom_left: "\u{2514}",
        bottom_right: "\u{2518}",
        tee_right: "\u{251C}",
        tee_left: "\u{2524}",
        tee_down: "\u{252C}",
        tee_up: "\u{2534}",
        cross: "\u{253C}",
        arrow_up: "\u{25B2}",
        arrow_down: "\u{25BC}",
        arrow_left: "\u{25C4}",
        arrow_right: "\u{25BA}",
        shade_light: "\u{2591}",
        block_full: "\u{2588}",
    };

    pub const ASCII: Glyphs = Glyphs {
        horizontal: "-",
        vertical: "|",
        top_left: "+",
        top_right: "+",
        bottom_left: "+",
        bottom_right: "+",
        tee_right: "+",
        tee_left: "+",
        tee_down: "+",
        tee_up: "+",
        cross: "+",
        arrow_up: "^",
        arrow_down: "v",
        arrow_left: "<",
        arrow_right: ">",
        shade_light: ":",
        block_full: "#",
    };

    pub fn for_ascii(ascii: bool) -> &'static Glyphs {
        if ascii { &Self::ASCII } else { &Self::UNICODE }
    }
}

impl Default for Glyphs {
    fn default() -> Self {
        Self::UNICODE
    }
}
