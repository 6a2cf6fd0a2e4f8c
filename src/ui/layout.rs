use ratatui::layout::{Position, Rect, Size};

/// Regions of the setup screen for a terminal of a given size.
///
/// ```text
/// row 0        title (centered over two rows, the second is covered by tabs)
/// row 1        tab strip
/// rows 2..h-3  page frame: item list | help sidebar (legend at the bottom)
/// rows h-2..   version footer
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScreenLayout {
    pub title: Rect,
    pub tabs: Rect,
    pub frame: Rect,
    /// Column offset of the item/help divider within `frame`.
    pub divider: u16,
    /// Item rows; the last column is reserved for the scrollbar.
    pub items: Rect,
    pub help_text: Rect,
    /// Origin of the `├──┤` line above the key legend.
    pub legend_divider: Position,
    pub legend_divider_width: u16,
    pub legend: Rect,
    pub footer: Rect,
    /// Where the cursor is parked while waiting for input.
    pub park: Position,
}

impl ScreenLayout {
    pub fn new(size: Size, help_width: u16, legend_lines: u16) -> Self {
        let Size { width: w, height: h } = size;
        let help_x = w.saturating_sub(help_width).saturating_add(1);
        let help_inner = help_width.saturating_sub(2);
        let divider = w.saturating_sub(help_width).saturating_sub(1);

        Self {
            title: Rect::new(0, 0, w, 2),
            tabs: Rect::new(0, 1, w, 1),
            frame: Rect::new(0, 2, w, h.saturating_sub(4)),
            divider,
            items: Rect::new(1, 3, w.saturating_sub(help_width).saturating_sub(2), h.saturating_sub(6)),
            help_text: Rect::new(help_x, 3, help_inner, h.saturating_sub(8).saturating_sub(legend_lines)),
            legend_divider: Position::new(divider, h.saturating_sub(4).saturating_sub(legend_lines)),
            legend_divider_width: help_width.saturating_add(1),
            legend: Rect::new(help_x, h.saturating_sub(3).saturating_sub(legend_lines), help_inner, legend_lines),
            footer: Rect::new(0, h.saturating_sub(2), w, 2),
            park: Position::new(w.saturating_sub(1), h.saturating_sub(1)),
        }
    }
}

/// Top-left corner that centers a box of `size` on a screen of `screen`.
pub fn centered(size: Size, screen: Size) -> Position {
    Position::new(
        screen.width.saturating_sub(size.width) / 2,
        screen.height.saturating_sub(size.height) / 2,
    )
}

/// `ratio` of `total` cells, rounded down.
pub fn fraction(total: u16, ratio: f32) -> usize {
    (f32::from(total) * ratio).floor().max(0.0) as usize
}

/// Converts a cell count computed in `usize` back to screen units.
pub fn cells(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}
