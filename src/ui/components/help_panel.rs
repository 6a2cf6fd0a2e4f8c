use std::io;

use ratatui::layout::Rect;

use crate::ui::draw::{draw_hsplit, draw_text, fill_rect};
use crate::ui::glyphs::Glyphs;
use crate::ui::layout::ScreenLayout;
use crate::ui::surface::Surface;
use crate::ui::theme::Palette;

/// Right-hand sidebar: help for the selected item on top, the key legend
/// at the bottom behind a divider.
pub struct HelpPanel<'a> {
    pub legend: &'a str,
    pub palette: &'a Palette,
    pub glyphs: &'a Glyphs,
}

impl<'a> HelpPanel<'a> {
    pub fn new(legend: &'a str, palette: &'a Palette, glyphs: &'a Glyphs) -> Self {
        Self { legend, palette, glyphs }
    }

    pub fn legend_lines(legend: &str) -> u16 {
        legend.lines().count() as u16
    }

    pub fn render_legend<S: Surface + ?Sized>(&self, surface: &mut S, layout: &ScreenLayout) -> io::Result<()> {
        surface.set_colors(self.palette.normal)?;
        draw_hsplit(
            surface,
            layout.legend_divider.x,
            layout.legend_divider.y,
            layout.legend_divider_width,
            self.glyphs,
        )?;
        draw_text(surface, self.legend, layout.legend)
    }

    pub fn render_text<S: Surface + ?Sized>(&self, surface: &mut S, area: Rect, text: &str) -> io::Result<()> {
        surface.set_colors(self.palette.normal)?;
        fill_rect(surface, area, " ")?;
        draw_text(surface, text, Rect::new(area.x, area.y, area.width, 0))
    }
}
