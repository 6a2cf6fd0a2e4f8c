use std::io;

use ratatui::layout::Rect;

use crate::engine::window::scrollbar_thumb;
use crate::ui::draw::{draw_text, fill_rect};
use crate::ui::glyphs::Glyphs;
use crate::ui::surface::Surface;
use crate::ui::theme::Palette;

/// One-column scrollbar: arrows at both ends, a shaded track and a solid
/// thumb. Nothing is drawn when the list fits.
pub struct Scrollbar<'a> {
    pub selected: usize,
    pub total: usize,
    pub palette: &'a Palette,
    pub glyphs: &'a Glyphs,
}

impl<'a> Scrollbar<'a> {
    pub fn new(selected: usize, total: usize, palette: &'a Palette, glyphs: &'a Glyphs) -> Self {
        Self {
            selected,
            total,
            palette,
            glyphs,
        }
    }

    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S, area: Rect) -> io::Result<()> {
        let Some(thumb) = scrollbar_thumb(usize::from(area.height), self.total, self.selected) else {
            return Ok(());
        };

        surface.set_colors(self.palette.disabled)?;
        fill_rect(
            surface,
            Rect::new(area.x, area.y + 1, 1, area.height - 1),
            self.glyphs.shade_light,
        )?;

        surface.set_colors(self.palette.normal)?;
        draw_text(surface, self.glyphs.arrow_up, Rect::new(area.x, area.y, 0, 0))?;
        draw_text(
            surface,
            self.glyphs.arrow_down,
            Rect::new(area.x, area.y + area.height - 1, 0, 0),
        )?;
        fill_rect(
            surface,
            Rect::new(area.x, area.y + 1 + thumb.offset as u16, 1, thumb.height as u16),
            self.glyphs.block_full,
        )
    }
}
