use std::io;

use ratatui::layout::Rect;

use crate::ui::draw::{fill_rect, set_position};
use crate::ui::surface::Surface;
use crate::ui::theme::Palette;

const FIRST_TAB_COLUMN: u16 = 3;

/// Tab strip: the whole row in `disabled`, each title padded by a space on
/// both sides, the active tab in `selected`.
pub struct Tabs<'a> {
    pub titles: &'a [String],
    pub selected: usize,
    pub palette: &'a Palette,
}

impl<'a> Tabs<'a> {
    pub fn new(titles: &'a [String], selected: usize, palette: &'a Palette) -> Self {
        Self {
            titles,
            selected,
            palette,
        }
    }

    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S, area: Rect) -> io::Result<()> {
        surface.set_colors(self.palette.disabled)?;
        fill_rect(surface, area, " ")?;
        set_position(surface, area.x + FIRST_TAB_COLUMN, area.y)?;

        for (i, title) in self.titles.iter().enumerate() {
            if i == self.selected {
                surface.set_colors(self.palette.selected)?;
            }
            surface.print(&format!(" {title} "))?;
            if i == self.selected {
                surface.set_colors(self.palette.disabled)?;
            }
        }
        Ok(())
    }
}
