use std::io;

use ratatui::layout::Rect;

use crate::engine::window::Window;
use crate::page::Slot;
use crate::ui::components::scrollbar::Scrollbar;
use crate::ui::draw::{draw_text, fill_rect};
use crate::ui::glyphs::Glyphs;
use crate::ui::surface::Surface;
use crate::ui::theme::Palette;

/// The scrolling list of a page: subpage marker, title column, value
/// column, and a scrollbar in the last column.
pub struct ItemList<'a> {
    pub items: &'a [Slot],
    pub selected: Option<usize>,
    pub window: Window,
    pub palette: &'a Palette,
    pub glyphs: &'a Glyphs,
}

impl<'a> ItemList<'a> {
    pub fn new(items: &'a [Slot], selected: Option<usize>, window: Window, palette: &'a Palette, glyphs: &'a Glyphs) -> Self {
        Self {
            items,
            selected,
            window,
            palette,
            glyphs,
        }
    }

    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S, area: Rect) -> io::Result<()> {
        let column = area.width.saturating_sub(2) / 2;

        surface.set_colors(self.palette.normal)?;
        fill_rect(
            surface,
            Rect::new(area.x, area.y, area.width.saturating_sub(1), area.height),
            " ",
        )?;
        Scrollbar::new(self.selected.unwrap_or(0), self.items.len(), self.palette, self.glyphs).render(
            surface,
            Rect::new(area.x + area.width.saturating_sub(1), area.y, 1, area.height),
        )?;

        for (row, index) in self.window.visible(self.items.len()).enumerate() {
            let Some(item) = &self.items[index] else {
                continue;
            };
            let y = area.y + row as u16;

            let colors = if self.selected == Some(index) {
                self.palette.selected
            } else if item.is_activatable() {
                self.palette.normal
            } else {
                self.palette.disabled
            };
            surface.set_colors(colors)?;

            if item.is_subpage() {
                draw_text(surface, self.glyphs.arrow_right, Rect::new(area.x, y, 0, 0))?;
            }
            draw_text(surface, &item.title, Rect::new(area.x + 2, y, column, 1))?;
            if let Some(label) = item.value_label() {
                draw_text(surface, &label, Rect::new(area.x + 2 + column, y, column, 1))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::{Item, Page};
    use crate::ui::surface::BufferSurface;
    use crate::ui::theme::Theme;

    fn main_page() -> Page {
        Page::new("Main")
            .item(Item::info("Project Version", "1.23.4567"))
            .gap()
            .item(Item::option("System Time").value("00:00:00"))
            .item(Item::subpage("Hardware Information", Page::new("Hardware Info")))
    }

    #[test]
    fn renders_titles_values_and_markers() {
        let palette = Theme::default().palettes().screen;
        let page = main_page();
        let mut surface = BufferSurface::new(50, 4);
        ItemList::new(&page.items, Some(2), Window::initial(4, page.items.len()), &palette, &Glyphs::ASCII)
            .render(&mut surface, Rect::new(0, 0, 50, 4))
            .unwrap();

        // value column starts at 2 + (50 - 2) / 2
        assert_eq!(surface.row_text(0).trim_end(), format!("{:<26}{}", "  Project Version", "1.23.4567"));
        assert_eq!(surface.row_text(1).trim_end(), "");
        assert_eq!(surface.row_text(2).trim_end(), format!("{:<26}{}", "  System Time", "[00:00:00]"));
        assert_eq!(surface.row_text(3).trim_end(), "> Hardware Information");
    }

    #[test]
    fn long_titles_wrap_onto_the_next_row() {
        let palette = Theme::default().palettes().screen;
        let page = main_page();
        let mut surface = BufferSurface::new(30, 5);
        ItemList::new(&page.items, None, Window::new(3, 8), &palette, &Glyphs::ASCII)
            .render(&mut surface, Rect::new(0, 0, 30, 5))
            .unwrap();

        assert_eq!(surface.row_text(0).trim_end(), "> Hardware");
        assert_eq!(surface.row_text(1).trim_end(), "  Information");
    }

    #[test]
    fn colors_reflect_selection_and_kind() {
        let palette = Theme::default().palettes().screen;
        let page = main_page();
        let mut surface = BufferSurface::new(50, 4);
        ItemList::new(&page.items, Some(2), Window::initial(4, page.items.len()), &palette, &Glyphs::ASCII)
            .render(&mut surface, Rect::new(0, 0, 50, 4))
            .unwrap();

        assert_eq!(surface.colors_at(2, 0), Some(palette.disabled));
        assert_eq!(surface.colors_at(2, 2), Some(palette.selected));
        assert_eq!(surface.colors_at(2, 3), Some(palette.normal));
    }

    #[test]
    fn only_window_rows_are_drawn() {
        let palette = Theme::default().palettes().screen;
        let page = main_page();
        let mut surface = BufferSurface::new(50, 2);
        ItemList::new(&page.items, Some(3), Window::new(2, 4), &palette, &Glyphs::ASCII)
            .render(&mut surface, Rect::new(0, 0, 50, 2))
            .unwrap();

        assert!(surface.row_text(0).starts_with("  System Time"));
        assert!(surface.row_text(1).starts_with("> Hardware Information"));
        // 4 entries in 2 rows: scrollbar arrows in the last column
        assert_eq!(surface.symbol(49, 0), "^");
        assert_eq!(surface.symbol(49, 1), "v");
    }
}
