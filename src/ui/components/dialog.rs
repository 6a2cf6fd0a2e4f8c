use std::io;

use ratatui::layout::{Position, Rect, Size};

use crate::ui::draw::{draw_box, draw_text_centered, fill_rect};
use crate::ui::glyphs::Glyphs;
use crate::ui::layout::centered;
use crate::ui::surface::Surface;
use crate::ui::theme::Palette;

/// Shared look of the modal dialogs. The interactions themselves live in
/// `message_box` and `select_box`.
#[derive(Clone, Copy, Debug)]
pub struct Dialog<'a> {
    pub palette: &'a Palette,
    pub glyphs: &'a Glyphs,
    /// Largest share of the screen a dialog's content may take.
    pub ratio: f32,
}

impl<'a> Dialog<'a> {
    pub fn new(palette: &'a Palette, glyphs: &'a Glyphs, ratio: f32) -> Self {
        Self { palette, glyphs, ratio }
    }

    /// Paints the drop shadow, then a box of `size` centered on the
    /// screen with `title` set into its top border. Returns the box origin
    /// and leaves the `normal` colors active.
    pub(crate) fn frame<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        size: Size,
        title: &str,
        button_row: bool,
    ) -> io::Result<Position> {
        let origin = centered(size, surface.size());
        let Position { x, y } = origin;

        surface.set_colors(self.palette.shadow)?;
        fill_rect(surface, Rect::new(x + 1, y + size.height, size.width, 1), " ")?;
        fill_rect(surface, Rect::new(x + size.width, y + 1, 2, size.height), " ")?;

        surface.set_colors(self.palette.normal)?;
        let splits: &[u16] = if button_row { &[size.height.saturating_sub(3)] } else { &[] };
        draw_box(surface, Rect::new(x, y, size.width, size.height), &[], splits, self.glyphs)?;
        draw_text_centered(
            surface,
            &format!(" {title} "),
            Rect::new(x + 1, y, size.width.saturating_sub(2), 1),
            self.glyphs.horizontal,
        )?;

        Ok(origin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::surface::BufferSurface;
    use crate::ui::theme::{ColorPair, Theme};
    use ratatui::style::Color;

    #[test]
    fn frame_with_shadow_and_title() {
        let palette = Theme::default().palettes().dialog;
        let dialog = Dialog::new(&palette, &Glyphs::ASCII, 0.6);
        let mut surface = BufferSurface::new(14, 8);
        let origin = dialog.frame(&mut surface, Size::new(10, 5), "Hi", true).unwrap();

        assert_eq!(origin, Position::new(2, 1));
        assert_eq!(surface.row_text(1), "  +-- Hi --+  ");
        assert_eq!(surface.row_text(3), "  +--------+  ");
        assert_eq!(surface.row_text(5), "  +--------+  ");
        // shadow: right of the box from row 2 down, and under it
        assert_eq!(surface.colors_at(12, 2), Some(palette.shadow));
        assert_eq!(surface.colors_at(13, 5), Some(palette.shadow));
        assert_eq!(surface.colors_at(3, 6), Some(palette.shadow));
        // the shadow is offset one cell right
        assert_eq!(surface.colors_at(2, 6), Some(ColorPair::new(Color::Reset, Color::Reset)));
        assert_eq!(surface.colors_at(4, 2), Some(palette.normal));
    }
}
