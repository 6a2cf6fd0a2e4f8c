use std::io;

use ratatui::layout::{Rect, Size};
use tracing::debug;

use crate::engine::window::{Window, compute_window};
use crate::event::Key;
use crate::terminal::Console;
use crate::ui::components::dialog::Dialog;
use crate::ui::draw::{draw_text, fill_rect};
use crate::ui::layout::{cells, fraction};
use crate::ui::surface::Surface;
use crate::ui::text::width;

impl Dialog<'_> {
    /// Modal list picker. Up/Left and Down/Right move the highlight
    /// (clamped), Enter returns the highlighted index, anything else rings
    /// the bell. Lists taller than the dialog scroll, with arrows set into
    /// the border on the side that has hidden entries.
    pub fn select_box<C: Console + ?Sized>(
        &self,
        console: &mut C,
        title: &str,
        values: &[String],
        mut selected: usize,
    ) -> io::Result<usize> {
        let last = values.len().saturating_sub(1);
        selected = selected.min(last);

        let screen = console.size();
        let content_width = values.iter().map(|v| width(v)).fold(width(title) + 4, usize::max) + 2;
        let rows = fraction(screen.height, self.ratio).min(values.len());
        let size = Size::new(cells(content_width + 2), cells(rows + 2));

        let origin = self.frame(console, size, title, false)?;
        let area = Rect::new(origin.x + 1, origin.y + 1, cells(content_width), cells(rows));

        let mut window = Window::initial(rows, values.len());
        loop {
            window = compute_window(selected, window);
            self.draw_values(console, area, values, selected, window)?;

            match console.read_key()? {
                Key::Up | Key::Left => selected = selected.saturating_sub(1),
                Key::Down | Key::Right => selected = (selected + 1).min(last),
                Key::Enter => {
                    debug!(title, selected, "select box closed");
                    return Ok(selected);
                }
                _ => console.bell()?,
            }
        }
    }

    fn draw_values<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        area: Rect,
        values: &[String],
        selected: usize,
        window: Window,
    ) -> io::Result<()> {
        surface.set_colors(self.palette.normal)?;
        fill_rect(surface, area, " ")?;

        let marker_x = area.x + area.width.saturating_sub(1);
        let above = if window.start > 0 { self.glyphs.arrow_up } else { self.glyphs.horizontal };
        let below = if window.end < values.len() { self.glyphs.arrow_down } else { self.glyphs.horizontal };
        draw_text(surface, above, Rect::new(marker_x, area.y - 1, 0, 0))?;
        draw_text(surface, below, Rect::new(marker_x, area.y + area.height, 0, 0))?;

        for (row, index) in window.visible(values.len()).enumerate() {
            if index == selected {
                surface.set_colors(self.palette.selected)?;
            }
            draw_text(surface, &values[index], Rect::new(area.x, area.y + row as u16, 0, 0))?;
            if index == selected {
                surface.set_colors(self.palette.normal)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::Headless;
    use crate::ui::glyphs::Glyphs;
    use crate::ui::theme::Theme;

    fn values(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("Option {i}")).collect()
    }

    fn run<'a>(height: u16, values: &[String], input: &'a [u8], selected: usize) -> (io::Result<usize>, Headless<&'a [u8]>) {
        let palette = Theme::default().palettes().dialog;
        let dialog = Dialog::new(&palette, &Glyphs::ASCII, 0.6);
        let mut console = Headless::new(40, height, input);
        let result = dialog.select_box(&mut console, "Boot", values, selected);
        (result, console)
    }

    #[test]
    fn left_then_enter_moves_up() {
        let (result, _) = run(25, &values(3), b"\x1b[D\r", 1);
        assert_eq!(result.unwrap(), 0);
    }

    #[test]
    fn movement_clamps_at_both_ends() {
        let (result, _) = run(25, &values(3), b"\x1b[A\x1b[A\r", 0);
        assert_eq!(result.unwrap(), 0);
        let (result, _) = run(25, &values(3), b"\x1b[B\x1b[C\x1b[B\r", 1);
        assert_eq!(result.unwrap(), 2);
    }

    #[test]
    fn unknown_keys_ring_the_bell() {
        let (result, console) = run(25, &values(3), b"q\x1bx\r", 2);
        assert_eq!(result.unwrap(), 2);
        // a bare ESC takes the next byte with it
        assert_eq!(console.surface.bells(), 2);
    }

    #[test]
    fn short_list_has_no_arrows() {
        let (_, console) = run(25, &values(3), b"\r", 0);
        // "Option 3" is 8 wide, the title needs 4 + 4: content 10, box 12 x 5
        let origin = (14, 10);
        assert_eq!(console.surface.row_text(origin.1)[14..26], *"+-- Boot --+");
        assert_eq!(console.surface.row_text(origin.1 + 1)[14..26], *"|Option 1  |");
        assert_eq!(console.surface.row_text(origin.1 + 4)[14..26], *"+----------+");
    }

    #[test]
    fn long_list_scrolls_and_shows_arrows() {
        // 10 rows tall: 6 visible of 8, selection walks to the bottom
        let (result, console) = run(10, &values(8), b"\x1b[B\x1b[B\x1b[B\x1b[B\x1b[B\x1b[B\x1b[B\r", 0);
        assert_eq!(result.unwrap(), 7);

        let top = console.surface.row_text(1);
        let bottom = console.surface.row_text(8);
        assert_eq!(console.surface.symbol(24, 1), "^");
        assert_eq!(console.surface.symbol(24, 8), "-");
        assert!(top.contains("Boot"));
        assert!(bottom.starts_with("              +"));
        assert_eq!(console.surface.row_text(2)[15..23], *"Option 3");
        assert_eq!(console.surface.row_text(7)[15..23], *"Option 8");
    }

    #[test]
    fn highlight_follows_the_selected_index() {
        let (_, console) = run(25, &values(3), b"\x1b[B\r", 0);
        let palette = Theme::default().palettes().dialog;
        assert_eq!(console.surface.colors_at(15, 12), Some(palette.selected));
        assert_eq!(console.surface.colors_at(15, 11), Some(palette.normal));
    }
}
