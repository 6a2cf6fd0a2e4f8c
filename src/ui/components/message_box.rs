use std::io;

use ratatui::layout::{Rect, Size};
use tracing::debug;

use crate::event::Key;
use crate::terminal::Console;
use crate::ui::components::dialog::Dialog;
use crate::ui::draw::{draw_text_block_centered, set_position};
use crate::ui::layout::{cells, fraction};
use crate::ui::surface::Surface;
use crate::ui::text::{measure_max_line_width, measure_wrapped_height, width};

impl Dialog<'_> {
    /// Modal prompt: `text` above a row of `[option]` buttons. Left/Right
    /// move the highlight, Enter returns the highlighted index, any other
    /// key rings the bell.
    pub fn message_box<C: Console + ?Sized>(
        &self,
        console: &mut C,
        title: &str,
        text: &str,
        options: &[&str],
        mut selected: usize,
    ) -> io::Result<usize> {
        let screen = console.size();
        let content_width = fraction(screen.width, self.ratio).min(measure_max_line_width(text));
        let content_height = measure_wrapped_height(text, content_width);
        let size = Size::new(cells(content_width + 4), cells(content_height + 6));

        let origin = self.frame(console, size, title, true)?;
        draw_text_block_centered(
            console,
            text,
            Rect::new(origin.x + 2, origin.y + 1, cells(content_width), cells(content_height + 2)),
            " ",
        )?;

        let strip = Rect::new(origin.x + 1, origin.y + size.height - 2, size.width - 2, 1);
        loop {
            self.draw_options(console, strip, options, selected)?;

            match console.read_key()? {
                Key::Left => selected = selected.saturating_sub(1),
                Key::Right => selected = (selected + 1).min(options.len().saturating_sub(1)),
                Key::Enter => {
                    debug!(title, selected, "message box closed");
                    return Ok(selected);
                }
                _ => console.bell()?,
            }
        }
    }

    /// Buttons share the strip evenly, each centered in a slot as wide as
    /// the longest option.
    fn draw_options<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        strip: Rect,
        options: &[&str],
        selected: usize,
    ) -> io::Result<()> {
        let widest = options.iter().map(|o| width(o)).max().unwrap_or(0);
        let spacing = usize::from(strip.width).saturating_sub(widest * options.len()) / (options.len() + 1);

        surface.set_colors(self.palette.normal)?;
        set_position(surface, strip.x, strip.y)?;
        for (i, option) in options.iter().enumerate() {
            let offset = (widest - width(option)) / 2;
            surface.print(&" ".repeat(spacing + offset))?;

            if i == selected {
                surface.set_colors(self.palette.selected)?;
            }
            surface.print(&format!("[{option}]"))?;
            if i == selected {
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

    fn run(input: &[u8], selected: usize) -> (io::Result<usize>, Headless<&[u8]>) {
        let palette = Theme::default().palettes().dialog;
        let dialog = Dialog::new(&palette, &Glyphs::ASCII, 0.6);
        let mut console = Headless::new(80, 25, input);
        let result = dialog.message_box(&mut console, "Exit", "Save configuration and reset?", &["Yes", "No"], selected);
        (result, console)
    }

    #[test]
    fn right_then_enter_picks_second_option() {
        let (result, _) = run(b"\x1b[C\r", 0);
        assert_eq!(result.unwrap(), 1);
    }

    #[test]
    fn left_and_right_clamp() {
        let (result, _) = run(b"\x1b[D\x1b[D\r", 1);
        assert_eq!(result.unwrap(), 0);
        let (result, _) = run(b"\x1b[C\x1b[C\x1b[C\r", 0);
        assert_eq!(result.unwrap(), 1);
    }

    #[test]
    fn other_keys_ring_the_bell() {
        let (result, console) = run(b"x\x1b[A\r", 0);
        assert_eq!(result.unwrap(), 0);
        assert_eq!(console.surface.bells(), 2);
    }

    #[test]
    fn layout_is_centered_with_button_strip() {
        let (_, console) = run(b"\r", 0);
        let screen = console.surface.text();
        let rows: Vec<&str> = screen.lines().collect();

        // 29 columns of text, one row: a 33 x 7 dialog at (23, 9)
        assert_eq!(&rows[9][23..56], format!("+{} Exit {}+", "-".repeat(12), "-".repeat(13)));
        assert_eq!(&rows[11][23..56], "| Save configuration and reset? |");
        assert!(rows[13][23..].starts_with("+-------"));
        assert!(rows[14].contains("[Yes]"));
        assert!(rows[14].contains("[No]"));
        assert!(rows[15][23..].starts_with("+-------"));
    }

    #[test]
    fn selected_option_is_highlighted() {
        let (_, console) = run(b"\x1b[C\r", 0);
        let palette = Theme::default().palettes().dialog;
        let row = console.surface.row_text(14);
        let no = row.find("[No]").unwrap() as u16;
        let yes = row.find("[Yes]").unwrap() as u16;
        assert_eq!(console.surface.colors_at(no, 14), Some(palette.selected));
        assert_eq!(console.surface.colors_at(yes, 14), Some(palette.normal));
    }
}
