use std::io;

use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect, Size};
use ratatui::style::Color;

use crate::ui::theme::ColorPair;

/// The output half of the terminal boundary: cursor addressing, color
/// selection and raw text. Implementations keep no state beyond the cursor
/// position and the colors set by the most recent calls.
pub trait Surface {
    fn size(&self) -> Size;
    fn move_to(&mut self, pos: Position) -> io::Result<()>;
    fn set_colors(&mut self, colors: ColorPair) -> io::Result<()>;
    fn print(&mut self, text: &str) -> io::Result<()>;
    fn clear(&mut self) -> io::Result<()>;
    fn set_cursor_visible(&mut self, visible: bool) -> io::Result<()>;
    fn bell(&mut self) -> io::Result<()>;
    fn flush(&mut self) -> io::Result<()>;
}

/// An in-memory surface over a ratatui [`Buffer`]. Text printed past the
/// right edge or below the bottom row is dropped instead of wrapping.
#[derive(Debug)]
pub struct BufferSurface {
    buffer: Buffer,
    cursor: Position,
    colors: ColorPair,
    cursor_visible: bool,
    bells: usize,
}

impl BufferSurface {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            buffer: Buffer::empty(Rect::new(0, 0, width, height)),
            cursor: Position::new(0, 0),
            colors: ColorPair::new(Color::Reset, Color::Reset),
            cursor_visible: true,
            bells: 0,
        }
    }

    pub fn cursor(&self) -> Position {
        self.cursor
    }

    pub fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    pub fn bells(&self) -> usize {
        self.bells
    }

    pub fn symbol(&self, x: u16, y: u16) -> &str {
        self.buffer.cell((x, y)).map_or("", |cell| cell.symbol())
    }

    pub fn colors_at(&self, x: u16, y: u16) -> Option<ColorPair> {
        self.buffer
            .cell((x, y))
            .map(|cell| ColorPair::new(cell.fg, cell.bg))
    }

    /// Row `y` as a string, one symbol per column.
    pub fn row_text(&self, y: u16) -> String {
        (0..self.buffer.area.width)
            .map(|x| match self.symbol(x, y) {
                "" => " ",
                symbol => symbol,
            })
            .collect()
    }

    /// Whole screen, rows joined with `\n`.
    pub fn text(&self) -> String {
        (0..self.buffer.area.height)
            .map(|y| self.row_text(y))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Surface for BufferSurface {
    fn size(&self) -> Size {
        Size::new(self.buffer.area.width, self.buffer.area.height)
    }

    fn move_to(&mut self, pos: Position) -> io::Result<()> {
        self.cursor = pos;
        Ok(())
    }

    fn set_colors(&mut self, colors: ColorPair) -> io::Result<()> {
        self.colors = colors;
        Ok(())
    }

    fn print(&mut self, text: &str) -> io::Result<()> {
        let mut utf8 = [0u8; 4];
        for ch in text.chars() {
            if let Some(cell) = self.buffer.cell_mut(self.cursor) {
                cell.set_symbol(ch.encode_utf8(&mut utf8))
                    .set_fg(self.colors.fg)
                    .set_bg(self.colors.bg);
            }
            self.cursor.x = self.cursor.x.saturating_add(1);
        }
        Ok(())
    }

    fn clear(&mut self) -> io::Result<()> {
        self.buffer.reset();
        Ok(())
    }

    fn set_cursor_visible(&mut self, visible: bool) -> io::Result<()> {
        self.cursor_visible = visible;
        Ok(())
    }

    fn bell(&mut self) -> io::Result<()> {
        self.bells += 1;
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
