use std::io::{self, BufWriter, Read, Stdin, Stdout, Write};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::style::{Color as TermColor, Colors, Print, ResetColor, SetColors};
use crossterm::terminal::{
    Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use crossterm::{execute, queue};
use ratatui::layout::{Position, Size};
use ratatui::style::Color;
use tracing::debug;

use crate::event::{Key, KeyDecoder};
use crate::ui::surface::{BufferSurface, Surface};
use crate::ui::theme::ColorPair;

const BEL: &[u8] = b"\x07";

/// A surface that can also block for the next keypress. Everything the
/// engine and the dialogs touch goes through this.
pub trait Console: Surface {
    /// Flushes pending output, then blocks until a key is decoded.
    fn read_key(&mut self) -> io::Result<Key>;
}

/// Raw mode, alternate screen and hidden cursor for as long as the guard
/// lives. Dropping it restores the terminal on every exit path, including
/// unwinding out of an action callback.
#[derive(Debug)]
pub struct RawModeGuard {
    restore: fn(),
}

impl RawModeGuard {
    pub fn acquire() -> io::Result<Self> {
        Self::acquire_with(
            enable_raw_mode,
            || execute!(io::stdout(), EnterAlternateScreen, Hide),
            restore_terminal,
        )
    }

    /// The guard exists as soon as `enable` succeeds, so a failing `enter`
    /// is already covered by `restore`.
    fn acquire_with(
        enable: impl FnOnce() -> io::Result<()>,
        enter: impl FnOnce() -> io::Result<()>,
        restore: fn(),
    ) -> io::Result<Self> {
        enable()?;
        let guard = Self { restore };
        enter()?;
        debug!("raw mode acquired");
        Ok(guard)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        (self.restore)();
        debug!("terminal restored");
    }
}

fn restore_terminal() {
    let _ = execute!(io::stdout(), ResetColor, Clear(ClearType::All), MoveTo(0, 0), Show, LeaveAlternateScreen);
    let _ = disable_raw_mode();
}

/// A real terminal: crossterm escape sequences out, raw bytes in.
pub struct Terminal<W: Write, R: Read> {
    out: W,
    keys: KeyDecoder<R>,
}

impl Terminal<BufWriter<Stdout>, Stdin> {
    pub fn stdio() -> Self {
        Self::new(BufWriter::new(io::stdout()), io::stdin())
    }
}

impl<W: Write, R: Read> Terminal<W, R> {
    pub fn new(out: W, input: R) -> Self {
        Self {
            out,
            keys: KeyDecoder::new(input),
        }
    }
}

impl<W: Write, R: Read> Surface for Terminal<W, R> {
    fn size(&self) -> Size {
        let (width, height) = crossterm::terminal::size().unwrap_or((80, 25));
        Size::new(width, height)
    }

    fn move_to(&mut self, pos: Position) -> io::Result<()> {
        queue!(self.out, MoveTo(pos.x, pos.y))
    }

    fn set_colors(&mut self, colors: ColorPair) -> io::Result<()> {
        queue!(
            self.out,
            SetColors(Colors::new(to_crossterm(colors.fg), to_crossterm(colors.bg)))
        )
    }

    fn print(&mut self, text: &str) -> io::Result<()> {
        queue!(self.out, Print(text))
    }

    fn clear(&mut self) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::Purge), Clear(ClearType::All))
    }

    fn set_cursor_visible(&mut self, visible: bool) -> io::Result<()> {
        if visible {
            queue!(self.out, Show)
        } else {
            queue!(self.out, Hide)
        }
    }

    fn bell(&mut self) -> io::Result<()> {
        self.out.write_all(BEL)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

impl<W: Write, R: Read> Console for Terminal<W, R> {
    fn read_key(&mut self) -> io::Result<Key> {
        self.out.flush()?;
        self.keys.read_key()
    }
}

/// Off-screen console: renders into a [`BufferSurface`] and reads keys
/// from any byte source. Running out of input ends the session with
/// [`io::ErrorKind::UnexpectedEof`].
#[derive(Debug)]
pub struct Headless<R> {
    pub surface: BufferSurface,
    keys: KeyDecoder<R>,
}

impl<R: Read> Headless<R> {
    pub fn new(width: u16, height: u16, input: R) -> Self {
        Self {
            surface: BufferSurface::new(width, height),
            keys: KeyDecoder::new(input),
        }
    }
}

impl<R> Surface for Headless<R> {
    fn size(&self) -> Size {
        self.surface.size()
    }

    fn move_to(&mut self, pos: Position) -> io::Result<()> {
        self.surface.move_to(pos)
    }

    fn set_colors(&mut self, colors: ColorPair) -> io::Result<()> {
        self.surface.set_colors(colors)
    }

    fn print(&mut self, text: &str) -> io::Result<()> {
        self.surface.print(text)
    }

    fn clear(&mut self) -> io::Result<()> {
        self.surface.clear()
    }

    fn set_cursor_visible(&mut self, visible: bool) -> io::Result<()> {
        self.surface.set_cursor_visible(visible)
    }

    fn bell(&mut self) -> io::Result<()> {
        self.surface.bell()
    }

    fn flush(&mut self) -> io::Result<()> {
        self.surface.flush()
    }
}

impl<R: Read> Console for Headless<R> {
    fn read_key(&mut self) -> io::Result<Key> {
        self.keys.read_key()
    }
}

fn to_crossterm(color: Color) -> TermColor {
    match color {
        Color::Reset => TermColor::Reset,
        Color::Black => TermColor::Black,
        Color::Red => TermColor::DarkRed,
        Color::Green => TermColor::DarkGreen,
        Color::Yellow => TermColor::DarkYellow,
        Color::Blue => TermColor::DarkBlue,
        Color::Magenta => TermColor::DarkMagenta,
        Color::Cyan => TermColor::DarkCyan,
        Color::Gray => TermColor::Grey,
        Color::DarkGray => TermColor::DarkGrey,
        Color::LightRed => TermColor::Red,
        Color::LightGreen => TermColor::Green,
        Color::LightYellow => TermColor::Yellow,
        Color::LightBlue => TermColor::Blue,
        Color::LightMagenta => TermColor::Magenta,
        Color::LightCyan => TermColor::Cyan,
        Color::White => TermColor::White,
        Color::Rgb(r, g, b) => TermColor::Rgb { r, g, b },
        Color::Indexed(i) => TermColor::AnsiValue(i),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn output(f: impl FnOnce(&mut Terminal<Vec<u8>, &[u8]>)) -> String {
        let mut terminal = Terminal::new(Vec::new(), &b""[..]);
        f(&mut terminal);
        String::from_utf8(terminal.out).unwrap()
    }

    #[test]
    fn move_to_is_one_based_row_col() {
        let out = output(|t| t.move_to(Position::new(4, 1)).unwrap());
        assert_eq!(out, "\x1b[2;5H");
    }

    #[test]
    fn bell_is_bel_byte() {
        let out = output(|t| t.bell().unwrap());
        assert_eq!(out, "\x07");
    }

    #[test]
    fn print_passes_text_through() {
        let out = output(|t| t.print("[Yes]").unwrap());
        assert_eq!(out, "[Yes]");
    }

    #[test]
    fn classic_colors_map_to_sgr_codes() {
        assert_eq!(to_crossterm(Color::Gray), TermColor::Grey);
        assert_eq!(to_crossterm(Color::White), TermColor::White);
        assert_eq!(to_crossterm(Color::DarkGray), TermColor::DarkGrey);
        assert_eq!(to_crossterm(Color::Blue), TermColor::DarkBlue);
    }

    static RESTORED: AtomicUsize = AtomicUsize::new(0);

    fn count_restore() {
        RESTORED.fetch_add(1, Ordering::SeqCst);
    }

    #[test]
    fn guard_restores_when_screen_setup_fails() {
        let refused = RawModeGuard::acquire_with(|| Err(io::Error::other("not a tty")), || Ok(()), count_restore);
        assert!(refused.is_err());
        assert_eq!(RESTORED.load(Ordering::SeqCst), 0);

        let half_set_up =
            RawModeGuard::acquire_with(|| Ok(()), || Err(io::Error::other("no alternate screen")), count_restore);
        assert!(half_set_up.is_err());
        assert_eq!(RESTORED.load(Ordering::SeqCst), 1);

        drop(RawModeGuard::acquire_with(|| Ok(()), || Ok(()), count_restore));
        assert_eq!(RESTORED.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn read_key_flushes_then_decodes() {
        let mut terminal = Terminal::new(Vec::new(), &b"\x1b[B"[..]);
        terminal.print("x").unwrap();
        assert_eq!(terminal.read_key().unwrap(), Key::Down);
        assert_eq!(terminal.out, b"x");
    }
}
