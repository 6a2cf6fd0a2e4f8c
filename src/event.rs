use std::io::{self, Read};

use tracing::trace;

const ESC: char = '\x1b';

/// A decoded keypress.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Enter,
    Esc,
    /// Function key, `1..=12`.
    F(u8),
    Char(char),
}

/// Turns a raw byte stream into [`Key`]s.
///
/// Input is consumed one unit (UTF-8 encoded char) at a time:
///
/// ```text
/// START        \r or \n -> Enter, ESC -> ESCAPE_SEEN, other -> Char
/// ESCAPE_SEEN  [ -> BRACKET_SEEN, other -> Esc (the unit is dropped)
/// BRACKET_SEEN A/B/C/D -> arrows, O..S -> F1..F5,
///              other -> read one more unit, match the pair (15 -> F5 ...)
/// ```
///
/// A bare `ESC` swallows whatever unit follows it, and the `~` that
/// terminates `ESC [ 1 5 ~` style sequences is left in the stream. A
/// truncated UTF-8 sequence decodes to U+FFFD; the byte that cut it short
/// starts the next unit.
#[derive(Debug)]
pub struct KeyDecoder<R> {
    input: R,
    pending: Option<u8>,
}

impl<R: Read> KeyDecoder<R> {
    pub fn new(input: R) -> Self {
        Self { input, pending: None }
    }

    /// Blocks until a sequence resolves to a key. Unmapped function-key
    /// sequences are skipped and reading continues.
    pub fn read_key(&mut self) -> io::Result<Key> {
        loop {
            if let Some(key) = self.decode()? {
                return Ok(key);
            }
        }
    }

    /// Decodes exactly one sequence. `Ok(None)` means the units were read
    /// but did not map to any key.
    pub fn decode(&mut self) -> io::Result<Option<Key>> {
        let key = match self.read_unit()? {
            '\r' | '\n' => Key::Enter,
            ESC => match self.read_unit()? {
                '[' => return self.decode_bracketed(),
                _ => Key::Esc,
            },
            c => Key::Char(c),
        };
        Ok(Some(key))
    }

    fn decode_bracketed(&mut self) -> io::Result<Option<Key>> {
        let key = match self.read_unit()? {
            'A' => Key::Up,
            'B' => Key::Down,
            'C' => Key::Right,
            'D' => Key::Left,
            c @ 'O'..='S' => Key::F(c as u8 - b'O' + 1),
            first => {
                let second = self.read_unit()?;
                let key = function_key(first, second);
                if key.is_none() {
                    trace!(first = ?first, second = ?second, "unmapped escape sequence");
                }
                return Ok(key);
            }
        };
        Ok(Some(key))
    }

    fn read_byte(&mut self) -> io::Result<u8> {
        if let Some(byte) = self.pending.take() {
            return Ok(byte);
        }
        let mut byte = [0u8; 1];
        self.input.read_exact(&mut byte)?;
        Ok(byte[0])
    }

    fn read_unit(&mut self) -> io::Result<char> {
        let mut buf = [0u8; 4];
        buf[0] = self.read_byte()?;
        let len = match buf[0] {
            0xc0..=0xdf => 2,
            0xe0..=0xef => 3,
            0xf0..=0xf7 => 4,
            _ => 1,
        };
        for slot in &mut buf[1..len] {
            let byte = self.read_byte()?;
            if !(0x80..=0xbf).contains(&byte) {
                self.pending = Some(byte);
                return Ok(char::REPLACEMENT_CHARACTER);
            }
            *slot = byte;
        }
        Ok(std::str::from_utf8(&buf[..len])
            .ok()
            .and_then(|s| s.chars().next())
            .unwrap_or(char::REPLACEMENT_CHARACTER))
    }
}

fn function_key(first: char, second: char) -> Option<Key> {
    let n = match (first, second) {
        ('1', '5') => 5,
        ('1', '7') => 6,
        ('1', '8') => 7,
        ('1', '9') => 8,
        ('2', '0') => 9,
        ('2', '1') => 10,
        ('2', '3') => 11,
        ('2', '4') => 12,
        _ => return None,
    };
    Some(Key::F(n))
}
