//! Geometry primitives. Every call takes absolute, 0-based screen
//! coordinates and paints with whatever colors the surface currently has.
//!
//! Zero or undersized rectangles are a caller error: output is undefined
//! but nothing panics, since all arithmetic saturates.

use std::io;

use ratatui::layout::{Position, Rect};

use crate::ui::glyphs::Glyphs;
use crate::ui::surface::Surface;
use crate::ui::text;

pub fn set_position<S: Surface + ?Sized>(surface: &mut S, x: u16, y: u16) -> io::Result<()> {
    surface.move_to(Position::new(x, y))
}

pub fn fill_rect<S: Surface + ?Sized>(surface: &mut S, area: Rect, glyph: &str) -> io::Result<()> {
    let line = glyph.repeat(usize::from(area.width));
    for y in area.y..area.y.saturating_add(area.height) {
        set_position(surface, area.x, y)?;
        surface.print(&line)?;
    }
    Ok(())
}

/// One frame row: `[left, fill, junction, right]`, with `junction` at each
/// column offset listed in `splits`.
fn box_line(width: u16, splits: &[u16], [left, fill, junction, right]: [&str; 4]) -> String {
    (0..width)
        .map(|col| {
            if col == 0 {
                left
            } else if col == width - 1 {
                right
            } else if splits.contains(&col) {
                junction
            } else {
                fill
            }
        })
        .collect()
}

/// Draws a frame around `area`, clearing its interior.
///
/// `vertical_splits` are column offsets from `area.x` where a divider runs
/// from the top border to the bottom border. `horizontal_splits` are row
/// offsets from `area.y` where a full-width divider replaces the plain row;
/// a split at `height - 3` sets off a one-row button strip above the bottom
/// border.
pub fn draw_box<S: Surface + ?Sized>(
    surface: &mut S,
    area: Rect,
    vertical_splits: &[u16],
    horizontal_splits: &[u16],
    glyphs: &Glyphs,
) -> io::Result<()> {
    if area.width < 2 || area.height < 2 {
        return Ok(());
    }

    let g = glyphs;
    let top = box_line(area.width, vertical_splits, [g.top_left, g.horizontal, g.tee_down, g.top_right]);
    let middle = box_line(area.width, vertical_splits, [g.vertical, " ", g.vertical, g.vertical]);
    let divider = box_line(area.width, vertical_splits, [g.tee_right, g.horizontal, g.cross, g.tee_left]);
    let bottom = box_line(area.width, vertical_splits, [g.bottom_left, g.horizontal, g.tee_up, g.bottom_right]);

    set_position(surface, area.x, area.y)?;
    surface.print(&top)?;

    for row in 1..area.height - 1 {
        set_position(surface, area.x, area.y + row)?;
        if horizontal_splits.contains(&row) {
            surface.print(&divider)?;
        } else {
            surface.print(&middle)?;
        }
    }

    set_position(surface, area.x, area.y + area.height - 1)?;
    surface.print(&bottom)
}

/// A lone `├───┤` divider, for splitting a region inside an existing frame.
pub fn draw_hsplit<S: Surface + ?Sized>(
    surface: &mut S,
    x: u16,
    y: u16,
    width: u16,
    glyphs: &Glyphs,
) -> io::Result<()> {
    if width < 2 {
        return Ok(());
    }
    set_position(surface, x, y)?;
    surface.print(&box_line(width, &[], [glyphs.tee_right, glyphs.horizontal, glyphs.cross, glyphs.tee_left]))
}

/// With a zero-sized `area` the text is printed verbatim at its origin.
/// Otherwise it is wrapped to `area.width` and painted downward from
/// `area.y`; rows past `area.height` are not clipped.
pub fn draw_text<S: Surface + ?Sized>(surface: &mut S, text: &str, area: Rect) -> io::Result<()> {
    if area.width == 0 && area.height == 0 {
        set_position(surface, area.x, area.y)?;
        return surface.print(text);
    }

    for (row, line) in text::wrap(text, usize::from(area.width)).iter().enumerate() {
        set_position(surface, area.x, area.y.saturating_add(row as u16))?;
        surface.print(line)?;
    }
    Ok(())
}

fn print_centered<S: Surface + ?Sized>(surface: &mut S, line: &str, width: u16, pad: &str) -> io::Result<()> {
    let (left, right) = text::centering(text::width(line), usize::from(width));
    surface.print(&pad.repeat(left))?;
    surface.print(line)?;
    surface.print(&pad.repeat(right))
}

/// Single line centered across `area.width`, padded on both sides with `pad`.
pub fn draw_text_centered<S: Surface + ?Sized>(
    surface: &mut S,
    text: &str,
    area: Rect,
    pad: &str,
) -> io::Result<()> {
    set_position(surface, area.x, area.y)?;
    print_centered(surface, text, area.width, pad)
}

/// Wraps `text` to `area.width`, centers it vertically within
/// `area.height` rows and horizontally within each row. Every one of the
/// `area.height` rows is painted.
pub fn draw_text_block_centered<S: Surface + ?Sized>(
    surface: &mut S,
    text: &str,
    area: Rect,
    pad: &str,
) -> io::Result<()> {
    let lines = text::wrap(text, usize::from(area.width));
    let (above, _) = text::centering(lines.len(), usize::from(area.height));

    for row in 0..area.height {
        let line = usize::from(row)
            .checked_sub(above)
            .and_then(|i| lines.get(i))
            .map_or("", String::as_str);
        set_position(surface, area.x, area.y + row)?;
        print_centered(surface, line, area.width, pad)?;
    }
    Ok(())
}
