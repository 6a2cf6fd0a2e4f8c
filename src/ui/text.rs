//! Measurement and word wrapping for fixed-width text.
//!
//! Every code point is assumed to occupy exactly one terminal column.

use std::borrow::Cow;

use textwrap::{Options, WordSeparator};

/// Number of columns `text` occupies on a single line.
pub fn width(text: &str) -> usize {
    text.chars().count()
}

/// Greedy word wrap. Each logical line is wrapped on its own, words longer
/// than `width` are broken across lines, and empty logical lines produce
/// nothing.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let options = Options::new(width.max(1))
        .break_words(true)
        .word_separator(WordSeparator::AsciiSpace);

    text.lines()
        .flat_map(|line| textwrap::wrap(line, &options))
        .filter(|line| !line.is_empty())
        .map(Cow::into_owned)
        .collect()
}

/// Width of the longest logical line, unwrapped.
pub fn measure_max_line_width(text: &str) -> usize {
    text.lines().map(width).max().unwrap_or(0)
}

/// Number of rows `text` needs once wrapped to `width`.
pub fn measure_wrapped_height(text: &str, width: usize) -> usize {
    wrap(text, width).len()
}

/// Left and right padding that centers `len` columns in `total`.
/// The odd column, if any, goes to the right.
pub fn centering(len: usize, total: usize) -> (usize, usize) {
    let extra = total.saturating_sub(len);
    (extra / 2, extra - extra / 2)
}
