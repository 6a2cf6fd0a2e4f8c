use std::ops::Range;

/// Half-open range of list indices currently visible on screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Window {
    pub start: usize,
    pub end: usize,
}

impl Window {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// The window a list of `total` entries starts with: its first `rows`
    /// entries, or all of them when the list is shorter.
    pub fn initial(rows: usize, total: usize) -> Self {
        Self::new(0, rows.min(total))
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn contains(&self, index: usize) -> bool {
        self.start <= index && index < self.end
    }

    /// Indices that actually exist in a list of `total` entries.
    pub fn visible(&self, total: usize) -> Range<usize> {
        self.start.min(total)..self.end.min(total)
    }
}

/// Scrolls `previous` by the least amount that brings `selected` into view.
/// The window length never changes.
pub fn compute_window(selected: usize, previous: Window) -> Window {
    if selected < previous.start {
        let shift = previous.start - selected;
        Window::new(previous.start - shift, previous.end - shift)
    } else if selected >= previous.end {
        let shift = selected - previous.end + 1;
        Window::new(previous.start + shift, previous.end + shift)
    } else {
        previous
    }
}

/// Scrollbar thumb, in rows, relative to the track below the up arrow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Thumb {
    pub offset: usize,
    pub height: usize,
}

/// Thumb geometry for a `height`-row scrollbar over `total` entries, or
/// `None` when everything fits and no scrollbar is drawn.
///
/// `thumb = floor(height / total * (height - 2))`,
/// `offset = floor(selected / total * (height - thumb - 1))`.
pub fn scrollbar_thumb(height: usize, total: usize, selected: usize) -> Option<Thumb> {
    if total <= height || height < 2 {
        return None;
    }
    let thumb = height * (height - 2) / total;
    let offset = selected.min(total) * (height - thumb - 1) / total;
    Some(Thumb { offset, height: thumb })
}
