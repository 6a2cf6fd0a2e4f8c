pub mod selection;
pub mod window;

pub use selection::{Direction, first_selectable, next_selectable};
pub use window::{Thumb, Window, compute_window, scrollbar_thumb};
