//! A BIOS-style setup menu for text terminals: tabbed pages of items, a
//! scrolling list with gaps, a help sidebar and modal dialogs, all driven
//! from the keyboard.
//!
//! Menus are plain data. Each top-level page comes from a
//! [`PageGenerator`]; items are [`Item`]s whose [`ItemKind`] decides what
//! Enter does. [`run`] takes over the terminal until an action calls
//! [`ActionContext::request_exit`].

pub mod app;
pub mod config;
pub mod engine;
pub mod error;
pub mod event;
pub mod page;
pub mod terminal;
pub mod ui;

pub use app::{ActionContext, App, run};
pub use config::Config;
pub use error::{Error, Result};
pub use event::{Key, KeyDecoder};
pub use page::{Action, Item, ItemKind, Page, PageGenerator, PageRef, Slot, Value};
pub use terminal::{Console, Headless, RawModeGuard, Terminal};
pub use ui::theme::Theme;
