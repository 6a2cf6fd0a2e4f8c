pub mod components;
pub mod draw;
pub mod glyphs;
pub mod layout;
pub mod surface;
pub mod text;
pub mod theme;
