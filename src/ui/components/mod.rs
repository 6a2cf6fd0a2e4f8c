pub mod dialog;
pub mod help_panel;
pub mod item_list;
pub mod message_box;
pub mod scrollbar;
pub mod select_box;
pub mod tabs;
