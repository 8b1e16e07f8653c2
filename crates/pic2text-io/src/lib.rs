pub mod clipboard;
pub mod picker;
