mod edit_mode;
mod editor_utils;
mod entry_mode;
mod show_mode;

pub use edit_mode::edit_mode;
pub use entry_mode::{SetFields, entry_mode, remove_photo_mode, set_mode};
pub use show_mode::show_mode;
