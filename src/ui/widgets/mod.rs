//! Widgets used to draw the inline picker

mod emoji_row;
mod help_bar;
mod search_bar;

pub use emoji_row::EmojiRow;
pub use help_bar::{HelpBar, KeyHint};
pub use search_bar::SearchBar;
