pub use crate::tui::layout::{Layout, Region, Side};
pub use crate::tui::term::Term;
pub use crate::tui::text::Text;
pub use crate::tui::tree::Tree;
pub use crossterm::event::{Event, KeyCode};

mod layout;
pub mod status;
mod term;
mod text;
mod tree;
