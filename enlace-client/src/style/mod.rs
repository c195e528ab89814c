//! Styling for the dashboard
//!
//! Layout constants, window dimensions, palette helpers and widget style
//! functions. Everything derives from the active iced theme palette so any
//! built-in theme renders correctly.

mod layout;
mod shaping;
mod ui;
mod widgets;
mod window;

pub use layout::*;
pub use shaping::{shaped_text, shaped_text_wrapped};
pub use widgets::*;
pub use window::*;
