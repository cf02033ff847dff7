//! TUI pane rendering modules
//!
//! - [`input`]: the text being converted, with a cursor at the end
//! - [`output`]: generated C++ (highlighted) or the conversion error
//! - [`status`]: status bar with the active target and keybindings
//!
//! Each module exports one stateless `render_*` function; scroll offsets live
//! in [`App`](crate::ui::App) and are clamped here.

pub mod input;
pub mod output;
pub mod status;

pub use input::render_input_pane;
pub use output::render_output_pane;
pub use status::render_status_bar;
