//! Terminal playground built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]** — application state, keyboard event loop, target and option switching
//! - **[`panes`]** — stateless render functions for the input, output and status panes
//! - **[`theme`]** — centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with [`App::with_target`] and
//! call [`App::run`] to start the event loop. The output is regenerated after every edit.

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
