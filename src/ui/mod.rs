//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into four layers:
//!
//! - **[`app`]**: application state, keyboard event loop, pane focus, autoplay ticks
//! - **[`session`]**: the input being visualized and how to regenerate it
//! - **[`panes`]**: stateless render functions for each visible pane (bars, graph,
//!   tree, details, log, status bar)
//! - **[`theme`]**: centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: build it from a parsed
//! [`Command`](crate::config::Command) and call [`App::run`] to start the event loop.
//!
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod session;
pub mod theme;

pub use app::App;
