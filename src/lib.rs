//! TUI Othello (workspace facade crate).
//!
//! The rules engine, input mapping and terminal rendering live in dedicated
//! crates under `crates/`; this package re-exports them as
//! `tui_othello::{core,input,term,types}` and adds the pieces that tie them
//! together for the binary: the [`app::App`] controller, environment
//! [`config`], and [`logging`] setup.

pub use othello_core as core;
pub use othello_input as input;
pub use othello_term as term;
pub use othello_types as types;

pub mod app;
pub mod config;
pub mod logging;

pub use app::App;
pub use config::AppConfig;
