//! Naeilum TUI - find a Korean name and read your fortune from the terminal
//!
//! This library provides the backend client, the session state machine that
//! walks a user from name input to fortune, and the terminal UI on top.

pub mod api;
pub mod logging;
pub mod session;
pub mod ui;
