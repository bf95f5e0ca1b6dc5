//! # UI Module
//!
//! Terminal user interface for Naeilum.
//!
//! ## Components
//!
//! - [`App`] - View state (form, card cursor, alert) and key handling
//! - [`mod@render`] - Drawing functions for each screen and overlay
//! - [`form`] - The input form model
//! - [`theme`] / [`config`] - Colors and persisted settings
//!
//! ## Layout
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │  NAEILUM · <screen title>        <server url>   │
//! ├─────────────────────────────────────────────────┤
//! │                                                 │
//! │      Input | Selection | Meaning | Fortune      │
//! │              ┌──────────────────┐               │
//! │              │ loading / alert  │               │
//! │              └──────────────────┘               │
//! ├─────────────────────────────────────────────────┤
//! │ key hints                                       │
//! └─────────────────────────────────────────────────┘
//! ```

pub mod app;
pub mod config;
pub mod form;
pub mod render;
pub mod theme;

pub use app::{Action, App};
pub use render::render;
