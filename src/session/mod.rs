//! # Session Module
//!
//! Session state and the controller that moves it between screens.
//!
//! ## Flow
//!
//! ```text
//!   Input ──submit──▶ Selection ──preview / confirm──▶ Meaning ──fortune──▶ Fortune
//!     ▲                  │ select_card (stays)                              │ more_fortunes (stays)
//!     └──────────────────┴──────────────── restart ─────────────────────────┘
//! ```
//!
//! - [`Controller`] owns the [`Session`] and performs the network calls
//! - [`LoadingOverlay`] tracks whether a call is in flight
//! - [`transliterate()`] renders a Latin name in Hangul for display

mod controller;
mod loading;
mod state;
pub mod transliterate;

pub use controller::{Controller, ControllerError};
pub use loading::{LoadingGuard, LoadingOverlay};
pub use state::{
    default_tags, effective_tags, tag_label, Gender, Screen, Session, UserData, UserOptions,
    DEFAULT_TAGS, TAG_CHOICES,
};
pub use transliterate::{transliterate, transliterate_full};
