//! # Backend API
//!
//! Wire models and the HTTP client for the Naeilum backend.
//!
//! ## Endpoints
//!
//! | Method | Path                  | Purpose                                   |
//! |--------|-----------------------|-------------------------------------------|
//! | POST   | `/api/suggest-names`  | Generate name candidates for a user       |
//! | POST   | `/api/log-selection`  | Record the chosen name (opt-in only)      |
//! | POST   | `/api/fortune`        | Draw a fortune for a set of tags          |
//! | GET    | `/health`             | Liveness probe                            |
//!
//! The [`NaeilumApi`] trait is the seam the session controller talks to;
//! [`HttpApi`] is the production implementation backed by `reqwest`.

pub mod client;
pub mod error;
pub mod models;

pub use client::{HttpApi, NaeilumApi};
pub use error::ApiError;
pub use models::{
    FamilyName, Fortune, FortuneRequest, HealthStatus, NameCandidate, SelectionLog, Syllable,
    SuggestOptions, SuggestRequest,
};
