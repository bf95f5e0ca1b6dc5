//! Request and response bodies exchanged with the backend.
//!
//! Outgoing requests use the backend's camelCase keys; the candidate and
//! fortune payloads it returns are snake_case.

use serde::{Deserialize, Serialize};

/// Family-name part of a candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilyName {
    pub korean: String,
    pub hanja: String,
    pub meaning: String,
}

/// One syllable of a given name with its hanja and meaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Syllable {
    pub syllable: String,
    pub hanja: String,
    pub meaning: String,
}

/// A generated Korean name option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameCandidate {
    /// Romanized form, e.g. `Song Wil-Seon`.
    pub name_en: String,
    /// Hangul form, e.g. `송월선`.
    pub name_kr: String,
    /// One hanja glyph per syllable, family name first.
    #[serde(default)]
    pub hanja: Vec<String>,
    pub family_name: FamilyName,
    #[serde(default)]
    pub given_name: Vec<Syllable>,
    #[serde(default)]
    pub summary: String,
}

impl NameCandidate {
    /// Hanja glyphs joined for display, e.g. `宋蔚宣`.
    pub fn hanja_string(&self) -> String {
        self.hanja.concat()
    }
}

/// A fortune drawn by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fortune {
    pub date: String,
    pub cosmic_cookie: String,
    pub lucky_snack: String,
    pub deeper_look: String,
}

/// `options` object of a suggestion request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestOptions {
    pub gender: String,
    pub tags: Vec<String>,
    pub save: bool,
}

/// Body of `POST /api/suggest-names`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestRequest {
    pub first_name: String,
    pub last_name: String,
    pub options: SuggestOptions,
}

/// Body of `POST /api/log-selection`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionLog {
    pub session_id: String,
    pub first_name: String,
    pub last_name: String,
    pub chosen_name: String,
    pub chosen_hanja: Vec<String>,
    pub tags: Vec<String>,
    pub save: bool,
}

/// Body of `POST /api/fortune`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FortuneRequest {
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct SuggestResponse {
    pub success: bool,
    #[serde(default)]
    pub candidates: Option<Vec<NameCandidate>>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct FortuneResponse {
    pub success: bool,
    #[serde(default)]
    pub fortune: Option<Fortune>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub timestamp: Option<String>,
}
