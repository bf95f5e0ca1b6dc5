use crate::api::{Fortune, NameCandidate, SuggestOptions, SuggestRequest};
use std::fmt;
use uuid::Uuid;

/// The four sequential screens of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Input,
    Selection,
    Meaning,
    Fortune,
}

impl Screen {
    pub fn title(self) -> &'static str {
        match self {
            Screen::Input => "Your Name",
            Screen::Selection => "Choose a Name",
            Screen::Meaning => "Name Meaning",
            Screen::Fortune => "Today's Fortune",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Screen::Input => "input",
            Screen::Selection => "selection",
            Screen::Meaning => "meaning",
            Screen::Fortune => "fortune",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gender {
    Male,
    Female,
    #[default]
    Neutral,
}

impl Gender {
    /// Display order of the radio group.
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Neutral];

    /// Wire value sent to the backend.
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Neutral => "neutral",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Neutral => "Neutral",
        }
    }
}

/// Thematic tags offered by the form: `(wire value, English label)`.
pub const TAG_CHOICES: [(&str, &str); 6] = [
    ("밝음", "Brightness"),
    ("지혜", "Wisdom"),
    ("용기", "Courage"),
    ("평화", "Peace"),
    ("사랑", "Love"),
    ("건강", "Health"),
];

/// Tags checked by default and sent whenever none are selected.
pub const DEFAULT_TAGS: [&str; 2] = ["밝음", "지혜"];

pub fn default_tags() -> Vec<String> {
    DEFAULT_TAGS.iter().map(|t| (*t).to_string()).collect()
}

/// Replace an empty tag list with [`DEFAULT_TAGS`].
pub fn effective_tags(tags: Vec<String>) -> Vec<String> {
    if tags.is_empty() {
        default_tags()
    } else {
        tags
    }
}

/// English label for a tag value, falling back to the value itself.
pub fn tag_label(value: &str) -> &str {
    TAG_CHOICES
        .iter()
        .find(|(v, _)| *v == value)
        .map_or(value, |(_, label)| label)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserOptions {
    pub gender: Gender,
    pub tags: Vec<String>,
    /// Opt-in to logging the chosen name on the server.
    pub save: bool,
}

impl Default for UserOptions {
    fn default() -> Self {
        Self {
            gender: Gender::default(),
            tags: default_tags(),
            save: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserData {
    pub first_name: String,
    pub last_name: String,
    pub options: UserOptions,
}

impl UserData {
    pub fn to_request(&self) -> SuggestRequest {
        SuggestRequest {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            options: SuggestOptions {
                gender: self.options.gender.as_str().to_string(),
                tags: self.options.tags.clone(),
                save: self.options.save,
            },
        }
    }

    /// "FIRST LAST" in upper case, as shown next to the transliteration.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_uppercase()
    }
}

/// Everything one run of the client remembers.
///
/// Only [`crate::session::Controller`] mutates a session; readers get
/// accessors so the selection invariants cannot be broken from outside.
#[derive(Debug, Clone)]
pub struct Session {
    pub(super) screen: Screen,
    pub(super) user_data: UserData,
    pub(super) candidates: Vec<NameCandidate>,
    pub(super) selected_name: Option<NameCandidate>,
    pub(super) selected_card: Option<usize>,
    pub(super) session_id: String,
    pub(super) current_tags: Vec<String>,
    pub(super) fortune: Option<Fortune>,
}

impl Session {
    pub fn new() -> Self {
        Self::with_session_id(generate_session_id())
    }

    pub fn with_session_id(session_id: impl Into<String>) -> Self {
        Self {
            screen: Screen::Input,
            user_data: UserData::default(),
            candidates: Vec::new(),
            selected_name: None,
            selected_card: None,
            session_id: session_id.into(),
            current_tags: Vec::new(),
            fortune: None,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn user_data(&self) -> &UserData {
        &self.user_data
    }

    pub fn candidates(&self) -> &[NameCandidate] {
        &self.candidates
    }

    pub fn selected_name(&self) -> Option<&NameCandidate> {
        self.selected_name.as_ref()
    }

    /// Index of the card carrying the "selected" mark, if any.
    pub fn selected_card(&self) -> Option<usize> {
        self.selected_card
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn current_tags(&self) -> &[String] {
        &self.current_tags
    }

    pub fn fortune(&self) -> Option<&Fortune> {
        self.fortune.as_ref()
    }

    pub(super) fn clear_selection(&mut self) {
        self.selected_name = None;
        self.selected_card = None;
    }

    pub(super) fn reset(&mut self) {
        self.clear_selection();
        self.candidates.clear();
        self.fortune = None;
        self.screen = Screen::Input;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

fn generate_session_id() -> String {
    format!("session_{}", Uuid::new_v4().simple())
}
