use crate::session::{ControllerError, Screen, Session, UserData};
use crate::ui::form::{FormField, InputForm};
use crate::ui::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Shown whenever a backend call fails; the user can simply try again.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

/// What the event loop should do in response to a key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    None,
    Quit,
    Submit(UserData),
    SelectCard(usize),
    Preview,
    Confirm,
    RequestFortune,
    MoreFortunes,
    Restart,
}

impl Action {
    /// Actions that wait on the backend.
    pub fn is_network(&self) -> bool {
        matches!(
            self,
            Action::Submit(_) | Action::RequestFortune | Action::MoreFortunes
        )
    }
}

/// Terminal-side view state. Session data lives in the controller.
pub struct App {
    pub form: InputForm,
    /// Highlighted card on the selection screen.
    pub card_cursor: usize,
    /// Blocking message; all keys but Enter/Esc are ignored while set.
    pub alert: Option<String>,
    pub should_quit: bool,
    pub theme: Theme,
    pub server_url: String,
    pub spinner_tick: usize,
}

impl App {
    pub fn new(theme: Theme, server_url: String) -> Self {
        Self {
            form: InputForm::new(),
            card_cursor: 0,
            alert: None,
            should_quit: false,
            theme,
            server_url,
            spinner_tick: 0,
        }
    }

    pub fn show_alert(&mut self, message: impl Into<String>) {
        self.alert = Some(message.into());
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    /// Clear the form, collapse the options panel and reset the card cursor.
    pub fn restart(&mut self) {
        self.form.clear();
        self.card_cursor = 0;
        self.alert = None;
    }

    /// React to the result of a dispatched action.
    pub fn apply_outcome(&mut self, outcome: Result<(), ControllerError>) {
        match outcome {
            Ok(()) => {}
            Err(err) if err.is_api() => self.show_alert(GENERIC_FAILURE_MESSAGE),
            Err(ControllerError::NoCandidates) => {
                self.show_alert("There are no names to preview yet.");
            }
            Err(_) => {}
        }
    }

    pub fn cursor_down(&mut self, count: usize) {
        if count > 0 {
            self.card_cursor = (self.card_cursor + 1) % count;
        }
    }

    pub fn cursor_up(&mut self, count: usize) {
        if count > 0 {
            self.card_cursor = if self.card_cursor == 0 {
                count - 1
            } else {
                (self.card_cursor - 1).min(count - 1)
            };
        }
    }

    /// Translate a key press into an [`Action`] for the current screen.
    pub fn handle_key(&mut self, key: KeyEvent, session: &Session) -> Action {
        if key.kind != KeyEventKind::Press {
            return Action::None;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Action::Quit;
        }

        if self.alert.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.dismiss_alert();
            }
            return Action::None;
        }

        match session.screen() {
            Screen::Input => self.handle_input_key(key),
            Screen::Selection => self.handle_selection_key(key, session),
            Screen::Meaning => match key.code {
                KeyCode::Char('f') | KeyCode::Enter => Action::RequestFortune,
                code => Self::handle_common_key(code),
            },
            Screen::Fortune => match key.code {
                KeyCode::Char('m') | KeyCode::Enter => Action::MoreFortunes,
                code => Self::handle_common_key(code),
            },
        }
    }

    fn handle_common_key(code: KeyCode) -> Action {
        match code {
            KeyCode::Char('r') | KeyCode::Char('R') => Action::Restart,
            KeyCode::Char('q') | KeyCode::Char('Q') => Action::Quit,
            _ => Action::None,
        }
    }

    fn handle_input_key(&mut self, key: KeyEvent) -> Action {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('o') {
            self.form.toggle_options();
            return Action::None;
        }

        let focus = self.form.focus;
        match key.code {
            KeyCode::Tab | KeyCode::Down => self.form.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.form.focus_prev(),
            KeyCode::Esc if self.form.options_open => self.form.toggle_options(),
            KeyCode::Enter => match focus {
                FormField::Options => self.form.toggle_options(),
                _ => return self.submit_form(),
            },
            KeyCode::Backspace => self.form.pop_char(),
            KeyCode::Left if focus == FormField::Gender => self.form.cycle_gender(false),
            KeyCode::Right if focus == FormField::Gender => self.form.cycle_gender(true),
            KeyCode::Char(c) if focus.is_text() => self.form.push_char(c),
            KeyCode::Char(' ') => self.form.toggle_focused(),
            KeyCode::Char('o') => self.form.toggle_options(),
            KeyCode::Char(c) => return Self::handle_common_key(KeyCode::Char(c)),
            _ => {}
        }
        Action::None
    }

    fn submit_form(&mut self) -> Action {
        match self.form.validate() {
            Ok(()) => {
                self.card_cursor = 0;
                Action::Submit(self.form.collect())
            }
            Err(err) => {
                self.show_alert(err.to_string());
                Action::None
            }
        }
    }

    fn handle_selection_key(&mut self, key: KeyEvent, session: &Session) -> Action {
        let count = session.candidates().len();
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                self.cursor_down(count);
                Action::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.cursor_up(count);
                Action::None
            }
            KeyCode::Char(' ') if count > 0 => Action::SelectCard(self.card_cursor.min(count - 1)),
            KeyCode::Char('p') => Action::Preview,
            // Confirm stays disabled until a card is selected.
            KeyCode::Enter | KeyCode::Char('c') if session.selected_card().is_some() => {
                Action::Confirm
            }
            code => Self::handle_common_key(code),
        }
    }
}
