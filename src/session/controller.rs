use crate::api::{ApiError, Fortune, FortuneRequest, NaeilumApi, NameCandidate, SelectionLog};
use crate::session::loading::LoadingOverlay;
use crate::session::state::{effective_tags, Screen, Session, UserData};
use std::sync::Arc;
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

#[derive(Debug, Error)]
pub enum ControllerError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("cannot {operation} from the {from} screen")]
    InvalidTransition {
        from: Screen,
        operation: &'static str,
    },
    #[error("no candidate at position {0}")]
    NoSuchCandidate(usize),
    #[error("there are no candidates to preview")]
    NoCandidates,
    #[error("no name has been selected")]
    NothingSelected,
}

impl ControllerError {
    /// Whether the failure came from the backend (and deserves an alert).
    pub fn is_api(&self) -> bool {
        matches!(self, ControllerError::Api(_))
    }
}

/// Drives one session through input → selection → meaning → fortune.
///
/// The controller is the only writer of its [`Session`]. Network-bound
/// operations are `async` and show the [`LoadingOverlay`] for exactly the
/// duration of the call.
pub struct Controller<A> {
    api: Arc<A>,
    session: Session,
    loading: LoadingOverlay,
}

impl<A> Controller<A>
where
    A: NaeilumApi + 'static,
{
    pub fn new(api: Arc<A>) -> Self {
        Self::with_session(api, Session::new())
    }

    pub fn with_session(api: Arc<A>, session: Session) -> Self {
        Self {
            api,
            session,
            loading: LoadingOverlay::new(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn loading(&self) -> &LoadingOverlay {
        &self.loading
    }

    fn expect_screen(
        &self,
        expected: Screen,
        operation: &'static str,
    ) -> Result<(), ControllerError> {
        if self.session.screen == expected {
            Ok(())
        } else {
            Err(ControllerError::InvalidTransition {
                from: self.session.screen,
                operation,
            })
        }
    }

    /// Submit the input form and fetch name candidates.
    ///
    /// Names are trimmed and an empty tag list is replaced by the default
    /// pair before anything is sent. On failure the screen stays on input.
    pub async fn submit(&mut self, data: UserData) -> Result<(), ControllerError> {
        self.expect_screen(Screen::Input, "submit the form")?;

        let mut data = data;
        data.first_name = data.first_name.trim().to_string();
        data.last_name = data.last_name.trim().to_string();
        data.options.tags = effective_tags(data.options.tags);

        self.session.current_tags = data.options.tags.clone();
        let request = data.to_request();
        self.session.user_data = data;

        let result = {
            let _loading = self.loading.show();
            self.api.suggest_names(&request).await
        };

        match result {
            Ok(candidates) => {
                info!(count = candidates.len(), "received name candidates");
                self.session.candidates = candidates;
                self.session.clear_selection();
                self.session.screen = Screen::Selection;
                Ok(())
            }
            Err(err) => {
                error!(error = %err, "name suggestion failed");
                Err(err.into())
            }
        }
    }

    /// Mark the card at `index` as selected, replacing any earlier mark.
    pub fn select_card(&mut self, index: usize) -> Result<&NameCandidate, ControllerError> {
        self.expect_screen(Screen::Selection, "select a name")?;

        let candidate = self
            .session
            .candidates
            .get(index)
            .cloned()
            .ok_or(ControllerError::NoSuchCandidate(index))?;

        self.session.selected_card = Some(index);
        Ok(self.session.selected_name.insert(candidate))
    }

    /// Show the meaning screen, defaulting to the first candidate when
    /// nothing was picked.
    pub fn preview(&mut self) -> Result<(), ControllerError> {
        self.expect_screen(Screen::Selection, "preview a name")?;

        if self.session.selected_name.is_none() {
            let first = self
                .session
                .candidates
                .first()
                .cloned()
                .ok_or(ControllerError::NoCandidates)?;
            self.session.selected_name = Some(first);
            self.session.selected_card = Some(0);
        }

        self.session.screen = Screen::Meaning;
        Ok(())
    }

    /// Confirm the selected name and move to the meaning screen.
    ///
    /// When the user opted in to saving, the choice is logged in a detached
    /// task whose failure is only written to the log. The task handle is
    /// returned for callers that want to wait for it.
    pub fn confirm(&mut self) -> Result<Option<JoinHandle<()>>, ControllerError> {
        self.expect_screen(Screen::Selection, "confirm a name")?;

        let chosen = self
            .session
            .selected_name
            .as_ref()
            .ok_or(ControllerError::NothingSelected)?;

        let handle = if self.session.user_data.options.save {
            let log = SelectionLog {
                session_id: self.session.session_id.clone(),
                first_name: self.session.user_data.first_name.clone(),
                last_name: self.session.user_data.last_name.clone(),
                chosen_name: chosen.name_kr.clone(),
                chosen_hanja: chosen.hanja.clone(),
                tags: self.session.current_tags.clone(),
                save: true,
            };
            let api = Arc::clone(&self.api);
            Some(tokio::spawn(async move {
                if let Err(err) = api.log_selection(&log).await {
                    warn!(error = %err, "failed to log selection");
                }
            }))
        } else {
            None
        };

        self.session.screen = Screen::Meaning;
        Ok(handle)
    }

    /// Fetch a fortune for the tags captured at submission.
    pub async fn request_fortune(&mut self) -> Result<&Fortune, ControllerError> {
        self.expect_screen(Screen::Meaning, "request a fortune")?;
        self.draw_fortune().await
    }

    /// Draw another fortune with the same tags.
    pub async fn more_fortunes(&mut self) -> Result<&Fortune, ControllerError> {
        self.expect_screen(Screen::Fortune, "draw another fortune")?;
        self.draw_fortune().await
    }

    async fn draw_fortune(&mut self) -> Result<&Fortune, ControllerError> {
        let request = FortuneRequest {
            tags: effective_tags(self.session.current_tags.clone()),
        };

        let result = {
            let _loading = self.loading.show();
            self.api.fortune(&request).await
        };

        match result {
            Ok(fortune) => {
                self.session.screen = Screen::Fortune;
                Ok(self.session.fortune.insert(fortune))
            }
            Err(err) => {
                error!(error = %err, "fortune request failed");
                Err(err.into())
            }
        }
    }

    /// Return to the input screen and forget candidates and the selection.
    pub fn restart(&mut self) {
        info!(from = %self.session.screen, "restarting session");
        self.session.reset();
    }
}
