//! Shared fixtures: a scripted in-memory backend and sample payloads.

#![allow(dead_code)]

use async_trait::async_trait;
use naeilum::api::{
    ApiError, FamilyName, Fortune, FortuneRequest, HealthStatus, NaeilumApi, NameCandidate,
    SelectionLog, SuggestRequest, Syllable,
};
use naeilum::session::{LoadingOverlay, UserData, UserOptions};
use std::sync::Mutex;

pub fn candidate(name_kr: &str, name_en: &str, hanja: [&str; 3]) -> NameCandidate {
    let syllables: Vec<char> = name_kr.chars().collect();
    NameCandidate {
        name_en: name_en.to_string(),
        name_kr: name_kr.to_string(),
        hanja: hanja.iter().map(|h| (*h).to_string()).collect(),
        family_name: FamilyName {
            korean: syllables[0].to_string(),
            hanja: hanja[0].to_string(),
            meaning: "Pine tree - symbol of longevity and resilience".to_string(),
        },
        given_name: syllables[1..]
            .iter()
            .zip(hanja[1..].iter())
            .map(|(s, h)| Syllable {
                syllable: s.to_string(),
                hanja: (*h).to_string(),
                meaning: "아름다운".to_string(),
            })
            .collect(),
        summary: "아름다운 사람".to_string(),
    }
}

pub fn sample_candidates() -> Vec<NameCandidate> {
    vec![
        candidate("송월선", "Song Wil-Seon", ["宋", "蔚", "宣"]),
        candidate("송지현", "Song Ji-Hyun", ["宋", "智", "賢"]),
        candidate("송하윤", "Song Ha-Yoon", ["宋", "夏", "潤"]),
    ]
}

pub fn fortune(n: usize) -> Fortune {
    Fortune {
        date: "2024/03/09".to_string(),
        cosmic_cookie: format!("cookie #{n}"),
        lucky_snack: "Anything with chocolate. Seriously.".to_string(),
        deeper_look: "Your intuition is particularly sharp.".to_string(),
    }
}

pub fn wilson_smith(tags: &[&str], save: bool) -> UserData {
    UserData {
        first_name: "Wilson".to_string(),
        last_name: "Smith".to_string(),
        options: UserOptions {
            tags: tags.iter().map(|t| (*t).to_string()).collect(),
            save,
            ..UserOptions::default()
        },
    }
}

/// Backend double that records every request it receives.
#[derive(Default)]
pub struct MockApi {
    pub candidates: Vec<NameCandidate>,
    pub fail_suggest: bool,
    pub fail_fortune: bool,
    /// Fortune calls after this many successful ones fail.
    pub fortunes_before_failure: Option<usize>,
    pub fail_log: bool,
    pub suggest_requests: Mutex<Vec<SuggestRequest>>,
    pub fortune_requests: Mutex<Vec<FortuneRequest>>,
    pub logs: Mutex<Vec<SelectionLog>>,
    /// Overlay to sample while a call is in flight.
    pub overlay: Mutex<Option<LoadingOverlay>>,
    pub overlay_seen: Mutex<Vec<bool>>,
}

impl MockApi {
    pub fn with_candidates(candidates: Vec<NameCandidate>) -> Self {
        Self {
            candidates,
            ..Self::default()
        }
    }

    pub fn watch(&self, overlay: LoadingOverlay) {
        *self.overlay.lock().expect("lock") = Some(overlay);
    }

    fn sample_overlay(&self) {
        if let Some(overlay) = self.overlay.lock().expect("lock").as_ref() {
            self.overlay_seen
                .lock()
                .expect("lock")
                .push(overlay.is_visible());
        }
    }

    fn rejected(endpoint: &'static str) -> ApiError {
        ApiError::Rejected {
            endpoint,
            message: "scripted failure".to_string(),
        }
    }
}

#[async_trait]
impl NaeilumApi for MockApi {
    async fn suggest_names(
        &self,
        request: &SuggestRequest,
    ) -> Result<Vec<NameCandidate>, ApiError> {
        self.sample_overlay();
        self.suggest_requests
            .lock()
            .expect("lock")
            .push(request.clone());
        if self.fail_suggest {
            return Err(Self::rejected("/api/suggest-names"));
        }
        Ok(self.candidates.clone())
    }

    async fn log_selection(&self, log: &SelectionLog) -> Result<(), ApiError> {
        self.logs.lock().expect("lock").push(log.clone());
        if self.fail_log {
            return Err(Self::rejected("/api/log-selection"));
        }
        Ok(())
    }

    async fn fortune(&self, request: &FortuneRequest) -> Result<Fortune, ApiError> {
        self.sample_overlay();
        let mut requests = self.fortune_requests.lock().expect("lock");
        requests.push(request.clone());
        let exhausted = self
            .fortunes_before_failure
            .is_some_and(|limit| requests.len() > limit);
        if self.fail_fortune || exhausted {
            return Err(Self::rejected("/api/fortune"));
        }
        Ok(fortune(requests.len()))
    }

    async fn health(&self) -> Result<HealthStatus, ApiError> {
        Ok(HealthStatus {
            status: "healthy".to_string(),
            timestamp: None,
        })
    }
}
