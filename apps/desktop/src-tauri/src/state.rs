//! Application state: the active distribution session.

use despacho_engine::DistributionSession;
use std::sync::{Arc, Mutex};

#[derive(Debug, thiserror::Error)]
pub enum AppStateError {
    #[error("no dataset loaded")]
    NoDatasetLoaded,
}

#[derive(Default)]
pub struct AppState {
    session: Option<DistributionSession>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the active session wholesale. The previous dataset and its
    /// split cursor are discarded; there is no migration between datasets.
    pub fn replace_session(&mut self, session: DistributionSession) {
        self.session = Some(session);
    }

    pub fn session(&self) -> Result<&DistributionSession, AppStateError> {
        self.session.as_ref().ok_or(AppStateError::NoDatasetLoaded)
    }

    pub fn session_mut(&mut self) -> Result<&mut DistributionSession, AppStateError> {
        self.session.as_mut().ok_or(AppStateError::NoDatasetLoaded)
    }

    pub fn has_session(&self) -> bool {
        self.session.is_some()
    }
}

pub type SharedAppState = Arc<Mutex<AppState>>;

#[cfg(test)]
mod tests {
    use super::*;
    use despacho_engine::SplitCursor;

    #[test]
    fn empty_state_reports_no_dataset() {
        let state = AppState::new();
        assert!(state.session().is_err());
        assert!(!state.has_session());
    }

    #[test]
    fn replacing_the_session_resets_the_cursor() {
        let mut state = AppState::new();
        state.replace_session(DistributionSession::new(Vec::new()));
        state
            .session_mut()
            .expect("session")
            .split_initial(1, chrono::NaiveDate::from_ymd_opt(2024, 8, 6).expect("date"))
            .expect("split");
        assert_ne!(
            state.session().expect("session").cursor(),
            SplitCursor::default()
        );

        state.replace_session(DistributionSession::new(Vec::new()));
        assert_eq!(
            state.session().expect("session").cursor(),
            SplitCursor::default()
        );
    }
}
