use crate::analysis::formatter::{format_team_matches, TeamMatchesData};
use crate::api::client::TeamMatchesApi;
use crate::cancel::CancelToken;
use crate::error::{AppError, ErrorKind};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    Loading,
    Loaded(TeamMatchesData),
    Failed { kind: ErrorKind, detail: String },
}

type LoadOutcome = Result<TeamMatchesData, AppError>;

/// A mounted team-matches view. The fetch runs on a worker thread and its result
/// is only committed while the view is still mounted.
pub struct TeamMatchesView {
    team_id: String,
    state: ViewState,
    token: CancelToken,
    rx: Option<Receiver<LoadOutcome>>,
}

impl TeamMatchesView {
    pub fn mount<A: TeamMatchesApi>(api: A, team_id: &str) -> Self {
        let token = CancelToken::new();
        let (tx, rx) = mpsc::channel();

        let worker_token = token.clone();
        let id = team_id.to_string();
        log::debug!("mounting view for {}", id);

        thread::spawn(move || {
            let outcome = api
                .get_team_matches(&id)
                .map(|raw| format_team_matches(&raw));

            if worker_token.is_cancelled() {
                log::debug!("fetch for {} finished after unmount, dropping result", id);
                return;
            }
            // Fails only if the view unmounted after the check above
            let _ = tx.send(outcome);
        });

        TeamMatchesView {
            team_id: team_id.to_string(),
            state: ViewState::Loading,
            token,
            rx: Some(rx),
        }
    }

    pub fn team_id(&self) -> &str {
        &self.team_id
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn is_mounted(&self) -> bool {
        !self.token.is_cancelled()
    }

    /// Blocks until the fetch reports. Returns immediately once settled or unmounted.
    pub fn wait(&mut self) -> &ViewState {
        let received = match self.pending() {
            Some(rx) => rx.recv(),
            None => return &self.state,
        };
        match received {
            Ok(outcome) => self.commit(outcome),
            // Worker exits without sending once it sees the view was unmounted
            Err(_) => self.rx = None,
        }
        &self.state
    }

    /// Like `wait`, but unmounts the view if nothing arrives within `limit`.
    pub fn wait_timeout(&mut self, limit: Duration) -> &ViewState {
        let received = match self.pending() {
            Some(rx) => rx.recv_timeout(limit),
            None => return &self.state,
        };
        match received {
            Ok(outcome) => self.commit(outcome),
            Err(RecvTimeoutError::Timeout) => {
                log::debug!("{} still loading after {:?}, unmounting", self.team_id, limit);
                self.unmount();
            }
            Err(RecvTimeoutError::Disconnected) => self.rx = None,
        }
        &self.state
    }

    pub fn unmount(&mut self) {
        if self.is_mounted() {
            log::debug!("unmounting view for {}", self.team_id);
        }
        self.token.cancel();
        self.rx = None;
    }

    fn pending(&self) -> Option<&Receiver<LoadOutcome>> {
        if self.token.is_cancelled() || self.state != ViewState::Loading {
            return None;
        }
        self.rx.as_ref()
    }

    fn commit(&mut self, outcome: LoadOutcome) {
        self.rx = None;
        if self.token.is_cancelled() {
            log::debug!("discarding result for unmounted view {}", self.team_id);
            return;
        }

        self.state = match outcome {
            Ok(data) => {
                log::debug!(
                    "{} loaded with {} recent matches",
                    self.team_id,
                    data.recent_matches.len()
                );
                ViewState::Loaded(data)
            }
            Err(e) => {
                log::warn!("loading {} failed: {}", self.team_id, e);
                ViewState::Failed {
                    kind: e.kind(),
                    detail: e.detail().to_string(),
                }
            }
        };
    }
}

impl Drop for TeamMatchesView {
    fn drop(&mut self) {
        self.token.cancel();
    }
}
