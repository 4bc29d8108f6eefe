// Upload session: owns the dashboard state. When uploads overlap, the newest one wins.
// Parsing runs on the blocking pool; a result is committed only if no newer upload started
// in the meantime, so results from two uploads are never mixed.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::watch;
use tracing::{info, instrument, warn};

use crate::config::AppConfig;
use crate::dashboard::{DashboardState, DashboardView};
use crate::error::DashboardError;
use crate::models::YearMonth;
use crate::parser;
use crate::upload::{UploadedFile, accept_file};

pub struct UploadSession {
    config: AppConfig,
    state_tx: watch::Sender<DashboardState>,
    generation: AtomicU64,
}

impl UploadSession {
    /// Starts with an empty record sequence.
    pub fn new(config: AppConfig) -> Self {
        let (state_tx, _) = watch::channel(DashboardState::default());
        Self {
            config,
            state_tx,
            generation: AtomicU64::new(0),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Current state (records are shared, not copied).
    pub fn state(&self) -> DashboardState {
        self.state_tx.borrow().clone()
    }

    /// Receiver that is notified on every committed state change.
    pub fn subscribe(&self) -> watch::Receiver<DashboardState> {
        self.state_tx.subscribe()
    }

    /// Derives a fresh view from the current state.
    pub fn view(&self, month: Option<YearMonth>) -> DashboardView {
        DashboardView::derive(&self.state_tx.borrow(), &self.config, month)
    }

    /// Validates, parses and commits `file`. Returns the number of records loaded.
    ///
    /// On rejection or parse failure the previous records stay in place and the error message
    /// is recorded in the state. A rejection does not cancel an upload that is still parsing,
    /// and its message survives that upload's commit. If another upload starts before this one finishes, this one
    /// returns [`DashboardError::Superseded`] and leaves the state untouched.
    #[instrument(skip_all, fields(file = %file.name, bytes = file.contents.len()))]
    pub async fn upload(&self, file: UploadedFile) -> Result<usize, DashboardError> {
        if let Err(e) = accept_file(&file, &self.config.upload) {
            warn!(error = %e, "rejected upload");
            let message = e.to_string();
            self.state_tx.send_modify(|s| s.error = Some(message));
            return Err(e);
        }

        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.state_tx.send_modify(|s| {
            s.loading = true;
            s.error = None;
        });

        let UploadedFile { name, contents, .. } = file;
        let parsed = match tokio::task::spawn_blocking(move || parser::parse_records(&contents))
            .await
        {
            Ok(parsed) => parsed,
            Err(e) => Err(DashboardError::from(e)),
        };

        let mut outcome = Err(DashboardError::Superseded);
        self.state_tx.send_if_modified(|s| {
            if self.generation.load(Ordering::SeqCst) != generation {
                return false;
            }
            match parsed {
                Ok(records) => {
                    let n = records.len();
                    info!(records = n, "upload committed");
                    // Cleared when this upload started, so anything here is a rejection
                    // that arrived during the parse.
                    let error = s.error.take();
                    *s = DashboardState {
                        file_name: Some(name),
                        records: Arc::new(records),
                        selected_date: None,
                        error,
                        loading: false,
                    };
                    outcome = Ok(n);
                }
                Err(e) => {
                    warn!(error = %e, "upload failed to parse");
                    s.loading = false;
                    s.error = Some(e.to_string());
                    outcome = Err(e);
                }
            }
            true
        });

        if matches!(outcome, Err(DashboardError::Superseded)) {
            info!("upload superseded by a newer one");
        }
        outcome
    }

    /// Selects a date for the detail view; `None` clears the selection.
    pub fn select_date(&self, date: Option<&str>) {
        let date = date.map(str::to_string);
        self.state_tx.send_modify(|s| s.selected_date = date);
    }

    /// Drops the loaded file and all derived state, as if the session had just started.
    pub fn clear(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.state_tx.send_replace(DashboardState::default());
    }
}
