//! Update orchestrator
//!
//! One user action runs: get selection, fetch page body, append entry,
//! write page body, report status. No retries; the first failure ends the
//! action. Overlapping actions are not serialised against each other, so
//! two of them racing on one page can lose an entry.

use std::sync::Arc;
use tracing::{debug, error, info, warn};

use crate::domain::{format_entry, CiteError, Selection, StatusMessage, WriteAck};
use crate::ports::{Clock, PageStore, PathProvider, SelectionProvider, StatusReporter, SystemClock};

/// Where an action currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdatePhase {
    Idle,
    AwaitingSelection,
    NoSelection,
    HasSelection,
    Fetching,
    Formatting,
    Writing,
    Success,
    Failed,
}

impl std::fmt::Display for UpdatePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UpdatePhase::Idle => write!(f, "idle"),
            UpdatePhase::AwaitingSelection => write!(f, "awaiting_selection"),
            UpdatePhase::NoSelection => write!(f, "no_selection"),
            UpdatePhase::HasSelection => write!(f, "has_selection"),
            UpdatePhase::Fetching => write!(f, "fetching"),
            UpdatePhase::Formatting => write!(f, "formatting"),
            UpdatePhase::Writing => write!(f, "writing"),
            UpdatePhase::Success => write!(f, "success"),
            UpdatePhase::Failed => write!(f, "failed"),
        }
    }
}

/// Application service appending selections to a Dontpad page
pub struct UpdateService {
    store: Arc<dyn PageStore>,
    selection: Arc<dyn SelectionProvider>,
    path: Arc<dyn PathProvider>,
    reporter: Arc<dyn StatusReporter>,
    clock: Arc<dyn Clock>,
}

impl UpdateService {
    pub fn new(
        store: Arc<dyn PageStore>,
        selection: Arc<dyn SelectionProvider>,
        path: Arc<dyn PathProvider>,
        reporter: Arc<dyn StatusReporter>,
    ) -> Self {
        Self {
            store,
            selection,
            path,
            reporter,
            clock: Arc::new(SystemClock),
        }
    }

    /// Overrides the clock used for the entry's access date.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Run one action and report its outcome.
    ///
    /// The reporter receives exactly one status message whatever happens.
    pub async fn run(&self) -> Result<WriteAck, CiteError> {
        let mut phase = UpdatePhase::Idle;
        let result = self.append_selection(&mut phase).await;

        match &result {
            Ok(ack) => {
                info!(last_modified = ?ack.last_modified, "Entry added to Dontpad");
            }
            Err(CiteError::NoSelection) => {
                warn!("No text selected, nothing sent to Dontpad");
            }
            Err(e) => {
                error!(phase = %phase, error = %e, "Dontpad update failed");
                advance(&mut phase, UpdatePhase::Failed);
            }
        }

        self.reporter
            .report(&StatusMessage::for_result(&result))
            .await;

        result
    }

    /// The entry a selection would produce today, without touching the network.
    ///
    /// `None` when nothing is selected.
    pub fn preview(&self, selection: &Selection) -> Option<String> {
        let text = selection.highlighted_text()?;
        Some(format_entry(
            text,
            &selection.title,
            &selection.url,
            self.clock.today(),
        ))
    }

    async fn append_selection(&self, phase: &mut UpdatePhase) -> Result<WriteAck, CiteError> {
        advance(phase, UpdatePhase::AwaitingSelection);
        let selection = self.selection.current_selection().await?;

        let Some(entry) = self.preview(&selection) else {
            advance(phase, UpdatePhase::NoSelection);
            return Err(CiteError::NoSelection);
        };
        advance(phase, UpdatePhase::HasSelection);

        let path = self.path.page_path()?;

        advance(phase, UpdatePhase::Fetching);
        let body = self.store.fetch_body(&path).await?;

        advance(phase, UpdatePhase::Formatting);
        let updated = body + &entry;

        advance(phase, UpdatePhase::Writing);
        let ack = self.store.write_body(&path, &updated).await?;

        advance(phase, UpdatePhase::Success);
        Ok(ack)
    }
}

fn advance(phase: &mut UpdatePhase, next: UpdatePhase) {
    debug!(from = %phase, to = %next, "Update phase");
    *phase = next;
}
