//! Request/response channel for selections
//!
//! Stands in for the browser's tab messaging: the requester sends
//! `{"action": "getHighlightedText"}` and waits for one reply carrying the
//! selection. The responder side lives wherever the page is (a content
//! script, a terminal front end, a test).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::{mpsc, oneshot};
use tracing::debug;

use crate::domain::{CiteError, Selection};
use crate::ports::SelectionProvider;

/// Request sent to the page side
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionRequest {
    pub action: String,
}

impl SelectionRequest {
    pub const GET_HIGHLIGHTED_TEXT: &'static str = "getHighlightedText";

    pub fn get_highlighted_text() -> Self {
        Self {
            action: Self::GET_HIGHLIGHTED_TEXT.to_string(),
        }
    }

    pub fn is_get_highlighted_text(&self) -> bool {
        self.action == Self::GET_HIGHLIGHTED_TEXT
    }
}

struct PendingRequest {
    request: SelectionRequest,
    reply: oneshot::Sender<Selection>,
}

/// Requesting half; implements [`SelectionProvider`]
#[derive(Clone)]
pub struct SelectionChannel {
    tx: mpsc::Sender<PendingRequest>,
}

/// Answering half
pub struct SelectionResponder {
    rx: mpsc::Receiver<PendingRequest>,
}

impl SelectionChannel {
    /// Create a connected channel/responder pair.
    ///
    /// Holds one pending request at a time.
    pub fn new() -> (Self, SelectionResponder) {
        let (tx, rx) = mpsc::channel(1);
        (Self { tx }, SelectionResponder { rx })
    }

    /// Send a request and wait for its reply
    pub async fn request(&self, request: SelectionRequest) -> Result<Selection, CiteError> {
        let (reply, response) = oneshot::channel();
        debug!(action = %request.action, "Requesting selection");

        self.tx
            .send(PendingRequest { request, reply })
            .await
            .map_err(|_| CiteError::SelectionUnavailable("responder is gone".to_string()))?;

        response
            .await
            .map_err(|_| CiteError::SelectionUnavailable("request was not answered".to_string()))
    }
}

#[async_trait]
impl SelectionProvider for SelectionChannel {
    async fn current_selection(&self) -> Result<Selection, CiteError> {
        self.request(SelectionRequest::get_highlighted_text()).await
    }
}

impl SelectionResponder {
    /// Answer requests until every [`SelectionChannel`] is dropped.
    ///
    /// Requests with an unknown action are dropped unanswered, the way a
    /// content script ignores messages it does not handle.
    pub async fn serve<F>(mut self, mut handler: F)
    where
        F: FnMut() -> Selection + Send,
    {
        while let Some(pending) = self.rx.recv().await {
            if !pending.request.is_get_highlighted_text() {
                debug!(action = %pending.request.action, "Ignoring unknown selection request");
                continue;
            }

            let selection = handler();
            if pending.reply.send(selection).is_err() {
                debug!("Selection requester went away before the reply");
            }
        }
    }

    /// Answer exactly one request, then stop.
    pub async fn answer_once(self, selection: Selection) {
        let mut selection = Some(selection);
        self.serve(move || selection.take().unwrap_or_default()).await;
    }
}
