//! Per-view state ownership and lifecycle
//!
//! Each editor view gets its own [`ViewState`], created when the view is
//! activated. The dispatch layer reports lifecycle events here; every one of
//! them resets the view to normal mode with nothing pending. Views never share
//! state, so evaluation for one view can't observe another.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::context::EditorContext;
use crate::evaluator::{self, ContextQuery, ContextResult};
use crate::state::ViewState;

/// Host handle of an editor view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ViewId(pub u64);

/// Why a view's pending state is being thrown away
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetReason {
    CommandCompleted,
    Cancelled,
    CmdlineClosed,
    FocusLost,
}

#[derive(Debug, Default)]
pub struct ViewRegistry {
    views: HashMap<ViewId, ViewState>,
}

impl ViewRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking a view. Re-activating keeps the existing state.
    pub fn activate(&mut self, view: ViewId) -> &mut ViewState {
        self.views.entry(view).or_insert_with(|| {
            tracing::debug!(?view, "view activated");
            ViewState::new()
        })
    }

    /// Forget a closed view
    pub fn close(&mut self, view: ViewId) -> Option<ViewState> {
        self.views.remove(&view)
    }

    pub fn state(&self, view: ViewId) -> Option<&ViewState> {
        self.views.get(&view)
    }

    /// Mutable access for the dispatch layer. Never used during evaluation.
    pub fn state_mut(&mut self, view: ViewId) -> Option<&mut ViewState> {
        self.views.get_mut(&view)
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    /// Reset a view to normal mode with nothing pending
    pub fn reset(&mut self, view: ViewId, reason: ResetReason) {
        if let Some(state) = self.views.get_mut(&view) {
            tracing::trace!(?view, ?reason, "resetting view state");
            state.reset();
        }
    }

    pub fn command_completed(&mut self, view: ViewId) {
        self.reset(view, ResetReason::CommandCompleted);
    }

    pub fn cancel(&mut self, view: ViewId) {
        self.reset(view, ResetReason::Cancelled);
    }

    pub fn cmdline_closed(&mut self, view: ViewId) {
        self.reset(view, ResetReason::CmdlineClosed);
    }

    pub fn focus_lost(&mut self, view: ViewId) {
        self.reset(view, ResetReason::FocusLost);
    }

    /// Host entry point: evaluate a guard check for a view.
    ///
    /// Views that were never activated have no opinion.
    pub fn evaluate(
        &self,
        query: &ContextQuery,
        view: ViewId,
        editor: &dyn EditorContext,
    ) -> ContextResult {
        let result = match self.views.get(&view) {
            Some(state) => evaluator::evaluate(query, state, editor),
            None => {
                tracing::debug!(?view, key = %query.key, "evaluation for inactive view");
                ContextResult::Unknown
            }
        };

        tracing::trace!(?view, key = %query.key, %result, "evaluated context");
        result
    }
}
