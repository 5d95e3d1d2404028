//! `vi_must_change_mode`: should Escape (and friends) reset the view?
//!
//! Rules are checked in order and the first match wins. Ending with no
//! opinion lets the host's default key handling run.

use super::predicates::{awaiting_insert_exit, view_is_cmdline};
use super::{ContextQuery, ContextResult};
use crate::context::{EditorContext, SEARCH_MARKERS};
use crate::mode::Mode;
use crate::state::ViewState;

pub(super) fn must_change_mode(
    query: &ContextQuery,
    state: &ViewState,
    editor: &dyn EditorContext,
) -> ContextResult {
    if awaiting_insert_exit(state, editor) {
        return query.check(true);
    }

    // Command line panel: answer false without comparing so the host's own
    // escape closes the panel. The state is reset when the panel closes.
    if view_is_cmdline(editor) {
        return ContextResult::Matched(false);
    }

    // Counts, motions or actions in flight must be discarded
    let pending = &state.pending;
    if pending.user_provided_count()
        || pending.motion().is_some()
        || pending.action().is_some()
    {
        return query.check(true);
    }

    let mode = state.mode();
    if mode.is_insert_like() {
        return query.check(true);
    }

    // Visual modes, select mode
    if mode != Mode::Normal {
        return query.check(true);
    }

    // Leftover selections, e.g. after select mode
    if editor.selections().iter().any(|r| !r.empty()) {
        return query.check(true);
    }

    // Already normal, but search highlights still need clearing
    if editor.has_regions(SEARCH_MARKERS) {
        return query.check(true);
    }

    ContextResult::Unknown
}
