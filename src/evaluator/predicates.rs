//! Individual context predicates
//!
//! Each one computes a boolean from the view state or host queries and runs
//! it through the query's comparison, except where noted.

use super::{ContextQuery, ContextResult, Operand, Operator};
use crate::context::{EditorContext, CMDLINE_SELECTOR};
use crate::mode::Mode;
use crate::namespace;
use crate::pending::PendingCommand;
use crate::settings;
use crate::state::ViewState;

const VISUAL_AT_EOF_NOTICE: &str = "Can't enter visual mode at EOF if last line is empty.";

// ============================================================================
// Shared checks (also used by the transition decider)
// ============================================================================

pub(super) fn view_is_cmdline(editor: &dyn EditorContext) -> bool {
    editor.score_selector(0, CMDLINE_SELECTOR) != 0
}

/// Action or motion is a namespace prefix still waiting for its second key
pub(super) fn pending_is_incomplete(pending: &PendingCommand) -> bool {
    [pending.action(), pending.motion()]
        .into_iter()
        .flatten()
        .any(namespace::is_incomplete)
}

/// Host is in command mode and the pending action ends in insert mode
pub(super) fn awaiting_insert_exit(state: &ViewState, editor: &dyn EditorContext) -> bool {
    editor.settings().get_bool(settings::COMMAND_MODE)
        && state
            .pending
            .action()
            .is_some_and(namespace::exits_to_insert_mode)
}

// ============================================================================
// View and settings
// ============================================================================

/// Console panels and input widgets rather than regular documents
pub(super) fn is_buffer(
    query: &ContextQuery,
    _state: &ViewState,
    editor: &dyn EditorContext,
) -> ContextResult {
    let value = editor.is_console() || editor.settings().get_bool(settings::IS_WIDGET);
    query.check(value)
}

pub(super) fn use_ctrl_keys(
    query: &ContextQuery,
    _state: &ViewState,
    editor: &dyn EditorContext,
) -> ContextResult {
    query.check(editor.settings().get_bool(settings::USE_CTRL_KEYS))
}

pub(super) fn enable_cmdline_mode(
    query: &ContextQuery,
    _state: &ViewState,
    editor: &dyn EditorContext,
) -> ContextResult {
    query.check(editor.settings().get_bool(settings::ENABLE_CMDLINE_MODE))
}

pub(super) fn is_cmdline(
    query: &ContextQuery,
    _state: &ViewState,
    editor: &dyn EditorContext,
) -> ContextResult {
    query.check(view_is_cmdline(editor))
}

// ============================================================================
// Pending command
// ============================================================================

pub(super) fn has_incomplete_action(
    query: &ContextQuery,
    state: &ViewState,
    _editor: &dyn EditorContext,
) -> ContextResult {
    query.check(pending_is_incomplete(&state.pending))
}

/// An action that can be dispatched right away
pub(super) fn has_action(
    query: &ContextQuery,
    state: &ViewState,
    _editor: &dyn EditorContext,
) -> ContextResult {
    let value = state
        .pending
        .action()
        .is_some_and(|action| !namespace::is_incomplete(action));
    query.check(value)
}

pub(super) fn has_motion_count(
    query: &ContextQuery,
    state: &ViewState,
    _editor: &dyn EditorContext,
) -> ContextResult {
    query.check(!state.pending.motion_digits.is_empty())
}

pub(super) fn state_expecting_user_input(
    query: &ContextQuery,
    state: &ViewState,
    _editor: &dyn EditorContext,
) -> ContextResult {
    query.check(state.pending.expecting_user_input)
}

pub(super) fn state_expecting_register(
    query: &ContextQuery,
    state: &ViewState,
    _editor: &dyn EditorContext,
) -> ContextResult {
    query.check(state.pending.expecting_register)
}

pub(super) fn state_next_character_is_user_input(
    query: &ContextQuery,
    state: &ViewState,
    _editor: &dyn EditorContext,
) -> ContextResult {
    let pending = &state.pending;
    query.check(pending.expecting_user_input || pending.expecting_register)
}

/// Digits still go to a count until a motion has been typed
pub(super) fn mode_can_push_digit(
    query: &ContextQuery,
    state: &ViewState,
    _editor: &dyn EditorContext,
) -> ContextResult {
    query.check(state.pending.motion().is_none())
}

/// A leading `0` is the line-start motion, not a count digit. Only the
/// `Equal` shape can report true.
pub(super) fn mode_cannot_push_zero(
    query: &ContextQuery,
    state: &ViewState,
    _editor: &dyn EditorContext,
) -> ContextResult {
    let value = query.operator == Operator::Equal && !state.pending.user_provided_count();
    query.check(value)
}

pub(super) fn must_exit_to_insert_mode(
    query: &ContextQuery,
    state: &ViewState,
    editor: &dyn EditorContext,
) -> ContextResult {
    query.check(awaiting_insert_exit(state, editor))
}

/// Whether the pending prefix belongs to the namespace named by the operand.
///
/// Operator and `match_all` are not consulted, and the result never goes
/// through the comparison: existing key maps depend on this.
pub(super) fn in_key_namespace(
    query: &ContextQuery,
    state: &ViewState,
    _editor: &dyn EditorContext,
) -> ContextResult {
    let pending = &state.pending;
    if !pending_is_incomplete(pending) {
        return ContextResult::Matched(false);
    }

    let group = pending
        .action()
        .and_then(namespace::resolve)
        .or_else(|| pending.motion().and_then(namespace::resolve));
    let Some(group) = group else {
        return ContextResult::Matched(false);
    };

    ContextResult::Matched(matches!(&query.operand, Operand::Str(s) if s == group))
}

// ============================================================================
// Mode
// ============================================================================

pub(super) fn mode_normal(
    query: &ContextQuery,
    state: &ViewState,
    _editor: &dyn EditorContext,
) -> ContextResult {
    query.check(state.mode() == Mode::Normal)
}

pub(super) fn mode_insert(
    query: &ContextQuery,
    state: &ViewState,
    _editor: &dyn EditorContext,
) -> ContextResult {
    query.check(state.mode() == Mode::Insert)
}

pub(super) fn mode_normal_insert(
    query: &ContextQuery,
    state: &ViewState,
    _editor: &dyn EditorContext,
) -> ContextResult {
    query.check(state.mode() == Mode::NormalInsert)
}

pub(super) fn mode_visual(
    query: &ContextQuery,
    state: &ViewState,
    _editor: &dyn EditorContext,
) -> ContextResult {
    query.check(state.mode() == Mode::Visual)
}

pub(super) fn mode_visual_line(
    query: &ContextQuery,
    state: &ViewState,
    _editor: &dyn EditorContext,
) -> ContextResult {
    query.check(state.mode() == Mode::VisualLine)
}

pub(super) fn mode_visual_block(
    query: &ContextQuery,
    state: &ViewState,
    _editor: &dyn EditorContext,
) -> ContextResult {
    query.check(state.mode() == Mode::VisualBlock)
}

pub(super) fn mode_select(
    query: &ContextQuery,
    state: &ViewState,
    _editor: &dyn EditorContext,
) -> ContextResult {
    query.check(state.mode() == Mode::Select)
}

pub(super) fn mode_visual_any(
    query: &ContextQuery,
    state: &ViewState,
    _editor: &dyn EditorContext,
) -> ContextResult {
    query.check(state.mode().is_visual_any())
}

pub(super) fn mode_normal_or_visual(
    query: &ContextQuery,
    state: &ViewState,
    _editor: &dyn EditorContext,
) -> ContextResult {
    query.check(state.mode().is_normal_or_visual())
}

pub(super) fn mode_normal_or_any_visual(
    query: &ContextQuery,
    state: &ViewState,
    _editor: &dyn EditorContext,
) -> ContextResult {
    query.check(state.mode().is_normal_or_any_visual())
}

pub(super) fn is_recording_macro(
    query: &ContextQuery,
    state: &ViewState,
    _editor: &dyn EditorContext,
) -> ContextResult {
    query.check(state.is_recording())
}

// ============================================================================
// Visual mode entry guard
// ============================================================================

/// Visual mode can't start on an empty last line at the end of the buffer.
///
/// Blocking notifies the host once per evaluation; feedback is best-effort.
pub(super) fn can_enter_any_visual_mode(
    query: &ContextQuery,
    _state: &ViewState,
    editor: &dyn EditorContext,
) -> ContextResult {
    let size = editor.size();
    let blocked = editor
        .selections()
        .iter()
        .any(|sel| sel.b == size && editor.line_is_empty(sel.b));

    if blocked {
        tracing::warn!("{}", VISUAL_AT_EOF_NOTICE);
        editor.show_notice(VISUAL_AT_EOF_NOTICE);
        editor.blink();
    }

    query.check(!blocked)
}
