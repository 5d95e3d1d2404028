//! Key-binding context evaluation
//!
//! The host's key-binding resolver asks, for every candidate binding, whether
//! a named guard holds: `("vi_mode_normal", Equal, true)`. Each guard is a
//! predicate over the view's [`ViewState`] and read-only [`EditorContext`]
//! queries. Predicates live in a static name -> function table built once.
//!
//! Evaluation is a pure read: predicates borrow the state immutably and the
//! only side effect allowed is the best-effort feedback in
//! `vi_can_enter_any_visual_mode`.

mod predicates;
mod transition;


use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::context::EditorContext;
use crate::state::ViewState;

// ============================================================================
// Query / Result
// ============================================================================

/// Comparison requested by the resolver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    #[default]
    Equal,
    NotEqual,
}

impl Operator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Equal => "equal",
            Operator::NotEqual => "not_equal",
        }
    }
}

/// Value the predicate result is compared against
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Operand {
    Bool(bool),
    Str(String),
}

impl Default for Operand {
    fn default() -> Self {
        Operand::Bool(true)
    }
}

impl From<bool> for Operand {
    fn from(value: bool) -> Self {
        Operand::Bool(value)
    }
}

impl From<&str> for Operand {
    fn from(value: &str) -> Self {
        Operand::Str(value.to_string())
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Bool(b) => write!(f, "{b}"),
            Operand::Str(s) => write!(f, "{s:?}"),
        }
    }
}

/// A guard check submitted by the key-binding resolver
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextQuery {
    /// Predicate name
    pub key: String,
    #[serde(default)]
    pub operator: Operator,
    #[serde(default)]
    pub operand: Operand,
    /// Accepted for compatibility with the resolver; no predicate reads it
    #[serde(default)]
    pub match_all: bool,
}

impl ContextQuery {
    /// `key == true`, the resolver's default shape
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            operator: Operator::Equal,
            operand: Operand::Bool(true),
            match_all: false,
        }
    }

    pub fn with_operator(mut self, operator: Operator) -> Self {
        self.operator = operator;
        self
    }

    pub fn with_operand(mut self, operand: impl Into<Operand>) -> Self {
        self.operand = operand.into();
        self
    }

    /// Apply this query's comparison to a predicate value
    pub fn check(&self, value: bool) -> ContextResult {
        compare(value, self.operator, &self.operand)
    }
}

/// Outcome of a guard check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextResult {
    Matched(bool),
    /// No opinion: the resolver falls back to its default handling
    Unknown,
}

impl ContextResult {
    /// The binding's guard is satisfied
    pub fn is_match(&self) -> bool {
        matches!(self, ContextResult::Matched(true))
    }
}

impl fmt::Display for ContextResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContextResult::Matched(b) => write!(f, "{b}"),
            ContextResult::Unknown => f.write_str("unknown"),
        }
    }
}

/// Compare a predicate value against the requested operator and operand.
/// Only boolean operands are comparable.
pub fn compare(value: bool, operator: Operator, operand: &Operand) -> ContextResult {
    match (operator, operand) {
        (Operator::Equal, Operand::Bool(true)) => ContextResult::Matched(value),
        (Operator::Equal, Operand::Bool(false)) => ContextResult::Matched(!value),
        (Operator::NotEqual, Operand::Bool(true)) => ContextResult::Matched(!value),
        (Operator::NotEqual, Operand::Bool(false)) => ContextResult::Matched(value),
        (_, Operand::Str(_)) => ContextResult::Unknown,
    }
}

// ============================================================================
// Predicate table
// ============================================================================

type PredicateFn = fn(&ContextQuery, &ViewState, &dyn EditorContext) -> ContextResult;

const PREDICATES: &[(&str, PredicateFn)] = &[
    ("vi_is_buffer", predicates::is_buffer),
    ("vi_use_ctrl_keys", predicates::use_ctrl_keys),
    ("vi_enable_cmdline_mode", predicates::enable_cmdline_mode),
    ("vi_is_cmdline", predicates::is_cmdline),
    (
        "vi_has_incomplete_action",
        predicates::has_incomplete_action,
    ),
    ("vi_has_action", predicates::has_action),
    ("vi_has_motion_count", predicates::has_motion_count),
    ("vi_mode_normal", predicates::mode_normal),
    ("vi_mode_insert", predicates::mode_insert),
    ("vi_mode_normal_insert", predicates::mode_normal_insert),
    ("vi_mode_visual", predicates::mode_visual),
    ("vi_mode_visual_line", predicates::mode_visual_line),
    ("vi_mode_visual_block", predicates::mode_visual_block),
    ("vi_mode_select", predicates::mode_select),
    ("vi_mode_visual_any", predicates::mode_visual_any),
    (
        "vi_mode_normal_or_visual",
        predicates::mode_normal_or_visual,
    ),
    (
        "vi_mode_normal_or_any_visual",
        predicates::mode_normal_or_any_visual,
    ),
    (
        "vi_state_expecting_user_input",
        predicates::state_expecting_user_input,
    ),
    (
        "vi_state_expecting_register",
        predicates::state_expecting_register,
    ),
    (
        "vi_state_next_character_is_user_input",
        predicates::state_next_character_is_user_input,
    ),
    ("vi_mode_can_push_digit", predicates::mode_can_push_digit),
    (
        "vi_mode_cannot_push_zero",
        predicates::mode_cannot_push_zero,
    ),
    ("vi_is_recording_macro", predicates::is_recording_macro),
    (
        "vi_must_exit_to_insert_mode",
        predicates::must_exit_to_insert_mode,
    ),
    ("vi_in_key_namespace", predicates::in_key_namespace),
    (
        "vi_can_enter_any_visual_mode",
        predicates::can_enter_any_visual_mode,
    ),
    ("vi_must_change_mode", transition::must_change_mode),
];

fn table() -> &'static HashMap<&'static str, PredicateFn> {
    static TABLE: OnceLock<HashMap<&'static str, PredicateFn>> = OnceLock::new();
    TABLE.get_or_init(|| PREDICATES.iter().copied().collect())
}

/// Every supported predicate name, in registration order
pub fn predicate_names() -> impl Iterator<Item = &'static str> {
    PREDICATES.iter().map(|(name, _)| *name)
}

/// Evaluate a guard check against a view.
///
/// Unknown predicate names and unsupported operands give
/// [`ContextResult::Unknown`]; this never fails.
pub fn evaluate(
    query: &ContextQuery,
    state: &ViewState,
    editor: &dyn EditorContext,
) -> ContextResult {
    match table().get(query.key.as_str()) {
        Some(predicate) => predicate(query, state, editor),
        None => {
            tracing::debug!(key = %query.key, "unknown context predicate");
            ContextResult::Unknown
        }
    }
}
