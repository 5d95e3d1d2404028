//! In-progress command composition
//!
//! Tracks the action and motion tokens, their count digits and whether the
//! next keystroke is raw user input (a register name, a character argument).
//! Only the dispatch layer mutates this; predicates read it.

use serde::{Deserialize, Serialize};

/// Which half of a command a digit or token belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// The operator or standalone command (`d`, `x`, `g`...)
    Action,
    /// The motion an action applies to (`w`, `j`...)
    Motion,
}

/// Pending command state for a single view
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PendingCommand {
    pub action: Option<String>,
    pub motion: Option<String>,
    /// Digits typed before the action (`3dw` -> "3")
    pub action_digits: String,
    /// Digits typed before the motion (`d3w` -> "3")
    pub motion_digits: String,
    pub expecting_user_input: bool,
    /// The next keystroke names a register, not a command
    pub expecting_register: bool,
    pub register: Option<char>,
}

impl PendingCommand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn action(&self) -> Option<&str> {
        self.action.as_deref()
    }

    pub fn motion(&self) -> Option<&str> {
        self.motion.as_deref()
    }

    pub fn digits(&self, slot: Slot) -> &str {
        match slot {
            Slot::Action => &self.action_digits,
            Slot::Motion => &self.motion_digits,
        }
    }

    /// Append a count digit. Anything but `0`-`9` is ignored.
    pub fn push_digit(&mut self, slot: Slot, digit: char) {
        if !digit.is_ascii_digit() {
            tracing::debug!(?slot, %digit, "ignoring non-digit count input");
            return;
        }
        match slot {
            Slot::Action => self.action_digits.push(digit),
            Slot::Motion => self.motion_digits.push(digit),
        }
    }

    pub fn set_token(&mut self, slot: Slot, token: impl Into<String>) {
        let token = Some(token.into());
        match slot {
            Slot::Action => self.action = token,
            Slot::Motion => self.motion = token,
        }
    }

    pub fn set_expecting_user_input(&mut self, expecting: bool) {
        self.expecting_user_input = expecting;
    }

    /// `"` was typed: the next key is a register name
    pub fn begin_register_expectation(&mut self) {
        self.expecting_register = true;
    }

    pub fn consume_register(&mut self, name: char) {
        self.register = Some(name);
        self.expecting_register = false;
    }

    /// Count entered for one slot; 1 when no digits were typed
    pub fn count(&self, slot: Slot) -> usize {
        let digits = self.digits(slot);
        if digits.is_empty() {
            return 1;
        }
        digits.bytes().fold(0usize, |acc, b| {
            acc.saturating_mul(10).saturating_add((b - b'0') as usize)
        })
    }

    /// Effective repeat count (`2d3w` deletes six words)
    pub fn total_count(&self) -> usize {
        self.count(Slot::Action)
            .saturating_mul(self.count(Slot::Motion))
    }

    pub fn user_provided_count(&self) -> bool {
        !self.action_digits.is_empty() || !self.motion_digits.is_empty()
    }

    /// Nothing composed yet: no tokens and no count
    pub fn is_empty(&self) -> bool {
        self.action.is_none() && self.motion.is_none() && !self.user_provided_count()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
