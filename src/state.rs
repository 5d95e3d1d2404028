//! Per-view modal state: mode plus pending command

use serde::{Deserialize, Serialize};

use crate::mode::{Mode, ModeState};
use crate::pending::PendingCommand;

/// Everything the evaluator knows about one view besides the host queries
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewState {
    #[serde(flatten)]
    pub mode: ModeState,
    pub pending: PendingCommand,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> Mode {
        self.mode.mode()
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode.set_mode(mode);
    }

    pub fn is_recording(&self) -> bool {
        self.mode.is_recording
    }

    /// Drop any in-progress composition and return to normal mode.
    ///
    /// Nothing is rolled back; the pending command is simply discarded.
    pub fn reset(&mut self) {
        self.mode.reset();
        self.pending.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pending::Slot;

    #[test]
    fn test_reset_returns_to_normal_empty() {
        let mut state = ViewState::new();
        state.set_mode(Mode::VisualLine);
        state.pending.push_digit(Slot::Motion, '2');
        state.pending.set_token(Slot::Action, "vi_d");
        state.mode.set_recording(true);

        state.reset();
        assert_eq!(state.mode(), Mode::Normal);
        assert!(state.pending.is_empty());
        assert!(state.is_recording());
    }

    #[test]
    fn test_deserialize_flat_mode() {
        let json = r#"{
            "mode": "mode_visual",
            "is_recording": true,
            "pending": { "action": "vi_g_action", "motion_digits": "2" }
        }"#;
        let state: ViewState = serde_json::from_str(json).unwrap();
        assert_eq!(state.mode(), Mode::Visual);
        assert!(state.is_recording());
        assert_eq!(state.pending.action(), Some("vi_g_action"));
        assert_eq!(state.pending.motion_digits, "2");
    }
}
