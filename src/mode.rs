//! Modal state of an editor view.
//!
//! A view is always in exactly one mode. The mode is only changed by the
//! command-dispatch layer after a command completes or is cancelled; the
//! context evaluator never writes to it.

use serde::{Deserialize, Deserializer, Serialize};

/// Vi editing mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Mode {
    #[default]
    #[serde(rename = "mode_normal")]
    Normal,
    #[serde(rename = "mode_insert")]
    Insert,
    /// Normal mode entered from insert mode for a single command (Ctrl+o)
    #[serde(rename = "mode_normal_insert")]
    NormalInsert,
    #[serde(rename = "mode_visual")]
    Visual,
    #[serde(rename = "mode_visual_line")]
    VisualLine,
    #[serde(rename = "mode_visual_block")]
    VisualBlock,
    #[serde(rename = "mode_select")]
    Select,
}

impl Mode {
    pub const ALL: [Mode; 7] = [
        Mode::Normal,
        Mode::Insert,
        Mode::NormalInsert,
        Mode::Visual,
        Mode::VisualLine,
        Mode::VisualBlock,
        Mode::Select,
    ];

    /// Host-facing constant name
    pub fn name(&self) -> &'static str {
        match self {
            Mode::Normal => "mode_normal",
            Mode::Insert => "mode_insert",
            Mode::NormalInsert => "mode_normal_insert",
            Mode::Visual => "mode_visual",
            Mode::VisualLine => "mode_visual_line",
            Mode::VisualBlock => "mode_visual_block",
            Mode::Select => "mode_select",
        }
    }

    /// Look up a mode by its host-facing name
    pub fn parse(name: &str) -> Option<Mode> {
        Mode::ALL.into_iter().find(|m| m.name() == name)
    }

    /// Mode reported by the host.
    ///
    /// Every keystroke passes through here, so an unknown name degrades to
    /// `Normal` instead of failing. Debug builds assert.
    pub fn from_host(name: &str) -> Mode {
        match Mode::parse(name) {
            Some(mode) => mode,
            None => {
                tracing::error!(mode = name, "unrecognized mode, falling back to normal");
                debug_assert!(false, "unrecognized mode: {name}");
                Mode::Normal
            }
        }
    }

    /// Visual, visual line or visual block
    pub fn is_visual_any(&self) -> bool {
        matches!(self, Mode::Visual | Mode::VisualLine | Mode::VisualBlock)
    }

    /// Normal, visual or visual block. Visual line is left out on purpose:
    /// several bindings are disabled for it.
    pub fn is_normal_or_visual(&self) -> bool {
        matches!(self, Mode::Normal | Mode::Visual | Mode::VisualBlock)
    }

    pub fn is_normal_or_any_visual(&self) -> bool {
        self.is_normal_or_visual() || *self == Mode::VisualLine
    }

    pub fn is_insert_like(&self) -> bool {
        matches!(self, Mode::Insert | Mode::NormalInsert)
    }
}

impl<'de> Deserialize<'de> for Mode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Mode::from_host(&name))
    }
}

/// Current mode plus the macro recording flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ModeState {
    pub mode: Mode,
    /// A macro capture is active. Owned by the recorder, survives resets.
    pub is_recording: bool,
}

impl ModeState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    pub fn set_recording(&mut self, recording: bool) {
        self.is_recording = recording;
    }

    /// Back to normal mode. Recording state is left alone.
    pub fn reset(&mut self) {
        self.mode = Mode::Normal;
    }
}
