//! Host editor interface
//!
//! The evaluator never touches the host directly. Everything it needs to know
//! about a view (selections, buffer shape, markers, settings) goes through
//! [`EditorContext`], which keeps predicates testable without a real editor.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::settings::Settings;

/// Scope selector of the `:` command line input panel
pub const CMDLINE_SELECTOR: &str = "text.excmdline";

/// Marker set holding the last search highlights
pub const SEARCH_MARKERS: &str = "vi_search";

/// A selection region. `a` is the anchor, `b` the active point (caret).
/// Both are character offsets into the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Region {
    pub a: usize,
    pub b: usize,
}

impl Region {
    pub fn new(a: usize, b: usize) -> Self {
        Self { a, b }
    }

    /// Caret-only region
    pub fn point(p: usize) -> Self {
        Self { a: p, b: p }
    }

    pub fn empty(&self) -> bool {
        self.a == self.b
    }
}

/// Read-only queries against the host's view, plus best-effort feedback
pub trait EditorContext {
    /// Current selections, in order
    fn selections(&self) -> &[Region];

    /// Buffer size in characters
    fn size(&self) -> usize;

    /// Whether the line containing `point` has no content
    fn line_is_empty(&self, point: usize) -> bool;

    /// Whether the named marker set holds at least one region
    fn has_regions(&self, name: &str) -> bool;

    /// Console and output panels carry no regular settings
    fn is_console(&self) -> bool;

    /// Non-zero when the scope at `point` matches `selector`
    fn score_selector(&self, point: usize, selector: &str) -> u32;

    /// Per-view settings
    fn settings(&self) -> &Settings;

    /// Show a message in the status area. May be unavailable.
    fn show_notice(&self, _message: &str) {}

    /// Brief visual or audible cue. May be unavailable.
    fn blink(&self) {}
}

// ============================================================================
// View snapshot
// ============================================================================

/// A frozen copy of a host view.
///
/// Used to replay recorded key-binding decisions from scenario files and as
/// the editor double in tests. Feedback calls are counted rather than shown.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewSnapshot {
    pub text: String,
    pub selections: Vec<Region>,
    /// Space separated scope names at the start of the view
    pub scope: String,
    pub console: bool,
    pub settings: Settings,
    /// Named marker sets
    pub regions: HashMap<String, Vec<Region>>,

    #[serde(skip)]
    notices: RefCell<Vec<String>>,
    #[serde(skip)]
    blinks: Cell<usize>,
}

impl ViewSnapshot {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            selections: vec![Region::point(0)],
            scope: "text.plain".to_string(),
            ..Default::default()
        }
    }

    pub fn with_selections(mut self, selections: Vec<Region>) -> Self {
        self.selections = selections;
        self
    }

    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = scope.into();
        self
    }

    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    pub fn with_regions(mut self, name: impl Into<String>, regions: Vec<Region>) -> Self {
        self.regions.insert(name.into(), regions);
        self
    }

    pub fn as_console(mut self) -> Self {
        self.console = true;
        self
    }

    /// Notices shown so far
    pub fn notices(&self) -> Vec<String> {
        self.notices.borrow().clone()
    }

    /// Blinks triggered so far
    pub fn blink_count(&self) -> usize {
        self.blinks.get()
    }

    /// Byte index of a character offset, clamped to the end of the text
    fn byte_offset(&self, point: usize) -> usize {
        self.text
            .char_indices()
            .nth(point)
            .map_or(self.text.len(), |(i, _)| i)
    }
}

impl EditorContext for ViewSnapshot {
    fn selections(&self) -> &[Region] {
        &self.selections
    }

    fn size(&self) -> usize {
        self.text.chars().count()
    }

    fn line_is_empty(&self, point: usize) -> bool {
        let (head, tail) = self.text.split_at(self.byte_offset(point));
        let at_line_start = head.is_empty() || head.ends_with('\n');
        let at_line_end = tail.is_empty() || tail.starts_with('\n');
        at_line_start && at_line_end
    }

    fn has_regions(&self, name: &str) -> bool {
        self.regions.get(name).is_some_and(|r| !r.is_empty())
    }

    fn is_console(&self) -> bool {
        self.console
    }

    fn score_selector(&self, point: usize, selector: &str) -> u32 {
        if point > self.size() {
            return 0;
        }
        let matches = self.scope.split_whitespace().any(|scope| {
            scope == selector
                || scope
                    .strip_prefix(selector)
                    .is_some_and(|rest| rest.starts_with('.'))
        });
        u32::from(matches)
    }

    fn settings(&self) -> &Settings {
        &self.settings
    }

    fn show_notice(&self, message: &str) {
        self.notices.borrow_mut().push(message.to_string());
    }

    fn blink(&self) {
        self.blinks.set(self.blinks.get() + 1);
    }
}
