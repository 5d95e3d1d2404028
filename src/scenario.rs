//! Recorded key-binding scenarios
//!
//! A scenario is a JSON snapshot of one view (text, selections, settings,
//! markers), its modal state, and the guard checks a resolver asked about it.
//! Replaying one shows what the evaluator answers for each check.
//!
//! ```json
//! {
//!   "view": { "text": "abc\n", "selections": [{ "a": 4, "b": 4 }] },
//!   "state": { "mode": "mode_normal", "pending": { "motion_digits": "2" } },
//!   "queries": [
//!     { "key": "vi_must_change_mode" },
//!     { "key": "vi_mode_visual", "operator": "not_equal", "operand": true }
//!   ]
//! }
//! ```

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::context::ViewSnapshot;
use crate::evaluator::{ContextQuery, ContextResult};
use crate::registry::{ViewId, ViewRegistry};
use crate::state::ViewState;

/// Errors that can occur while loading a scenario
#[derive(Debug, thiserror::Error)]
pub enum ScenarioError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Scenario {
    pub view: ViewSnapshot,
    pub state: ViewState,
    pub queries: Vec<ContextQuery>,
}

/// One replayed guard check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub query: ContextQuery,
    pub result: ContextResult,
}

impl Scenario {
    pub fn load(path: &Path) -> Result<Self, ScenarioError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> Result<Self, ScenarioError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Evaluate every query, with config settings under the view's own
    pub fn replay(mut self, config: &Config) -> Vec<Outcome> {
        self.view.settings.layer_over(&config.settings);

        let view_id = ViewId(0);
        let mut registry = ViewRegistry::new();
        *registry.activate(view_id) = self.state;

        self.queries
            .into_iter()
            .map(|query| {
                let result = registry.evaluate(&query, view_id, &self.view);
                Outcome { query, result }
            })
            .collect()
    }
}
