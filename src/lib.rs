//! vicontext - modal editing state for host editors
//!
//! Tracks the vi mode and pending command of each editor view and answers the
//! host key-binding resolver's guard checks ("is this view in normal mode?",
//! "must Escape reset the pending command?") on every keystroke.

#![deny(warnings)]

pub mod config;
pub mod context;
pub mod evaluator;
pub mod logging;
pub mod mode;
pub mod namespace;
pub mod pending;
pub mod registry;
pub mod scenario;
pub mod settings;
pub mod state;

pub use context::{EditorContext, Region, ViewSnapshot};
pub use evaluator::{evaluate, ContextQuery, ContextResult, Operand, Operator};
pub use mode::Mode;
pub use registry::{ViewId, ViewRegistry};
pub use state::ViewState;
