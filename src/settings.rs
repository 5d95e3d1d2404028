//! Per-view key-value settings, as exposed by the host editor

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Ctrl-key bindings are enabled for vi commands
pub const USE_CTRL_KEYS: &str = "vintageous_use_ctrl_keys";

/// `:` opens the command line
pub const ENABLE_CMDLINE_MODE: &str = "vintageous_enable_cmdline_mode";

/// The view is in command (not insert) mode, as seen by the host
pub const COMMAND_MODE: &str = "command_mode";

/// The view is an internal input widget
pub const IS_WIDGET: &str = "is_widget";

/// A single setting value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    Bool(bool),
    Str(String),
}

impl From<bool> for SettingValue {
    fn from(value: bool) -> Self {
        SettingValue::Bool(value)
    }
}

impl From<&str> for SettingValue {
    fn from(value: &str) -> Self {
        SettingValue::Str(value.to_string())
    }
}

/// String-keyed settings store
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Settings {
    values: HashMap<String, SettingValue>,
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&SettingValue> {
        self.values.get(key)
    }

    /// Boolean value of a setting; missing or string values read as false
    pub fn get_bool(&self, key: &str) -> bool {
        matches!(self.get(key), Some(SettingValue::Bool(true)))
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<SettingValue>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<SettingValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Fill in every key missing here from `defaults`
    pub fn layer_over(&mut self, defaults: &Settings) {
        for (key, value) in &defaults.values {
            self.values
                .entry(key.clone())
                .or_insert_with(|| value.clone());
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
