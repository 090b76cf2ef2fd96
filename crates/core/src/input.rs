//! Input Mode Selection
//!
//! Tracks the active input channel and keeps one buffer per channel, so a
//! user can switch tabs and come back without retyping.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::{InputMode, QueryInput};

/// Active mode plus an independent buffer for each mode
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputModeSelector {
    mode: InputMode,
    buffers: HashMap<InputMode, String>,
}

impl InputModeSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently active mode
    pub fn mode(&self) -> InputMode {
        self.mode
    }

    /// Switch the active mode. Buffers are left untouched.
    pub fn set_mode(&mut self, mode: InputMode) {
        self.mode = mode;
    }

    /// Replace the buffer of `mode`, active or not
    pub fn set_value(&mut self, mode: InputMode, value: impl Into<String>) {
        self.buffers.insert(mode, value.into());
    }

    /// Buffer content of `mode`
    pub fn value(&self, mode: InputMode) -> &str {
        self.buffers.get(&mode).map(String::as_str).unwrap_or("")
    }

    /// Buffer content of the active mode
    pub fn active_value(&self) -> &str {
        self.value(self.mode)
    }

    /// Empty the active buffer only
    pub fn clear_active(&mut self) {
        self.buffers.remove(&self.mode);
    }

    /// Snapshot of the active mode and its value
    pub fn current(&self) -> QueryInput {
        QueryInput {
            mode: self.mode,
            value: self.active_value().to_string(),
        }
    }
}
