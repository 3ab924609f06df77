//! Keyboard state
//!
//! The host forwards raw key codes; bindings map them to actions. The
//! simulation only ever sees the [`TickInput`] snapshot taken once per tick.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::sim::TickInput;

/// Logical actions the player can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Left,
    Right,
    Jump,
}

/// Key codes bound to each action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub left: Vec<String>,
    pub right: Vec<String>,
    pub jump: Vec<String>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            left: vec!["ArrowLeft".to_string()],
            right: vec!["ArrowRight".to_string()],
            jump: vec!["Space".to_string()],
        }
    }
}

impl KeyBindings {
    /// Action bound to a key code. Left wins if a code is bound twice.
    pub fn action_for(&self, code: &str) -> Option<Action> {
        let bound = |keys: &[String]| keys.iter().any(|k| k == code);
        if bound(&self.left) {
            Some(Action::Left)
        } else if bound(&self.right) {
            Some(Action::Right)
        } else if bound(&self.jump) {
            Some(Action::Jump)
        } else {
            None
        }
    }
}

/// Currently held keys
#[derive(Debug, Clone, Default)]
pub struct InputState {
    bindings: KeyBindings,
    keys: HashMap<String, bool>,
}

impl InputState {
    pub fn new(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            keys: HashMap::new(),
        }
    }

    /// Record a key press. Returns true if the key is bound to an action,
    /// so the host can stop the browser/OS default for it.
    pub fn key_down(&mut self, code: &str) -> bool {
        self.keys.insert(code.to_string(), true);
        self.bindings.action_for(code).is_some()
    }

    pub fn key_up(&mut self, code: &str) {
        self.keys.insert(code.to_string(), false);
    }

    /// Window lost focus: release everything
    pub fn blur(&mut self) {
        self.keys.clear();
    }

    pub fn is_pressed(&self, action: Action) -> bool {
        self.keys
            .iter()
            .any(|(code, &down)| down && self.bindings.action_for(code) == Some(action))
    }

    /// Held-state snapshot for one tick
    pub fn snapshot(&self) -> TickInput {
        TickInput {
            left: self.is_pressed(Action::Left),
            right: self.is_pressed(Action::Right),
            jump: self.is_pressed(Action::Jump),
        }
    }
}
