//! Keyboard shortcuts for the editor chrome
//!
//! A thin lookup table from modifier-key combos to core operations. The
//! actions carry no logic of their own; the UI layer dispatches them onto
//! the session (and the store, for save).

/// Core operations reachable from the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorAction {
    Save,
    Undo,
    Redo,
    ToggleMode,
    Deselect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Escape,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyCombo {
    pub key: Key,
    pub ctrl: bool,
    pub shift: bool,
}

impl KeyCombo {
    pub fn ctrl(key: char) -> Self {
        Self {
            key: Key::Char(key),
            ctrl: true,
            shift: false,
        }
    }

    pub fn ctrl_shift(key: char) -> Self {
        Self {
            key: Key::Char(key),
            ctrl: true,
            shift: true,
        }
    }

    pub fn escape() -> Self {
        Self {
            key: Key::Escape,
            ctrl: false,
            shift: false,
        }
    }
}

/// Shortcut table
pub struct Keymap {
    bindings: Vec<(KeyCombo, EditorAction)>,
}

impl Keymap {
    /// The standard editor bindings
    pub fn standard() -> Self {
        Self {
            bindings: vec![
                (KeyCombo::ctrl('s'), EditorAction::Save),
                (KeyCombo::ctrl('z'), EditorAction::Undo),
                (KeyCombo::ctrl_shift('z'), EditorAction::Redo),
                (KeyCombo::ctrl('e'), EditorAction::ToggleMode),
                (KeyCombo::escape(), EditorAction::Deselect),
            ],
        }
    }

    pub fn resolve(&self, combo: KeyCombo) -> Option<EditorAction> {
        self.bindings
            .iter()
            .find(|(bound, _)| *bound == combo)
            .map(|(_, action)| *action)
    }
}

impl Default for Keymap {
    fn default() -> Self {
        Self::standard()
    }
}
