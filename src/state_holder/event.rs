use super::EditorState;

/// The five inputs the editor state machine reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorEvent {
    /// Buffer content changed
    Input,
    /// Explicit save request
    Save,
    /// Save under a new name
    SaveAs,
    /// Discard the buffer and start over
    New,
    /// Load a stored entry into the buffer
    OpenFile(String),
}

/// Side effect requested by a state handler, applied by the document holder
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Write the current buffer content to the store under this key
    PersistBuffer(String),
    /// Read this key from the store (absent means empty) and replace the buffer with it
    LoadEntry(String),
    /// Empty the buffer
    ClearBuffer,
    /// Re-enumerate the store keys for the file list
    RefreshFileList,
}

/// Outcome of one handler: the next state plus the effects to apply, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub next: EditorState,
    pub effects: Vec<Effect>,
}

impl Transition {
    /// Move to `next` without side effects
    pub fn to(next: EditorState) -> Self {
        Self {
            next,
            effects: Vec::new(),
        }
    }

    /// Append an effect
    pub fn with(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }

    pub fn is_pure(&self) -> bool {
        self.effects.is_empty()
    }
}
