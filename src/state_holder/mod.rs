//! Document state machine
//!
//! This module decides how the editor reacts to each incoming event. It is
//! pure: handlers only compute the next state and list the side effects the
//! [`crate::document_holder::DocumentHolder`] must apply. The only outside
//! input a handler ever receives is the filename prompt.
//!
//! # State Model
//!
//! Two independent axes, saved identity known or unknown and modified since
//! the last persist or not, give four states:
//!
//! | State                | Label           |
//! |----------------------|-----------------|
//! | `CleanUnsaved`       | `_`             |
//! | `CleanSaved(name)`   | `name`          |
//! | `DirtyUnsaved`       | `*`             |
//! | `DirtySaved(name)`   | `name *`        |
//!
//! # State Transitions
//!
//! ```text
//! [CleanUnsaved] ---- input ----> [DirtyUnsaved]
//!       |                               |
//!    save-as                     save / save-as
//!       v                               |
//! [CleanSaved(f)] <---------------------+
//!     |     ^
//!   input   save / save-as
//!     v     |
//! [DirtySaved(f)]
//! ```
//!
//! `new` reaches `CleanUnsaved` and `open` reaches `CleanSaved(f)` from every
//! state, discarding unsaved edits.

pub mod event;
pub mod filename;

pub use event::{Effect, EditorEvent, Transition};
pub use filename::{normalize_filename, FilenamePrompt, PromptAnswer, DEFAULT_EXTENSION};

use EditorState::*;

/// Save/dirty state of the single open document
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub enum EditorState {
    /// Never saved, never modified
    #[default]
    CleanUnsaved,
    /// Buffer matches the stored entry
    CleanSaved(String),
    /// Modified, no name yet
    DirtyUnsaved,
    /// Modified since the last save or open of this entry
    DirtySaved(String),
}

impl EditorState {
    /// Saved identity, present only for the two saved states
    pub fn filename(&self) -> Option<&str> {
        match self {
            CleanSaved(filename) | DirtySaved(filename) => Some(filename),
            CleanUnsaved | DirtyUnsaved => None,
        }
    }

    pub fn is_dirty(&self) -> bool {
        matches!(self, DirtyUnsaved | DirtySaved(_))
    }

    pub fn display_label(&self) -> String {
        match self {
            CleanUnsaved => "_".to_string(),
            CleanSaved(filename) => filename.clone(),
            DirtyUnsaved => "*".to_string(),
            DirtySaved(filename) => format!("{filename} *"),
        }
    }

    /// Whether handling `event` from this state will ask for a filename
    ///
    /// Hosts that cannot block on a prompt use this to collect the name
    /// before dispatching.
    pub fn prompts_for(&self, event: &EditorEvent) -> bool {
        match event {
            EditorEvent::SaveAs => true,
            EditorEvent::Save => self.filename().is_none(),
            EditorEvent::Input | EditorEvent::New | EditorEvent::OpenFile(_) => false,
        }
    }

    /// Route `event` to the matching handler
    pub fn handle(
        &self,
        event: &EditorEvent,
        prompt: &mut dyn FilenamePrompt,
        extension: &str,
    ) -> Transition {
        match event {
            EditorEvent::Input => self.on_input(),
            EditorEvent::Save => self.on_save(prompt, extension),
            EditorEvent::SaveAs => self.on_save_as(prompt, extension),
            EditorEvent::New => self.on_new(),
            EditorEvent::OpenFile(filename) => self.on_open_file(filename),
        }
    }

    pub fn on_input(&self) -> Transition {
        match self {
            CleanUnsaved => Transition::to(DirtyUnsaved),
            CleanSaved(filename) => Transition::to(DirtySaved(filename.clone())),
            DirtyUnsaved | DirtySaved(_) => Transition::to(self.clone()),
        }
    }

    pub fn on_save(&self, prompt: &mut dyn FilenamePrompt, extension: &str) -> Transition {
        match self {
            CleanUnsaved | DirtyUnsaved => self.on_save_as(prompt, extension),
            // nothing changed since the last persist
            CleanSaved(_) => Transition::to(self.clone()),
            DirtySaved(filename) => Transition::to(CleanSaved(filename.clone()))
                .with(Effect::PersistBuffer(filename.clone()))
                .with(Effect::RefreshFileList),
        }
    }

    /// Same sequence from every state: ask, normalize, persist, become clean.
    pub fn on_save_as(&self, prompt: &mut dyn FilenamePrompt, extension: &str) -> Transition {
        let filename = prompt
            .prompt_filename()
            .and_then(|raw| normalize_filename(&raw, extension));
        match filename {
            Some(filename) => Transition::to(CleanSaved(filename.clone()))
                .with(Effect::PersistBuffer(filename))
                .with(Effect::RefreshFileList),
            None => Transition::to(self.clone()),
        }
    }

    pub fn on_new(&self) -> Transition {
        Transition::to(CleanUnsaved).with(Effect::ClearBuffer)
    }

    pub fn on_open_file(&self, filename: &str) -> Transition {
        Transition::to(CleanSaved(filename.to_string()))
            .with(Effect::LoadEntry(filename.to_string()))
    }
}
