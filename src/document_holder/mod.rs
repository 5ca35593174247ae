//! Editor context: the open document, its store and its state
//!
//! This module handles:
//! - Routing the five editor events to the current [`EditorState`]
//! - Applying the effects a transition requests (store writes, buffer loads)
//! - Keeping the display label and the stored file list current
//!
//! # Core Types
//!
//! - [`DocumentHolder`]: The dispatcher owning state, buffer and store
//! - [`BufferSurface`] / [`TextBuffer`]: Buffer text access
//! - [`KeyValueStore`] / [`FileStore`] / [`MemoryStore`]: Persisted entries

pub mod buffer;
pub mod store;

pub use buffer::{BufferSurface, TextBuffer};
pub use store::{FileStore, KeyValueStore, MemoryStore};

use tracing::{debug, warn};

use crate::app::app_error::AppResult;
use crate::state_holder::{Effect, EditorEvent, EditorState, FilenamePrompt, DEFAULT_EXTENSION};

/// Owns the single open document and dispatches events against it
///
/// # Fields
///
/// - `state`: Current save/dirty state
/// - `buffer`: Buffer surface holding the text
/// - `store`: Persisted entries
/// - `extension`: Appended to save-as names lacking it
/// - `label`: Display label of `state`, refreshed after every dispatch
/// - `files`: Stored names, refreshed at startup and after every save
#[derive(Debug)]
pub struct DocumentHolder<S, B> {
    state: EditorState,
    buffer: B,
    store: S,
    extension: String,
    label: String,
    files: Vec<String>,
}

impl<S: KeyValueStore, B: BufferSurface> DocumentHolder<S, B> {
    /// Starts a session in `CleanUnsaved` with the default extension
    ///
    /// # Returns
    ///
    /// Returns `AppResult<Self>` which may contain `AppError::Storage` if the
    /// initial file list cannot be read
    pub fn new(store: S, buffer: B) -> AppResult<Self> {
        Self::with_extension(store, buffer, DEFAULT_EXTENSION)
    }

    pub fn with_extension(store: S, buffer: B, extension: impl Into<String>) -> AppResult<Self> {
        let state = EditorState::default();
        let mut holder = DocumentHolder {
            label: state.display_label(),
            state,
            buffer,
            store,
            extension: extension.into(),
            files: Vec::new(),
        };
        holder.files = holder.store.keys()?;
        Ok(holder)
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn files(&self) -> &[String] {
        &self.files
    }

    pub fn buffer(&self) -> &B {
        &self.buffer
    }

    /// Direct access for the editing pane; report content changes with
    /// [`EditorEvent::Input`].
    pub fn buffer_mut(&mut self) -> &mut B {
        &mut self.buffer
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Whether dispatching `event` now would ask for a filename
    pub fn needs_prompt(&self, event: &EditorEvent) -> bool {
        self.state.prompts_for(event)
    }

    /// Handles one event to completion
    ///
    /// The next state is only assigned once every effect applied. On error
    /// the state, the buffer and the label are exactly as before.
    ///
    /// # Returns
    ///
    /// Returns the effects that were applied, or `AppError::Storage` if the
    /// store rejects a read or write
    pub fn dispatch(
        &mut self,
        event: EditorEvent,
        prompt: &mut dyn FilenamePrompt,
    ) -> AppResult<Vec<Effect>> {
        let transition = self.state.handle(&event, prompt, &self.extension);
        for effect in &transition.effects {
            self.apply(effect)?;
        }
        debug!(
            target: "editor",
            ?event,
            from = ?self.state,
            to = ?transition.next,
            effects = ?transition.effects,
            "dispatch"
        );
        self.state = transition.next;
        self.label = self.state.display_label();
        Ok(transition.effects)
    }

    /// Re-reads the stored names
    pub fn refresh_files(&mut self) -> AppResult<()> {
        self.files = self.store.keys()?;
        Ok(())
    }

    fn apply(&mut self, effect: &Effect) -> AppResult<()> {
        match effect {
            Effect::PersistBuffer(filename) => {
                let content = self.buffer.content();
                self.store.set(filename, &content)?;
            }
            Effect::LoadEntry(filename) => {
                let content = self.store.get(filename)?.unwrap_or_default();
                self.buffer.set_content(&content);
            }
            Effect::ClearBuffer => self.buffer.clear(),
            Effect::RefreshFileList => {
                // the write already landed; only log
                if let Err(e) = self.refresh_files() {
                    warn!(target: "editor", %e, "file_list_refresh_failed");
                }
            }
        }
        Ok(())
    }
}
