//! Focus-specific event handlers and help line rendering
//!
//! Each module handles key events and the help line for one [`super::Focus`].
//! Handlers translate keys into buffer edits and editor events; the editor
//! state machine itself never sees raw keys.
//!
//! # Modules
//!
//! - `editing` - Typing into the buffer, save/new shortcuts
//! - `file_list` - Picking a stored file to open
//! - `filename_prompt` - Collecting a save-as name

pub mod editing;
pub mod file_list;
pub mod filename_prompt;
