//! Quill - A single-document terminal text editor with an explicit save state machine
//!
//! This library provides the core functionality for Quill, including the
//! save/dirty state machine, the document context that applies its effects,
//! the key-value store that persists documents by name, and the terminal UI.
//!
//! # Architecture
//!
//! - [`state_holder`]: State machine deciding how each editor event is handled
//! - [`document_holder`]: Editor context owning state, buffer and store
//! - [`app`]: Terminal application, focus handling and rendering
//! - [`config`]: TOML configuration loading
//!
//! # Core Types
//!
//! - [`state_holder::EditorState`]: The four save/dirty states
//! - [`document_holder::DocumentHolder`]: Event dispatcher
//! - [`app::App`]: Main application struct
//! - [`app::app_error::AppError`]: Error types with `thiserror`

pub mod app;
pub mod config;
pub mod document_holder;
pub mod state_holder;
