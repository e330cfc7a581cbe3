//! Rendering helpers
//!
//! - `figure`: which hangman parts are shown for a wrong count
//! - `text`: terminal screen for the native build
//!
//! The browser build renders into the DOM from `main.rs`.

pub mod figure;
pub mod text;

pub use figure::{FigurePart, ascii_art, visible_parts};
