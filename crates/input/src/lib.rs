//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`] and provides a
//! DAS/ARR repeat handler for held cursor keys, suitable for terminals
//! without key-release events.

pub mod handler;
pub mod map;

pub use tui_connections_types as types;

pub use handler::InputHandler;
pub use map::{handle_key_event, should_quit};
