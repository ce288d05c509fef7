//! Terminal rendering module.
//!
//! A small, game-oriented rendering layer: the view draws into a plain
//! framebuffer of styled character cells, and the renderer flushes full
//! frames to the terminal. Draws only happen when state changes (or the
//! countdown advances), so there is no diffing pipeline.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep the view pure (no I/O) so layouts can be unit-tested
//! - Restore the terminal reliably on exit

pub mod fb;
pub mod puzzle_view;
pub mod renderer;

pub use tui_connections_core as core;
pub use tui_connections_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use puzzle_view::{outcome_message, Hud, PuzzleView, ViewOptions, Viewport};
pub use renderer::TerminalRenderer;
