//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the puzzle rules and state management. It has
//! **zero dependencies** on UI, networking, or I/O, making it:
//!
//! - **Deterministic**: the same seed deals the same board order
//! - **Testable**: every rule is exercised by unit tests
//! - **Portable**: can run in any environment (terminal, headless)
//!
//! # Module Structure
//!
//! - [`puzzle`]: static puzzle definitions and fail-fast validation
//! - [`engine`]: the session state machine (selection, guesses, termination)
//! - [`rng`]: seeded pseudo-random shuffling for display order
//! - [`rotation`]: daily release boundary and countdown formatting
//!
//! # Game Rules
//!
//! Sixteen items hide four groups of four. The player selects up to four
//! items and submits; an exact group match solves that group, three-of-four
//! is a free near miss, anything else costs one of four mistakes. Solving
//! all groups wins, exhausting the budget loses, and both outcomes are
//! terminal until an explicit reset. Repeating an already-submitted
//! combination never costs a mistake.
//!
//! # Example
//!
//! ```
//! use tui_connections_core::{PuzzleEngine, PuzzleDef, GroupDef};
//! use tui_connections_types::{GroupColor, GuessOutcome};
//!
//! let def = PuzzleDef {
//!     number: 1,
//!     title: "Demo".into(),
//!     groups: vec![
//!         GroupDef::new("A", GroupColor::Green, ["A1", "A2", "A3", "A4"]),
//!         GroupDef::new("B", GroupColor::Yellow, ["B1", "B2", "B3", "B4"]),
//!         GroupDef::new("C", GroupColor::Orange, ["C1", "C2", "C3", "C4"]),
//!         GroupDef::new("D", GroupColor::Crimson, ["D1", "D2", "D3", "D4"]),
//!     ],
//! };
//!
//! let mut game = PuzzleEngine::new(&def, 12345).unwrap();
//! for item in ["A1", "A2", "A3", "A4"] {
//!     game.toggle_select(item);
//! }
//! assert_eq!(game.submit(), GuessOutcome::Correct);
//! assert_eq!(game.solved().len(), 1);
//! ```

pub mod engine;
pub mod puzzle;
pub mod rng;
pub mod rotation;

pub use tui_connections_types as types;

pub use engine::{GameRules, GroupInfo, PuzzleEngine};
pub use puzzle::{GroupDef, PuzzleDef, PuzzleError};
pub use rng::SimpleRng;
pub use rotation::{format_countdown, next_release_after, RotationClock};
