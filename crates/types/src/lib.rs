//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, input mapping, terminal rendering).
//!
//! # Puzzle Shape
//!
//! A puzzle is always 4 hidden groups of 4 items (16 items total), and the
//! player has a budget of 4 mistakes. These are structural constants, not
//! configuration: the engine validates every puzzle definition against them
//! at construction time.
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep for the event loop (~60 FPS) |
//! | `COUNTDOWN_TICK_MS` | 1000 | Cadence at which the rotation clock is polled |
//! | `DEFAULT_DAS_MS` | 150 | Held cursor key delay before auto-repeat |
//! | `DEFAULT_ARR_MS` | 50 | Interval between cursor auto-repeats |
//!
//! # Daily Rotation
//!
//! The next puzzle is released at local midnight in a fixed reference zone,
//! `RELEASE_UTC_OFFSET_SECS` away from UTC. The offset is a plain constant so
//! the rotation clock stays a pure function of supplied instants.

/// Number of hidden groups in a puzzle.
pub const GROUP_COUNT: usize = 4;

/// Number of items in each group (and in a submitted guess).
pub const GROUP_SIZE: usize = 4;

/// Total number of items on the board.
pub const ITEM_COUNT: usize = GROUP_COUNT * GROUP_SIZE;

/// Mistake budget at the start of a session.
pub const STARTING_MISTAKES: u8 = 4;

/// Event loop timestep (milliseconds).
pub const TICK_MS: u32 = 16;

/// Cadence at which the rotation countdown is re-evaluated (milliseconds).
pub const COUNTDOWN_TICK_MS: u32 = 1000;

/// DAS/ARR timing for held cursor keys (milliseconds).
pub const DEFAULT_DAS_MS: u32 = 150;
pub const DEFAULT_ARR_MS: u32 = 50;

/// Reference time zone for the daily release boundary: UTC-8.
///
/// The release schedule follows the US Pacific day boundary; DST is not
/// modeled, which keeps the rotation clock a total function of its inputs.
pub const RELEASE_UTC_OFFSET_SECS: i32 = -8 * 3600;

/// Index of an item within a puzzle (0..16).
///
/// Items are interned at engine construction; every layer above the engine
/// refers to items by id and resolves labels through the engine.
pub type ItemId = u8;

/// Session status of the puzzle state machine.
///
/// `Won` and `Lost` are terminal until an explicit reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    /// True once the session has ended (either way).
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameStatus::Won | GameStatus::Lost)
    }
}

/// Discrete result of a single `submit()` call.
///
/// Exactly one of these is produced per submission attempt. All of them are
/// recoverable user-facing conditions, never errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GuessOutcome {
    /// The selection matched a group exactly; the group is now solved.
    Correct,
    /// Three of the four selected items share a group. The selection is kept
    /// and no mistake is charged, so the player can adjust one item.
    AlmostCorrect,
    /// No group matched and no near-miss; one mistake charged.
    Incorrect,
    /// This exact combination was already submitted. Costs nothing.
    DuplicateGuess,
    /// Fewer than four items selected (or the session is over).
    InvalidSelectionSize,
}

/// Player intents produced by the input layer.
///
/// Cursor movement is a presentation concern (which cell is highlighted);
/// the rest map 1:1 onto engine operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    CursorLeft,
    CursorRight,
    CursorUp,
    CursorDown,
    ToggleSelect,
    Submit,
    Shuffle,
    DeselectAll,
    Reset,
}

/// Display color of a group.
///
/// Parsed by name in puzzle files; mapped to concrete RGB values by the
/// terminal view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupColor {
    Green,
    Yellow,
    Orange,
    Crimson,
    Blue,
    Purple,
}

impl GroupColor {
    /// Parse a color name (case-insensitive).
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "green" => Some(GroupColor::Green),
            "yellow" => Some(GroupColor::Yellow),
            "orange" => Some(GroupColor::Orange),
            "crimson" | "red" => Some(GroupColor::Crimson),
            "blue" => Some(GroupColor::Blue),
            "purple" => Some(GroupColor::Purple),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GroupColor::Green => "green",
            GroupColor::Yellow => "yellow",
            GroupColor::Orange => "orange",
            GroupColor::Crimson => "crimson",
            GroupColor::Blue => "blue",
            GroupColor::Purple => "purple",
        }
    }
}
