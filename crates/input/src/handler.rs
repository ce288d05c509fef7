//! DAS/ARR repeat handler for held cursor keys.
//!
//! Supports terminals that do not emit key release events by using a timeout.

use crossterm::event::KeyCode;

use arrayvec::ArrayVec;

use crate::types::{GameAction, DEFAULT_ARR_MS, DEFAULT_DAS_MS};

/// Direction of a held cursor key, per axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Held {
    Negative,
    Positive,
    None,
}

/// One cursor axis with its DAS/ARR timers.
#[derive(Debug, Clone)]
struct Axis {
    held: Held,
    das_timer: u32,
    arr_accumulator: u32,
}

impl Axis {
    fn new() -> Self {
        Self {
            held: Held::None,
            das_timer: 0,
            arr_accumulator: 0,
        }
    }

    fn press(&mut self, direction: Held) -> bool {
        if self.held == direction {
            return false;
        }
        self.held = direction;
        self.das_timer = 0;
        self.arr_accumulator = 0;
        true
    }

    fn release(&mut self, direction: Held) {
        if self.held == direction {
            *self = Self::new();
        }
    }

    /// Advance timers and return how many repeats fired this tick.
    fn repeats(&mut self, elapsed_ms: u32, das_delay: u32, arr_rate: u32) -> u32 {
        if self.held == Held::None {
            self.das_timer = 0;
            self.arr_accumulator = 0;
            return 0;
        }

        let prev_das = self.das_timer;
        self.das_timer += elapsed_ms;
        if self.das_timer < das_delay {
            return 0;
        }

        // Only time beyond the DAS threshold counts toward repeats.
        let excess = if prev_das < das_delay {
            self.das_timer - das_delay
        } else {
            elapsed_ms
        };
        self.arr_accumulator += excess;

        let count = self.arr_accumulator / arr_rate;
        self.arr_accumulator %= arr_rate;
        count
    }
}

/// Tracks held cursor keys and emits auto-repeats after a DAS delay.
#[derive(Debug, Clone)]
pub struct InputHandler {
    horizontal: Axis,
    vertical: Axis,
    last_key_time: std::time::Instant,
    das_delay: u32,
    arr_rate: u32,
    key_release_timeout_ms: u32,
}

// In terminals without key-release events, a short timeout prevents a single tap
// from turning into a sustained "held" state that triggers DAS/ARR repeats.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 150;

impl InputHandler {
    pub fn new() -> Self {
        Self::with_config(DEFAULT_DAS_MS, DEFAULT_ARR_MS)
    }

    pub fn with_config(das_delay: u32, arr_rate: u32) -> Self {
        Self {
            horizontal: Axis::new(),
            vertical: Axis::new(),
            last_key_time: std::time::Instant::now(),
            das_delay,
            arr_rate,
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn key_release_timeout_ms(&self) -> u32 {
        self.key_release_timeout_ms
    }

    /// Handle a cursor key press.
    ///
    /// Returns the immediate action for a fresh press; repeat presses of the
    /// same direction (terminal auto-repeat) return None and are left to the
    /// DAS/ARR timers. Non-cursor keys return None.
    pub fn handle_key_press(&mut self, code: KeyCode) -> Option<GameAction> {
        let (axis, direction, action) = self.classify(code)?;
        self.last_key_time = std::time::Instant::now();
        let fresh = match axis {
            AxisKind::Horizontal => self.horizontal.press(direction),
            AxisKind::Vertical => self.vertical.press(direction),
        };
        fresh.then_some(action)
    }

    pub fn handle_key_release(&mut self, code: KeyCode) {
        if let Some((axis, direction, _)) = self.classify(code) {
            match axis {
                AxisKind::Horizontal => self.horizontal.release(direction),
                AxisKind::Vertical => self.vertical.release(direction),
            }
        }
    }

    fn classify(&self, code: KeyCode) -> Option<(AxisKind, Held, GameAction)> {
        match code {
            KeyCode::Left | KeyCode::Char('h' | 'H' | 'a' | 'A') => {
                Some((AxisKind::Horizontal, Held::Negative, GameAction::CursorLeft))
            }
            KeyCode::Right | KeyCode::Char('l' | 'L' | 'd' | 'D') => Some((
                AxisKind::Horizontal,
                Held::Positive,
                GameAction::CursorRight,
            )),
            KeyCode::Up | KeyCode::Char('k' | 'K' | 'w' | 'W') => {
                Some((AxisKind::Vertical, Held::Negative, GameAction::CursorUp))
            }
            KeyCode::Down | KeyCode::Char('j' | 'J' | 's' | 'S') => {
                Some((AxisKind::Vertical, Held::Positive, GameAction::CursorDown))
            }
            _ => None,
        }
    }

    /// Advance timers by `elapsed_ms` and collect auto-repeat actions.
    pub fn update(&mut self, elapsed_ms: u32) -> ArrayVec<GameAction, 16> {
        let mut actions = ArrayVec::<GameAction, 16>::new();

        // Auto-release when the terminal does not emit release events.
        let time_since_last_key = self.last_key_time.elapsed().as_millis() as u32;
        if time_since_last_key > self.key_release_timeout_ms {
            self.horizontal = Axis::new();
            self.vertical = Axis::new();
        }

        let h_held = self.horizontal.held;
        for _ in 0..self
            .horizontal
            .repeats(elapsed_ms, self.das_delay, self.arr_rate)
        {
            let action = match h_held {
                Held::Negative => GameAction::CursorLeft,
                Held::Positive => GameAction::CursorRight,
                Held::None => break,
            };
            let _ = actions.try_push(action);
        }

        let v_held = self.vertical.held;
        for _ in 0..self
            .vertical
            .repeats(elapsed_ms, self.das_delay, self.arr_rate)
        {
            let action = match v_held {
                Held::Negative => GameAction::CursorUp,
                Held::Positive => GameAction::CursorDown,
                Held::None => break,
            };
            let _ = actions.try_push(action);
        }

        actions
    }

    pub fn reset(&mut self) {
        self.horizontal = Axis::new();
        self.vertical = Axis::new();
        self.last_key_time = std::time::Instant::now();
    }
}

#[derive(Debug, Clone, Copy)]
enum AxisKind {
    Horizontal,
    Vertical,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
