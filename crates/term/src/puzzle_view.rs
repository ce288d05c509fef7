//! PuzzleView: maps engine state into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::PuzzleEngine;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{GameStatus, GroupColor, GuessOutcome, GROUP_SIZE, STARTING_MISTAKES};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Presentation knobs (the recognized display options).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewOptions {
    /// Show the answer color grid on the results screen.
    pub show_completion_banner: bool,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            show_completion_banner: true,
        }
    }
}

/// Per-frame presentation state owned by the event loop.
#[derive(Debug, Clone, Copy)]
pub struct Hud<'a> {
    /// Highlighted slot in the remaining-items grid.
    pub cursor: usize,
    /// Result of the most recent submission, if any.
    pub last_outcome: Option<GuessOutcome>,
    /// Countdown string for the results screen.
    pub countdown: Option<&'a str>,
}

/// Message line text for a submission outcome.
pub fn outcome_message(outcome: GuessOutcome) -> &'static str {
    match outcome {
        GuessOutcome::Correct => "Correct! You've found a group.",
        GuessOutcome::AlmostCorrect => "So close - one away!",
        GuessOutcome::Incorrect => "Incorrect. Try again!",
        GuessOutcome::DuplicateGuess => "You've already guessed this combination!",
        GuessOutcome::InvalidSelectionSize => "Please select exactly 4 words before submitting.",
    }
}

/// A lightweight terminal renderer for the grouping puzzle.
pub struct PuzzleView {
    /// Word cell width in terminal columns.
    cell_w: u16,
    options: ViewOptions,
}

impl Default for PuzzleView {
    fn default() -> Self {
        Self {
            // Wide enough for the longest default labels plus padding.
            cell_w: 13,
            options: ViewOptions::default(),
        }
    }
}

impl PuzzleView {
    pub fn new(options: ViewOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    fn board_w(&self) -> u16 {
        (self.cell_w + 1) * GROUP_SIZE as u16 - 1
    }

    /// Render the current session into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is resized to the
    /// viewport and cleared here.
    pub fn render_into(
        &self,
        game: &PuzzleEngine,
        hud: &Hud<'_>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default());

        fb.put_str_centered(1, game.title(), CellStyle::default().bold());
        fb.put_str_centered(2, "Create four groups of four!", CellStyle::default().dim());

        if game.status().is_terminal() {
            self.render_results(game, hud, fb);
        } else {
            self.render_board(game, hud, fb);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, game: &PuzzleEngine, hud: &Hud<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(game, hud, viewport, &mut fb);
        fb
    }

    fn render_board(&self, game: &PuzzleEngine, hud: &Hud<'_>, fb: &mut FrameBuffer) {
        let start_x = fb.width().saturating_sub(self.board_w()) / 2;
        let mut y = 4;

        // Solved groups, in discovery order.
        for &gi in game.solved() {
            let group = game.group(gi);
            let banner = CellStyle {
                fg: Rgb::new(10, 10, 10),
                bg: group_rgb(group.color),
                bold: false,
                dim: false,
            };
            fb.fill_rect(start_x, y, self.board_w(), 2, ' ', banner);

            let names: Vec<&str> = group.members.iter().map(|&id| game.label(id)).collect();
            put_centered_in(fb, start_x, self.board_w(), y, &group.name, banner.bold());
            put_centered_in(fb, start_x, self.board_w(), y + 1, &names.join(", "), banner);
            y += 2;
        }
        if !game.solved().is_empty() {
            y += 1;
        }

        // Remaining items, four per row.
        for (slot, &id) in game.remaining().iter().enumerate() {
            let row = (slot / GROUP_SIZE) as u16;
            let col = (slot % GROUP_SIZE) as u16;
            let cx = start_x + col * (self.cell_w + 1);
            let cy = y + row * 2;

            let selected = game.is_selected(id);
            let under_cursor = slot == hud.cursor;

            let mut style = if selected {
                CellStyle {
                    fg: Rgb::new(10, 10, 10),
                    bg: Rgb::new(222, 202, 128),
                    bold: false,
                    dim: false,
                }
            } else {
                CellStyle::default().on(Rgb::new(38, 38, 46))
            };
            if under_cursor {
                style = style.bold();
            }

            fb.fill_rect(cx, cy, self.cell_w, 1, ' ', style);
            put_centered_in(fb, cx, self.cell_w, cy, game.label(id), style);
            if under_cursor {
                fb.put_char(cx, cy, '▸', style);
            }
        }
        let grid_rows = (game.remaining().len() / GROUP_SIZE) as u16;
        y += grid_rows.saturating_mul(2).saturating_sub(1) + 2;

        // Mistake budget as dots.
        let mut dots = String::from("Mistakes remaining: ");
        for i in 0..STARTING_MISTAKES {
            dots.push(if i < game.mistakes_remaining() { '●' } else { '·' });
            dots.push(' ');
        }
        fb.put_str_centered(y, dots.trim_end(), CellStyle::default());
        y += 2;

        if let Some(outcome) = hud.last_outcome {
            fb.put_str_centered(y, outcome_message(outcome), message_style(outcome));
        }
        y += 2;

        fb.put_str_centered(
            y,
            "arrows move · space select · enter submit · z shuffle · x clear · r reset · q quit",
            CellStyle::default().dim(),
        );
    }

    fn render_results(&self, game: &PuzzleEngine, hud: &Hud<'_>, fb: &mut FrameBuffer) {
        let mut y = 4;

        let won = game.status() == GameStatus::Won;
        let banner = if won {
            "Congratulations, you won!"
        } else {
            "Next Time!"
        };
        fb.put_str_centered(y, banner, CellStyle::default().bold());
        y += 1;
        fb.put_str_centered(
            y,
            &format!("Connections #{}", game.number()),
            CellStyle::default().dim(),
        );
        y += 2;

        // The answer, one colored row per group.
        if self.options.show_completion_banner {
            let swatch_w: u16 = 5;
            let grid_w = (swatch_w + 1) * GROUP_SIZE as u16 - 1;
            let start_x = fb.width().saturating_sub(grid_w) / 2;
            for group in game.groups() {
                let style = CellStyle::default().on(group_rgb(group.color));
                for col in 0..GROUP_SIZE as u16 {
                    fb.fill_rect(start_x + col * (swatch_w + 1), y, swatch_w, 1, ' ', style);
                }
                y += 1;
            }
            y += 1;
        }

        fb.put_str_centered(y, "NEXT PUZZLE IN", CellStyle::default().dim());
        y += 1;
        if let Some(countdown) = hud.countdown {
            fb.put_str_centered(y, countdown, CellStyle::default().bold());
        }
        y += 2;

        fb.put_str_centered(y, "r new game · q quit", CellStyle::default().dim());
    }
}

fn message_style(outcome: GuessOutcome) -> CellStyle {
    match outcome {
        GuessOutcome::Correct => CellStyle::fg(Rgb::new(120, 230, 120)),
        GuessOutcome::AlmostCorrect => CellStyle::fg(Rgb::new(240, 220, 100)),
        GuessOutcome::Incorrect => CellStyle::fg(Rgb::new(235, 110, 100)),
        GuessOutcome::DuplicateGuess | GuessOutcome::InvalidSelectionSize => {
            CellStyle::default().dim()
        }
    }
}

/// Write a string centered within a span starting at `x`.
fn put_centered_in(fb: &mut FrameBuffer, x: u16, span: u16, y: u16, s: &str, style: CellStyle) {
    let len = s.chars().count() as u16;
    let off = span.saturating_sub(len) / 2;
    fb.put_str(x + off, y, s, style);
}

/// Concrete RGB values for the group palette.
///
/// The first four match the default puzzle's original colors.
fn group_rgb(color: GroupColor) -> Rgb {
    match color {
        GroupColor::Green => Rgb::new(0x2e, 0xff, 0x2e),
        GroupColor::Yellow => Rgb::new(0xff, 0xea, 0x00),
        GroupColor::Orange => Rgb::new(0xff, 0x57, 0x33),
        GroupColor::Crimson => Rgb::new(0xc4, 0x1e, 0x3a),
        GroupColor::Blue => Rgb::new(0x3d, 0x85, 0xc6),
        GroupColor::Purple => Rgb::new(0xb0, 0x6e, 0xd9),
    }
}
