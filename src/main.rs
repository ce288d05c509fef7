//! Terminal Connections runner (default binary).
//!
//! This is the gameplay entrypoint. It uses crossterm for input and a
//! framebuffer-based renderer, serializes all engine calls on one thread,
//! and polls the rotation clock once per second for the results screen.

mod config;

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Result};
use chrono::Utc;
use crossterm::event::{self, Event, KeyEventKind};

use tui_connections::core::{GameRules, PuzzleEngine, RotationClock};
use tui_connections::input::{handle_key_event, should_quit, InputHandler};
use tui_connections::term::{Hud, PuzzleView, TerminalRenderer, ViewOptions, Viewport};
use tui_connections::types::{
    GameAction, GuessOutcome, COUNTDOWN_TICK_MS, GROUP_SIZE, TICK_MS,
};

#[derive(Debug, Clone, PartialEq, Eq)]
struct CliArgs {
    puzzle: Option<PathBuf>,
    seed: u32,
    /// Disable the free near-miss exemption.
    strict: bool,
    /// Skip the answer color grid on the results screen.
    no_banner: bool,
}

fn parse_args(args: &[String]) -> Result<CliArgs> {
    let mut puzzle = None;
    let mut seed: u32 = 1;
    let mut strict = false;
    let mut no_banner = false;
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--puzzle" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --puzzle"))?;
                puzzle = Some(PathBuf::from(v));
            }
            "--seed" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --seed"))?;
                seed = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("invalid --seed value: {}", v))?;
            }
            "--strict" => {
                strict = true;
            }
            "--no-banner" => {
                no_banner = true;
            }
            other => {
                return Err(anyhow!("unknown argument: {}", other));
            }
        }
        i += 1;
    }
    Ok(CliArgs {
        puzzle,
        seed,
        strict,
        no_banner,
    })
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let args = parse_args(&args)?;

    let def = match &args.puzzle {
        Some(path) => config::load_puzzle(path)?,
        None => config::builtin_puzzle(),
    };
    let rules = GameRules {
        near_miss_enabled: !args.strict,
    };
    let mut game = PuzzleEngine::with_rules(&def, args.seed, rules)?;
    let view = PuzzleView::new(ViewOptions {
        show_completion_banner: !args.no_banner,
    });

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game, &view);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Presentation state threaded through the loop.
struct Session {
    cursor: usize,
    last_outcome: Option<GuessOutcome>,
    countdown: String,
}

fn run(term: &mut TerminalRenderer, game: &mut PuzzleEngine, view: &PuzzleView) -> Result<()> {
    let mut input_handler = InputHandler::new();
    let mut clock = RotationClock::new(Utc::now());
    let mut session = Session {
        cursor: 0,
        last_outcome: None,
        countdown: String::new(),
    };

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(u64::from(TICK_MS));
    let mut countdown_elapsed_ms: u32 = 0;
    let mut dirty = true;

    loop {
        if dirty {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            let hud = Hud {
                cursor: session.cursor,
                last_outcome: session.last_outcome,
                countdown: (!session.countdown.is_empty()).then_some(session.countdown.as_str()),
            };
            let fb = view.render(game, &hud, Viewport::new(w, h));
            term.draw(&fb)?;
            dirty = false;
        }

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match key.kind {
                    KeyEventKind::Press => {
                        if should_quit(key) {
                            return Ok(());
                        }

                        if let Some(action) = input_handler.handle_key_press(key.code) {
                            dirty |= apply_action(game, &mut session, &mut clock, action);
                        }

                        if let Some(action) = handle_key_event(key) {
                            match action {
                                GameAction::CursorLeft
                                | GameAction::CursorRight
                                | GameAction::CursorUp
                                | GameAction::CursorDown => {
                                    // Handled by input_handler above.
                                }
                                _ => {
                                    dirty |=
                                        apply_action(game, &mut session, &mut clock, action);
                                }
                            }
                        }
                    }
                    KeyEventKind::Repeat => {
                        // Ignore terminal auto-repeat; DAS/ARR handles repeats internally.
                    }
                    KeyEventKind::Release => {
                        input_handler.handle_key_release(key.code);
                    }
                },
                Event::Resize(_, _) => {
                    dirty = true;
                }
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();

            for action in input_handler.update(TICK_MS) {
                dirty |= apply_action(game, &mut session, &mut clock, action);
            }

            countdown_elapsed_ms += TICK_MS;
            if countdown_elapsed_ms >= COUNTDOWN_TICK_MS {
                countdown_elapsed_ms = 0;
                if game.status().is_terminal() {
                    let countdown = clock.tick(Utc::now());
                    if countdown != session.countdown {
                        session.countdown = countdown;
                        dirty = true;
                    }
                }
            }
        }
    }
}

/// Apply one player intent to the session. Returns true when a redraw is due.
fn apply_action(
    game: &mut PuzzleEngine,
    session: &mut Session,
    clock: &mut RotationClock,
    action: GameAction,
) -> bool {
    match action {
        GameAction::CursorLeft => move_cursor(game, session, -1),
        GameAction::CursorRight => move_cursor(game, session, 1),
        GameAction::CursorUp => move_cursor(game, session, -(GROUP_SIZE as isize)),
        GameAction::CursorDown => move_cursor(game, session, GROUP_SIZE as isize),
        GameAction::ToggleSelect => {
            let Some(&id) = game.remaining().get(session.cursor) else {
                return false;
            };
            let label = game.label(id).to_string();
            game.toggle_select(&label)
        }
        GameAction::Submit => {
            session.last_outcome = Some(game.submit());
            clamp_cursor(game, session);
            if game.status().is_terminal() {
                // Seed the countdown so the results screen never shows blank.
                session.countdown = clock.tick(Utc::now());
            }
            true
        }
        GameAction::Shuffle => {
            game.shuffle_remaining();
            true
        }
        GameAction::DeselectAll => {
            game.deselect_all();
            true
        }
        GameAction::Reset => {
            game.reset();
            session.cursor = 0;
            session.last_outcome = None;
            session.countdown.clear();
            true
        }
    }
}

fn move_cursor(game: &PuzzleEngine, session: &mut Session, delta: isize) -> bool {
    let len = game.remaining().len();
    if len == 0 {
        return false;
    }
    let next = session.cursor as isize + delta;
    if next < 0 || next >= len as isize {
        return false;
    }
    session.cursor = next as usize;
    true
}

fn clamp_cursor(game: &PuzzleEngine, session: &mut Session) {
    let len = game.remaining().len();
    if len == 0 {
        session.cursor = 0;
    } else if session.cursor >= len {
        session.cursor = len - 1;
    }
}
