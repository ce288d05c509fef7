//! End-to-end rule tests for the puzzle engine, driven through the facade
//! crate the way the presentation layer drives it.

use tui_connections::core::{GroupDef, PuzzleDef, PuzzleEngine, PuzzleError};
use tui_connections::types::{GameStatus, GroupColor, GuessOutcome, ITEM_COUNT};

fn football() -> PuzzleDef {
    PuzzleDef {
        number: 1,
        title: "Football Connections".into(),
        groups: vec![
            GroupDef::new(
                "CENTER BACKS",
                GroupColor::Green,
                ["RAMOS", "MALDINI", "BARESI", "PUYOL"],
            ),
            GroupDef::new(
                "YOUNG STARS",
                GroupColor::Yellow,
                ["DOKU", "PEDRI", "YAMAL", "GULER"],
            ),
            GroupDef::new(
                "WORLD CUP FINAL SCORERS",
                GroupColor::Orange,
                ["INIESTA", "GOTZE", "ZIDANE", "MBAPPE"],
            ),
            GroupDef::new(
                "CHELSEA REJECTS",
                GroupColor::Crimson,
                ["SALAH", "LUKAKU", "DE BRUYNE", "RICE"],
            ),
        ],
    }
}

fn select(game: &mut PuzzleEngine, items: [&str; 4]) {
    for item in items {
        assert!(game.toggle_select(item), "could not select {item}");
    }
}

#[test]
fn test_full_winning_session() {
    let mut game = PuzzleEngine::new(&football(), 7).unwrap();

    // A near miss first: free, selection kept.
    select(&mut game, ["INIESTA", "GOTZE", "ZIDANE", "RICE"]);
    assert_eq!(game.submit(), GuessOutcome::AlmostCorrect);
    assert_eq!(game.mistakes_remaining(), 4);

    // Fix the stray item and take the group.
    assert!(game.toggle_select("RICE"));
    assert!(game.toggle_select("MBAPPE"));
    assert_eq!(game.submit(), GuessOutcome::Correct);

    // One genuine mistake along the way.
    select(&mut game, ["RAMOS", "DOKU", "SALAH", "GULER"]);
    assert_eq!(game.submit(), GuessOutcome::Incorrect);
    assert_eq!(game.mistakes_remaining(), 3);

    for items in [
        ["RAMOS", "MALDINI", "BARESI", "PUYOL"],
        ["DOKU", "PEDRI", "YAMAL", "GULER"],
        ["SALAH", "LUKAKU", "DE BRUYNE", "RICE"],
    ] {
        select(&mut game, items);
        assert_eq!(game.submit(), GuessOutcome::Correct);
    }

    assert_eq!(game.status(), GameStatus::Won);
    assert!(game.remaining().is_empty());
    assert_eq!(game.solved().len(), 4);
    assert_eq!(game.mistakes_remaining(), 3);
}

#[test]
fn test_full_losing_session_and_restart() {
    let mut game = PuzzleEngine::new(&football(), 7).unwrap();

    let scattered = [
        ["RAMOS", "DOKU", "SALAH", "INIESTA"],
        ["MALDINI", "PEDRI", "LUKAKU", "GOTZE"],
        ["BARESI", "YAMAL", "DE BRUYNE", "ZIDANE"],
        ["PUYOL", "GULER", "RICE", "MBAPPE"],
    ];
    for items in scattered {
        select(&mut game, items);
        assert_eq!(game.submit(), GuessOutcome::Incorrect);
    }
    assert_eq!(game.status(), GameStatus::Lost);
    assert_eq!(game.mistakes_remaining(), 0);

    // Everything is inert until the session is reset.
    assert!(!game.toggle_select("RAMOS"));
    assert_eq!(game.submit(), GuessOutcome::InvalidSelectionSize);

    game.reset();
    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.mistakes_remaining(), 4);
    assert_eq!(game.remaining().len(), ITEM_COUNT);

    select(&mut game, ["RAMOS", "MALDINI", "BARESI", "PUYOL"]);
    assert_eq!(game.submit(), GuessOutcome::Correct);
}

#[test]
fn test_duplicate_detection_is_order_independent() {
    let mut game = PuzzleEngine::new(&football(), 7).unwrap();

    select(&mut game, ["RAMOS", "DOKU", "SALAH", "INIESTA"]);
    assert_eq!(game.submit(), GuessOutcome::Incorrect);

    // Same four, selected in reverse order.
    select(&mut game, ["INIESTA", "SALAH", "DOKU", "RAMOS"]);
    assert_eq!(game.submit(), GuessOutcome::DuplicateGuess);
    assert_eq!(game.mistakes_remaining(), 3);

    // A different combination is a fresh guess.
    select(&mut game, ["RAMOS", "DOKU", "SALAH", "GOTZE"]);
    assert_eq!(game.submit(), GuessOutcome::Incorrect);
    assert_eq!(game.mistakes_remaining(), 2);
}

#[test]
fn test_every_submission_yields_exactly_one_outcome() {
    let mut game = PuzzleEngine::new(&football(), 7).unwrap();

    // Each call returns one value from the outcome set; collect a sample of
    // each path.
    assert_eq!(game.submit(), GuessOutcome::InvalidSelectionSize);

    select(&mut game, ["RAMOS", "MALDINI", "BARESI", "DOKU"]);
    assert_eq!(game.submit(), GuessOutcome::AlmostCorrect);
    assert_eq!(game.submit(), GuessOutcome::DuplicateGuess);

    select(&mut game, ["RAMOS", "MALDINI", "BARESI", "PUYOL"]);
    assert_eq!(game.submit(), GuessOutcome::Correct);

    select(&mut game, ["DOKU", "PEDRI", "INIESTA", "SALAH"]);
    assert_eq!(game.submit(), GuessOutcome::Incorrect);
}

#[test]
fn test_malformed_puzzles_fail_fast() {
    let mut def = football();
    def.groups.truncate(3);
    assert!(matches!(
        PuzzleEngine::new(&def, 1),
        Err(PuzzleError::GroupCount(3))
    ));

    let mut def = football();
    def.groups[1].items.pop();
    assert!(matches!(
        PuzzleEngine::new(&def, 1),
        Err(PuzzleError::GroupSize { .. })
    ));

    let mut def = football();
    def.groups[2].items[0] = "RAMOS".into();
    assert!(matches!(
        PuzzleEngine::new(&def, 1),
        Err(PuzzleError::DuplicateItem(_))
    ));
}
