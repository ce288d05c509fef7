//! Engine module - the puzzle session state machine
//!
//! [`PuzzleEngine`] owns all mutable session state and enforces every rule of
//! selection, submission, and termination. Operations are synchronous and
//! atomic; callers (the presentation layer) are expected to serialize them.
//! Each mutating call leaves the engine in a consistent state that can be
//! read back through the getters, and `submit` additionally reports one
//! discrete [`GuessOutcome`] per attempt.

use arrayvec::ArrayVec;

use crate::puzzle::{PuzzleDef, PuzzleError};
use crate::rng::SimpleRng;
use crate::types::{
    GameStatus, GroupColor, GuessOutcome, ItemId, GROUP_COUNT, GROUP_SIZE, ITEM_COUNT,
    STARTING_MISTAKES,
};

/// Rule toggles supplied at construction.
///
/// `near_miss_enabled` controls whether a three-of-four guess is a free
/// "almost" instead of a charged mistake.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameRules {
    pub near_miss_enabled: bool,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            near_miss_enabled: true,
        }
    }
}

/// An interned group: name, color, and member item ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupInfo {
    pub name: String,
    pub color: GroupColor,
    pub members: [ItemId; GROUP_SIZE],
}

/// Complete session state for one puzzle.
#[derive(Debug, Clone)]
pub struct PuzzleEngine {
    /// Interned item labels; an item's index is its [`ItemId`].
    items: Vec<String>,
    /// Groups in definition order.
    groups: Vec<GroupInfo>,
    /// Group index for each item id.
    group_of: [u8; ITEM_COUNT],
    /// Items not yet part of a solved group, in display order.
    remaining: Vec<ItemId>,
    /// Currently chosen items, at most [`GROUP_SIZE`].
    selection: ArrayVec<ItemId, GROUP_SIZE>,
    /// Solved group indices in discovery order.
    solved: ArrayVec<u8, GROUP_COUNT>,
    mistakes_remaining: u8,
    /// Normalized (sorted) combinations already submitted.
    history: Vec<[ItemId; GROUP_SIZE]>,
    status: GameStatus,
    rng: SimpleRng,
    rules: GameRules,
    title: String,
    number: u32,
}

impl PuzzleEngine {
    /// Build a session from a puzzle definition with default rules.
    ///
    /// Fails fast on a malformed definition; a constructed engine always
    /// satisfies the partition invariants.
    pub fn new(def: &PuzzleDef, seed: u32) -> Result<Self, PuzzleError> {
        Self::with_rules(def, seed, GameRules::default())
    }

    /// Build a session with explicit rule toggles.
    pub fn with_rules(def: &PuzzleDef, seed: u32, rules: GameRules) -> Result<Self, PuzzleError> {
        def.validate()?;

        let mut items = Vec::with_capacity(ITEM_COUNT);
        let mut groups = Vec::with_capacity(GROUP_COUNT);
        let mut group_of = [0u8; ITEM_COUNT];

        for (gi, group) in def.groups.iter().enumerate() {
            let mut members = [0 as ItemId; GROUP_SIZE];
            for (mi, item) in group.items.iter().enumerate() {
                let id = items.len() as ItemId;
                group_of[id as usize] = gi as u8;
                members[mi] = id;
                items.push(item.clone());
            }
            groups.push(GroupInfo {
                name: group.name.clone(),
                color: group.color,
                members,
            });
        }

        let mut engine = Self {
            items,
            groups,
            group_of,
            remaining: Vec::new(),
            selection: ArrayVec::new(),
            solved: ArrayVec::new(),
            mistakes_remaining: STARTING_MISTAKES,
            history: Vec::new(),
            status: GameStatus::InProgress,
            rng: SimpleRng::new(seed),
            rules,
            title: def.title.clone(),
            number: def.number,
        };
        engine.deal();
        Ok(engine)
    }

    /// Lay out all 16 items in a fresh shuffled display order.
    fn deal(&mut self) {
        self.remaining = (0..ITEM_COUNT as ItemId).collect();
        self.rng.shuffle(&mut self.remaining);
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn mistakes_remaining(&self) -> u8 {
        self.mistakes_remaining
    }

    /// Items not yet solved, in display order.
    pub fn remaining(&self) -> &[ItemId] {
        &self.remaining
    }

    pub fn selection(&self) -> &[ItemId] {
        &self.selection
    }

    /// Solved group indices in discovery order.
    pub fn solved(&self) -> &[u8] {
        &self.solved
    }

    /// All groups in definition order (for the results screen).
    pub fn groups(&self) -> &[GroupInfo] {
        &self.groups
    }

    pub fn group(&self, index: u8) -> &GroupInfo {
        &self.groups[index as usize]
    }

    pub fn label(&self, id: ItemId) -> &str {
        &self.items[id as usize]
    }

    pub fn is_selected(&self, id: ItemId) -> bool {
        self.selection.contains(&id)
    }

    pub fn guess_count(&self) -> usize {
        self.history.len()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    /// Toggle an item in or out of the selection.
    ///
    /// No-op (returning false) when the session is over, the label is
    /// unknown or already solved, or a fifth item is being added. Selecting
    /// and deselecting never touch history or the mistake budget.
    pub fn toggle_select(&mut self, item: &str) -> bool {
        if self.status != GameStatus::InProgress {
            return false;
        }
        let Some(id) = self.find_remaining(item) else {
            return false;
        };

        if let Some(pos) = self.selection.iter().position(|&s| s == id) {
            self.selection.remove(pos);
            return true;
        }
        if self.selection.len() < GROUP_SIZE {
            self.selection.push(id);
            return true;
        }
        // Already four selected; a fifth is rejected silently.
        false
    }

    fn find_remaining(&self, item: &str) -> Option<ItemId> {
        self.remaining
            .iter()
            .copied()
            .find(|&id| self.items[id as usize] == item)
    }

    /// Submit the current selection as a guess.
    ///
    /// Exactly one [`GuessOutcome`] is produced per call:
    ///
    /// - fewer than four selected (or session over): `InvalidSelectionSize`,
    ///   state unchanged
    /// - combination seen before: `DuplicateGuess`, selection cleared, no
    ///   mistake charged
    /// - exact group match: `Correct`; fourth group flips status to `Won`
    /// - three items share a group: `AlmostCorrect`, selection kept, no
    ///   mistake charged
    /// - otherwise: `Incorrect`, one mistake charged; reaching zero flips
    ///   status to `Lost`
    ///
    /// The guess is recorded in history before evaluation, so resubmitting
    /// an unmodified near miss is a duplicate, not a fresh near miss.
    pub fn submit(&mut self) -> GuessOutcome {
        if self.status != GameStatus::InProgress || self.selection.len() != GROUP_SIZE {
            return GuessOutcome::InvalidSelectionSize;
        }

        let mut combo = [0 as ItemId; GROUP_SIZE];
        combo.copy_from_slice(&self.selection);
        combo.sort_unstable();

        if self.history.contains(&combo) {
            self.selection.clear();
            return GuessOutcome::DuplicateGuess;
        }
        self.history.push(combo);

        let first_group = self.group_of[combo[0] as usize];
        let exact = combo
            .iter()
            .all(|&id| self.group_of[id as usize] == first_group);

        if exact {
            self.solved.push(first_group);
            self.remaining.retain(|id| !combo.contains(id));
            self.selection.clear();
            if self.solved.len() == GROUP_COUNT {
                self.status = GameStatus::Won;
            }
            return GuessOutcome::Correct;
        }

        if self.rules.near_miss_enabled {
            let mut counts = [0u8; GROUP_COUNT];
            for &id in &combo {
                counts[self.group_of[id as usize] as usize] += 1;
            }
            // Exactly three: four would have been an exact match above.
            if counts.contains(&(GROUP_SIZE as u8 - 1)) {
                return GuessOutcome::AlmostCorrect;
            }
        }

        self.mistakes_remaining = self.mistakes_remaining.saturating_sub(1);
        self.selection.clear();
        if self.mistakes_remaining == 0 {
            self.status = GameStatus::Lost;
        }
        GuessOutcome::Incorrect
    }

    /// Reorder the remaining items. Cosmetic only; membership is untouched.
    pub fn shuffle_remaining(&mut self) {
        if self.status != GameStatus::InProgress {
            return;
        }
        self.rng.shuffle(&mut self.remaining);
    }

    /// Clear the selection without submitting.
    pub fn deselect_all(&mut self) {
        if self.status != GameStatus::InProgress {
            return;
        }
        self.selection.clear();
    }

    /// Reinitialize the session to its start values with a fresh deal.
    ///
    /// The RNG continues from its current state, so each reset deals a
    /// different order while the whole session stays reproducible per seed.
    pub fn reset(&mut self) {
        self.selection.clear();
        self.solved.clear();
        self.history.clear();
        self.mistakes_remaining = STARTING_MISTAKES;
        self.status = GameStatus::InProgress;
        self.deal();
    }
}
