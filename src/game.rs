use log::info;

/// Opacity applied to spheres sitting in a selection slot (and to the
/// hover target, which reuses the same semi-transparent look).
pub const HIGHLIGHT_OPACITY: f32 = 0.5;
/// Opacity of everything else.
pub const NORMAL_OPACITY: f32 = 1.0;

/// Scene-side operations the match game needs. The game never touches
/// geometry or colors directly; "sameness" is whatever `Key` equality says.
pub trait MatchBoard {
    type Id: Copy + PartialEq;
    type Key: PartialEq;

    /// Visual key of a live object, or None if it has been removed.
    fn visual_key(&self, id: Self::Id) -> Option<Self::Key>;

    /// Remove an object from the board. Removed objects can never be
    /// picked again, so they can never re-enter a selection slot.
    fn remove(&mut self, id: Self::Id);

    fn set_opacity(&mut self, id: Self::Id, opacity: f32);

    /// Ids of all objects currently on the board.
    fn live_ids(&self) -> Vec<Self::Id>;
}

/// Pair-match game state: two selection slots and a score counter.
///
/// `on_pick` is fed the result of a pointer click (the picked object, or
/// None for a miss) and only shuffles the slots. `evaluate` runs once per
/// frame, before the hover-highlight pass, and is the only place that
/// removes objects, scores, or writes opacities.
pub struct MatchGame<B: MatchBoard> {
    first: Option<B::Id>,
    second: Option<B::Id>,
    score: u32,
    highlight_opacity: f32,
}

impl<B: MatchBoard> MatchGame<B> {
    pub fn new() -> Self {
        Self::with_highlight_opacity(HIGHLIGHT_OPACITY)
    }

    pub fn with_highlight_opacity(highlight_opacity: f32) -> Self {
        Self {
            first: None,
            second: None,
            score: 0,
            highlight_opacity,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Current slot contents, first then second.
    pub fn selection(&self) -> (Option<B::Id>, Option<B::Id>) {
        (self.first, self.second)
    }

    /// Feed one click result into the slots.
    pub fn on_pick(&mut self, picked: Option<B::Id>) {
        match (picked, self.first, self.second) {
            // Click missed everything: selection abandoned.
            (None, _, _) => {
                self.first = None;
                self.second = None;
            }
            (Some(id), None, None) => self.first = Some(id),
            // Re-selecting the first object does not fill the second slot.
            (Some(id), Some(a), None) => {
                if id != a {
                    self.second = Some(id);
                }
            }
            // A pair was already chosen and evaluated last frame: this
            // click starts a new selection.
            (Some(id), Some(_), Some(_)) => {
                self.first = Some(id);
                self.second = None;
            }
            // Second filled without first cannot arise, but the transition
            // table is total: treat it as starting over.
            (Some(id), None, Some(_)) => {
                self.first = Some(id);
                self.second = None;
            }
        }
    }

    /// Per-frame step: resolve a filled pair, then repaint slot highlights.
    pub fn evaluate(&mut self, board: &mut B) {
        if let (Some(a), Some(b)) = (self.first, self.second) {
            let matched = match (board.visual_key(a), board.visual_key(b)) {
                (Some(ka), Some(kb)) => ka == kb,
                _ => false,
            };

            if matched {
                board.remove(a);
                board.remove(b);
                self.score += 1;
                info!("pair matched, score: {}", self.score);
            }

            self.first = None;
            self.second = None;
        }

        for id in board.live_ids() {
            let selected = self.first == Some(id) || self.second == Some(id);
            let opacity = if selected {
                self.highlight_opacity
            } else {
                NORMAL_OPACITY
            };
            board.set_opacity(id, opacity);
        }
    }
}

impl<B: MatchBoard> Default for MatchGame<B> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// In-memory board: objects are u32 ids with char keys.
    struct TestBoard {
        keys: HashMap<u32, char>,
        opacities: HashMap<u32, f32>,
    }

    impl TestBoard {
        fn new(objects: &[(u32, char)]) -> Self {
            Self {
                keys: objects.iter().copied().collect(),
                opacities: HashMap::new(),
            }
        }

        fn contains(&self, id: u32) -> bool {
            self.keys.contains_key(&id)
        }

        fn opacity(&self, id: u32) -> f32 {
            self.opacities.get(&id).copied().unwrap_or(NORMAL_OPACITY)
        }
    }

    impl MatchBoard for TestBoard {
        type Id = u32;
        type Key = char;

        fn visual_key(&self, id: u32) -> Option<char> {
            self.keys.get(&id).copied()
        }

        fn remove(&mut self, id: u32) {
            self.keys.remove(&id);
            self.opacities.remove(&id);
        }

        fn set_opacity(&mut self, id: u32, opacity: f32) {
            if self.keys.contains_key(&id) {
                self.opacities.insert(id, opacity);
            }
        }

        fn live_ids(&self) -> Vec<u32> {
            let mut ids: Vec<u32> = self.keys.keys().copied().collect();
            ids.sort_unstable();
            ids
        }
    }

    fn board() -> TestBoard {
        TestBoard::new(&[(1, 'r'), (2, 'r'), (3, 'g'), (4, 'g'), (5, 'b')])
    }

    #[test]
    fn matching_pair_scores_and_removes_both() {
        let mut board = board();
        let mut game = MatchGame::new();

        game.on_pick(Some(1));
        game.on_pick(Some(2));
        game.evaluate(&mut board);

        assert_eq!(game.score(), 1);
        assert!(!board.contains(1));
        assert!(!board.contains(2));
        assert_eq!(game.selection(), (None, None));
    }

    #[test]
    fn mismatched_pair_clears_slots_without_scoring() {
        let mut board = board();
        let mut game = MatchGame::new();

        game.on_pick(Some(1));
        game.on_pick(Some(3));
        game.evaluate(&mut board);

        assert_eq!(game.score(), 0);
        assert!(board.contains(1));
        assert!(board.contains(3));
        assert_eq!(game.selection(), (None, None));
    }

    #[test]
    fn reselecting_first_object_is_a_no_op() {
        let mut board = board();
        let mut game = MatchGame::new();

        game.on_pick(Some(1));
        game.on_pick(Some(1));
        assert_eq!(game.selection(), (Some(1), None));

        game.evaluate(&mut board);
        assert_eq!(game.score(), 0);
        assert!(board.contains(1));
    }

    #[test]
    fn miss_clears_a_partial_selection() {
        let mut board = board();
        let mut game = MatchGame::new();

        game.on_pick(Some(1));
        game.on_pick(None);
        assert_eq!(game.selection(), (None, None));

        game.evaluate(&mut board);
        assert_eq!(game.score(), 0);
        assert!(board.contains(1));
    }

    #[test]
    fn selected_objects_are_highlighted_until_evaluated() {
        let mut board = board();
        let mut game = MatchGame::new();

        game.on_pick(Some(1));
        game.evaluate(&mut board);

        assert_eq!(board.opacity(1), HIGHLIGHT_OPACITY);
        assert_eq!(board.opacity(3), NORMAL_OPACITY);
    }

    #[test]
    fn slots_are_empty_after_any_filled_pair_evaluation() {
        for pair in [(1, 2), (1, 3)] {
            let mut board = board();
            let mut game = MatchGame::new();

            game.on_pick(Some(pair.0));
            game.on_pick(Some(pair.1));
            game.evaluate(&mut board);

            assert_eq!(game.selection(), (None, None));
        }
    }

    #[test]
    fn pick_after_evaluated_pair_starts_fresh_selection() {
        let mut board = board();
        let mut game: MatchGame<TestBoard> = MatchGame::new();

        game.on_pick(Some(1));
        game.on_pick(Some(3));
        // Mismatch is still sitting in the slots until evaluate runs; a
        // further click replaces the first slot and clears the second.
        game.on_pick(Some(5));
        assert_eq!(game.selection(), (Some(5), None));
    }

    #[test]
    fn score_is_monotonic_over_arbitrary_pick_sequences() {
        let mut board = board();
        let mut game = MatchGame::new();
        let picks = [
            Some(1),
            Some(3),
            None,
            Some(2),
            Some(1),
            Some(5),
            None,
            Some(3),
            Some(4),
        ];

        let mut last_score = 0;
        for pick in picks {
            game.on_pick(pick);
            game.evaluate(&mut board);
            assert!(game.score() >= last_score);
            last_score = game.score();
        }

        // The 3/4 pair at the end matched exactly once.
        assert_eq!(game.score(), 1);
        assert!(!board.contains(3));
        assert!(!board.contains(4));
    }

    #[test]
    fn matched_objects_never_reenter_a_slot() {
        let mut board = board();
        let mut game = MatchGame::new();

        game.on_pick(Some(1));
        game.on_pick(Some(2));
        game.evaluate(&mut board);
        assert!(!board.contains(1));

        // A stale id for a removed object no longer has a key, so a pair
        // containing it can never match again.
        game.on_pick(Some(1));
        game.on_pick(Some(5));
        game.evaluate(&mut board);
        assert_eq!(game.score(), 1);
        assert!(board.contains(5));
    }
}
