//! Core data models for the Color Monster game.
//! The whole game is one reducer: `GameState` + `GameAction`.

use std::rc::Rc;
use tracing::{debug, info};
use yew::Reducible;

use crate::rng::GameRng;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EmotionId {
    Alegria,
    Tristeza,
    Raiva,
    Medo,
    Calma,
    Amor,
}

impl EmotionId {
    pub fn as_str(self) -> &'static str {
        match self {
            EmotionId::Alegria => "alegria",
            EmotionId::Tristeza => "tristeza",
            EmotionId::Raiva => "raiva",
            EmotionId::Medo => "medo",
            EmotionId::Calma => "calma",
            EmotionId::Amor => "amor",
        }
    }

    pub fn emotion(self) -> &'static Emotion {
        // EMOTIONS is declared in enum order
        &EMOTIONS[self as usize]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Emotion {
    pub id: EmotionId,
    pub name: &'static str,
    /// CSS color of the jar and of the highlighted target name.
    pub color: &'static str,
    pub glyph: &'static str,
    pub color_name: &'static str,
}

impl Emotion {
    /// CSS class that animates the monster while it feels this emotion.
    pub fn animation_tag(&self) -> String {
        format!("monster-{}", self.id.as_str())
    }
}

pub static EMOTIONS: [Emotion; 6] = [
    Emotion { id: EmotionId::Alegria, name: "Alegria", color: "#fdd835", glyph: "😊", color_name: "Amarelo" },
    Emotion { id: EmotionId::Tristeza, name: "Tristeza", color: "#1e88e5", glyph: "😢", color_name: "Azul" },
    Emotion { id: EmotionId::Raiva, name: "Raiva", color: "#e53935", glyph: "😠", color_name: "Vermelho" },
    Emotion { id: EmotionId::Medo, name: "Medo", color: "#546e7a", glyph: "😨", color_name: "Cinza" },
    Emotion { id: EmotionId::Calma, name: "Calma", color: "#43a047", glyph: "😌", color_name: "Verde" },
    Emotion { id: EmotionId::Amor, name: "Amor", color: "#f06292", glyph: "🥰", color_name: "Rosa" },
];

pub const IDLE_GLYPH: &str = "😕";

pub const FEEDBACK_CORRECT: &str = "Isso! O monstro está sentindo...";
pub const FEEDBACK_WRONG: &str = "Ops, tente outra cor!";
pub const FEEDBACK_COMPLETE: &str = "Parabéns! Você organizou todas as emoções!";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Tutorial,
    AwaitingGuess,
    /// Target matched; waiting for the success delay before moving on.
    CorrectFeedback,
    /// Wrong jar picked; waiting for the shake to finish.
    WrongFeedback { wrong: EmotionId },
    GameOver,
}

/// Which timer a pending transition waits on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Delay {
    Success,
    Wrong,
}

/// A timed transition the UI must schedule for the current state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingTransition {
    pub delay: Delay,
    pub action: GameAction,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameAction {
    /// Hide the tutorial and start the first game.
    DismissTutorial { seed: u64 },
    /// Start over with a fresh shuffle; only accepted on the end screen.
    Replay { seed: u64 },
    Guess { emotion: EmotionId },
    /// Fired by the success timer scheduled in `round`.
    Advance { round: u64 },
    /// Fired by the wrong-guess timer scheduled in `round`.
    ClearWrong { round: u64 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    /// This game's order of targets; empty until the tutorial is dismissed.
    pub sequence: Vec<EmotionId>,
    pub index: usize,
    pub phase: Phase,
    /// Bumped on every accepted input; timers carry it to detect staleness.
    pub round: u64,
    /// Wrong guesses in the current game.
    pub mistakes: u32,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            sequence: Vec::new(),
            index: 0,
            phase: Phase::Tutorial,
            round: 0,
            mistakes: 0,
        }
    }

    /// A state already past the tutorial, used when the tutorial was seen before.
    pub fn started(seed: u64) -> Self {
        let mut s = Self::new();
        s.start(seed);
        s
    }

    fn start(&mut self, seed: u64) {
        let mut seq: Vec<EmotionId> = EMOTIONS.iter().map(|e| e.id).collect();
        GameRng::new(seed).shuffle(&mut seq);
        info!(?seq, "new game");
        self.sequence = seq;
        self.index = 0;
        self.phase = Phase::AwaitingGuess;
        self.round = self.round.wrapping_add(1);
        self.mistakes = 0;
    }

    pub fn target(&self) -> Option<&'static Emotion> {
        self.sequence.get(self.index).map(|id| id.emotion())
    }

    pub fn tutorial_visible(&self) -> bool {
        self.phase == Phase::Tutorial
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn wrong_guess(&self) -> Option<EmotionId> {
        match self.phase {
            Phase::WrongFeedback { wrong } => Some(wrong),
            _ => None,
        }
    }

    pub fn feedback(&self) -> Option<&'static str> {
        match self.phase {
            Phase::CorrectFeedback => Some(FEEDBACK_CORRECT),
            Phase::WrongFeedback { .. } => Some(FEEDBACK_WRONG),
            Phase::GameOver => Some(FEEDBACK_COMPLETE),
            Phase::Tutorial | Phase::AwaitingGuess => None,
        }
    }

    /// The emotion the monster currently shows; it keeps the last match on the end screen.
    fn monster_emotion(&self) -> Option<&'static Emotion> {
        match self.phase {
            Phase::CorrectFeedback | Phase::GameOver => self.target(),
            _ => None,
        }
    }

    pub fn monster_glyph(&self) -> &'static str {
        self.monster_emotion().map_or(IDLE_GLYPH, |e| e.glyph)
    }

    pub fn monster_animation(&self) -> String {
        self.monster_emotion()
            .map(Emotion::animation_tag)
            .unwrap_or_default()
    }

    /// Jars are disabled only while a correct match is being celebrated.
    pub fn jars_disabled(&self) -> bool {
        self.phase == Phase::CorrectFeedback
    }

    pub fn pending_transition(&self) -> Option<PendingTransition> {
        match self.phase {
            Phase::CorrectFeedback => Some(PendingTransition {
                delay: Delay::Success,
                action: GameAction::Advance { round: self.round },
            }),
            Phase::WrongFeedback { .. } => Some(PendingTransition {
                delay: Delay::Wrong,
                action: GameAction::ClearWrong { round: self.round },
            }),
            _ => None,
        }
    }

    /// Applies `action` in place. Returns false when the action was ignored.
    pub fn apply(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::DismissTutorial { seed } => {
                if !self.tutorial_visible() {
                    return false;
                }
                self.start(seed);
                true
            }
            GameAction::Replay { seed } => {
                if !self.is_game_over() {
                    return false;
                }
                self.start(seed);
                true
            }
            GameAction::Guess { emotion } => self.guess(emotion),
            GameAction::Advance { round } => {
                if round != self.round || self.phase != Phase::CorrectFeedback {
                    debug!(round, current = self.round, "dropping stale advance");
                    return false;
                }
                self.round = self.round.wrapping_add(1);
                if self.index + 1 < self.sequence.len() {
                    self.index += 1;
                    self.phase = Phase::AwaitingGuess;
                    debug!(index = self.index, "next target");
                } else {
                    self.phase = Phase::GameOver;
                    info!(mistakes = self.mistakes, "all emotions matched");
                }
                true
            }
            GameAction::ClearWrong { round } => {
                if round != self.round || !matches!(self.phase, Phase::WrongFeedback { .. }) {
                    debug!(round, current = self.round, "dropping stale clear");
                    return false;
                }
                self.round = self.round.wrapping_add(1);
                self.phase = Phase::AwaitingGuess;
                true
            }
        }
    }

    fn guess(&mut self, selected: EmotionId) -> bool {
        if self.phase != Phase::AwaitingGuess {
            return false;
        }
        let Some(target) = self.target() else {
            return false;
        };
        self.round = self.round.wrapping_add(1);
        if target.id == selected {
            debug!(emotion = selected.as_str(), "correct guess");
            self.phase = Phase::CorrectFeedback;
        } else {
            debug!(emotion = selected.as_str(), target = target.id.as_str(), "wrong guess");
            self.phase = Phase::WrongFeedback { wrong: selected };
            self.mistakes = self.mistakes.saturating_add(1);
        }
        true
    }
}

impl Reducible for GameState {
    type Action = GameAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut new = (*self).clone();
        if new.apply(action) { Rc::new(new) } else { self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn with_sequence(seq: &[EmotionId]) -> GameState {
        let mut s = GameState::started(1);
        s.sequence = seq.to_vec();
        s
    }

    fn fire_pending(s: &mut GameState) -> bool {
        match s.pending_transition() {
            Some(p) => s.apply(p.action),
            None => false,
        }
    }

    fn sorted(mut v: Vec<EmotionId>) -> Vec<EmotionId> {
        v.sort_by_key(|id| *id as usize);
        v
    }

    #[test]
    fn emotions_table_matches_enum_order() {
        for (i, e) in EMOTIONS.iter().enumerate() {
            assert_eq!(e.id as usize, i);
            assert_eq!(e.id.emotion().name, e.name);
        }
        assert_eq!(EmotionId::Medo.emotion().color_name, "Cinza");
        assert_eq!(EmotionId::Amor.emotion().animation_tag(), "monster-amor");
    }

    #[test]
    fn fresh_state_shows_tutorial() {
        let s = GameState::new();
        assert!(s.tutorial_visible());
        assert!(s.target().is_none());
        assert_eq!(s.monster_glyph(), IDLE_GLYPH);
        assert!(s.pending_transition().is_none());
    }

    #[test]
    fn guess_is_ignored_during_tutorial() {
        let mut s = GameState::new();
        assert!(!s.apply(GameAction::Guess { emotion: EmotionId::Raiva }));
        assert!(s.tutorial_visible());
    }

    #[test]
    fn dismissing_tutorial_starts_game() {
        let mut s = GameState::new();
        assert!(s.apply(GameAction::DismissTutorial { seed: 7 }));
        assert!(!s.tutorial_visible());
        assert_eq!(s.phase, Phase::AwaitingGuess);
        assert_eq!(s.index, 0);
        assert_eq!(s.sequence.len(), EMOTIONS.len());
        // only once
        assert!(!s.apply(GameAction::DismissTutorial { seed: 8 }));
    }

    #[test]
    fn same_seed_same_order() {
        assert_eq!(GameState::started(42).sequence, GameState::started(42).sequence);
    }

    #[test]
    fn worked_example_wrong_then_right() {
        use EmotionId::*;
        let mut s = with_sequence(&[Raiva, Calma, Amor]);

        assert!(s.apply(GameAction::Guess { emotion: Amor }));
        assert_eq!(s.feedback(), Some(FEEDBACK_WRONG));
        assert_eq!(s.wrong_guess(), Some(Amor));
        assert_eq!(s.index, 0);
        assert!(!s.jars_disabled());
        // debounced while the shake shows
        assert!(!s.apply(GameAction::Guess { emotion: Raiva }));

        let p = s.pending_transition().unwrap();
        assert_eq!(p.delay, Delay::Wrong);
        assert!(s.apply(p.action));
        assert_eq!(s.wrong_guess(), None);
        assert_eq!(s.feedback(), None);

        assert!(s.apply(GameAction::Guess { emotion: Raiva }));
        assert_eq!(s.feedback(), Some(FEEDBACK_CORRECT));
        assert_eq!(s.monster_glyph(), "😠");
        assert_eq!(s.monster_animation(), "monster-raiva");
        assert!(s.jars_disabled());
        assert_eq!(s.index, 0);

        let p = s.pending_transition().unwrap();
        assert_eq!(p.delay, Delay::Success);
        assert!(s.apply(p.action));
        assert_eq!(s.index, 1);
        assert_eq!(s.target().map(|e| e.id), Some(Calma));
        assert_eq!(s.monster_glyph(), IDLE_GLYPH);
        assert_eq!(s.monster_animation(), "");
        assert_eq!(s.mistakes, 1);
    }

    #[test]
    fn success_timer_advances_exactly_once() {
        let mut s = with_sequence(&[EmotionId::Medo, EmotionId::Amor]);
        s.apply(GameAction::Guess { emotion: EmotionId::Medo });
        let action = s.pending_transition().unwrap().action;
        assert!(s.apply(action.clone()));
        assert!(!s.apply(action));
        assert_eq!(s.index, 1);
    }

    #[test]
    fn guesses_blocked_during_success_feedback() {
        let mut s = with_sequence(&[EmotionId::Medo, EmotionId::Amor]);
        s.apply(GameAction::Guess { emotion: EmotionId::Medo });
        let before = s.clone();
        assert!(!s.apply(GameAction::Guess { emotion: EmotionId::Amor }));
        assert!(!s.apply(GameAction::Guess { emotion: EmotionId::Medo }));
        assert_eq!(s, before);
        fire_pending(&mut s);
        assert!(s.apply(GameAction::Guess { emotion: EmotionId::Amor }));
    }

    #[test]
    fn last_match_ends_game_and_replay_resets() {
        let mut s = with_sequence(&[EmotionId::Calma]);
        s.apply(GameAction::Guess { emotion: EmotionId::Tristeza });
        fire_pending(&mut s);
        s.apply(GameAction::Guess { emotion: EmotionId::Calma });
        fire_pending(&mut s);
        assert!(s.is_game_over());
        assert_eq!(s.feedback(), Some(FEEDBACK_COMPLETE));
        assert_eq!(s.monster_glyph(), "😌");
        assert_eq!(s.mistakes, 1);
        assert!(s.pending_transition().is_none());
        assert!(!s.apply(GameAction::Guess { emotion: EmotionId::Calma }));

        assert!(s.apply(GameAction::Replay { seed: 3 }));
        assert_eq!(s.index, 0);
        assert_eq!(s.phase, Phase::AwaitingGuess);
        assert_eq!(s.feedback(), None);
        assert_eq!(s.wrong_guess(), None);
        assert_eq!(s.mistakes, 0);
        assert_eq!(s.monster_glyph(), IDLE_GLYPH);
        assert_eq!(s.sequence.len(), EMOTIONS.len());
    }

    #[test]
    fn stale_timer_after_replay_is_dropped() {
        let mut s = with_sequence(&[EmotionId::Alegria]);
        s.apply(GameAction::Guess { emotion: EmotionId::Medo });
        let stale_clear = s.pending_transition().unwrap().action;
        fire_pending(&mut s);
        s.apply(GameAction::Guess { emotion: EmotionId::Alegria });
        let stale_advance = s.pending_transition().unwrap().action;
        fire_pending(&mut s);
        assert!(s.apply(GameAction::Replay { seed: 11 }));
        let fresh = s.clone();
        assert!(!s.apply(stale_clear));
        assert!(!s.apply(stale_advance));
        assert_eq!(s, fresh);
    }

    #[test]
    fn replay_only_from_game_over() {
        let mut s = GameState::new();
        assert!(!s.apply(GameAction::Replay { seed: 2 }));
        assert!(s.tutorial_visible());

        let mut s = with_sequence(&[EmotionId::Tristeza, EmotionId::Amor]);
        assert!(!s.apply(GameAction::Replay { seed: 2 }));

        s.apply(GameAction::Guess { emotion: EmotionId::Tristeza });
        let before = s.clone();
        assert!(!s.apply(GameAction::Replay { seed: 2 }));
        assert_eq!(s, before);
        assert_eq!(s.phase, Phase::CorrectFeedback);

        fire_pending(&mut s);
        s.apply(GameAction::Guess { emotion: EmotionId::Raiva });
        assert!(!s.apply(GameAction::Replay { seed: 2 }));
        assert_eq!(s.wrong_guess(), Some(EmotionId::Raiva));
    }

    #[test]
    fn stale_clear_does_not_cut_a_later_shake_short() {
        let mut s = with_sequence(&[EmotionId::Alegria, EmotionId::Medo]);
        s.apply(GameAction::Guess { emotion: EmotionId::Amor });
        let first = s.pending_transition().unwrap().action;
        assert!(s.apply(first.clone()));
        s.apply(GameAction::Guess { emotion: EmotionId::Raiva });
        assert!(!s.apply(first));
        assert_eq!(s.wrong_guess(), Some(EmotionId::Raiva));
    }

    #[test]
    fn reducer_keeps_rc_when_ignored() {
        let s = Rc::new(GameState::new());
        let same = s.clone().reduce(GameAction::Advance { round: 99 });
        assert!(Rc::ptr_eq(&s, &same));
        let started = s.reduce(GameAction::DismissTutorial { seed: 1 });
        assert!(!started.tutorial_visible());
    }

    proptest! {
        #[test]
        fn start_is_a_permutation(seed in any::<u64>()) {
            let s = GameState::started(seed);
            let all: Vec<EmotionId> = EMOTIONS.iter().map(|e| e.id).collect();
            prop_assert_eq!(sorted(s.sequence.clone()), all);
            prop_assert_eq!(s.index, 0);
        }

        #[test]
        fn wrong_guesses_never_move_target(seed in any::<u64>(), picks in prop::collection::vec(0usize..6, 1..40)) {
            let mut s = GameState::started(seed);
            let target = s.target().unwrap().id;
            for p in picks {
                let pick = EMOTIONS[p].id;
                if pick == target {
                    continue;
                }
                s.apply(GameAction::Guess { emotion: pick });
                prop_assert_eq!(s.index, 0);
                fire_pending(&mut s);
                prop_assert_eq!(s.index, 0);
            }
        }

        #[test]
        fn full_playthrough_reaches_game_over(seed in any::<u64>(), noise in prop::collection::vec(0usize..6, 0..20)) {
            let mut s = GameState::started(seed);
            let mut noise = noise.into_iter();
            while !s.is_game_over() {
                prop_assert!(s.index < s.sequence.len());
                if let Some(n) = noise.next() {
                    s.apply(GameAction::Guess { emotion: EMOTIONS[n].id });
                    fire_pending(&mut s);
                    continue;
                }
                let index = s.index;
                let target = s.target().unwrap().id;
                let accepted = s.apply(GameAction::Guess { emotion: target });
                prop_assert!(accepted);
                prop_assert_eq!(s.index, index);
                let fired = fire_pending(&mut s);
                prop_assert!(fired);
            }
            prop_assert_eq!(s.index, EMOTIONS.len() - 1);
        }
    }
}
