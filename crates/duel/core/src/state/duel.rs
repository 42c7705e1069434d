//! Duel aggregate and turn records.

use core::fmt;

use super::{Character, PlayerId, ResourceSnapshot};
use crate::action::RecordedAction;

/// One of the two seats in a duel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Side {
    #[default]
    First,
    Second,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::First, Side::Second];

    pub const fn opponent(self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Side::First => 0,
            Side::Second => 1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::First => f.write_str("first"),
            Side::Second => f.write_str("second"),
        }
    }
}

/// Immutable log entry for one resolved turn.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnRecord {
    /// Monotonic, starts at 1.
    pub turn: u32,
    pub actor: PlayerId,
    pub actor_name: String,
    /// Actions that actually ran, or exactly `[TurnSkipped]`.
    pub actions: Vec<RecordedAction>,
    /// Resolution trace, in order.
    pub events: Vec<String>,
    pub actor_before: ResourceSnapshot,
    pub actor_after: ResourceSnapshot,
    pub opponent_before: ResourceSnapshot,
    pub opponent_after: ResourceSnapshot,
}

impl TurnRecord {
    pub fn was_skipped(&self) -> bool {
        self.actions == [RecordedAction::TurnSkipped]
    }
}

/// Flags that only live between two consecutive turns.
///
/// Never serialized: a reloaded duel starts with every flag cleared.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct TurnFlags {
    dodging: [bool; 2],
}

impl TurnFlags {
    pub fn is_dodging(&self, side: Side) -> bool {
        self.dodging[side.index()]
    }

    pub fn set_dodging(&mut self, side: Side, dodging: bool) {
        self.dodging[side.index()] = dodging;
    }

    /// Returns the flag and clears it.
    pub fn take_dodging(&mut self, side: Side) -> bool {
        core::mem::take(&mut self.dodging[side.index()])
    }
}

/// Complete state of a duel between two characters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DuelState {
    pub players: [Character; 2],
    pub history: Vec<TurnRecord>,
    /// Number of the next turn to resolve.
    pub turn: u32,
    pub active: Side,
    pub winner: Option<PlayerId>,
    /// Trace of the most recent turn, kept for live display.
    #[cfg_attr(feature = "serde", serde(default))]
    pub last_events: Vec<String>,
    /// Seed feeding dodge and prayer rolls.
    pub seed: u64,
    #[cfg_attr(feature = "serde", serde(skip))]
    pub flags: TurnFlags,
}

impl DuelState {
    /// Starts a duel. The first character acts first.
    pub fn new(first: Character, second: Character, seed: u64) -> Self {
        let mut players = [first, second];
        for player in &mut players {
            player.refresh_condition();
        }
        Self {
            players,
            history: Vec::new(),
            turn: 1,
            active: Side::First,
            winner: None,
            last_events: Vec::new(),
            seed,
            flags: TurnFlags::default(),
        }
    }

    pub fn player(&self, side: Side) -> &Character {
        &self.players[side.index()]
    }

    pub fn player_mut(&mut self, side: Side) -> &mut Character {
        &mut self.players[side.index()]
    }

    pub fn active_player(&self) -> &Character {
        self.player(self.active)
    }

    pub fn side_of(&self, id: &PlayerId) -> Option<Side> {
        Side::BOTH
            .into_iter()
            .find(|&side| &self.player(side).id == id)
    }

    pub fn is_finished(&self) -> bool {
        self.winner.is_some()
    }

    /// Display name of the winner, if the duel is over.
    pub fn winner_name(&self) -> Option<&str> {
        let winner = self.winner.as_ref()?;
        self.side_of(winner).map(|side| self.player(side).name.as_str())
    }
}
