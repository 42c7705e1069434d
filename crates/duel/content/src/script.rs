//! Scripted duels: two roster entries and a fixed list of turns.

use duel_core::Action;

/// A duel played back from data.
///
/// Turn `n` of `turns` is submitted by whichever side is active when it is
/// reached, so the list alternates between the two characters until one of
/// them wins.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DuelScript {
    pub name: String,
    /// Roster id of the character acting first.
    pub first: String,
    pub second: String,
    /// Seed for dodge and prayer rolls.
    #[cfg_attr(feature = "serde", serde(default))]
    pub seed: u64,
    pub turns: Vec<Vec<Action>>,
}
