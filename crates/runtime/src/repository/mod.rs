//! Repository layer for duel state.
//!
//! Repositories handle data that CHANGES during a duel. Static content
//! (rules, rosters) is loaded by `duel-content` and never stored here.

mod error;
mod file;
mod memory;
mod traits;

use core::fmt;

pub use error::{RepositoryError, Result};
pub use file::FileDuelRepo;
pub use memory::InMemoryDuelRepo;
pub use traits::DuelRepository;

/// Identifier assigned to a duel by its repository.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct DuelId(pub u64);

impl fmt::Display for DuelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "duel-{}", self.0)
    }
}

impl core::str::FromStr for DuelId {
    type Err = core::num::ParseIntError;

    /// Accepts both `duel-7` and `7`.
    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        s.strip_prefix("duel-").unwrap_or(s).parse().map(DuelId)
    }
}
