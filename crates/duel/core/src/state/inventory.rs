//! Consumable inventory.

use arrayvec::ArrayVec;
use core::fmt;

use crate::config::DuelConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "lowercase")]
pub enum ItemKind {
    /// Restores health to the user.
    Heal,
    /// Deals non-magical damage to the opponent.
    Damage,
}

/// A single-use consumable with a fixed amount.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub name: String,
    pub kind: ItemKind,
    pub amount: u32,
}

impl Item {
    pub fn new(name: impl Into<String>, kind: ItemKind, amount: u32) -> Self {
        Self {
            name: name.into(),
            kind,
            amount,
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} {})", self.name, self.kind, self.amount)
    }
}

/// Returned when an item is added to a full inventory.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("inventory is full ({capacity} items), cannot add {item}")]
pub struct InventoryFull {
    pub item: Item,
    pub capacity: usize,
}

/// Bounded FIFO of consumables.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Inventory {
    pub items: ArrayVec<Item, { DuelConfig::MAX_INVENTORY }>,
}

impl Inventory {
    pub fn empty() -> Self {
        Self {
            items: ArrayVec::new(),
        }
    }

    pub fn push(&mut self, item: Item) -> Result<(), InventoryFull> {
        self.items.try_push(item).map_err(|err| InventoryFull {
            item: err.element(),
            capacity: DuelConfig::MAX_INVENTORY,
        })
    }

    /// Removes and returns the oldest item.
    pub fn take_first(&mut self) -> Option<Item> {
        self.items.pop_at(0)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
