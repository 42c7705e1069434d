//! Resource pools, shields and resource snapshots.
//!
//! Current values are signed on purpose: spending during a turn may push a
//! pool below zero, and the finalizer floors it again before the state
//! leaves the engine.

use core::fmt;

/// Converts an unsigned amount into pool points, saturating at `i32::MAX`.
pub fn points(amount: u32) -> i32 {
    i32::try_from(amount).unwrap_or(i32::MAX)
}

/// Individual resource pools of a character.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ResourceKind {
    #[strum(to_string = "health")]
    Health,
    #[strum(to_string = "mana")]
    Mana,
    #[strum(to_string = "action points")]
    ActionPoints,
}

/// A bounded resource meter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourcePool {
    pub current: i32,
    pub max: i32,
}

impl ResourcePool {
    pub const fn new(current: i32, max: i32) -> Self {
        Self { current, max }
    }

    /// Pool filled to its maximum.
    pub const fn full(max: i32) -> Self {
        Self { current: max, max }
    }

    /// Removes `amount` without any floor. Clamping happens at turn end.
    pub fn spend(&mut self, amount: i32) {
        self.current = self.current.saturating_sub(amount);
    }

    /// Adds `amount`, capped at the maximum. Returns the amount actually gained.
    pub fn restore(&mut self, amount: i32) -> i32 {
        let before = self.current;
        self.current = self.current.saturating_add(amount).min(self.max).max(before);
        self.current.saturating_sub(before)
    }

    /// Fills the pool to its maximum. Returns the amount gained.
    pub fn refill(&mut self) -> i32 {
        let before = self.current;
        self.current = self.max;
        self.current.saturating_sub(before)
    }

    /// Forces the current value into `[0, max]`.
    pub fn clamp(&mut self) {
        self.current = self.current.clamp(0, self.max.max(0));
    }

    pub fn is_depleted(&self) -> bool {
        self.current <= 0
    }

    /// Current value as a whole percentage of the maximum.
    pub fn percent(&self) -> i32 {
        if self.max <= 0 {
            return 0;
        }
        (i64::from(self.current) * 100 / i64::from(self.max)) as i32
    }
}

impl fmt::Display for ResourcePool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.current, self.max)
    }
}

/// The three resource pools of a character.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Resources {
    pub health: ResourcePool,
    pub mana: ResourcePool,
    pub action_points: ResourcePool,
}

impl Resources {
    /// All pools at their maximum.
    pub const fn full(health: i32, mana: i32, action_points: i32) -> Self {
        Self {
            health: ResourcePool::full(health),
            mana: ResourcePool::full(mana),
            action_points: ResourcePool::full(action_points),
        }
    }

    pub fn get(&self, kind: ResourceKind) -> &ResourcePool {
        match kind {
            ResourceKind::Health => &self.health,
            ResourceKind::Mana => &self.mana,
            ResourceKind::ActionPoints => &self.action_points,
        }
    }

    pub fn get_mut(&mut self, kind: ResourceKind) -> &mut ResourcePool {
        match kind {
            ResourceKind::Health => &mut self.health,
            ResourceKind::Mana => &mut self.mana,
            ResourceKind::ActionPoints => &mut self.action_points,
        }
    }

    pub fn clamp_all(&mut self) {
        self.health.clamp();
        self.mana.clamp();
        self.action_points.clamp();
    }
}

/// Elemental tag of a shield. An untagged shield is physical.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "lowercase")]
pub enum Element {
    /// Absorbs every magical hit without losing hit points.
    Ether,
    Fire,
    Water,
    Earth,
    Air,
}

/// Absorbing buffer in front of health.
///
/// The element tag is only meaningful while `hp > 0`; [`Shield::absorb`]
/// clears it when the shield breaks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Shield {
    pub hp: u32,
    pub element: Option<Element>,
}

impl Shield {
    pub const NONE: Self = Self {
        hp: 0,
        element: None,
    };

    pub fn is_up(&self) -> bool {
        self.hp > 0
    }

    /// Absorbs up to `damage` points and returns how many were absorbed.
    pub fn absorb(&mut self, damage: u32) -> u32 {
        let absorbed = damage.min(self.hp);
        self.hp -= absorbed;
        if self.hp == 0 {
            self.element = None;
        }
        absorbed
    }
}

impl fmt::Display for Shield {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.element {
            Some(element) if self.hp > 0 => write!(f, "{} ({element})", self.hp),
            _ => write!(f, "{}", self.hp),
        }
    }
}

/// Before/after view of a character used in turn records.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceSnapshot {
    pub health: i32,
    pub mana: i32,
    pub action_points: i32,
    pub shield: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spend_can_go_negative_until_clamped() {
        let mut pool = ResourcePool::full(20);
        pool.spend(30);
        assert_eq!(pool.current, -10);
        pool.clamp();
        assert_eq!(pool.current, 0);
    }

    #[test]
    fn restore_caps_at_max() {
        let mut pool = ResourcePool::new(80, 90);
        assert_eq!(pool.restore(25), 10);
        assert_eq!(pool.current, 90);
    }

    #[test]
    fn restore_from_negative_counts_full_amount() {
        let mut pool = ResourcePool::new(-10, 90);
        assert_eq!(pool.restore(25), 25);
        assert_eq!(pool.current, 15);
    }

    #[test]
    fn huge_amounts_saturate() {
        assert_eq!(points(u32::MAX), i32::MAX);
        assert_eq!(points(1 << 31), i32::MAX);
        assert_eq!(points(40), 40);

        let mut pool = ResourcePool::full(100);
        pool.spend(points(u32::MAX));
        assert_eq!(pool.current, 100 - i32::MAX);
        pool.spend(i32::MAX);
        assert_eq!(pool.current, i32::MIN);
        let mut drained = pool;
        assert_eq!(drained.refill(), i32::MAX);
        pool.clamp();
        assert_eq!(pool.current, 0);

        assert_eq!(pool.restore(i32::MAX), 100);
        assert_eq!(pool.percent(), 100);
    }

    #[test]
    fn shield_break_clears_element() {
        let mut shield = Shield {
            hp: 25,
            element: Some(Element::Fire),
        };
        assert_eq!(shield.absorb(40), 25);
        assert_eq!(shield, Shield::NONE);
    }

    #[test]
    fn partial_absorb_keeps_element() {
        let mut shield = Shield {
            hp: 25,
            element: Some(Element::Water),
        };
        assert_eq!(shield.absorb(10), 10);
        assert_eq!(shield.hp, 15);
        assert_eq!(shield.element, Some(Element::Water));
    }
}
