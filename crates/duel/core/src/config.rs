/// Compile-time limits shared by duel state containers.
///
/// Runtime-tunable balance values live in [`crate::RuleTable`]; the constants
/// here size the bounded collections and therefore cannot change per duel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct DuelConfig;

impl DuelConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum number of consumables a character can carry.
    pub const MAX_INVENTORY: usize = 5;
    /// Hard ceiling on actions submitted for a single turn.
    pub const MAX_ACTIONS_PER_TURN: usize = 2;

    // ===== character defaults =====
    pub const DEFAULT_HEALTH: i32 = 100;
    pub const DEFAULT_MANA: i32 = 90;
    pub const DEFAULT_ACTION_POINTS: i32 = 100;
    pub const DEFAULT_FAITH: i8 = 5;

    /// Faith level that never passes a prayer check.
    pub const FAITH_FAITHLESS: i8 = -1;
    /// Faith level that always passes a prayer check.
    pub const FAITH_DEVOUT: i8 = 10;
}
