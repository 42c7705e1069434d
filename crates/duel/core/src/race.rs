//! Races, their passive bonuses, and the race ability catalog.
//!
//! Every ability maps to exactly one [`AbilitySpec`]. The engine interprets
//! specs with a single executor, so adding an ability means adding a row to
//! [`RaceAbility::spec`], not a new code path.

use crate::state::{Bonus, BonusKind, PenaltyKind, ResourceKind};

/// Playable races.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, strum::Display, strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Race {
    Human,
    Elf,
    Dwarf,
    Orc,
    /// Mirrors health damage back onto the attacker.
    Faceless,
    Gorgon,
    Demon,
    Reaper,
}

impl Race {
    /// Bonuses every member of the race starts a duel with.
    pub fn passive_bonuses(self) -> Vec<Bonus> {
        let kinds: &[BonusKind] = match self {
            Race::Human => &[BonusKind::Regen {
                resource: ResourceKind::Health,
                amount: 3,
            }],
            Race::Elf => &[BonusKind::Regen {
                resource: ResourceKind::Mana,
                amount: 5,
            }],
            Race::Dwarf => &[BonusKind::PoisonResistance],
            Race::Orc => &[BonusKind::Regen {
                resource: ResourceKind::ActionPoints,
                amount: 5,
            }],
            Race::Faceless => &[],
            Race::Gorgon => &[BonusKind::PoisonImmunity],
            Race::Demon => &[BonusKind::BattleMagic],
            Race::Reaper => &[BonusKind::ControlImmunity],
        };
        kinds.iter().copied().map(Bonus::permanent).collect()
    }

    /// Whether health damage taken by this race is reflected onto the attacker.
    pub const fn is_reflective(self) -> bool {
        matches!(self, Race::Faceless)
    }

    /// Active abilities unlocked by this race.
    pub const fn abilities(self) -> &'static [RaceAbility] {
        match self {
            Race::Human => &[RaceAbility::Rally, RaceAbility::CrossbowVolley],
            Race::Elf => &[RaceAbility::BlindingLight, RaceAbility::Moonwell],
            Race::Dwarf => &[RaceAbility::Earthshaker, RaceAbility::HammerThrow],
            Race::Orc => &[RaceAbility::WarCry, RaceAbility::Cleave],
            Race::Faceless => &[RaceAbility::MindShatter, RaceAbility::StolenFace],
            Race::Gorgon => &[RaceAbility::StoneGaze, RaceAbility::VenomFang],
            Race::Demon => &[RaceAbility::Hellfire, RaceAbility::BloodPact],
            Race::Reaper => &[RaceAbility::ScytheOfTheEnd, RaceAbility::Lullaby],
        }
    }
}

/// Identifier of a race ability.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RaceAbility {
    Rally,
    CrossbowVolley,
    BlindingLight,
    Moonwell,
    Earthshaker,
    HammerThrow,
    WarCry,
    Cleave,
    MindShatter,
    StolenFace,
    StoneGaze,
    VenomFang,
    Hellfire,
    BloodPact,
    ScytheOfTheEnd,
    Lullaby,
}

/// Resource price of an ability. Action-point costs also pay the wound penalty.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct AbilityCost {
    pub mana: i32,
    pub action_points: i32,
    /// Paid like mana, so it follows the overspend policy: under
    /// `Overspend::Reject` a character below this health cannot use the ability.
    pub health: i32,
}

/// Damage part of an ability.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AbilityDamage {
    None,
    /// Routed through the shared damage procedure.
    Flat(u32),
    /// Sets the target's health to zero, bypassing shields and absorption.
    Lethal,
}

/// Effect descriptor interpreted by the engine's ability executor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AbilityEffect {
    pub damage: AbilityDamage,
    pub magical: bool,
    pub self_heal: u32,
    /// Penalty placed on the opponent.
    pub inflicts: Option<(PenaltyKind, Option<u32>)>,
    /// Bonus granted to the caster.
    pub grants: Option<(BonusKind, Option<u32>)>,
}

impl AbilityEffect {
    const NONE: Self = Self {
        damage: AbilityDamage::None,
        magical: false,
        self_heal: 0,
        inflicts: None,
        grants: None,
    };
}

/// Catalog entry for a race ability.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AbilitySpec {
    pub name: &'static str,
    pub race: Race,
    pub cost: AbilityCost,
    /// Turns before the ability can be used again; zero means no cooldown.
    pub cooldown: u32,
    pub effect: AbilityEffect,
}

const fn mana(mana: i32) -> AbilityCost {
    AbilityCost {
        mana,
        action_points: 0,
        health: 0,
    }
}

const fn action_points(action_points: i32) -> AbilityCost {
    AbilityCost {
        mana: 0,
        action_points,
        health: 0,
    }
}

impl RaceAbility {
    /// Looks up the catalog entry for this ability.
    pub const fn spec(self) -> AbilitySpec {
        use AbilityDamage::{Flat, Lethal};
        use PenaltyKind as P;

        match self {
            RaceAbility::Rally => AbilitySpec {
                name: "Rally",
                race: Race::Human,
                cost: action_points(20),
                cooldown: 3,
                effect: AbilityEffect {
                    self_heal: 15,
                    ..AbilityEffect::NONE
                },
            },
            RaceAbility::CrossbowVolley => AbilitySpec {
                name: "Crossbow Volley",
                race: Race::Human,
                cost: action_points(25),
                cooldown: 2,
                effect: AbilityEffect {
                    damage: Flat(15),
                    ..AbilityEffect::NONE
                },
            },
            RaceAbility::BlindingLight => AbilitySpec {
                name: "Blinding Light",
                race: Race::Elf,
                cost: mana(20),
                cooldown: 3,
                effect: AbilityEffect {
                    damage: Flat(5),
                    magical: true,
                    inflicts: Some((P::Blind, Some(1))),
                    ..AbilityEffect::NONE
                },
            },
            RaceAbility::Moonwell => AbilitySpec {
                name: "Moonwell",
                race: Race::Elf,
                cost: mana(25),
                cooldown: 4,
                effect: AbilityEffect {
                    self_heal: 20,
                    ..AbilityEffect::NONE
                },
            },
            RaceAbility::Earthshaker => AbilitySpec {
                name: "Earthshaker",
                race: Race::Dwarf,
                cost: action_points(30),
                cooldown: 3,
                effect: AbilityEffect {
                    damage: Flat(10),
                    inflicts: Some((P::Immobilize, Some(1))),
                    ..AbilityEffect::NONE
                },
            },
            RaceAbility::HammerThrow => AbilitySpec {
                name: "Hammer Throw",
                race: Race::Dwarf,
                cost: action_points(25),
                cooldown: 2,
                effect: AbilityEffect {
                    damage: Flat(18),
                    ..AbilityEffect::NONE
                },
            },
            RaceAbility::WarCry => AbilitySpec {
                name: "War Cry",
                race: Race::Orc,
                cost: action_points(15),
                cooldown: 4,
                effect: AbilityEffect {
                    grants: Some((BonusKind::Rage, Some(3))),
                    ..AbilityEffect::NONE
                },
            },
            RaceAbility::Cleave => AbilitySpec {
                name: "Cleave",
                race: Race::Orc,
                cost: AbilityCost {
                    mana: 0,
                    action_points: 30,
                    health: 5,
                },
                cooldown: 2,
                effect: AbilityEffect {
                    damage: Flat(22),
                    ..AbilityEffect::NONE
                },
            },
            RaceAbility::MindShatter => AbilitySpec {
                name: "Mind Shatter",
                race: Race::Faceless,
                cost: mana(30),
                cooldown: 4,
                effect: AbilityEffect {
                    damage: Flat(10),
                    magical: true,
                    inflicts: Some((P::Hypnosis, Some(1))),
                    ..AbilityEffect::NONE
                },
            },
            RaceAbility::StolenFace => AbilitySpec {
                name: "Stolen Face",
                race: Race::Faceless,
                cost: mana(20),
                cooldown: 4,
                effect: AbilityEffect {
                    self_heal: 10,
                    inflicts: Some((P::Trance, Some(1))),
                    ..AbilityEffect::NONE
                },
            },
            RaceAbility::StoneGaze => AbilitySpec {
                name: "Stone Gaze",
                race: Race::Gorgon,
                cost: mana(25),
                cooldown: 0,
                effect: AbilityEffect {
                    magical: true,
                    inflicts: Some((P::Petrify, Some(2))),
                    ..AbilityEffect::NONE
                },
            },
            RaceAbility::VenomFang => AbilitySpec {
                name: "Venom Fang",
                race: Race::Gorgon,
                cost: action_points(20),
                cooldown: 2,
                effect: AbilityEffect {
                    damage: Flat(8),
                    inflicts: Some((P::Poison, Some(3))),
                    ..AbilityEffect::NONE
                },
            },
            RaceAbility::Hellfire => AbilitySpec {
                name: "Hellfire",
                race: Race::Demon,
                cost: mana(35),
                cooldown: 3,
                effect: AbilityEffect {
                    damage: Flat(15),
                    magical: true,
                    inflicts: Some((P::Burn, Some(3))),
                    ..AbilityEffect::NONE
                },
            },
            RaceAbility::BloodPact => AbilitySpec {
                name: "Blood Pact",
                race: Race::Demon,
                cost: AbilityCost {
                    mana: 0,
                    action_points: 0,
                    health: 15,
                },
                cooldown: 3,
                effect: AbilityEffect {
                    damage: Flat(30),
                    magical: true,
                    ..AbilityEffect::NONE
                },
            },
            RaceAbility::ScytheOfTheEnd => AbilitySpec {
                name: "Scythe of the End",
                race: Race::Reaper,
                cost: AbilityCost {
                    mana: 60,
                    action_points: 40,
                    health: 0,
                },
                cooldown: 10,
                effect: AbilityEffect {
                    damage: Lethal,
                    magical: true,
                    ..AbilityEffect::NONE
                },
            },
            RaceAbility::Lullaby => AbilitySpec {
                name: "Lullaby",
                race: Race::Reaper,
                cost: mana(20),
                cooldown: 4,
                effect: AbilityEffect {
                    inflicts: Some((P::Sleep, Some(1))),
                    ..AbilityEffect::NONE
                },
            },
        }
    }

    pub const fn race(self) -> Race {
        self.spec().race
    }
}

impl core::fmt::Display for RaceAbility {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.spec().name)
    }
}
