//! Character templates and rosters.

use duel_core::{
    Bonus, Character, DuelConfig, InventoryFull, Item, PlayerId, PowerTier, Race,
};

/// Blueprint for a duel participant.
///
/// Omitted maxima fall back to the defaults in [`DuelConfig`]. When `bonuses`
/// is `None` the race passives apply; an explicit list replaces them.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterTemplate {
    pub id: String,
    pub name: String,
    pub race: Race,
    #[cfg_attr(feature = "serde", serde(default))]
    pub power: PowerTier,
    #[cfg_attr(feature = "serde", serde(default = "default_faith"))]
    pub faith: i8,
    #[cfg_attr(feature = "serde", serde(default))]
    pub health: Option<i32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub mana: Option<i32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub action_points: Option<i32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub bonuses: Option<Vec<Bonus>>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub items: Vec<Item>,
}

#[cfg(feature = "serde")]
fn default_faith() -> i8 {
    DuelConfig::DEFAULT_FAITH
}

impl CharacterTemplate {
    pub fn new(id: impl Into<String>, name: impl Into<String>, race: Race) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            race,
            power: PowerTier::default(),
            faith: DuelConfig::DEFAULT_FAITH,
            health: None,
            mana: None,
            action_points: None,
            bonuses: None,
            items: Vec::new(),
        }
    }

    /// Builds a fresh character at full resources.
    pub fn build(&self) -> Result<Character, InventoryFull> {
        let mut character = Character::new(self.id.clone(), self.name.clone(), self.race)
            .with_power(self.power)
            .with_faith(self.faith)
            .with_maximums(
                self.health.unwrap_or(DuelConfig::DEFAULT_HEALTH),
                self.mana.unwrap_or(DuelConfig::DEFAULT_MANA),
                self.action_points
                    .unwrap_or(DuelConfig::DEFAULT_ACTION_POINTS),
            );
        if let Some(bonuses) = &self.bonuses {
            character = character.with_bonuses(bonuses.clone());
        }
        for item in &self.items {
            character = character.with_item(item.clone())?;
        }
        Ok(character)
    }

    /// Builds the character under a different player id, keeping the rest.
    pub fn build_as(&self, player: &PlayerId) -> Result<Character, InventoryFull> {
        let mut character = self.build()?;
        character.id = player.clone();
        Ok(character)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RosterError {
    #[error("template id '{0}' appears more than once")]
    DuplicateId(String),

    #[error("no template with id '{0}'")]
    UnknownTemplate(String),

    #[error("template '{id}': {source}")]
    Inventory {
        id: String,
        #[source]
        source: InventoryFull,
    },
}

/// Named collection of templates, in file order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Roster {
    templates: Vec<CharacterTemplate>,
}

impl Roster {
    /// Rejects duplicate ids and templates that cannot be built.
    pub fn new(templates: Vec<CharacterTemplate>) -> Result<Self, RosterError> {
        for (index, template) in templates.iter().enumerate() {
            if templates[..index].iter().any(|t| t.id == template.id) {
                return Err(RosterError::DuplicateId(template.id.clone()));
            }
            template.build().map_err(|source| RosterError::Inventory {
                id: template.id.clone(),
                source,
            })?;
        }
        Ok(Self { templates })
    }

    pub fn get(&self, id: &str) -> Option<&CharacterTemplate> {
        self.templates.iter().find(|t| t.id == id)
    }

    /// Builds the character for template `id`.
    pub fn spawn(&self, id: &str) -> Result<Character, RosterError> {
        let template = self
            .get(id)
            .ok_or_else(|| RosterError::UnknownTemplate(id.to_owned()))?;
        template.build().map_err(|source| RosterError::Inventory {
            id: id.to_owned(),
            source,
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &CharacterTemplate> {
        self.templates.iter()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
