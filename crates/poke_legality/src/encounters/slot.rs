//! Wild encounter areas and their slots.

use serde::{Deserialize, Serialize};

use crate::context::EntityContext;
use crate::version::GameVersion;

use super::evolution::EvoCriteria;

/// How a slot is encountered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlotType {
    #[default]
    Grass,
    Surf,
    OldRod,
    GoodRod,
    SuperRod,
    RockSmash,
    Headbutt,
    HoneyTree,
    Swarm,
    HiddenGrotto,
    BugContest,
    Safari,
    /// Five-at-once encounters (X/Y, OR/AS).
    Horde,
    FriendSafari,
    /// Ally calls during a battle (Sun/Moon era).
    SOS,
    Symbol,
    Overworld,
}

impl SlotType {
    /// Slot kinds that can deliver the hidden ability without any other
    /// condition.
    pub fn delivers_hidden_ability(self) -> bool {
        matches!(self, SlotType::FriendSafari | SlotType::Horde | SlotType::SOS)
    }
}

bitflags::bitflags! {
    /// Per-slot capabilities that vary within one area.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct SlotFlags: u8 {
        /// OR/AS DexNav can find this slot (and its hidden ability).
        const DEX_NAV     = 1 << 0;
        /// Form is random at encounter time; any form of the species fits.
        const RANDOM_FORM = 1 << 1;
        /// Only available during a mass outbreak.
        const SWARM       = 1 << 2;
    }
}

/// How well an encounter explains an entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EncounterMatchRating {
    /// Fully consistent.
    Match,
    /// Possible, but a stronger candidate should be preferred.
    Deferred,
    /// Consistent apart from soft checks.
    PartialMatch,
}

/// Anything an entity could have come from.
pub trait Encounterable {
    fn species(&self) -> u16;
    fn form(&self) -> u8;
    fn level_min(&self) -> u8;
    fn level_max(&self) -> u8;
    fn location(&self) -> u16;
    fn egg_location(&self) -> u16;
    fn version(&self) -> GameVersion;
    fn context(&self) -> EntityContext;
    fn name(&self) -> &'static str;

    fn generation(&self) -> Option<u8> {
        self.context().generation()
    }

    fn is_egg_encounter(&self) -> bool {
        self.egg_location() != 0
    }
}

/// One entry of an area. Area-level data is copied in so a slot stands on
/// its own once yielded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncounterSlot {
    pub species: u16,
    pub form: u8,
    pub level_min: u8,
    pub level_max: u8,
    pub location: u16,
    pub slot_type: SlotType,
    pub flags: SlotFlags,
    pub version: GameVersion,
}

impl EncounterSlot {
    pub fn is_level_within_range(&self, level: u8) -> bool {
        self.level_min <= level && level <= self.level_max
    }

    /// Whether the slot can be the source of a hidden-ability entity.
    pub fn is_hidden_ability_slot(&self) -> bool {
        self.flags.contains(SlotFlags::DEX_NAV) || self.slot_type.delivers_hidden_ability()
    }

    /// Whether an ancestry entry could have been caught in this slot.
    /// `met_level`, when known, must fall inside the slot's level range.
    pub fn is_match(&self, evo: &EvoCriteria, met_level: Option<u8>) -> bool {
        if self.species != evo.species {
            return false;
        }
        if self.form != evo.form && !self.flags.contains(SlotFlags::RANDOM_FORM) {
            return false;
        }
        match met_level {
            Some(level) => self.is_level_within_range(level),
            None => self.level_min <= evo.level_max,
        }
    }
}

impl Encounterable for EncounterSlot {
    fn species(&self) -> u16 {
        self.species
    }

    fn form(&self) -> u8 {
        self.form
    }

    fn level_min(&self) -> u8 {
        self.level_min
    }

    fn level_max(&self) -> u8 {
        self.level_max
    }

    fn location(&self) -> u16 {
        self.location
    }

    fn egg_location(&self) -> u16 {
        0
    }

    fn version(&self) -> GameVersion {
        self.version
    }

    fn context(&self) -> EntityContext {
        EntityContext::from_version(self.version)
    }

    fn name(&self) -> &'static str {
        "Wild Encounter"
    }
}

// ============================================================================
// Areas
// ============================================================================

/// Slot row as stored in reference data.
#[derive(Clone, Debug, Deserialize)]
pub struct SlotDefinition {
    pub species: u16,
    #[serde(default)]
    pub form: u8,
    pub level_min: u8,
    pub level_max: u8,
    #[serde(default)]
    pub flags: SlotFlags,
}

/// Area row as stored in reference data.
#[derive(Clone, Debug, Deserialize)]
pub struct AreaDefinition {
    pub location: u16,
    #[serde(rename = "type", default)]
    pub slot_type: SlotType,
    pub slots: Vec<SlotDefinition>,
}

/// Slots reachable at one location of one version.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncounterArea {
    pub location: u16,
    pub slot_type: SlotType,
    pub version: GameVersion,
    pub slots: Vec<EncounterSlot>,
}

impl EncounterArea {
    pub fn new(definition: AreaDefinition, version: GameVersion) -> Self {
        let AreaDefinition {
            location,
            slot_type,
            slots,
        } = definition;
        let slots = slots
            .into_iter()
            .map(|slot| EncounterSlot {
                species: slot.species,
                form: slot.form,
                level_min: slot.level_min,
                level_max: slot.level_max,
                location,
                slot_type,
                flags: slot.flags,
                version,
            })
            .collect();
        Self {
            location,
            slot_type,
            version,
            slots,
        }
    }

    pub fn is_match_location(&self, location: u16) -> bool {
        self.location == location
    }

    /// Slots matching any entry of the ancestry chain.
    pub fn matching_slots<'a, 's>(
        &'a self,
        chain: &'s [EvoCriteria],
        met_level: Option<u8>,
    ) -> impl Iterator<Item = &'a EncounterSlot> + 's
    where
        'a: 's,
    {
        self.slots
            .iter()
            .filter(move |slot| chain.iter().any(|evo| slot.is_match(evo, met_level)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(species: u16, level_min: u8, level_max: u8) -> SlotDefinition {
        SlotDefinition {
            species,
            form: 0,
            level_min,
            level_max,
            flags: SlotFlags::empty(),
        }
    }

    #[test]
    fn test_area_denormalizes_slots() {
        let area = EncounterArea::new(
            AreaDefinition {
                location: 17,
                slot_type: SlotType::Surf,
                slots: vec![slot(72, 5, 10), slot(73, 20, 25)],
            },
            GameVersion::E,
        );
        assert!(area.slots.iter().all(|s| s.location == 17 && s.slot_type == SlotType::Surf));
        assert!(area.slots.iter().all(|s| s.version == GameVersion::E));
        assert_eq!(area.slots[1].context(), EntityContext::Gen3);
    }

    #[test]
    fn test_matching_slots() {
        let area = EncounterArea::new(
            AreaDefinition {
                location: 1,
                slot_type: SlotType::Grass,
                slots: vec![slot(10, 3, 5), slot(11, 7, 7), slot(10, 30, 30)],
            },
            GameVersion::R,
        );
        let chain = [
            EvoCriteria::new(11, 0, 7, 9),
            EvoCriteria::new(10, 0, 1, 9),
        ];

        let by_chain: Vec<_> = area.matching_slots(&chain, None).map(|s| (s.species, s.level_min)).collect();
        assert_eq!(by_chain, vec![(10, 3), (11, 7)]);

        let by_met: Vec<_> = area.matching_slots(&chain, Some(4)).map(|s| s.species).collect();
        assert_eq!(by_met, vec![10]);
    }

    #[test]
    fn test_hidden_ability_slot() {
        let mut s = EncounterSlot {
            species: 1,
            form: 0,
            level_min: 1,
            level_max: 1,
            location: 0,
            slot_type: SlotType::Grass,
            flags: SlotFlags::empty(),
            version: GameVersion::OR,
        };
        assert!(!s.is_hidden_ability_slot());
        s.flags = SlotFlags::DEX_NAV;
        assert!(s.is_hidden_ability_slot());
        s.flags = SlotFlags::empty();
        s.slot_type = SlotType::Horde;
        assert!(s.is_hidden_ability_slot());
    }

    #[test]
    fn test_random_form_slot() {
        let s = EncounterSlot {
            species: 201,
            form: 0,
            level_min: 5,
            level_max: 5,
            location: 3,
            slot_type: SlotType::Grass,
            flags: SlotFlags::RANDOM_FORM,
            version: GameVersion::C,
        };
        assert!(s.is_match(&EvoCriteria::new(201, 7, 5, 5), Some(5)));
    }
}
