//! Wild slot resolution: which slots of the resolved table could have
//! produced an entity, with policy-discouraged candidates ordered last.

use tracing::trace;

use crate::entity::{Ball, EntityRecord};
use crate::settings::ParseSettings;
use crate::version::GameVersion;

use super::defer::DeferExt;
use super::evolution::{EvoCriteria, EvolutionChainSource, MAX_LEVEL};
use super::locations::{is_safari_zone_location_3, is_safari_zone_location_4, BUG_CATCHING_CONTEST_4};
use super::slot::{EncounterArea, EncounterMatchRating, EncounterSlot};
use super::tables::{resolve_source, EncounterTables};
use super::wurmple::{is_wurmple_evo_valid, WURMPLE};

/// Resolves wild encounter slots against one set of tables and settings.
/// Every sequence it hands out is lazy.
#[derive(Clone, Copy, Debug)]
pub struct SlotGenerator<'a> {
    tables: &'a EncounterTables,
    settings: &'a ParseSettings,
}

impl<'a> SlotGenerator<'a> {
    pub fn new(tables: &'a EncounterTables, settings: &'a ParseSettings) -> Self {
        Self { tables, settings }
    }

    /// Areas of the table resolved for `source` (`Any` = the entity's own
    /// version).
    pub fn encounter_areas<R>(&self, record: &R, source: GameVersion) -> &'a [EncounterArea]
    where
        R: EntityRecord + ?Sized,
    {
        self.tables.encounter_areas(record, source, self.settings)
    }

    /// Every slot whose species appears in the chain. No met, level, or egg
    /// filtering.
    pub fn possible<'s, R>(
        &self,
        record: &R,
        chain: &'s [EvoCriteria],
        source: GameVersion,
    ) -> impl Iterator<Item = &'a EncounterSlot> + 's
    where
        R: EntityRecord + ?Sized,
        'a: 's,
    {
        self.encounter_areas(record, source)
            .iter()
            .flat_map(|area| area.slots.iter())
            .filter(move |slot| chain.iter().any(|evo| evo.species == slot.species))
    }

    /// Matching slots, non-deferred first then deferred.
    pub fn valid_wild_encounters<'s, R>(
        &self,
        record: &'s R,
        chain: &'s [EvoCriteria],
        source: GameVersion,
    ) -> impl Iterator<Item = &'a EncounterSlot> + 's
    where
        R: EntityRecord + ?Sized,
        'a: 's,
    {
        self.raw_slots(record, chain, source)
            .defer_by(move |slot| is_deferred(slot, record))
    }

    /// Matching slots for generation 1-2 origins, unordered.
    pub fn valid_wild_encounters_12<'s, R>(
        &self,
        record: &'s R,
        chain: &'s [EvoCriteria],
        source: GameVersion,
    ) -> impl Iterator<Item = &'a EncounterSlot> + 's
    where
        R: EntityRecord + ?Sized,
        'a: 's,
    {
        self.raw_slots(record, chain, source)
    }

    /// Matching slots for generation 3-4 origins, unordered; the consumer
    /// applies [`is_deferred_3`] or [`is_deferred_4`] itself.
    pub fn valid_wild_encounters_34<'s, R>(
        &self,
        record: &'s R,
        chain: &'s [EvoCriteria],
        source: GameVersion,
    ) -> impl Iterator<Item = &'a EncounterSlot> + 's
    where
        R: EntityRecord + ?Sized,
        'a: 's,
    {
        self.raw_slots(record, chain, source)
    }

    /// Lowest-level slot the entity's lineage appears in. A display hint,
    /// not a legality verdict.
    pub fn capture_location<R>(
        &self,
        record: &R,
        evolutions: &dyn EvolutionChainSource,
    ) -> Option<&'a EncounterSlot>
    where
        R: EntityRecord,
    {
        let chain = evolutions.valid_pre_evolutions(record, MAX_LEVEL, true);
        self.possible(record, &chain, GameVersion::Any)
            .min_by_key(|slot| slot.level_min)
    }

    fn raw_slots<'s, R>(
        &self,
        record: &'s R,
        chain: &'s [EvoCriteria],
        source: GameVersion,
    ) -> impl Iterator<Item = &'a EncounterSlot> + 's
    where
        R: EntityRecord + ?Sized,
        'a: 's,
    {
        let source = resolve_source(record, source);
        let areas: &'a [EncounterArea] = if record.egg_location() != 0 || record.is_egg() {
            trace!(target: "poke_legality::encounters", "hatched entity, no wild slots");
            &[]
        } else {
            self.encounter_areas(record, source)
        };

        // Gen 2 met data only survives for Crystal origins.
        let no_met = !record.has_original_met_location() || (record.format() == 2 && source != GameVersion::C);
        let met_location = record.met_location();
        let met_level = (!no_met).then(|| record.met_level());

        areas
            .iter()
            .filter(move |area| no_met || area.is_match_location(met_location))
            .flat_map(move |area| area.matching_slots(chain, met_level))
    }
}

/// How strongly a matched slot explains the entity.
pub fn match_rating(slot: &EncounterSlot, record: &(impl EntityRecord + ?Sized)) -> EncounterMatchRating {
    if is_deferred(slot, record) {
        EncounterMatchRating::Deferred
    } else {
        EncounterMatchRating::Match
    }
}

// ============================================================================
// Deferral predicates
// ============================================================================

/// Deferral rule set for the slot's generation.
pub fn is_deferred(slot: &EncounterSlot, record: &(impl EntityRecord + ?Sized)) -> bool {
    let species = record.species();
    let ball = record.ball();
    let deferred = match slot.version.generation() {
        // Colosseum/XD has no safari zone.
        _ if slot.version == GameVersion::CXD => is_deferred_wurmple(slot, species, record),
        Some(3) => is_deferred_3(slot, species, record, ball == Ball::Safari as u8),
        Some(4) => is_deferred_4(
            slot,
            species,
            record,
            ball == Ball::Safari as u8,
            ball == Ball::Sport as u8,
        ),
        _ => {
            is_deferred_wurmple(slot, species, record)
                || is_deferred_hidden_ability(slot, record.is_hidden_ability())
        }
    };
    if deferred {
        trace!(
            target: "poke_legality::encounters",
            species = slot.species,
            location = slot.location,
            "deferred slot"
        );
    }
    deferred
}

pub fn is_deferred_3(
    slot: &EncounterSlot,
    current_species: u16,
    record: &(impl EntityRecord + ?Sized),
    is_safari_ball: bool,
) -> bool {
    is_deferred_wurmple(slot, current_species, record) || is_deferred_safari_3(slot, is_safari_ball)
}

pub fn is_deferred_4(
    slot: &EncounterSlot,
    current_species: u16,
    record: &(impl EntityRecord + ?Sized),
    is_safari_ball: bool,
    is_sport_ball: bool,
) -> bool {
    is_deferred_wurmple(slot, current_species, record)
        || is_deferred_safari_4(slot, is_safari_ball)
        || is_deferred_sport(slot, is_sport_ball)
}

/// A Wurmple slot for an evolved entity whose split disagrees with its
/// encryption constant.
pub fn is_deferred_wurmple(
    slot: &EncounterSlot,
    current_species: u16,
    record: &(impl EntityRecord + ?Sized),
) -> bool {
    slot.species == WURMPLE && current_species != WURMPLE && !is_wurmple_evo_valid(record)
}

pub fn is_deferred_safari_3(slot: &EncounterSlot, is_safari_ball: bool) -> bool {
    is_safari_ball != is_safari_zone_location_3(slot.location)
}

pub fn is_deferred_safari_4(slot: &EncounterSlot, is_safari_ball: bool) -> bool {
    is_safari_ball != is_safari_zone_location_4(slot.location)
}

pub fn is_deferred_sport(slot: &EncounterSlot, is_sport_ball: bool) -> bool {
    is_sport_ball != (slot.location == BUG_CATCHING_CONTEST_4)
}

pub fn is_deferred_hidden_ability(slot: &EncounterSlot, is_hidden: bool) -> bool {
    is_hidden && !slot.is_hidden_ability_slot()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encounters::slot::{SlotFlags, SlotType};
    use crate::entity::Pk9;

    fn slot(species: u16, location: u16, version: GameVersion) -> EncounterSlot {
        EncounterSlot {
            species,
            form: 0,
            level_min: 5,
            level_max: 5,
            location,
            slot_type: SlotType::Grass,
            flags: SlotFlags::empty(),
            version,
        }
    }

    #[test]
    fn test_safari_predicates() {
        let safari = slot(84, 57, GameVersion::E);
        let route = slot(84, 16, GameVersion::E);
        assert!(!is_deferred_safari_3(&safari, true));
        assert!(is_deferred_safari_3(&safari, false));
        assert!(is_deferred_safari_3(&route, true));
        assert!(!is_deferred_safari_3(&route, false));

        assert!(!is_deferred_safari_4(&slot(84, 202, GameVersion::HG), true));
        assert!(!is_deferred_safari_4(&slot(84, 52, GameVersion::D), true));
    }

    #[test]
    fn test_sport_predicate() {
        let contest = slot(123, BUG_CATCHING_CONTEST_4, GameVersion::HG);
        assert!(!is_deferred_sport(&contest, true));
        assert!(is_deferred_sport(&contest, false));
    }

    #[test]
    fn test_colosseum_slots_skip_safari_rule() {
        let record = Pk9 {
            species: 84,
            ball: Ball::Safari as u8,
            ..Pk9::default()
        };
        let colosseum = slot(84, 16, GameVersion::CXD);
        assert!(!is_deferred(&colosseum, &record));
        let emerald = slot(84, 16, GameVersion::E);
        assert!(is_deferred(&emerald, &record));
    }

    #[test]
    fn test_hidden_ability_predicate() {
        let mut s = slot(1, 1, GameVersion::X);
        assert!(is_deferred_hidden_ability(&s, true));
        assert!(!is_deferred_hidden_ability(&s, false));
        s.slot_type = SlotType::FriendSafari;
        assert!(!is_deferred_hidden_ability(&s, true));
    }
}
