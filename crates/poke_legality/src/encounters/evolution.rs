//! Ancestry chain input.

use crate::entity::EntityRecord;

/// Level an entity can never exceed.
pub const MAX_LEVEL: u8 = 100;

/// One species/form an entity could have been, and the level range it
/// could have had while in that stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EvoCriteria {
    pub species: u16,
    pub form: u8,
    pub level_min: u8,
    pub level_max: u8,
}

impl EvoCriteria {
    pub const fn new(species: u16, form: u8, level_min: u8, level_max: u8) -> Self {
        Self {
            species,
            form,
            level_min,
            level_max,
        }
    }
}

/// Resolves the pre-evolution lineage of an entity, current stage first.
pub trait EvolutionChainSource {
    /// Lineage at or below `max_level`. With `skip_checks` set, stages are
    /// included even when the entity's other data argues against them.
    fn valid_pre_evolutions(
        &self,
        record: &dyn EntityRecord,
        max_level: u8,
        skip_checks: bool,
    ) -> Vec<EvoCriteria>;
}

/// Entities that never evolved: the chain is the entity itself.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoEvolution;

impl EvolutionChainSource for NoEvolution {
    fn valid_pre_evolutions(
        &self,
        record: &dyn EntityRecord,
        max_level: u8,
        _skip_checks: bool,
    ) -> Vec<EvoCriteria> {
        vec![EvoCriteria::new(
            record.species(),
            record.form(),
            1,
            record.current_level().min(max_level),
        )]
    }
}
