//! Collaborators that shape freshly generated entities.

use rand::{Rng, RngCore};
use serde::Deserialize;

use crate::context::EntityContext;
use crate::entity::{AbilityPermission, IndividualValueSet, Nature, PersonalInfo, Pk9, HIDDEN_ABILITY_NUMBER};
use crate::version::GameVersion;

/// The trainer receiving a generated entity.
pub trait TrainerInfo {
    fn ot_name(&self) -> &str;
    fn game(&self) -> GameVersion;
    fn language(&self) -> u8;
    fn id32(&self) -> u32;
    fn gender(&self) -> u8;
}

/// Plain trainer record.
#[derive(Clone, Debug, Deserialize)]
pub struct SimpleTrainerInfo {
    pub ot_name: String,
    pub game: GameVersion,
    pub language: u8,
    #[serde(default)]
    pub id32: u32,
    #[serde(default)]
    pub gender: u8,
}

impl TrainerInfo for SimpleTrainerInfo {
    fn ot_name(&self) -> &str {
        &self.ot_name
    }

    fn game(&self) -> GameVersion {
        self.game
    }

    fn language(&self) -> u8 {
        self.language
    }

    fn id32(&self) -> u32 {
        self.id32
    }

    fn gender(&self) -> u8 {
        self.gender
    }
}

/// Soft randomization policy. Generation is deterministic for a given
/// criteria implementation and random source.
pub trait EncounterCriteria {
    fn nature(&self, preferred: Nature, rng: &mut dyn RngCore) -> Nature;

    /// Gender for the entity: `fixed` (0, 1, or 2 for "unset") must be
    /// honored when the species allows it.
    fn gender(&self, fixed: u8, info: &PersonalInfo, rng: &mut dyn RngCore) -> u8;

    /// Ability number (1, 2, or 4) within `permission`.
    fn ability_from_number(&self, permission: AbilityPermission, rng: &mut dyn RngCore) -> u8;

    /// Fill IVs, keeping every value `ivs` fixes.
    fn set_random_ivs(&self, record: &mut Pk9, ivs: &IndividualValueSet, rng: &mut dyn RngCore);
}

/// No preferences: every free value is drawn uniformly.
#[derive(Clone, Copy, Debug, Default)]
pub struct Unrestricted;

impl EncounterCriteria for Unrestricted {
    fn nature(&self, preferred: Nature, rng: &mut dyn RngCore) -> Nature {
        if preferred.is_fixed() {
            return preferred;
        }
        Nature::from_u8(rng.gen_range(0..Nature::COUNT))
    }

    fn gender(&self, fixed: u8, info: &PersonalInfo, rng: &mut dyn RngCore) -> u8 {
        if !info.is_dual_gender() {
            return info.fixed_gender();
        }
        if fixed <= 1 {
            return fixed;
        }
        rng.gen_range(0..=1)
    }

    fn ability_from_number(&self, permission: AbilityPermission, rng: &mut dyn RngCore) -> u8 {
        if let Some(value) = permission.single_value() {
            return value;
        }
        if permission.can_be_hidden() {
            return [1, 2, HIDDEN_ABILITY_NUMBER][rng.gen_range(0..3)];
        }
        rng.gen_range(1..=2)
    }

    fn set_random_ivs(&self, record: &mut Pk9, ivs: &IndividualValueSet, rng: &mut dyn RngCore) {
        for (slot, fixed) in record.ivs.iter_mut().zip(ivs.values) {
            *slot = fixed.unwrap_or_else(|| rng.gen_range(0..=31));
        }
    }
}

/// Whether a form can change between two contexts.
pub trait FormChangeRules {
    fn is_form_changeable(
        &self,
        species: u16,
        from_form: u8,
        to_form: u8,
        origin: EntityContext,
        current: EntityContext,
    ) -> bool;
}

/// No species changes form.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoFormChanges;

impl FormChangeRules for NoFormChanges {
    fn is_form_changeable(&self, _: u16, _: u8, _: u8, _: EntityContext, _: EntityContext) -> bool {
        false
    }
}
