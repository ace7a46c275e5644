//! Tera type policy of fixed encounters.

use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

use crate::entity::PersonalTable;

/// Number of elemental types a tera type can take.
pub const TERA_TYPE_COUNT: u8 = 18;

/// Tera type template of an encounter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GemType {
    /// One of the species' own types.
    #[default]
    Default,
    /// Any type.
    Random,
    /// This specific type.
    Type(u8),
}

impl GemType {
    /// Decode the packed form: 0 default, 1 random, `2 + type` specific.
    pub fn from_u8(value: u8) -> GemType {
        match value {
            0 => GemType::Default,
            1 => GemType::Random,
            v => GemType::Type(v - 2),
        }
    }

    pub fn as_u8(self) -> u8 {
        match self {
            GemType::Default => 0,
            GemType::Random => 1,
            GemType::Type(t) => t + 2,
        }
    }

    pub fn specified(self) -> Option<u8> {
        match self {
            GemType::Type(t) => Some(t),
            _ => None,
        }
    }

    /// Whether `original` is a tera type this policy can produce for the
    /// species/form.
    pub fn is_match(self, species: u16, form: u8, original: u8, personal: &dyn PersonalTable) -> bool {
        match self {
            GemType::Random => original < TERA_TYPE_COUNT,
            GemType::Type(t) => original == t,
            GemType::Default => personal
                .info(species, form)
                .is_some_and(|info| info.is_type(original)),
        }
    }

    /// Tera type a freshly generated entity receives: the specified type,
    /// else the species' primary type, else a uniformly random one.
    pub fn original_type(
        self,
        species: u16,
        form: u8,
        personal: &dyn PersonalTable,
        rng: &mut dyn RngCore,
    ) -> u8 {
        if let Some(t) = self.specified() {
            return t;
        }
        if self == GemType::Default {
            if let Some(info) = personal.info(species, form) {
                return info.type1;
            }
        }
        rng.gen_range(0..TERA_TYPE_COUNT)
    }
}
