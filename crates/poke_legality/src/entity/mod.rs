//! Entity record view and the value types encounter templates constrain.
//!
//! Verification only ever reads an entity through [`EntityRecord`]; the
//! one concrete record type here, [`Pk9`], is what trade generation
//! produces.

mod personal;
mod pk9;

pub use personal::*;
pub use pk9::*;

use serde::{Deserialize, Serialize};

use crate::context::EntityContext;
use crate::version::GameVersion;

/// Ability number marking the hidden ability.
pub const HIDDEN_ABILITY_NUMBER: u8 = 4;

// ============================================================================
// Record view
// ============================================================================

/// Read-only view of a stored entity.
pub trait EntityRecord {
    fn species(&self) -> u16;
    fn form(&self) -> u8;
    fn current_level(&self) -> u8;
    /// Generation of the storage format the entity currently lives in.
    fn format(&self) -> u8;
    fn context(&self) -> EntityContext;
    /// Version the entity originated in.
    fn version(&self) -> GameVersion;

    fn met_location(&self) -> u16;
    fn met_level(&self) -> u8;
    fn egg_location(&self) -> u16;
    fn is_egg(&self) -> bool;
    fn ball(&self) -> u8;

    /// 1, 2, or 4 (hidden).
    fn ability_number(&self) -> u8;
    fn gender(&self) -> u8;
    fn nature(&self) -> u8;
    /// HP, Atk, Def, SpA, SpD, Spe.
    fn ivs(&self) -> [u8; 6];

    fn id32(&self) -> u32;
    fn ot_gender(&self) -> u8;
    fn encryption_constant(&self) -> u32;
    fn is_shiny(&self) -> bool;

    /// Size scalars, for formats that store them.
    fn size_scalars(&self) -> Option<SizeScalars> {
        None
    }

    /// Original tera type, for formats that store it.
    fn tera_type_original(&self) -> Option<u8> {
        None
    }

    /// Whether the met location is still the one the origin game wrote.
    /// Lost when an old entity is moved into a newer format. In the
    /// generation 2 format only Crystal writes met data, so a populated
    /// met location is the whole test.
    fn has_original_met_location(&self) -> bool {
        let format = self.format();
        if format == 2 {
            return self.met_location() != 0;
        }
        if format < 3 {
            return false;
        }
        match self.version().generation() {
            Some(generation) => !(generation <= 4 && format != generation),
            None => false,
        }
    }

    fn is_hidden_ability(&self) -> bool {
        self.ability_number() == HIDDEN_ABILITY_NUMBER
    }
}

/// Size scalars stored by newer formats. `scale` only exists from
/// generation 9 onward.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SizeScalars {
    pub height: u8,
    pub weight: u8,
    pub scale: Option<u8>,
}

// ============================================================================
// Balls
// ============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Ball {
    #[default]
    None = 0,
    Master = 1,
    Ultra = 2,
    Great = 3,
    Poke = 4,
    Safari = 5,
    Net = 6,
    Dive = 7,
    Nest = 8,
    Repeat = 9,
    Timer = 10,
    Luxury = 11,
    Premier = 12,
    Dusk = 13,
    Heal = 14,
    Quick = 15,
    Cherish = 16,
    Fast = 17,
    Level = 18,
    Lure = 19,
    Heavy = 20,
    Love = 21,
    Friend = 22,
    Moon = 23,
    Sport = 24,
    Dream = 25,
    Beast = 26,
    Strange = 27,
}

// ============================================================================
// Languages
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum LanguageId {
    Hacker = 0,
    Japanese = 1,
    English = 2,
    French = 3,
    Italian = 4,
    German = 5,
    Unused6 = 6,
    Spanish = 7,
    Korean = 8,
    ChineseS = 9,
    ChineseT = 10,
}

impl LanguageId {
    pub fn from_u8(value: u8) -> Option<Self> {
        use LanguageId::*;
        Some(match value {
            0 => Hacker,
            1 => Japanese,
            2 => English,
            3 => French,
            4 => Italian,
            5 => German,
            6 => Unused6,
            7 => Spanish,
            8 => Korean,
            9 => ChineseS,
            10 => ChineseT,
            _ => return None,
        })
    }

    /// Whether games of `generation` can produce this language.
    pub fn is_available(self, generation: u8) -> bool {
        use LanguageId::*;
        match self {
            Hacker | Unused6 => false,
            Korean => generation >= 4,
            ChineseS | ChineseT => generation >= 7,
            _ => generation >= 1,
        }
    }

    /// `language` if the generation supports it, else English.
    pub fn safe_language(generation: u8, language: u8) -> LanguageId {
        match LanguageId::from_u8(language) {
            Some(lang) if lang.is_available(generation) => lang,
            _ => LanguageId::English,
        }
    }
}

// ============================================================================
// Natures
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Nature {
    Hardy = 0,
    Lonely,
    Brave,
    Adamant,
    Naughty,
    Bold,
    Docile,
    Relaxed,
    Impish,
    Lax,
    Timid,
    Hasty,
    Serious,
    Jolly,
    Naive,
    Modest,
    Mild,
    Quiet,
    Bashful,
    Rash,
    Calm,
    Gentle,
    Sassy,
    Careful,
    Quirky,
    /// Not fixed by the encounter.
    Random = 25,
}

impl Nature {
    pub const COUNT: u8 = 25;

    pub fn from_u8(value: u8) -> Nature {
        use Nature::*;
        const TABLE: [Nature; 25] = [
            Hardy, Lonely, Brave, Adamant, Naughty, Bold, Docile, Relaxed, Impish, Lax, Timid,
            Hasty, Serious, Jolly, Naive, Modest, Mild, Quiet, Bashful, Rash, Calm, Gentle, Sassy,
            Careful, Quirky,
        ];
        TABLE.get(value as usize).copied().unwrap_or(Random)
    }

    pub fn is_fixed(self) -> bool {
        self != Nature::Random
    }
}

// ============================================================================
// Template constraints
// ============================================================================

/// Shiny policy of an encounter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Shiny {
    #[default]
    Never,
    Random,
    Always,
}

impl Shiny {
    pub fn is_valid(self, record: &(impl EntityRecord + ?Sized)) -> bool {
        match self {
            Shiny::Never => !record.is_shiny(),
            Shiny::Always => record.is_shiny(),
            Shiny::Random => true,
        }
    }
}

/// Which ability slots an encounter may deliver.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AbilityPermission {
    #[default]
    Any12,
    Any12H,
    OnlyFirst,
    OnlySecond,
    OnlyHidden,
}

impl AbilityPermission {
    /// The forced ability number, if any.
    pub fn single_value(self) -> Option<u8> {
        match self {
            AbilityPermission::OnlyFirst => Some(1),
            AbilityPermission::OnlySecond => Some(2),
            AbilityPermission::OnlyHidden => Some(HIDDEN_ABILITY_NUMBER),
            AbilityPermission::Any12 | AbilityPermission::Any12H => None,
        }
    }

    pub fn can_be_hidden(self) -> bool {
        matches!(self, AbilityPermission::Any12H | AbilityPermission::OnlyHidden)
    }

    pub fn allows(self, ability_number: u8) -> bool {
        match self.single_value() {
            Some(value) => value == ability_number,
            None => matches!(ability_number, 1 | 2) || (self.can_be_hidden() && ability_number == HIDDEN_ABILITY_NUMBER),
        }
    }
}

/// Per-stat fixed IVs of a template; `None` entries are unconstrained.
/// Order matches [`EntityRecord::ivs`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndividualValueSet {
    pub values: [Option<u8>; 6],
}

impl IndividualValueSet {
    pub const fn fixed(values: [u8; 6]) -> Self {
        Self {
            values: [
                Some(values[0]),
                Some(values[1]),
                Some(values[2]),
                Some(values[3]),
                Some(values[4]),
                Some(values[5]),
            ],
        }
    }

    pub fn is_specified(&self) -> bool {
        self.values.iter().any(Option::is_some)
    }

    /// Every fixed value must match; unconstrained stats accept anything.
    pub fn matches(&self, ivs: &[u8; 6]) -> bool {
        self.values
            .iter()
            .zip(ivs)
            .all(|(fixed, actual)| fixed.map_or(true, |value| value == *actual))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_language() {
        assert_eq!(LanguageId::safe_language(9, 1), LanguageId::Japanese);
        assert_eq!(LanguageId::safe_language(9, 6), LanguageId::English);
        assert_eq!(LanguageId::safe_language(3, 8), LanguageId::English);
        assert_eq!(LanguageId::safe_language(9, 200), LanguageId::English);
    }

    #[test]
    fn test_ability_permission() {
        assert!(AbilityPermission::Any12.allows(2));
        assert!(!AbilityPermission::Any12.allows(4));
        assert!(AbilityPermission::Any12H.allows(4));
        assert!(AbilityPermission::OnlyHidden.allows(4));
        assert!(!AbilityPermission::OnlyFirst.allows(2));
    }

    #[test]
    fn test_iv_set_matches() {
        let set = IndividualValueSet {
            values: [Some(31), None, Some(20), None, None, Some(0)],
        };
        assert!(set.is_specified());
        assert!(set.matches(&[31, 5, 20, 9, 9, 0]));
        assert!(!set.matches(&[31, 5, 21, 9, 9, 0]));
        assert!(IndividualValueSet::default().matches(&[1, 2, 3, 4, 5, 6]));
    }

    #[test]
    fn test_nature_from_u8() {
        assert_eq!(Nature::from_u8(3), Nature::Adamant);
        assert_eq!(Nature::from_u8(24), Nature::Quirky);
        assert_eq!(Nature::from_u8(25), Nature::Random);
    }
}
