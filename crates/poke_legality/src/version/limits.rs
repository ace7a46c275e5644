//! Per-format value ceilings.

use super::GameVersion;

pub const MAX_SPECIES_ID_1: u16 = 151;
pub const MAX_SPECIES_ID_2: u16 = 251;
pub const MAX_SPECIES_ID_3: u16 = 386;
pub const MAX_SPECIES_ID_4: u16 = 493;
pub const MAX_SPECIES_ID_5: u16 = 649;
pub const MAX_SPECIES_ID_6: u16 = 721;
pub const MAX_SPECIES_ID_7: u16 = 802;
pub const MAX_SPECIES_ID_7_USUM: u16 = 807;
pub const MAX_SPECIES_ID_7B: u16 = 809;
pub const MAX_SPECIES_ID_8: u16 = 898;
pub const MAX_SPECIES_ID_8A: u16 = 905;
pub const MAX_SPECIES_ID_8B: u16 = 493;
pub const MAX_SPECIES_ID_9: u16 = 1025;

/// Gen 3/4 formats top out at the GameCube code.
pub const MAX_GAME_ID_3: u8 = GameVersion::CXD as u8;
pub const MAX_GAME_ID_4: u8 = GameVersion::CXD as u8;
pub const MAX_GAME_ID_5: u8 = GameVersion::B2 as u8;
pub const MAX_GAME_ID_6: u8 = GameVersion::OR as u8;
/// Gen 7 (3DS) accepts Virtual Console transfers up to Crystal.
pub const MAX_GAME_ID_7: u8 = GameVersion::C as u8;
/// Let's Go format; short-circuits range queries to its fixed origin set.
pub const MAX_GAME_ID_7B: u8 = GameVersion::GE as u8;
pub const MAX_GAME_ID_8: u8 = GameVersion::SP as u8;
pub const MAX_GAME_ID_9: u8 = GameVersion::VL as u8;

/// Maximums (and minimums) a storage format can hold.
pub trait GameValueLimit {
    /// Maximum species ID value that can exist.
    fn max_species_id(&self) -> u16;
    /// Maximum version ID value that can exist.
    fn max_game_id(&self) -> u8;
    /// Minimum version ID value that can exist.
    fn min_game_id(&self) -> u8;
}

/// Plain limit triple, for formats described by data rather than a type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormatLimits {
    pub max_species_id: u16,
    pub min_game_id: u8,
    pub max_game_id: u8,
}

impl FormatLimits {
    /// Limits of the storage format native to a generation.
    /// Returns `None` for generations outside 1..=9.
    pub fn for_generation(generation: u8) -> Option<Self> {
        let (max_species_id, min_game_id, max_game_id) = match generation {
            1 => (MAX_SPECIES_ID_1, GameVersion::RD as u8, GameVersion::YW as u8),
            2 => (MAX_SPECIES_ID_2, GameVersion::RD as u8, GameVersion::C as u8),
            3 => (MAX_SPECIES_ID_3, GameVersion::S as u8, MAX_GAME_ID_3),
            4 => (MAX_SPECIES_ID_4, GameVersion::S as u8, MAX_GAME_ID_4),
            5 => (MAX_SPECIES_ID_5, GameVersion::S as u8, MAX_GAME_ID_5),
            6 => (MAX_SPECIES_ID_6, GameVersion::S as u8, MAX_GAME_ID_6),
            7 => (MAX_SPECIES_ID_7_USUM, GameVersion::S as u8, MAX_GAME_ID_7),
            8 => (MAX_SPECIES_ID_8, GameVersion::S as u8, MAX_GAME_ID_8),
            9 => (MAX_SPECIES_ID_9, GameVersion::S as u8, MAX_GAME_ID_9),
            _ => return None,
        };
        Some(Self {
            max_species_id,
            min_game_id,
            max_game_id,
        })
    }

    /// Limits of the Let's Go format.
    pub const LETS_GO: Self = Self {
        max_species_id: MAX_SPECIES_ID_7B,
        min_game_id: GameVersion::GO as u8,
        max_game_id: MAX_GAME_ID_7B,
    };
}

impl GameValueLimit for FormatLimits {
    fn max_species_id(&self) -> u16 {
        self.max_species_id
    }

    fn max_game_id(&self) -> u8 {
        self.max_game_id
    }

    fn min_game_id(&self) -> u8 {
        self.min_game_id
    }
}
