//! Derived lookups over the version taxonomy.
//!
//! The ordered list of stored versions is built once, on first use, and
//! shared for the life of the process.

use std::sync::OnceLock;

use super::limits::*;
use super::{GameVersion, GENERATION_BUCKETS};

/// All stored versions an entity can carry, most recent first.
pub fn stored_versions() -> &'static [GameVersion] {
    static STORED: OnceLock<Vec<GameVersion>> = OnceLock::new();
    STORED.get_or_init(|| {
        GameVersion::ALL
            .iter()
            .rev()
            .copied()
            .filter(|v| v.is_valid_saved_version())
            .collect()
    })
}

impl GameVersion {
    /// Generation the version belongs to, from the first matching bucket in
    /// ascending order. `None` when no bucket contains it; callers must not
    /// treat that as generation 1.
    pub fn generation(self) -> Option<u8> {
        GENERATION_BUCKETS
            .iter()
            .find(|(bucket, _)| bucket.contains(self))
            .map(|(_, generation)| *generation)
    }

    /// Version group whose met-location table applies to entities from this
    /// version. Returns `Invalid` for versions without one.
    pub fn met_location_group(self) -> GameVersion {
        use GameVersion::*;
        match self {
            // Side games
            CXD => CXD,
            GO => GO,

            // Virtual Console transfers land with Ultra Sun/Moon locations
            RD | BU | YW | GN | GD | SI | C => USUM,

            GS | GSC => GSC,

            R | S => RS,
            E => E,
            FR | LG => FR,

            D | P => DP,
            Pt => Pt,
            HG | SS => HG,

            B | W => BW,
            B2 | W2 => B2W2,

            X | Y => XY,
            OR | AS => ORAS,

            SN | MN => SM,
            US | UM => USUM,
            GP | GE => GG,

            SW | SH => SWSH,
            BD | SP => BDSP,
            PLA => PLA,

            SL | VL => SV,

            _ => Invalid,
        }
    }

    /// Highest species ID obtainable in the version, or 0 when unknown.
    ///
    /// Generation 7 is split by console and by paired release; generation 8
    /// is split into its three sub-eras. A generation-7 group that is neither
    /// pair resolves to the Ultra pair's ceiling.
    pub fn max_species_id(self) -> u16 {
        use GameVersion::*;
        if Gen1.contains(self) {
            return MAX_SPECIES_ID_1;
        }
        if Gen2.contains(self) {
            return MAX_SPECIES_ID_2;
        }
        if Gen3.contains(self) {
            return MAX_SPECIES_ID_3;
        }
        if Gen4.contains(self) {
            return MAX_SPECIES_ID_4;
        }
        if Gen5.contains(self) {
            return MAX_SPECIES_ID_5;
        }
        if Gen6.contains(self) {
            return MAX_SPECIES_ID_6;
        }
        if Gen7b.contains(self) {
            return MAX_SPECIES_ID_7B;
        }
        if Gen7.contains(self) {
            if SM.contains(self) {
                return MAX_SPECIES_ID_7;
            }
            return MAX_SPECIES_ID_7_USUM;
        }
        if self == PLA {
            return MAX_SPECIES_ID_8A;
        }
        if BDSP.contains(self) {
            return MAX_SPECIES_ID_8B;
        }
        if Gen8.contains(self) {
            return MAX_SPECIES_ID_8;
        }
        if Gen9.contains(self) {
            return MAX_SPECIES_ID_9;
        }
        0
    }

    /// Latest release of a generation, or `Invalid`.
    pub fn from_generation(generation: u8) -> GameVersion {
        use GameVersion::*;
        match generation {
            1 => RBY,
            2 => C,
            3 => E,
            4 => SS,
            5 => W2,
            6 => AS,
            7 => UM,
            8 => SH,
            9 => VL,
            _ => Invalid,
        }
    }

    /// A single stored version standing in for a paired group. Stored
    /// versions return themselves; groups without a representative return
    /// `Invalid`.
    pub fn single_version(self) -> GameVersion {
        use GameVersion::*;
        if self.is_valid_saved_version() {
            return self;
        }
        match self {
            RB | RBY => RD,
            GS | GSC => GD,
            RS | RSE => R,
            FRLG => FR,
            COLO | XD => CXD,
            DP | DPPt => D,
            HGSS => HG,
            BW => B,
            B2W2 => B2,
            XY => X,
            ORAS => OR,
            SM => SN,
            USUM => US,
            GG => GP,
            SWSH => SW,
            BDSP => BD,
            SV => SL,
            _ => Invalid,
        }
    }

    /// Picks `preferred` if this version set contains it, else the set's
    /// single representative.
    pub fn compatible_version(self, preferred: GameVersion) -> GameVersion {
        if self.contains(preferred) && preferred.is_valid_saved_version() {
            preferred
        } else {
            self.single_version()
        }
    }
}

/// Stored versions within a generation. Let's Go origins only see their own
/// fixed set.
pub fn versions_in_generation(generation: u8, entity_version: GameVersion) -> Vec<GameVersion> {
    if GameVersion::Gen7b.contains(entity_version) {
        return vec![GameVersion::GO, GameVersion::GP, GameVersion::GE];
    }
    stored_versions()
        .iter()
        .copied()
        .filter(|v| v.generation() == Some(generation))
        .collect()
}

/// Stored versions with codes in `min..=max`, optionally capped by a
/// generation ceiling.
///
/// Two fixed cases apply: a `max` of [`MAX_GAME_ID_7B`] always yields the
/// Let's Go origin set, and a generation-7 query capped at [`MAX_GAME_ID_7`]
/// excludes GO. A ceiling of 8 or above is raised to 9 since newer formats
/// accept transfers from every released generation.
pub fn versions_within_range(min: u8, max: u8, generation: Option<u8>) -> Vec<GameVersion> {
    if max == MAX_GAME_ID_7B {
        return vec![GameVersion::GO, GameVersion::GP, GameVersion::GE];
    }

    let mut versions: Vec<GameVersion> = stored_versions()
        .iter()
        .copied()
        .filter(|v| min <= *v as u8 && *v as u8 <= max)
        .collect();

    let Some(mut generation) = generation else {
        return versions;
    };

    if max == MAX_GAME_ID_7 && generation == 7 {
        versions.retain(|v| *v != GameVersion::GO);
    }

    if generation >= 8 {
        generation = 9;
    }
    versions.retain(|v| matches!(v.generation(), Some(g) if g <= generation));
    versions
}

/// [`versions_within_range`] using a format's own bounds.
pub fn versions_within_limit(limit: &impl GameValueLimit, generation: Option<u8>) -> Vec<GameVersion> {
    versions_within_range(limit.min_game_id(), limit.max_game_id(), generation)
}
