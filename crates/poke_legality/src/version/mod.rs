//! Game version taxonomy.
//!
//! `GameVersion` mixes two kinds of identifiers in one closed enumeration:
//! - **Stored** codes (`1..=HIGHEST_STORED_VERSION`) that appear literally in
//!   entity data to mark the game the entity originated in.
//! - **Synthetic** codes above that range, used only in memory to group paired
//!   releases, whole generations, and side-game data origins.
//!
//! The grouping relation (`contains`) is a forest of depth ≤ 3:
//! release → paired group → generation bucket.

mod catalog;
mod limits;

pub use catalog::*;
pub use limits::*;

use serde::{Deserialize, Serialize};

/// Highest version code written into entity data by official games.
pub const HIGHEST_STORED_VERSION: u8 = GameVersion::RB as u8 - 1;

/// Game version identifier shared between stored version codes and
/// in-memory version groupings.
#[allow(clippy::upper_case_acronyms)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum GameVersion {
    /// Wildcard; contains every other version.
    Any = 0,

    // ------------------------------------------------------------------------
    // Stored codes
    // ------------------------------------------------------------------------
    /// Sapphire (GBA)
    S = 1,
    /// Ruby (GBA)
    R = 2,
    /// Emerald (GBA)
    E = 3,
    /// FireRed (GBA)
    FR = 4,
    /// LeafGreen (GBA)
    LG = 5,
    /// HeartGold (NDS)
    HG = 7,
    /// SoulSilver (NDS)
    SS = 8,
    /// Diamond (NDS)
    D = 10,
    /// Pearl (NDS)
    P = 11,
    /// Platinum (NDS)
    Pt = 12,
    /// Colosseum & XD (GameCube); both games share this code
    CXD = 15,
    /// White (NDS)
    W = 20,
    /// Black (NDS)
    B = 21,
    /// White 2 (NDS)
    W2 = 22,
    /// Black 2 (NDS)
    B2 = 23,
    /// X (3DS)
    X = 24,
    /// Y (3DS)
    Y = 25,
    /// Alpha Sapphire (3DS)
    AS = 26,
    /// Omega Ruby (3DS)
    OR = 27,
    /// Sun (3DS)
    SN = 30,
    /// Moon (3DS)
    MN = 31,
    /// Ultra Sun (3DS)
    US = 32,
    /// Ultra Moon (3DS)
    UM = 33,
    /// GO (transfers into Let's Go / HOME)
    GO = 34,
    /// Red (3DS Virtual Console)
    RD = 35,
    /// Green[JP] / Blue[INT] (3DS Virtual Console)
    GN = 36,
    /// Blue[JP] (3DS Virtual Console)
    BU = 37,
    /// Yellow (3DS Virtual Console)
    YW = 38,
    /// Gold (3DS Virtual Console)
    GD = 39,
    /// Silver (3DS Virtual Console)
    SI = 40,
    /// Crystal (3DS Virtual Console)
    C = 41,
    /// Let's Go, Pikachu! (NX)
    GP = 42,
    /// Let's Go, Eevee! (NX)
    GE = 43,
    /// Sword (NX)
    SW = 44,
    /// Shield (NX)
    SH = 45,
    /// Legends: Arceus (NX)
    PLA = 47,
    /// Brilliant Diamond (NX)
    BD = 48,
    /// Shining Pearl (NX)
    SP = 49,
    /// Scarlet (NX)
    SL = 50,
    /// Violet (NX)
    VL = 51,

    // ------------------------------------------------------------------------
    // Synthetic codes (never stored)
    // ------------------------------------------------------------------------
    /// Red & Blue
    RB = 52,
    /// Red / Blue / Yellow
    RBY = 53,
    /// Gold & Silver
    GS = 54,
    /// Gold / Silver / Crystal
    GSC = 55,
    /// Ruby & Sapphire
    RS = 56,
    /// Ruby / Sapphire / Emerald
    RSE = 57,
    /// FireRed & LeafGreen
    FRLG = 58,
    /// Box Ruby & Sapphire
    RSBOX = 59,
    /// Colosseum-only origin
    COLO = 60,
    /// XD-only origin
    XD = 61,
    /// Diamond & Pearl
    DP = 62,
    /// Diamond / Pearl / Platinum
    DPPt = 63,
    /// HeartGold & SoulSilver
    HGSS = 64,
    /// Battle Revolution
    BATREV = 65,
    /// Black & White
    BW = 66,
    /// Black 2 & White 2
    B2W2 = 67,
    /// X & Y
    XY = 68,
    /// Omega Ruby & Alpha Sapphire demo
    ORASDEMO = 69,
    /// Omega Ruby & Alpha Sapphire
    ORAS = 70,
    /// Sun & Moon
    SM = 71,
    /// Ultra Sun & Ultra Moon
    USUM = 72,
    /// Let's Go, Pikachu! & Let's Go, Eevee!
    GG = 73,
    /// Sword & Shield
    SWSH = 74,
    /// Brilliant Diamond & Shining Pearl
    BDSP = 75,
    /// Scarlet & Violet
    SV = 76,

    Gen1 = 77,
    Gen2 = 78,
    Gen3 = 79,
    Gen4 = 80,
    Gen5 = 81,
    Gen6 = 82,
    /// Generation 7 games on the 3DS
    Gen7 = 83,
    /// Generation 7 games on the Switch
    Gen7b = 84,
    Gen8 = 85,
    Gen9 = 86,

    /// Pocket Monsters Stadium data origin
    StadiumJ = 87,
    /// Stadium data origin
    Stadium = 88,
    /// Stadium 2 data origin
    Stadium2 = 89,

    Unknown = 254,
    /// Unmapped lookup result. Never a valid table key.
    Invalid = 255,
}

impl Default for GameVersion {
    fn default() -> Self {
        GameVersion::Any
    }
}

/// The nine generation buckets in ascending order. `Gen7` and `Gen7b` both
/// resolve to generation 7.
pub const GENERATION_BUCKETS: [(GameVersion, u8); 10] = [
    (GameVersion::Gen1, 1),
    (GameVersion::Gen2, 2),
    (GameVersion::Gen3, 3),
    (GameVersion::Gen4, 4),
    (GameVersion::Gen5, 5),
    (GameVersion::Gen6, 6),
    (GameVersion::Gen7, 7),
    (GameVersion::Gen7b, 7),
    (GameVersion::Gen8, 8),
    (GameVersion::Gen9, 9),
];

impl GameVersion {
    /// Every defined identifier, in ascending numeric order.
    pub const ALL: [GameVersion; 81] = {
        use GameVersion::*;
        [
            Any, S, R, E, FR, LG, HG, SS, D, P, Pt, CXD, W, B, W2, B2, X, Y, AS, OR, SN, MN, US,
            UM, GO, RD, GN, BU, YW, GD, SI, C, GP, GE, SW, SH, PLA, BD, SP, SL, VL, RB, RBY, GS,
            GSC, RS, RSE, FRLG, RSBOX, COLO, XD, DP, DPPt, HGSS, BATREV, BW, B2W2, XY, ORASDEMO,
            ORAS, SM, USUM, GG, SWSH, BDSP, SV, Gen1, Gen2, Gen3, Gen4, Gen5, Gen6, Gen7, Gen7b,
            Gen8, Gen9, StadiumJ, Stadium, Stadium2, Unknown, Invalid,
        ]
    };

    /// Convert a raw code. Codes that name no identifier map to `Invalid`.
    pub fn from_u8(value: u8) -> Self {
        Self::ALL
            .iter()
            .copied()
            .find(|v| *v as u8 == value)
            .unwrap_or(GameVersion::Invalid)
    }

    /// Whether the value is one the games write into entity data, as opposed
    /// to an aggregate indicator.
    pub fn is_valid_saved_version(self) -> bool {
        let value = self as u8;
        value > 0 && value <= HIGHEST_STORED_VERSION
    }

    /// Checks if `self` (a version or version set) includes `candidate`.
    ///
    /// Reflexive, and `Any` contains everything. Unknown codes are contained
    /// by nothing but themselves and `Any`.
    pub fn contains(self, candidate: GameVersion) -> bool {
        use GameVersion::*;

        if self == candidate || self == Any {
            return true;
        }

        match self {
            RB => matches!(candidate, RD | BU | GN),
            RBY | Stadium => RB.contains(candidate) || candidate == YW,
            Gen1 => RBY.contains(candidate) || candidate == Stadium,

            GS => matches!(candidate, GD | SI),
            GSC | Stadium2 => GS.contains(candidate) || candidate == C,
            Gen2 => GSC.contains(candidate) || candidate == Stadium2,

            RS => matches!(candidate, R | S),
            RSE => RS.contains(candidate) || candidate == E,
            FRLG => matches!(candidate, FR | LG),
            COLO | XD => candidate == CXD,
            CXD => matches!(candidate, COLO | XD),
            RSBOX => RS.contains(candidate) || candidate == E || FRLG.contains(candidate),
            Gen3 => {
                RSE.contains(candidate)
                    || FRLG.contains(candidate)
                    || CXD.contains(candidate)
                    || candidate == RSBOX
            }

            DP => matches!(candidate, D | P),
            HGSS => matches!(candidate, HG | SS),
            DPPt => DP.contains(candidate) || candidate == Pt,
            BATREV => DP.contains(candidate) || candidate == Pt || HGSS.contains(candidate),
            Gen4 => DPPt.contains(candidate) || HGSS.contains(candidate) || candidate == BATREV,

            BW => matches!(candidate, B | W),
            B2W2 => matches!(candidate, B2 | W2),
            Gen5 => BW.contains(candidate) || B2W2.contains(candidate),

            XY => matches!(candidate, X | Y),
            ORAS => matches!(candidate, OR | AS),
            Gen6 => XY.contains(candidate) || ORAS.contains(candidate),

            SM => matches!(candidate, SN | MN),
            USUM => matches!(candidate, US | UM),
            GG => matches!(candidate, GP | GE),
            Gen7 => SM.contains(candidate) || USUM.contains(candidate),
            Gen7b => GG.contains(candidate) || candidate == GO,

            SWSH => matches!(candidate, SW | SH),
            BDSP => matches!(candidate, BD | SP),
            Gen8 => SWSH.contains(candidate) || BDSP.contains(candidate) || candidate == PLA,

            SV => matches!(candidate, SL | VL),
            Gen9 => SV.contains(candidate),

            // Leaves and markers only contain themselves.
            Any | S | R | E | FR | LG | HG | SS | D | P | Pt | W | B | W2 | B2 | X | Y | AS | OR
            | SN | MN | US | UM | GO | RD | GN | BU | YW | GD | SI | C | GP | GE | SW | SH
            | PLA | BD | SP | SL | VL | ORASDEMO | StadiumJ | Unknown | Invalid => false,
        }
    }
}
