//! Generation 9 entity, as produced by encounter generation.

use crate::context::EntityContext;
use crate::version::GameVersion;

use super::{EntityRecord, SizeScalars};

/// Affixed-ribbon value meaning "no ribbon affixed".
pub const AFFIXED_RIBBON_NONE: i8 = -1;
/// Ribbon index of the partner ribbon.
pub const RIBBON_INDEX_PARTNER: i8 = 51;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pk9 {
    pub species: u16,
    pub form: u8,
    pub current_level: u8,
    pub version: GameVersion,
    pub language: u8,

    pub met_location: u16,
    pub met_level: u8,
    pub egg_location: u16,
    pub is_egg: bool,
    pub ball: u8,

    pub pid: u32,
    pub encryption_constant: u32,
    pub nature: u8,
    pub stat_nature: u8,
    pub gender: u8,
    pub ability_number: u8,
    pub ivs: [u8; 6],

    pub id32: u32,
    pub ot_name: String,
    pub ot_gender: u8,
    pub ot_friendship: u8,
    pub nickname: String,
    pub is_nicknamed: bool,

    pub handler_name: String,
    pub handler_language: u8,
    pub handler_friendship: u8,
    pub current_handler: u8,
    pub obedience_level: u8,

    pub height_scalar: u8,
    pub weight_scalar: u8,
    pub scale: u8,
    pub tera_type_original: u8,

    pub ribbon_partner: bool,
    pub affixed_ribbon: i8,
}

impl Default for Pk9 {
    fn default() -> Self {
        Self {
            species: 0,
            form: 0,
            current_level: 1,
            version: GameVersion::Any,
            language: 0,
            met_location: 0,
            met_level: 0,
            egg_location: 0,
            is_egg: false,
            ball: 0,
            pid: 0,
            encryption_constant: 0,
            nature: 0,
            stat_nature: 0,
            gender: 0,
            ability_number: 1,
            ivs: [0; 6],
            id32: 0,
            ot_name: String::new(),
            ot_gender: 0,
            ot_friendship: 0,
            nickname: String::new(),
            is_nicknamed: false,
            handler_name: String::new(),
            handler_language: 0,
            handler_friendship: 0,
            current_handler: 0,
            obedience_level: 0,
            height_scalar: 0,
            weight_scalar: 0,
            scale: 0,
            tera_type_original: 0,
            ribbon_partner: false,
            affixed_ribbon: AFFIXED_RIBBON_NONE,
        }
    }
}

impl Pk9 {
    /// Shiny check shared by every format from generation 7 on: the two
    /// halves of `pid ^ id32` may differ in at most the low four bits.
    pub fn is_shiny_pair(pid: u32, id32: u32) -> bool {
        let xor = pid ^ id32;
        ((xor >> 16) ^ (xor & 0xFFFF)) < 16
    }

    /// Rewrite the PID's high half so the entity is (or is not) shiny for
    /// its current trainer ID.
    pub fn set_shiny_state(&mut self, shiny: bool) {
        if Pk9::is_shiny_pair(self.pid, self.id32) == shiny {
            return;
        }
        let low = self.pid & 0xFFFF;
        let tid_xor = (self.id32 >> 16) ^ (self.id32 & 0xFFFF);
        let high = if shiny {
            low ^ tid_xor
        } else {
            // Any high half at least 16 away from the shiny one.
            (low ^ tid_xor) ^ 0x8000
        };
        self.pid = (high << 16) | low;
    }

    pub fn tid16(&self) -> u16 {
        (self.id32 & 0xFFFF) as u16
    }

    pub fn sid16(&self) -> u16 {
        (self.id32 >> 16) as u16
    }
}

impl EntityRecord for Pk9 {
    fn species(&self) -> u16 {
        self.species
    }

    fn form(&self) -> u8 {
        self.form
    }

    fn current_level(&self) -> u8 {
        self.current_level
    }

    fn format(&self) -> u8 {
        9
    }

    fn context(&self) -> EntityContext {
        EntityContext::Gen9
    }

    fn version(&self) -> GameVersion {
        self.version
    }

    fn met_location(&self) -> u16 {
        self.met_location
    }

    fn met_level(&self) -> u8 {
        self.met_level
    }

    fn egg_location(&self) -> u16 {
        self.egg_location
    }

    fn is_egg(&self) -> bool {
        self.is_egg
    }

    fn ball(&self) -> u8 {
        self.ball
    }

    fn ability_number(&self) -> u8 {
        self.ability_number
    }

    fn gender(&self) -> u8 {
        self.gender
    }

    fn nature(&self) -> u8 {
        self.nature
    }

    fn ivs(&self) -> [u8; 6] {
        self.ivs
    }

    fn id32(&self) -> u32 {
        self.id32
    }

    fn ot_gender(&self) -> u8 {
        self.ot_gender
    }

    fn encryption_constant(&self) -> u32 {
        self.encryption_constant
    }

    fn is_shiny(&self) -> bool {
        Pk9::is_shiny_pair(self.pid, self.id32)
    }

    fn size_scalars(&self) -> Option<SizeScalars> {
        Some(SizeScalars {
            height: self.height_scalar,
            weight: self.weight_scalar,
            scale: Some(self.scale),
        })
    }

    fn tera_type_original(&self) -> Option<u8> {
        Some(self.tera_type_original)
    }
}
