//! Test helpers: a plain entity record, a fixed ancestry source, and
//! encoders producing each packed egg move layout.

use poke_legality::context::EntityContext;
use poke_legality::encounters::{EvoCriteria, EvolutionChainSource};
use poke_legality::entity::{EntityRecord, SizeScalars};
use poke_legality::learnset::BinLinker;
use poke_legality::GameVersion;

/// Entity record with every field public. Starts as a generation 3
/// Emerald capture.
#[derive(Clone, Debug)]
pub struct TestRecord {
    pub species: u16,
    pub form: u8,
    pub level: u8,
    pub format: u8,
    pub context: EntityContext,
    pub version: GameVersion,
    pub met_location: u16,
    pub met_level: u8,
    pub egg_location: u16,
    pub is_egg: bool,
    pub ball: u8,
    pub ability_number: u8,
    pub gender: u8,
    pub nature: u8,
    pub ivs: [u8; 6],
    pub id32: u32,
    pub ot_gender: u8,
    pub encryption_constant: u32,
    pub shiny: bool,
    pub scalars: Option<SizeScalars>,
    pub tera_type: Option<u8>,
}

impl Default for TestRecord {
    fn default() -> Self {
        Self {
            species: 1,
            form: 0,
            level: 10,
            format: 3,
            context: EntityContext::Gen3,
            version: GameVersion::E,
            met_location: 0,
            met_level: 5,
            egg_location: 0,
            is_egg: false,
            ball: 4,
            ability_number: 1,
            gender: 0,
            nature: 0,
            ivs: [0; 6],
            id32: 0,
            ot_gender: 0,
            encryption_constant: 0,
            shiny: false,
            scalars: None,
            tera_type: None,
        }
    }
}

impl TestRecord {
    pub fn new(species: u16, version: GameVersion, format: u8) -> Self {
        let context = match format {
            1 => EntityContext::Gen1,
            2 => EntityContext::Gen2,
            3 => EntityContext::Gen3,
            4 => EntityContext::Gen4,
            5 => EntityContext::Gen5,
            6 => EntityContext::Gen6,
            7 => EntityContext::Gen7,
            8 => EntityContext::Gen8,
            _ => EntityContext::Gen9,
        };
        Self {
            species,
            version,
            format,
            context,
            ..Self::default()
        }
    }

    pub fn met(mut self, location: u16, level: u8) -> Self {
        self.met_location = location;
        self.met_level = level;
        self
    }

    pub fn ball(mut self, ball: u8) -> Self {
        self.ball = ball;
        self
    }

    pub fn ability_number(mut self, number: u8) -> Self {
        self.ability_number = number;
        self
    }
}

impl EntityRecord for TestRecord {
    fn species(&self) -> u16 {
        self.species
    }

    fn form(&self) -> u8 {
        self.form
    }

    fn current_level(&self) -> u8 {
        self.level
    }

    fn format(&self) -> u8 {
        self.format
    }

    fn context(&self) -> EntityContext {
        self.context
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
        self.shiny
    }

    fn size_scalars(&self) -> Option<SizeScalars> {
        self.scalars
    }

    fn tera_type_original(&self) -> Option<u8> {
        self.tera_type
    }
}

/// Hands back the same chain for every entity.
pub struct FixedChain(pub Vec<EvoCriteria>);

impl EvolutionChainSource for FixedChain {
    fn valid_pre_evolutions(
        &self,
        _record: &dyn EntityRecord,
        max_level: u8,
        _skip_checks: bool,
    ) -> Vec<EvoCriteria> {
        self.0
            .iter()
            .map(|evo| EvoCriteria {
                level_max: evo.level_max.min(max_level),
                ..*evo
            })
            .collect()
    }
}

// ============================================================================
// Packed table encoders
// ============================================================================

/// Generation 2 layout: pointer table at `base`, then 0xFF-terminated runs.
pub fn encode_gen2(entries: &[Vec<u8>], base: u16) -> Vec<u8> {
    let mut pointers = Vec::new();
    let mut payload = Vec::new();
    let mut address = base + (entries.len() * 2) as u16;
    for entry in entries {
        pointers.extend_from_slice(&address.to_le_bytes());
        payload.extend_from_slice(entry);
        payload.push(0xFF);
        address += entry.len() as u16 + 1;
    }
    pointers.extend(payload);
    pointers
}

/// Generation 3-6 layout: count then moves, back to back.
pub fn encode_gen6(entries: &[Vec<u16>]) -> Vec<u8> {
    let mut out = Vec::new();
    for entry in entries {
        out.extend_from_slice(&(entry.len() as u16).to_le_bytes());
        for m in entry {
            out.extend_from_slice(&m.to_le_bytes());
        }
    }
    out
}

/// Generation 7-8 layout: form index, count, then moves.
pub fn encode_gen7(entries: &[(u16, Vec<u16>)]) -> Vec<u8> {
    let mut out = Vec::new();
    for (form_index, moves) in entries {
        out.extend_from_slice(&form_index.to_le_bytes());
        out.extend_from_slice(&(moves.len() as u16).to_le_bytes());
        for m in moves {
            out.extend_from_slice(&m.to_le_bytes());
        }
    }
    out
}

/// Generation 9 layout: container of raw move runs.
pub fn encode_gen9(entries: &[Vec<u16>], magic: [u8; 2]) -> Vec<u8> {
    let runs: Vec<Vec<u8>> = entries
        .iter()
        .map(|entry| entry.iter().flat_map(|m| m.to_le_bytes()).collect())
        .collect();
    let slices: Vec<&[u8]> = runs.iter().map(Vec::as_slice).collect();
    BinLinker::pack(magic, &slices)
}

/// Sanitize a fixture name for use as a test identifier.
pub fn sanitize_name(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_alphanumeric() || c == '_' { c } else { '_' })
        .collect()
}
