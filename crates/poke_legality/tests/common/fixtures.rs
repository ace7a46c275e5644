//! Fixture data structures and loaders.
//!
//! Everything lives under `tests/fixtures/`; encounter cases are read from
//! `encounter_cases.json`.

use poke_legality::encounters::{EncounterTables, EncounterTrade9, EvoCriteria, RemapTable};
use poke_legality::entity::PersonalData;
use poke_legality::{GameVersion, ParseSettings};
use serde::Deserialize;

use super::helpers::TestRecord;

pub const FIXTURE_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

pub fn read_fixture(name: &str) -> String {
    let path = format!("{}/{}", FIXTURE_DIR, name);
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to read {}: {}", path, e))
}

pub fn load_tables() -> EncounterTables {
    EncounterTables::from_json(&read_fixture("wild_tables.json")).expect("Failed to parse wild_tables.json")
}

pub fn load_personal() -> PersonalData {
    PersonalData::from_json(&read_fixture("personal9.json")).expect("Failed to parse personal9.json")
}

pub fn load_remap() -> RemapTable {
    RemapTable::from_json(&read_fixture("remap.json")).expect("Failed to parse remap.json")
}

pub fn load_trade_names() -> Vec<Vec<String>> {
    serde_json::from_str(&read_fixture("trade_names.json")).expect("Failed to parse trade_names.json")
}

pub fn load_trades() -> Vec<EncounterTrade9> {
    EncounterTrade9::load_json(&read_fixture("trades9.json"), &load_trade_names())
        .expect("Failed to parse trades9.json")
}

// ============================================================================
// Encounter cases
// ============================================================================

/// Root structure for the encounter fixture file.
#[derive(Deserialize)]
pub struct EncounterFixture {
    #[allow(dead_code)]
    pub meta: Option<serde_json::Value>,
    pub cases: Vec<EncounterCase>,
}

/// One wild encounter resolution case.
#[derive(Deserialize, Debug, Clone)]
pub struct EncounterCase {
    pub id: String,
    pub description: String,
    pub record: RecordData,
    pub chain: Vec<ChainEntry>,
    /// Version to resolve against; the record's own when absent.
    pub source: Option<GameVersion>,
    pub settings: Option<ParseSettings>,
    /// Slots in the order they must be yielded.
    pub expected: Vec<ExpectedSlot>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct RecordData {
    pub species: u16,
    #[serde(default)]
    pub form: u8,
    pub version: GameVersion,
    pub format: u8,
    #[serde(default)]
    pub met_location: u16,
    #[serde(default)]
    pub met_level: u8,
    #[serde(default)]
    pub egg_location: u16,
    #[serde(default)]
    pub is_egg: bool,
    pub ball: Option<u8>,
    pub ability_number: Option<u8>,
    #[serde(default)]
    pub encryption_constant: u32,
}

impl RecordData {
    pub fn to_record(&self) -> TestRecord {
        let mut record = TestRecord::new(self.species, self.version, self.format)
            .met(self.met_location, self.met_level)
            .ball(self.ball.unwrap_or(4))
            .ability_number(self.ability_number.unwrap_or(1));
        record.form = self.form;
        record.egg_location = self.egg_location;
        record.is_egg = self.is_egg;
        record.encryption_constant = self.encryption_constant;
        record
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct ChainEntry {
    pub species: u16,
    #[serde(default)]
    pub form: u8,
    pub level_min: u8,
    pub level_max: u8,
}

impl ChainEntry {
    pub fn to_evo(&self) -> EvoCriteria {
        EvoCriteria::new(self.species, self.form, self.level_min, self.level_max)
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ExpectedSlot {
    pub species: u16,
    pub location: u16,
    pub deferred: bool,
}

pub fn load_encounter_cases() -> EncounterFixture {
    serde_json::from_str(&read_fixture("encounter_cases.json")).expect("Failed to parse encounter_cases.json")
}
