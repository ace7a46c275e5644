//! Per-version wild encounter tables and the version → table dispatch.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::entity::EntityRecord;
use crate::error::DataError;
use crate::settings::ParseSettings;
use crate::version::{GameVersion, MAX_SPECIES_ID_1};

use super::slot::{AreaDefinition, EncounterArea};

/// Generation 2 species above the generation 1 range that can still be
/// reached by evolving within generation 1 trade-compatible lines.
static FUTURE_EVOLUTIONS_GEN1: phf::Set<u16> = phf::phf_set! {
    169u16, 182u16, 186u16, 196u16, 197u16, 199u16, 208u16, 212u16, 230u16, 233u16, 242u16,
};

/// Identifier of one static wild encounter table.
#[allow(clippy::upper_case_acronyms)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum SlotTable {
    RBY,
    GS,
    C,
    /// Gold, Silver and Crystal slots together, for entities whose Crystal
    /// met data may have been lost.
    GSC,
    R,
    S,
    E,
    FR,
    LG,
    XD,
    D,
    P,
    Pt,
    HG,
    SS,
    B,
    W,
    B2,
    W2,
    X,
    Y,
    A,
    O,
    SN,
    MN,
    US,
    UM,
    GP,
    GE,
    GoGG,
    SW,
    SH,
}

impl SlotTable {
    pub const COUNT: usize = 32;

    pub const ALL: [SlotTable; Self::COUNT] = {
        use SlotTable::*;
        [
            RBY, GS, C, GSC, R, S, E, FR, LG, XD, D, P, Pt, HG, SS, B, W, B2, W2, X, Y, A, O, SN, MN,
            US, UM, GP, GE, GoGG, SW, SH,
        ]
    };

    /// Version stamped onto the slots of this table.
    pub fn version(self) -> GameVersion {
        use GameVersion as V;
        match self {
            SlotTable::RBY => V::RBY,
            SlotTable::GS => V::GS,
            SlotTable::C => V::C,
            SlotTable::GSC => V::GSC,
            SlotTable::R => V::R,
            SlotTable::S => V::S,
            SlotTable::E => V::E,
            SlotTable::FR => V::FR,
            SlotTable::LG => V::LG,
            SlotTable::XD => V::CXD,
            SlotTable::D => V::D,
            SlotTable::P => V::P,
            SlotTable::Pt => V::Pt,
            SlotTable::HG => V::HG,
            SlotTable::SS => V::SS,
            SlotTable::B => V::B,
            SlotTable::W => V::W,
            SlotTable::B2 => V::B2,
            SlotTable::W2 => V::W2,
            SlotTable::X => V::X,
            SlotTable::Y => V::Y,
            SlotTable::A => V::AS,
            SlotTable::O => V::OR,
            SlotTable::SN => V::SN,
            SlotTable::MN => V::MN,
            SlotTable::US => V::US,
            SlotTable::UM => V::UM,
            SlotTable::GP => V::GP,
            SlotTable::GE => V::GE,
            SlotTable::GoGG => V::GO,
            SlotTable::SW => V::SW,
            SlotTable::SH => V::SH,
        }
    }
}

// ============================================================================
// Dispatch
// ============================================================================

/// Table holding the wild encounters of `source`, or `None` for versions
/// without wild slots.
pub fn slot_table_for(
    record: &(impl EntityRecord + ?Sized),
    source: GameVersion,
    settings: &ParseSettings,
) -> Option<SlotTable> {
    use GameVersion as V;
    let table = match source {
        V::RBY | V::RB | V::RD | V::BU | V::GN | V::YW => SlotTable::RBY,
        V::GSC | V::GS | V::GD | V::SI | V::C => gsc_table(record, settings),

        V::R => SlotTable::R,
        V::S => SlotTable::S,
        V::E => SlotTable::E,
        V::FR => SlotTable::FR,
        V::LG => SlotTable::LG,
        V::CXD => SlotTable::XD,

        V::D => SlotTable::D,
        V::P => SlotTable::P,
        V::Pt => SlotTable::Pt,
        V::HG => SlotTable::HG,
        V::SS => SlotTable::SS,

        V::B => SlotTable::B,
        V::W => SlotTable::W,
        V::B2 => SlotTable::B2,
        V::W2 => SlotTable::W2,

        V::X => SlotTable::X,
        V::Y => SlotTable::Y,
        V::AS => SlotTable::A,
        V::OR => SlotTable::O,

        V::SN => SlotTable::SN,
        V::MN => SlotTable::MN,
        V::US => SlotTable::US,
        V::UM => SlotTable::UM,

        V::GP => SlotTable::GP,
        V::GE => SlotTable::GE,
        V::GO => SlotTable::GoGG,

        V::SW => SlotTable::SW,
        V::SH => SlotTable::SH,

        _ => {
            debug!(target: "poke_legality::encounters", ?source, "no wild encounter table");
            return None;
        }
    };
    debug!(target: "poke_legality::encounters", ?source, ?table, "resolved wild encounter table");
    Some(table)
}

/// Generation 2 needs care: Crystal is the only one of the three that
/// records met data, and that data is lost once the entity leaves the
/// generation 2 format.
fn gsc_table(record: &(impl EntityRecord + ?Sized), settings: &ParseSettings) -> SlotTable {
    if !settings.gen2_crystal() {
        return SlotTable::GS;
    }

    if record.format() != 2 {
        return SlotTable::GSC;
    }

    if record.has_original_met_location() {
        return SlotTable::C;
    }

    // Without met data a Crystal origin is only possible through a trip
    // back to generation 1, which wipes it.
    if !settings.gen1_tradeback() {
        debug!(target: "poke_legality::encounters", "tradeback disabled, using gold/silver");
        return SlotTable::GS;
    }

    let species = record.species();
    if species > MAX_SPECIES_ID_1 && !FUTURE_EVOLUTIONS_GEN1.contains(&species) {
        debug!(target: "poke_legality::encounters", species, "species cannot trade back, using gold/silver");
        return SlotTable::GS;
    }

    SlotTable::GSC
}

// ============================================================================
// Registry
// ============================================================================

#[derive(Deserialize)]
struct TableDefinition {
    table: SlotTable,
    areas: Vec<AreaDefinition>,
}

/// All wild encounter tables, indexed by [`SlotTable`].
#[derive(Clone, Debug)]
pub struct EncounterTables {
    tables: [Vec<EncounterArea>; SlotTable::COUNT],
}

impl Default for EncounterTables {
    fn default() -> Self {
        Self {
            tables: std::array::from_fn(|_| Vec::new()),
        }
    }
}

impl EncounterTables {
    /// Parse `[{ "table": "E", "areas": [...] }, ...]`. A table may only be
    /// defined once.
    pub fn from_json(json: &str) -> Result<Self, DataError> {
        let definitions: Vec<TableDefinition> = serde_json::from_str(json)?;
        let mut tables = Self::default();
        let mut seen = [false; SlotTable::COUNT];
        for definition in definitions {
            let index = definition.table as usize;
            if seen[index] {
                return Err(DataError::Duplicate(format!("{:?}", definition.table)));
            }
            seen[index] = true;
            tables.set(definition.table, definition.areas);
        }
        debug!(
            target: "poke_legality::encounters",
            tables = seen.iter().filter(|s| **s).count(),
            "loaded wild encounter tables"
        );
        Ok(tables)
    }

    /// Replace one table's areas.
    pub fn set(&mut self, table: SlotTable, areas: Vec<AreaDefinition>) {
        let version = table.version();
        self.tables[table as usize] = areas
            .into_iter()
            .map(|area| EncounterArea::new(area, version))
            .collect();
    }

    pub fn areas(&self, table: SlotTable) -> &[EncounterArea] {
        &self.tables[table as usize]
    }

    /// Areas for `source`, or for the entity's own version when `source`
    /// is [`GameVersion::Any`].
    pub fn encounter_areas(
        &self,
        record: &(impl EntityRecord + ?Sized),
        source: GameVersion,
        settings: &ParseSettings,
    ) -> &[EncounterArea] {
        let source = resolve_source(record, source);
        match slot_table_for(record, source, settings) {
            Some(table) => self.areas(table),
            None => &[],
        }
    }
}

/// `Any` stands for the version the entity itself reports.
pub fn resolve_source(record: &(impl EntityRecord + ?Sized), source: GameVersion) -> GameVersion {
    if source == GameVersion::Any {
        record.version()
    } else {
        source
    }
}
