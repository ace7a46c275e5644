//! Encounter resolution.
//!
//! Wild slots are looked up per version and filtered against an entity's
//! ancestry; fixed encounters (in-game trades) are matched field by field.

pub mod criteria;
pub mod defer;
pub mod evolution;
pub mod generator;
pub mod locations;
pub mod remap;
pub mod size;
pub mod slot;
pub mod tables;
pub mod tera;
pub mod trade9;
pub mod wurmple;

pub use criteria::{
    EncounterCriteria, FormChangeRules, NoFormChanges, SimpleTrainerInfo, TrainerInfo, Unrestricted,
};
pub use defer::{DeferByBoolean, DeferExt};
pub use evolution::{EvoCriteria, EvolutionChainSource, NoEvolution, MAX_LEVEL};
pub use generator::{match_rating, SlotGenerator};
pub use remap::{LocationRemapState, LocationRemapper, RemapTable};
pub use size::SizeType9;
pub use slot::{
    AreaDefinition, EncounterArea, EncounterMatchRating, EncounterSlot, Encounterable, SlotDefinition,
    SlotFlags, SlotType,
};
pub use tables::{slot_table_for, EncounterTables, SlotTable};
pub use tera::GemType;
pub use trade9::{EncounterTrade9, MatchEnvironment, Trade9Definition};
