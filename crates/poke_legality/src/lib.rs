//! poke_legality - Encounter-origin legality core
//!
//! Answers "which in-game events could have produced this entity" across
//! nine generations of releases:
//!
//! - [`version`]: the game version taxonomy and catalog queries
//! - [`learnset`]: decoders for the packed per-species egg move tables
//! - [`encounters`]: wild slot resolution and fixed trade matching
//!
//! Reference tables are immutable once built and safe to share across
//! threads. The crate logs through `tracing` and never installs a
//! subscriber.

/// Game versions, generations and format limits
pub mod version;

/// Entity contexts and consoles
pub mod context;

/// Error types
pub mod error;

/// Parse configuration
pub mod settings;

/// Entity record view and template value types
pub mod entity;

/// Packed learnset tables
pub mod learnset;

/// Wild and fixed encounter resolution
pub mod encounters;

// Re-export commonly used types
pub use context::{EntityContext, GameConsole};
pub use encounters::{EncounterTables, EncounterTrade9, EvoCriteria, SlotGenerator};
pub use entity::{EntityRecord, Pk9};
pub use error::{DataError, TableError, TableResult};
pub use learnset::{LazyTable, TableDecoder};
pub use settings::ParseSettings;
pub use version::GameVersion;
