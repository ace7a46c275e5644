//! Met-location rewriting across context transfers.
//!
//! Some transfer pathways rewrite an entity's location fields and others
//! keep them. Which one applies to a (origin context, current context)
//! pair is reference data supplied by the caller.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::context::EntityContext;
use crate::error::DataError;
use crate::version::GameVersion;

/// How location fields relate to the origin values after a transfer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LocationRemapState {
    /// No transfer pathway between the two contexts. Also the answer for
    /// any pair missing from the loaded data, so both location checks fail.
    #[default]
    None,
    /// Locations are kept as written.
    Original,
    /// Locations are rewritten on transfer.
    Remapped,
    /// Both outcomes are possible.
    Either,
}

impl LocationRemapState {
    pub fn allows_original(self) -> bool {
        matches!(self, LocationRemapState::Original | LocationRemapState::Either)
    }

    pub fn allows_remapped(self) -> bool {
        matches!(self, LocationRemapState::Remapped | LocationRemapState::Either)
    }

    /// Combine the exact and remapped checks; each is only evaluated when
    /// the state allows it.
    pub fn check(self, exact: impl FnOnce() -> bool, remapped: impl FnOnce() -> bool) -> bool {
        (self.allows_original() && exact()) || (self.allows_remapped() && remapped())
    }
}

/// Cross-context location data.
pub trait LocationRemapper {
    fn remap_state(&self, origin: EntityContext, current: EntityContext) -> LocationRemapState;

    /// Whether `location` is a valid SV met location for an entity of
    /// `version` seen from the SW/SH side.
    fn is_valid_met_sv(&self, location: u16, version: GameVersion) -> bool;

    /// Location an SV `location` is rewritten to when entering SW/SH.
    fn met_swsh(&self, location: u16, version: GameVersion) -> Option<u16>;
}

#[derive(Deserialize)]
struct Transition {
    origin: EntityContext,
    current: EntityContext,
    state: LocationRemapState,
}

#[derive(Deserialize)]
struct SvLocations {
    version: GameVersion,
    locations: Vec<u16>,
}

#[derive(Deserialize)]
struct SwshLocation {
    location: u16,
    version: GameVersion,
    met: u16,
}

#[derive(Deserialize)]
struct RemapDefinition {
    #[serde(default)]
    transitions: Vec<Transition>,
    #[serde(default)]
    sv_met_locations: Vec<SvLocations>,
    #[serde(default)]
    swsh_met_locations: Vec<SwshLocation>,
}

/// [`LocationRemapper`] backed by loaded reference data.
///
/// Nothing is assumed beyond what was loaded: a context always keeps its
/// own locations, and any pair without an entry has no pathway.
#[derive(Clone, Debug, Default)]
pub struct RemapTable {
    transitions: HashMap<(EntityContext, EntityContext), LocationRemapState>,
    sv_met: HashMap<GameVersion, HashSet<u16>>,
    swsh_met: HashMap<(u16, GameVersion), u16>,
}

impl RemapTable {
    pub fn from_json(json: &str) -> Result<Self, DataError> {
        let definition: RemapDefinition = serde_json::from_str(json)?;
        let mut table = RemapTable::default();

        for transition in definition.transitions {
            let key = (transition.origin, transition.current);
            if table.transitions.insert(key, transition.state).is_some() {
                return Err(DataError::Duplicate(format!("transition {:?} -> {:?}", key.0, key.1)));
            }
        }
        for entry in definition.sv_met_locations {
            table.sv_met.entry(entry.version).or_default().extend(entry.locations);
        }
        for entry in definition.swsh_met_locations {
            table.swsh_met.insert((entry.location, entry.version), entry.met);
        }

        debug!(
            target: "poke_legality::encounters",
            transitions = table.transitions.len(),
            "loaded location remap table"
        );
        Ok(table)
    }

    pub fn set_state(&mut self, origin: EntityContext, current: EntityContext, state: LocationRemapState) {
        self.transitions.insert((origin, current), state);
    }
}

impl LocationRemapper for RemapTable {
    fn remap_state(&self, origin: EntityContext, current: EntityContext) -> LocationRemapState {
        if origin == current {
            return LocationRemapState::Original;
        }
        self.transitions
            .get(&(origin, current))
            .copied()
            .unwrap_or(LocationRemapState::None)
    }

    fn is_valid_met_sv(&self, location: u16, version: GameVersion) -> bool {
        self.sv_met
            .get(&version)
            .is_some_and(|locations| locations.contains(&location))
    }

    fn met_swsh(&self, location: u16, version: GameVersion) -> Option<u16> {
        self.swsh_met.get(&(location, version)).copied()
    }
}
