//! Per-species base data consumed by encounter generation.

use std::collections::HashMap;

use serde::Deserialize;

use crate::error::DataError;

/// Gender ratio value for species that are always male.
pub const RATIO_MAGIC_MALE: u8 = 0;
/// Gender ratio value for species that are always female.
pub const RATIO_MAGIC_FEMALE: u8 = 254;
/// Gender ratio value for genderless species.
pub const RATIO_MAGIC_GENDERLESS: u8 = 255;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct PersonalInfo {
    pub type1: u8,
    pub type2: u8,
    pub gender_ratio: u8,
    pub base_friendship: u8,
    #[serde(default)]
    pub form_count: u8,
}

impl PersonalInfo {
    pub fn is_dual_gender(&self) -> bool {
        !matches!(
            self.gender_ratio,
            RATIO_MAGIC_MALE | RATIO_MAGIC_FEMALE | RATIO_MAGIC_GENDERLESS
        )
    }

    /// Gender of single-gender species: 0 male, 1 female, 2 genderless.
    /// Dual-gender species report male.
    pub fn fixed_gender(&self) -> u8 {
        match self.gender_ratio {
            RATIO_MAGIC_GENDERLESS => 2,
            RATIO_MAGIC_FEMALE => 1,
            _ => 0,
        }
    }

    pub fn is_type(&self, tera_type: u8) -> bool {
        self.type1 == tera_type || self.type2 == tera_type
    }
}

/// Lookup of base data by species and form.
pub trait PersonalTable {
    fn info(&self, species: u16, form: u8) -> Option<&PersonalInfo>;
}

#[derive(Deserialize)]
struct PersonalEntry {
    species: u16,
    #[serde(default)]
    form: u8,
    #[serde(flatten)]
    info: PersonalInfo,
}

/// Personal data keyed by (species, form), loaded from JSON.
///
/// Unknown forms fall back to the species' base form.
#[derive(Debug, Default)]
pub struct PersonalData {
    entries: HashMap<(u16, u8), PersonalInfo>,
}

impl PersonalData {
    /// Parse a JSON array of `{ "species", "form", "type1", ... }` rows.
    pub fn from_json(json: &str) -> Result<Self, DataError> {
        let rows: Vec<PersonalEntry> = serde_json::from_str(json)?;
        let mut entries = HashMap::with_capacity(rows.len());
        for row in rows {
            if entries.insert((row.species, row.form), row.info).is_some() {
                return Err(DataError::Duplicate(format!("species {} form {}", row.species, row.form)));
            }
        }
        Ok(Self { entries })
    }

    pub fn insert(&mut self, species: u16, form: u8, info: PersonalInfo) {
        self.entries.insert((species, form), info);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PersonalTable for PersonalData {
    fn info(&self, species: u16, form: u8) -> Option<&PersonalInfo> {
        self.entries
            .get(&(species, form))
            .or_else(|| self.entries.get(&(species, 0)))
    }
}
