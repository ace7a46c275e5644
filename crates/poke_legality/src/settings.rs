//! Caller-supplied parse configuration.

use serde::{Deserialize, Serialize};

use crate::error::DataError;

/// Toggles that change which encounter tables are considered.
///
/// Build with the chained setters, or load from JSON:
///
/// ```
/// use poke_legality::ParseSettings;
///
/// let settings = ParseSettings::default().allow_gen2_crystal(false);
/// assert!(!settings.gen2_crystal());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseSettings {
    /// Whether Crystal encounters are considered for generation 2
    /// origins. Off restricts them to Gold/Silver.
    pub allow_gen2_crystal: bool,
    /// Whether entities may have been traded back from generation 2 to
    /// generation 1 (losing their Crystal met data).
    pub allow_gen1_tradeback: bool,
}

impl Default for ParseSettings {
    fn default() -> Self {
        Self {
            allow_gen2_crystal: true,
            allow_gen1_tradeback: true,
        }
    }
}

impl ParseSettings {
    pub fn from_json(json: &str) -> Result<Self, DataError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn allow_gen2_crystal(mut self, allow: bool) -> Self {
        self.allow_gen2_crystal = allow;
        self
    }

    pub fn allow_gen1_tradeback(mut self, allow: bool) -> Self {
        self.allow_gen1_tradeback = allow;
        self
    }

    pub fn gen2_crystal(&self) -> bool {
        self.allow_gen2_crystal
    }

    pub fn gen1_tradeback(&self) -> bool {
        self.allow_gen1_tradeback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = ParseSettings::from_json(r#"{ "allow_gen2_crystal": false }"#).unwrap();
        assert!(!settings.gen2_crystal());
        assert!(settings.gen1_tradeback());
    }

    #[test]
    fn test_builder() {
        let settings = ParseSettings::default().allow_gen1_tradeback(false);
        assert_eq!(
            settings,
            ParseSettings {
                allow_gen2_crystal: true,
                allow_gen1_tradeback: false,
            }
        );
    }

    #[test]
    fn test_bad_json() {
        assert!(matches!(ParseSettings::from_json("{"), Err(DataError::Json(_))));
    }
}
