//! Generation 9 in-game trades.
//!
//! A trade is a fixed template: most fields are pinned, the rest are
//! filled by [`EncounterCriteria`] at generation time. Verification is the
//! inverse: an entity matches when every pinned field agrees, allowing for
//! location rewrites the entity may have picked up moving between
//! contexts.

use rand::{Rng, RngCore};
use serde::Deserialize;
use tracing::debug;

use crate::context::EntityContext;
use crate::entity::{
    AbilityPermission, Ball, EntityRecord, IndividualValueSet, LanguageId, Nature, PersonalTable,
    Pk9, Shiny, RIBBON_INDEX_PARTNER,
};
use crate::error::DataError;
use crate::version::GameVersion;

use super::criteria::{EncounterCriteria, FormChangeRules, TrainerInfo};
use super::evolution::EvoCriteria;
use super::locations::LINK_TRADE_6_NPC;
use super::remap::LocationRemapper;
use super::size::{random_scalar, SizeType9};
use super::slot::{EncounterMatchRating, Encounterable};
use super::tera::GemType;

/// Scalar written for [`SizeType9::Value`] templates.
pub const FIXED_VALUE_SCALE: u8 = 128;

const TRADE_GENERATION: u8 = 9;

/// Reference data an exact match consults.
#[derive(Clone, Copy)]
pub struct MatchEnvironment<'a> {
    pub personal: &'a dyn PersonalTable,
    pub remap: &'a dyn LocationRemapper,
    pub forms: &'a dyn FormChangeRules,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncounterTrade9 {
    pub version: GameVersion,
    pub species: u16,
    pub form: u8,
    pub level: u8,
    pub nature: Nature,
    pub id32: u32,
    pub ability: AbilityPermission,
    /// 0 male, 1 female, 2 genderless.
    pub gender: u8,
    pub ot_gender: u8,
    pub ivs: IndividualValueSet,
    pub tera_type: GemType,
    pub shiny: Shiny,
    pub fixed_ball: Ball,
    pub evolve_on_trade: bool,
    pub weight: SizeType9,
    pub scale: SizeType9,

    ribbon_partner: bool,
    trainer_names: Vec<String>,
    /// Empty for partner trades. Those keep the species name, which is
    /// asset data this crate does not carry, so the generated nickname is
    /// left empty.
    nicknames: Vec<String>,
}

/// The string at `index` of every language's list; missing entries are
/// empty.
pub fn names_for_language(names: &[Vec<String>], index: usize) -> Vec<String> {
    names
        .iter()
        .map(|list| list.get(index).cloned().unwrap_or_default())
        .collect()
}

impl EncounterTrade9 {
    /// Build from the per-language trade name table. `names[lang]` lists
    /// that language's nicknames followed by trainer names; the Japanese
    /// list (language 1) fixes where trainer names start. Trades 2 through
    /// 31 are partner trades and keep the species name.
    pub fn new(names: &[Vec<String>], index: u8, version: GameVersion, species: u16, level: u8) -> Self {
        let ribbon_partner = (2..=31).contains(&index);
        let nicknames = if ribbon_partner {
            Vec::new()
        } else {
            names_for_language(names, index as usize)
        };
        let half = names.get(LanguageId::Japanese as usize).map_or(0, |list| list.len() >> 1);
        let trainer_names = names_for_language(names, index as usize + half);

        Self {
            version,
            species,
            form: 0,
            level,
            nature: Nature::Random,
            id32: 0,
            ability: AbilityPermission::Any12,
            gender: 0,
            ot_gender: 0,
            ivs: IndividualValueSet::default(),
            tera_type: GemType::Default,
            shiny: Shiny::Never,
            fixed_ball: Ball::Poke,
            evolve_on_trade: false,
            weight: SizeType9::Random,
            scale: SizeType9::Random,
            ribbon_partner,
            trainer_names,
            nicknames,
        }
    }

    pub fn with_form(mut self, form: u8) -> Self {
        self.form = form;
        self
    }

    pub fn nature(mut self, nature: Nature) -> Self {
        self.nature = nature;
        self
    }

    pub fn id32(mut self, id32: u32) -> Self {
        self.id32 = id32;
        self
    }

    pub fn ability(mut self, ability: AbilityPermission) -> Self {
        self.ability = ability;
        self
    }

    pub fn gender(mut self, gender: u8) -> Self {
        self.gender = gender;
        self
    }

    pub fn ot_gender(mut self, ot_gender: u8) -> Self {
        self.ot_gender = ot_gender;
        self
    }

    pub fn ivs(mut self, ivs: IndividualValueSet) -> Self {
        self.ivs = ivs;
        self
    }

    pub fn tera_type(mut self, tera_type: GemType) -> Self {
        self.tera_type = tera_type;
        self
    }

    pub fn shiny(mut self, shiny: Shiny) -> Self {
        self.shiny = shiny;
        self
    }

    pub fn ball(mut self, ball: Ball) -> Self {
        self.fixed_ball = ball;
        self
    }

    pub fn evolve_on_trade(mut self, evolve: bool) -> Self {
        self.evolve_on_trade = evolve;
        self
    }

    pub fn sizes(mut self, weight: SizeType9, scale: SizeType9) -> Self {
        self.weight = weight;
        self.scale = scale;
        self
    }

    pub fn is_ribbon_partner(&self) -> bool {
        self.ribbon_partner
    }

    pub fn is_fixed_nickname(&self) -> bool {
        !self.nicknames.is_empty()
    }

    pub fn trainer_name(&self, language: u8) -> Option<&str> {
        self.trainer_names.get(language as usize).map(String::as_str)
    }

    /// Nickname for `language`, falling back to the first list entry.
    pub fn nickname(&self, language: u8) -> &str {
        self.nicknames
            .get(language as usize)
            .or_else(|| self.nicknames.first())
            .map_or("", String::as_str)
    }

    pub fn is_trainer_match(&self, trainer: &str, language: u8) -> bool {
        self.trainer_name(language) == Some(trainer)
    }

    pub fn is_nickname_match(&self, nickname: &str, language: u8) -> bool {
        self.nicknames.get(language as usize).map(String::as_str) == Some(nickname)
    }

    // ========================================================================
    // Generation
    // ========================================================================

    /// Create the entity a trainer receives from this trade.
    pub fn generate(
        &self,
        trainer: &impl TrainerInfo,
        criteria: &impl EncounterCriteria,
        personal: &dyn PersonalTable,
        rng: &mut dyn RngCore,
    ) -> Result<Pk9, DataError> {
        let info = personal
            .info(self.species, self.form)
            .copied()
            .ok_or(DataError::MissingPersonal {
                species: self.species,
                form: self.form,
            })?;
        let version = self.version.compatible_version(trainer.game());
        let language = LanguageId::safe_language(TRADE_GENERATION, trainer.language()) as u8;

        let weight_value = if self.weight != SizeType9::Random { FIXED_VALUE_SCALE } else { 0 };
        let scale_value = if self.scale != SizeType9::Random { FIXED_VALUE_SCALE } else { 0 };

        let mut pk = Pk9 {
            species: self.species,
            form: self.form,
            current_level: self.level,
            version,
            language,
            met_location: LINK_TRADE_6_NPC,
            met_level: self.level,
            gender: self.gender,
            nature: self.nature as u8,
            stat_nature: self.nature as u8,
            ball: self.fixed_ball as u8,

            id32: self.id32,
            ot_gender: self.ot_gender,
            ot_name: self.trainer_name(language).unwrap_or_default().to_string(),
            ot_friendship: info.base_friendship,

            is_nicknamed: self.is_fixed_nickname(),
            nickname: self.nickname(language).to_string(),

            height_scalar: random_scalar(rng),
            weight_scalar: self.weight.size_value(weight_value, rng),
            scale: self.scale.size_value(scale_value, rng),
            tera_type_original: self.tera_type.original_type(self.species, self.form, personal, rng),

            handler_name: trainer.ot_name().to_string(),
            handler_language: trainer.language(),
            current_handler: 1,
            handler_friendship: info.base_friendship,
            obedience_level: self.level,
            ..Pk9::default()
        };

        pk.pid = rng.gen();
        pk.encryption_constant = rng.gen();
        let nature = criteria.nature(self.nature, rng) as u8;
        pk.nature = nature;
        pk.stat_nature = nature;
        pk.gender = criteria.gender(self.gender, &info, rng);
        pk.ability_number = criteria.ability_from_number(self.ability, rng);
        criteria.set_random_ivs(&mut pk, &self.ivs, rng);

        match self.shiny {
            Shiny::Never => pk.set_shiny_state(false),
            Shiny::Always => pk.set_shiny_state(true),
            Shiny::Random => {}
        }

        if self.evolve_on_trade {
            pk.species += 1;
        }
        if self.ribbon_partner {
            pk.ribbon_partner = true;
            pk.affixed_ribbon = RIBBON_INDEX_PARTNER;
        }

        debug!(
            target: "poke_legality::encounters",
            species = pk.species,
            ?version,
            language,
            "generated trade entity"
        );
        Ok(pk)
    }

    // ========================================================================
    // Matching
    // ========================================================================

    /// Whether the entity is exactly this trade, given the ancestry entry
    /// that matched its species.
    pub fn is_match_exact(
        &self,
        record: &(impl EntityRecord + ?Sized),
        evo: &EvoCriteria,
        env: &MatchEnvironment<'_>,
    ) -> bool {
        if record.met_level() != self.level {
            return false;
        }
        if self.tera_type != GemType::Random {
            if let Some(original) = record.tera_type_original() {
                if !self.tera_type.is_match(self.species, self.form, original, env.personal) {
                    return false;
                }
            }
        }
        if !self.is_match_location(record, env.remap) {
            return false;
        }
        if !self.ivs.matches(&record.ivs()) {
            return false;
        }
        if !self.is_match_nature_gender_shiny(record) {
            return false;
        }
        if record.id32() != self.id32 {
            return false;
        }
        if evo.form != self.form
            && !env.forms.is_form_changeable(
                self.species,
                self.form,
                record.form(),
                EntityContext::Gen9,
                record.context(),
            )
        {
            return false;
        }
        if record.ot_gender() != self.ot_gender {
            return false;
        }
        if !self.is_match_egg_location(record, env.remap) {
            return false;
        }
        if self.evolve_on_trade && record.species() == self.species {
            return false;
        }
        if let Some(scalars) = record.size_scalars() {
            if let Some(scale) = scalars.scale {
                if !verify_scalar(self.scale, scale) {
                    return false;
                }
            }
            if !verify_scalar(self.weight, scalars.weight) {
                return false;
            }
        }
        true
    }

    pub fn match_rating(&self, _record: &(impl EntityRecord + ?Sized)) -> EncounterMatchRating {
        EncounterMatchRating::Match
    }

    fn is_match_nature_gender_shiny(&self, record: &(impl EntityRecord + ?Sized)) -> bool {
        if !self.shiny.is_valid(record) {
            return false;
        }
        if record.gender() != self.gender {
            return false;
        }
        !(self.nature.is_fixed() && record.nature() != self.nature as u8)
    }

    fn is_match_location(&self, record: &(impl EntityRecord + ?Sized), remap: &dyn LocationRemapper) -> bool {
        let state = remap.remap_state(EntityContext::Gen9, record.context());
        state.check(
            || record.met_location() == LINK_TRADE_6_NPC,
            || {
                let met = record.met_location();
                let version = record.version();
                if record.context() == EntityContext::Gen8 {
                    remap.is_valid_met_sv(met, version)
                } else {
                    remap.met_swsh(LINK_TRADE_6_NPC, version) == Some(met)
                }
            },
        )
    }

    /// Egg locations remap independently of met locations; a rewritten
    /// egg location is always cleared.
    fn is_match_egg_location(&self, record: &(impl EntityRecord + ?Sized), remap: &dyn LocationRemapper) -> bool {
        let state = remap.remap_state(EntityContext::Gen9, record.context());
        state.check(
            || record.egg_location() == Encounterable::egg_location(self),
            || record.egg_location() == 0,
        )
    }
}

fn verify_scalar(size: SizeType9, value: u8) -> bool {
    if size == SizeType9::Value {
        return value == FIXED_VALUE_SCALE;
    }
    size.is_within_range(value)
}

impl Encounterable for EncounterTrade9 {
    fn species(&self) -> u16 {
        self.species
    }

    fn form(&self) -> u8 {
        self.form
    }

    fn level_min(&self) -> u8 {
        self.level
    }

    fn level_max(&self) -> u8 {
        self.level
    }

    fn location(&self) -> u16 {
        LINK_TRADE_6_NPC
    }

    fn egg_location(&self) -> u16 {
        0
    }

    fn version(&self) -> GameVersion {
        self.version
    }

    fn context(&self) -> EntityContext {
        EntityContext::Gen9
    }

    fn name(&self) -> &'static str {
        "In-game Trade"
    }
}

// ============================================================================
// Reference data
// ============================================================================

/// Trade row as stored in reference data.
#[derive(Clone, Debug, Deserialize)]
pub struct Trade9Definition {
    pub index: u8,
    pub version: GameVersion,
    pub species: u16,
    pub level: u8,
    #[serde(default)]
    pub form: u8,
    pub nature: Nature,
    pub id32: u32,
    pub ability: AbilityPermission,
    #[serde(default)]
    pub gender: u8,
    pub ot_gender: u8,
    pub ivs: IndividualValueSet,
    pub tera_type: GemType,
    #[serde(default)]
    pub shiny: Shiny,
    #[serde(default = "default_ball")]
    pub ball: Ball,
    #[serde(default)]
    pub evolve_on_trade: bool,
    #[serde(default)]
    pub weight: SizeType9,
    #[serde(default)]
    pub scale: SizeType9,
}

fn default_ball() -> Ball {
    Ball::Poke
}

impl EncounterTrade9 {
    pub fn from_definition(definition: &Trade9Definition, names: &[Vec<String>]) -> Self {
        EncounterTrade9::new(
            names,
            definition.index,
            definition.version,
            definition.species,
            definition.level,
        )
        .with_form(definition.form)
        .nature(definition.nature)
        .id32(definition.id32)
        .ability(definition.ability)
        .gender(definition.gender)
        .ot_gender(definition.ot_gender)
        .ivs(definition.ivs)
        .tera_type(definition.tera_type)
        .shiny(definition.shiny)
        .ball(definition.ball)
        .evolve_on_trade(definition.evolve_on_trade)
        .sizes(definition.weight, definition.scale)
    }

    /// Parse a JSON array of trade rows against the name table.
    pub fn load_json(json: &str, names: &[Vec<String>]) -> Result<Vec<Self>, DataError> {
        let definitions: Vec<Trade9Definition> = serde_json::from_str(json)?;
        let trades: Vec<Self> = definitions
            .iter()
            .map(|definition| Self::from_definition(definition, names))
            .collect();
        debug!(target: "poke_legality::encounters", trades = trades.len(), "loaded gen9 trades");
        Ok(trades)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names() -> Vec<Vec<String>> {
        let list = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        vec![
            Vec::new(),
            list(&["ニック0", "ニック1", "ニック2", "ニック32", "トレーナー0", "トレーナー1", "トレーナー2", "トレーナー32"]),
            list(&["Nick0", "Nick1", "Nick2", "Nick32", "Trainer0", "Trainer1", "Trainer2", "Trainer32"]),
        ]
    }

    #[test]
    fn test_name_table_layout() {
        let trade = EncounterTrade9::new(&names(), 1, GameVersion::SV, 25, 10);
        assert!(!trade.is_ribbon_partner());
        assert!(trade.is_fixed_nickname());
        assert_eq!(trade.nickname(2), "Nick1");
        assert_eq!(trade.trainer_name(2), Some("Trainer1"));
        assert_eq!(trade.trainer_name(1), Some("トレーナー1"));
        assert_eq!(trade.nickname(0), "");
        assert!(trade.is_trainer_match("Trainer1", 2));
        assert!(!trade.is_trainer_match("Trainer1", 1));
        assert!(!trade.is_nickname_match("Nick1", 7));
    }

    #[test]
    fn test_partner_trade_has_no_nickname() {
        let trade = EncounterTrade9::new(&names(), 2, GameVersion::SV, 25, 10);
        assert!(trade.is_ribbon_partner());
        assert!(!trade.is_fixed_nickname());
        assert_eq!(trade.nickname(2), "");
        assert_eq!(trade.trainer_name(2), Some("Trainer2"));
    }

    #[test]
    fn test_nickname_falls_back_to_first_language() {
        let trade = EncounterTrade9::new(&names(), 0, GameVersion::SV, 25, 10);
        assert_eq!(trade.nickname(9), "");
        assert_eq!(trade.nickname(2), "Nick0");
    }

    #[test]
    fn test_verify_scalar() {
        assert!(verify_scalar(SizeType9::Value, FIXED_VALUE_SCALE));
        assert!(!verify_scalar(SizeType9::Value, 127));
        assert!(verify_scalar(SizeType9::XL, 250));
        assert!(!verify_scalar(SizeType9::XS, 16));
        assert!(verify_scalar(SizeType9::Random, 16));
    }
}
