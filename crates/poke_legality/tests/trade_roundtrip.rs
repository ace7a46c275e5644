//! Generation 9 trades: every generated entity must verify against the
//! trade it came from, and single-field edits must break the match.

mod common;

use common::fixtures::{load_personal, load_remap, load_trade_names, load_trades};
use common::helpers::TestRecord;
use poke_legality::encounters::{
    EncounterMatchRating, EncounterTrade9, Encounterable, EvoCriteria, MatchEnvironment, NoFormChanges,
    RemapTable, SimpleTrainerInfo, Unrestricted,
};
use poke_legality::entity::{EntityRecord, PersonalData, Pk9, RIBBON_INDEX_PARTNER};
use poke_legality::{DataError, EntityContext, GameVersion};
use rand::rngs::StdRng;
use rand::SeedableRng;

struct Fixture {
    trades: Vec<EncounterTrade9>,
    personal: PersonalData,
    remap: RemapTable,
}

impl Fixture {
    fn load() -> Self {
        Self {
            trades: load_trades(),
            personal: load_personal(),
            remap: load_remap(),
        }
    }

    fn env(&self) -> MatchEnvironment<'_> {
        MatchEnvironment {
            personal: &self.personal,
            remap: &self.remap,
            forms: &NoFormChanges,
        }
    }

    fn generate(&self, index: usize, seed: u64) -> Pk9 {
        let mut rng = StdRng::seed_from_u64(seed);
        self.trades[index]
            .generate(&trainer(2), &Unrestricted, &self.personal, &mut rng)
            .expect("trade species has personal data")
    }
}

fn trainer(language: u8) -> SimpleTrainerInfo {
    SimpleTrainerInfo {
        ot_name: "Ash".to_string(),
        game: GameVersion::SL,
        language,
        id32: 0x0102_0304,
        gender: 0,
    }
}

fn edit(f: fn(&mut Pk9)) -> fn(&mut Pk9) {
    f
}

fn evo_for(trade: &EncounterTrade9) -> EvoCriteria {
    EvoCriteria::new(trade.species, trade.form, trade.level, trade.level)
}

/// Copy of a generated entity as seen after moving into another context.
fn transferred(pk: &Pk9, context: EntityContext, format: u8, met_location: u16) -> TestRecord {
    TestRecord {
        species: pk.species,
        form: pk.form,
        level: pk.current_level,
        format,
        context,
        version: pk.version,
        met_location,
        met_level: pk.met_level,
        egg_location: pk.egg_location,
        is_egg: false,
        ball: pk.ball,
        ability_number: pk.ability_number,
        gender: pk.gender,
        nature: pk.nature,
        ivs: pk.ivs,
        id32: pk.id32,
        ot_gender: pk.ot_gender,
        encryption_constant: pk.encryption_constant,
        shiny: pk.is_shiny(),
        scalars: None,
        tera_type: None,
    }
}

// ============================================================================
// Generate then verify
// ============================================================================

#[test]
fn test_generated_entities_match_their_trade() {
    let fixture = Fixture::load();
    let env = fixture.env();
    for (index, trade) in fixture.trades.iter().enumerate() {
        for seed in 0..16 {
            let pk = fixture.generate(index, seed);
            assert!(
                trade.is_match_exact(&pk, &evo_for(trade), &env),
                "trade {} seed {} failed to verify: {:?}",
                index,
                seed,
                pk
            );
            assert_eq!(trade.match_rating(&pk), EncounterMatchRating::Match);
        }
    }
}

#[test]
fn test_generation_is_deterministic_per_seed() {
    let fixture = Fixture::load();
    assert_eq!(fixture.generate(1, 99), fixture.generate(1, 99));
}

#[test]
fn test_generated_fields() {
    let fixture = Fixture::load();
    let pk = fixture.generate(0, 7);

    assert_eq!(pk.species, 25);
    assert_eq!(pk.version, GameVersion::SL);
    assert_eq!(pk.language, 2);
    assert_eq!(pk.met_location, 30001);
    assert_eq!(pk.met_level, 10);
    assert_eq!(pk.ot_name, "Bob");
    assert_eq!(pk.nickname, "Sparky");
    assert!(pk.is_nicknamed);
    assert_eq!(pk.handler_name, "Ash");
    assert_eq!(pk.nature, 13);
    assert_eq!(pk.ability_number, 1);
    assert_eq!(pk.ivs, [20; 6]);
    assert_eq!(pk.tera_type_original, 12);
    assert_eq!(pk.ball, 4);
    assert!(!pk.is_shiny());
    assert!(!pk.ribbon_partner);
}

#[test]
fn test_partner_trade_fields() {
    let fixture = Fixture::load();
    let pk = fixture.generate(1, 3);

    assert!(pk.ribbon_partner);
    assert_eq!(pk.affixed_ribbon, RIBBON_INDEX_PARTNER);
    assert!(!pk.is_nicknamed);
    assert_eq!(pk.nickname, "");
    assert_eq!(pk.ot_name, "Mina");
    assert_eq!(pk.gender, 1);
    assert_eq!(pk.tera_type_original, 5);
    assert_eq!((pk.weight_scalar, pk.scale), (128, 128));
    assert_eq!(pk.ivs[0], 31);
    assert_eq!(pk.ivs[5], 31);
}

#[test]
fn test_evolve_on_trade() {
    let fixture = Fixture::load();
    let trade = &fixture.trades[2];
    let pk = fixture.generate(2, 11);
    assert_eq!(pk.species, 65);
    assert!(pk.weight_scalar >= 240);
    assert!(pk.scale <= 15);
    assert_eq!(pk.ability_number, 2);

    let mut unevolved = pk.clone();
    unevolved.species = 64;
    assert!(!trade.is_match_exact(&unevolved, &evo_for(trade), &fixture.env()));
}

#[test]
fn test_unsupported_language_falls_back_to_english() {
    let fixture = Fixture::load();
    let mut rng = StdRng::seed_from_u64(1);
    let pk = fixture.trades[0]
        .generate(&trainer(6), &Unrestricted, &fixture.personal, &mut rng)
        .unwrap();
    assert_eq!(pk.language, 2);
    assert_eq!(pk.nickname, "Sparky");

    let pk = fixture.trades[0]
        .generate(&trainer(3), &Unrestricted, &fixture.personal, &mut rng)
        .unwrap();
    assert_eq!(pk.nickname, "Étincelle");
}

#[test]
fn test_missing_personal_data() {
    let fixture = Fixture::load();
    let trade = EncounterTrade9::new(&load_trade_names(), 0, GameVersion::SV, 999, 5);
    let mut rng = StdRng::seed_from_u64(1);
    let result = trade.generate(&trainer(2), &Unrestricted, &fixture.personal, &mut rng);
    assert!(matches!(result, Err(DataError::MissingPersonal { species: 999, form: 0 })));
}

// ============================================================================
// Single-field mismatches
// ============================================================================

#[test]
fn test_pinned_field_mismatches() {
    let fixture = Fixture::load();
    let env = fixture.env();
    let trade = &fixture.trades[0];
    let evo = evo_for(trade);
    let pk = fixture.generate(0, 5);
    assert!(trade.is_match_exact(&pk, &evo, &env));

    let edits: Vec<(&str, fn(&mut Pk9))> = vec![
        ("met level", edit(|pk| pk.met_level += 1)),
        ("met location", edit(|pk| pk.met_location = 6)),
        ("trainer id", edit(|pk| pk.id32 ^= 1)),
        ("ot gender", edit(|pk| pk.ot_gender = 1)),
        ("nature", edit(|pk| pk.nature = 0)),
        ("gender", edit(|pk| pk.gender = 1)),
        ("iv", edit(|pk| pk.ivs[2] = 31)),
        ("shiny", edit(|pk| pk.set_shiny_state(true))),
        ("egg location", edit(|pk| pk.egg_location = 60002)),
        ("tera type", edit(|pk| pk.tera_type_original = 0)),
        ("form", edit(|pk| pk.form = 1)),
    ];
    for (name, edit) in edits {
        let mut edited = pk.clone();
        edit(&mut edited);
        let evo = EvoCriteria { form: edited.form, ..evo };
        assert!(!trade.is_match_exact(&edited, &evo, &env), "{} edit still matched", name);
    }
}

#[test]
fn test_unpinned_fields_are_free() {
    let fixture = Fixture::load();
    let env = fixture.env();
    let trade = &fixture.trades[1];
    let evo = evo_for(trade);
    let mut pk = fixture.generate(1, 5);

    // Random nature and unconstrained IVs.
    pk.nature = (pk.nature + 1) % 25;
    pk.ivs[2] = (pk.ivs[2] + 1) % 32;
    assert!(trade.is_match_exact(&pk, &evo, &env));

    pk.scale = 127;
    assert!(!trade.is_match_exact(&pk, &evo, &env));
}

#[test]
fn test_random_tera_accepts_any_type() {
    let fixture = Fixture::load();
    let env = fixture.env();
    let trade = &fixture.trades[2];
    let mut pk = fixture.generate(2, 8);
    for tera in 0..18 {
        pk.tera_type_original = tera;
        assert!(trade.is_match_exact(&pk, &evo_for(trade), &env));
    }
}

// ============================================================================
// Transfers
// ============================================================================

#[test]
fn test_remapped_transfer_to_swsh() {
    let fixture = Fixture::load();
    let env = fixture.env();
    let trade = &fixture.trades[0];
    let pk = fixture.generate(0, 21);

    let moved = transferred(&pk, EntityContext::Gen8, 8, 6);
    assert!(trade.is_match_exact(&moved, &evo_for(trade), &env));

    // Remapped locations only: the untouched trade location no longer fits
    // once it is not a valid SV met location.
    let invalid = transferred(&pk, EntityContext::Gen8, 8, 999);
    assert!(!trade.is_match_exact(&invalid, &evo_for(trade), &env));

    let mut with_egg = transferred(&pk, EntityContext::Gen8, 8, 6);
    with_egg.egg_location = 60002;
    assert!(!trade.is_match_exact(&with_egg, &evo_for(trade), &env));
}

#[test]
fn test_either_transfer_to_bdsp() {
    let fixture = Fixture::load();
    let env = fixture.env();
    let trade = &fixture.trades[0];
    let pk = fixture.generate(0, 21);

    let kept = transferred(&pk, EntityContext::Gen8b, 8, 30001);
    assert!(trade.is_match_exact(&kept, &evo_for(trade), &env));
    let rewritten = transferred(&pk, EntityContext::Gen8b, 8, 30024);
    assert!(trade.is_match_exact(&rewritten, &evo_for(trade), &env));
    let other = transferred(&pk, EntityContext::Gen8b, 8, 6);
    assert!(!trade.is_match_exact(&other, &evo_for(trade), &env));
}

#[test]
fn test_no_pathway_never_matches() {
    let fixture = Fixture::load();
    let env = fixture.env();
    let trade = &fixture.trades[0];
    let pk = fixture.generate(0, 21);

    let moved = transferred(&pk, EntityContext::Gen8a, 8, 30001);
    assert!(!trade.is_match_exact(&moved, &evo_for(trade), &env));
}

#[test]
fn test_trade_describes_itself() {
    let fixture = Fixture::load();
    let trade = &fixture.trades[0];
    assert_eq!(trade.name(), "In-game Trade");
    assert_eq!(Encounterable::location(trade), 30001);
    assert_eq!(trade.context(), EntityContext::Gen9);
    assert_eq!(trade.generation(), Some(9));
    assert!(!trade.is_egg_encounter());
    assert!(trade.is_trainer_match("Bob", 2));
    assert!(trade.is_nickname_match("Sparky", 2));
}
