//! Wurmple's evolution split.
//!
//! Wurmple evolves into Silcoon or Cascoon depending on its encryption
//! constant, so an evolved entity's constant must agree with its line.

use crate::entity::EntityRecord;

pub const WURMPLE: u16 = 265;
pub const SILCOON: u16 = 266;
pub const BEAUTIFLY: u16 = 267;
pub const CASCOON: u16 = 268;
pub const DUSTOX: u16 = 269;

/// Evolution line a Wurmple with this encryption constant takes:
/// 0 for Silcoon, 1 for Cascoon.
pub fn wurmple_evo_value(encryption_constant: u32) -> u32 {
    ((encryption_constant >> 16) % 10) / 5
}

/// Evolution line value a species belongs to, if it is past Wurmple.
pub fn wurmple_evo_group(species: u16) -> Option<u32> {
    match species {
        SILCOON | BEAUTIFLY => Some(0),
        CASCOON | DUSTOX => Some(1),
        _ => None,
    }
}

/// Whether the entity's evolution agrees with its encryption constant.
/// Species outside the split are always consistent.
pub fn is_wurmple_evo_valid(record: &(impl EntityRecord + ?Sized)) -> bool {
    match wurmple_evo_group(record.species()) {
        Some(group) => wurmple_evo_value(record.encryption_constant()) == group,
        None => true,
    }
}
