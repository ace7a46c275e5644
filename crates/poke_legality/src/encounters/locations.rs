//! Location IDs with special meaning to encounter matching.

/// Hoenn Safari Zone (generation 3).
pub const SAFARI_ZONE_3: u16 = 57;
/// Great Marsh (D/P/Pt).
pub const GREAT_MARSH_4: u16 = 52;
/// Johto Safari Zone (HG/SS).
pub const SAFARI_ZONE_4: u16 = 202;
/// National Park during the Bug-Catching Contest (HG/SS).
pub const BUG_CATCHING_CONTEST_4: u16 = 207;

/// Met location written for in-game trades from generation 6 on.
pub const LINK_TRADE_6_NPC: u16 = 30001;

pub fn is_safari_zone_location_3(location: u16) -> bool {
    location == SAFARI_ZONE_3
}

pub fn is_safari_zone_location_4(location: u16) -> bool {
    matches!(location, GREAT_MARSH_4 | SAFARI_ZONE_4)
}
