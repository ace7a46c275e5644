//! Size scalar templates (generation 9).

use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

/// Size class a template pins a scalar to.
#[allow(clippy::upper_case_acronyms)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SizeType9 {
    #[default]
    Random,
    XS,
    S,
    AV,
    L,
    XL,
    /// One exact value.
    Value,
}

impl SizeType9 {
    /// Inclusive scalar bounds of a size class; `None` for `Random` and
    /// `Value`.
    pub fn range(self) -> Option<(u8, u8)> {
        match self {
            SizeType9::XS => Some((0, 15)),
            SizeType9::S => Some((16, 47)),
            SizeType9::AV => Some((48, 207)),
            SizeType9::L => Some((208, 239)),
            SizeType9::XL => Some((240, 255)),
            SizeType9::Random | SizeType9::Value => None,
        }
    }

    pub fn is_within_range(self, value: u8) -> bool {
        match self.range() {
            Some((min, max)) => min <= value && value <= max,
            None => true,
        }
    }

    /// Draw a scalar for this class. `Value` returns `value` unchanged.
    pub fn size_value(self, value: u8, rng: &mut dyn RngCore) -> u8 {
        match self {
            SizeType9::Random => random_scalar(rng),
            SizeType9::Value => value,
            class => match class.range() {
                Some((min, max)) => rng.gen_range(min..=max),
                None => value,
            },
        }
    }
}

/// Scalar following the in-game distribution: the sum of two uniform
/// draws, peaking in the middle.
pub fn random_scalar(rng: &mut dyn RngCore) -> u8 {
    rng.gen_range(0..=0x80u8) + rng.gen_range(0..0x80u8)
}
