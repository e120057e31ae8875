//! Display-unit selection and numeric formatting for computed masses.

use std::fmt;

use tracing::trace;

use super::{MassUnit, UnitMode};
use crate::util::num_without_zeroes;

/// Masses at or above this many grams display as kilograms in auto mode.
pub const AUTO_KG_THRESHOLD: f64 = 1000.0;
/// Positive masses strictly below this many grams display as milligrams in auto mode.
pub const AUTO_MG_THRESHOLD: f64 = 0.1;

/// A mass scaled into its display unit, rendered as text
#[cfg_attr(feature = "serde-derive", derive(Serialize))]
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct FormattedMass {
    /// Rounded to at most four fractional digits, trailing zeros dropped
    pub value: String,
    pub unit: MassUnit,
}

impl fmt::Display for FormattedMass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit)
    }
}

/// Pick the display unit for `grams` under `mode`.
///
/// A forced kilogram or milligram mode always wins. In auto mode, masses of
/// a kilogram or more go to `kg`, positive masses below `0.1 g` go to `mg`
/// and everything else (including zero and exactly `0.1`) stays in `g`.
pub fn select_unit(grams: f64, mode: UnitMode) -> MassUnit {
    let auto = mode == UnitMode::Auto;
    if mode == UnitMode::Kilogram || (auto && grams >= AUTO_KG_THRESHOLD) {
        MassUnit::Kilogram
    } else if mode == UnitMode::Milligram || (auto && grams < AUTO_MG_THRESHOLD && grams > 0.0)
    {
        MassUnit::Milligram
    } else {
        MassUnit::Gram
    }
}

/// Convert a mass in grams to its display value and unit.
///
/// ```
/// use medium::unit::{format_mass, MassUnit, UnitMode};
///
/// let m = format_mass(2500.0, UnitMode::Auto);
/// assert_eq!(m.value, "2.5");
/// assert_eq!(m.unit, MassUnit::Kilogram);
///
/// let m = format_mass(0.05, UnitMode::Auto);
/// assert_eq!(m.to_string(), "50mg");
/// ```
pub fn format_mass(grams: f64, mode: UnitMode) -> FormattedMass {
    let unit = select_unit(grams, mode);
    let value = num_without_zeroes(unit.scale_grams(grams));
    trace!(grams, %mode, %unit, %value, "formatted mass");
    FormattedMass { value, unit }
}
