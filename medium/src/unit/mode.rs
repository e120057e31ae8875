use std::{fmt, str::FromStr};

use super::MassUnit;
use crate::{MediumError, MediumResult};

/// How the display unit of a computed mass is chosen
#[cfg_attr(feature = "serde-derive", derive(Serialize))]
#[cfg_attr(feature = "serde-derive", serde(rename_all = "lowercase"))]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum UnitMode {
    /// Pick the unit from the magnitude of the mass
    #[default]
    Auto,
    #[cfg_attr(feature = "serde-derive", serde(rename = "g"))]
    Gram,
    #[cfg_attr(feature = "serde-derive", serde(rename = "mg"))]
    Milligram,
    #[cfg_attr(feature = "serde-derive", serde(rename = "kg"))]
    Kilogram,
}

impl UnitMode {
    pub const ALL: [UnitMode; 4] = [
        UnitMode::Auto,
        UnitMode::Gram,
        UnitMode::Milligram,
        UnitMode::Kilogram,
    ];

    /// The unit this mode forces, or `None` for [`UnitMode::Auto`].
    pub fn forced_unit(&self) -> Option<MassUnit> {
        match self {
            UnitMode::Auto => None,
            UnitMode::Gram => Some(MassUnit::Gram),
            UnitMode::Milligram => Some(MassUnit::Milligram),
            UnitMode::Kilogram => Some(MassUnit::Kilogram),
        }
    }

    pub fn to_str(&self) -> &'static str {
        for (s, mode) in UNIT_MODE_MAPPINGS {
            if self == mode {
                return s;
            }
        }
        "auto"
    }
}

impl fmt::Display for UnitMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

static UNIT_MODE_MAPPINGS: &[(&str, UnitMode)] = &[
    ("auto", UnitMode::Auto),
    ("g", UnitMode::Gram),
    ("mg", UnitMode::Milligram),
    ("kg", UnitMode::Kilogram),
];

impl FromStr for UnitMode {
    type Err = MediumError;

    fn from_str(s: &str) -> MediumResult<Self> {
        let s_norm = s.trim().to_lowercase();
        for (str_repr, mode) in UNIT_MODE_MAPPINGS {
            if s_norm == *str_repr {
                return Ok(*mode);
            }
        }
        Err(MediumError::UnknownUnitMode {
            input: s.to_string(),
        })
    }
}
