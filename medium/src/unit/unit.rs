use std::fmt;

/// Milligrams in one gram
pub const MG_PER_G: f64 = 1000.0;
/// Grams in one kilogram
pub const G_PER_KG: f64 = 1000.0;

/// Display unit for an absolute mass
#[cfg_attr(feature = "serde-derive", derive(Serialize))]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum MassUnit {
    #[cfg_attr(feature = "serde-derive", serde(rename = "mg"))]
    Milligram,
    #[cfg_attr(feature = "serde-derive", serde(rename = "g"))]
    Gram,
    #[cfg_attr(feature = "serde-derive", serde(rename = "kg"))]
    Kilogram,
}

impl MassUnit {
    pub fn to_str(&self) -> &'static str {
        match self {
            MassUnit::Milligram => "mg",
            MassUnit::Gram => "g",
            MassUnit::Kilogram => "kg",
        }
    }

    /// Express a mass given in grams in this unit.
    pub fn scale_grams(&self, grams: f64) -> f64 {
        match self {
            MassUnit::Milligram => grams * MG_PER_G,
            MassUnit::Gram => grams,
            MassUnit::Kilogram => grams / G_PER_KG,
        }
    }
}

impl fmt::Display for MassUnit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

/// Unit a recipe concentration is declared in
#[cfg_attr(feature = "serde-derive", derive(Serialize))]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum ConcentrationUnit {
    #[default]
    #[cfg_attr(feature = "serde-derive", serde(rename = "g/L"))]
    GramsPerLiter,
    #[cfg_attr(feature = "serde-derive", serde(rename = "mL/L"))]
    MillilitersPerLiter,
}

impl ConcentrationUnit {
    pub fn to_str(&self) -> &'static str {
        match self {
            ConcentrationUnit::GramsPerLiter => "g/L",
            ConcentrationUnit::MillilitersPerLiter => "mL/L",
        }
    }
}

impl fmt::Display for ConcentrationUnit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.to_str())
    }
}
