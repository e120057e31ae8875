use std::fmt;

use crate::unit::ConcentrationUnit;

#[cfg_attr(feature = "serde-derive", derive(Serialize))]
#[derive(Clone, PartialEq, Debug)]
/// One line of a medium recipe
///
/// Concentrations are per liter of finished solution. Recipe entries are
/// defined at compile time and never mutated, so all text fields borrow
/// `'static` data.
///
/// # Examples
///
/// ```
/// use medium::{recipe::NS_RECIPE, Ingredient};
///
/// let nh4cl: &Ingredient = &NS_RECIPE[2];
/// assert_eq!(nh4cl.id, "ammonium-chloride");
/// assert_eq!(nh4cl.chemical_formula, Some("NH₄Cl"));
/// assert_eq!(nh4cl.grams_for(100.0), 100.0);
/// ```
pub struct Ingredient {
    /// Unique, stable identifier used by the checklist
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    pub chemical_formula: Option<&'static str>,
    /// Amount per liter, in `unit`
    pub concentration: f64,
    #[cfg_attr(feature = "serde-derive", serde(rename = "concentration_unit"))]
    pub unit: ConcentrationUnit,
    pub description: Option<&'static str>,
}

impl Ingredient {
    /// Absolute mass needed for `volume` liters: `concentration × volume`.
    pub fn grams_for(&self, volume: f64) -> f64 {
        self.concentration * volume
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let description = self
            .description
            .map_or_else(String::new, |d| format!(", {d}"));
        write!(
            f,
            "{} {} {}{}",
            self.concentration, self.unit, self.name, description
        )
    }
}
