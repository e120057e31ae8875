//! Recipe × volume → display amounts.

use std::fmt;

use tracing::debug;

use crate::unit::{format_mass, FormattedMass, MassUnit, UnitMode};
use crate::Ingredient;

/// One recipe entry with the amount to weigh out for the current batch
#[cfg_attr(feature = "serde-derive", derive(Serialize))]
#[derive(Clone, PartialEq, Debug)]
pub struct FormattedResult<'a> {
    #[cfg_attr(feature = "serde-derive", serde(flatten))]
    pub ingredient: &'a Ingredient,
    /// Unrounded `concentration × volume`
    pub grams: f64,
    #[cfg_attr(feature = "serde-derive", serde(flatten))]
    pub amount: FormattedMass,
}

impl FormattedResult<'_> {
    pub fn id(&self) -> &str {
        self.ingredient.id
    }
    pub fn name(&self) -> &str {
        self.ingredient.name
    }
    pub fn value(&self) -> &str {
        &self.amount.value
    }
    pub fn unit(&self) -> MassUnit {
        self.amount.unit
    }
}

impl fmt::Display for FormattedResult<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.ingredient.name, self.amount)
    }
}

/// Compute the display amount of every recipe entry for `volume` liters.
///
/// Output has the same length and order as `recipe`. The recipe is only
/// borrowed; nothing is cached between calls.
///
/// ```
/// use medium::{project, recipe::NS_RECIPE, unit::UnitMode};
///
/// let results = project(&NS_RECIPE, 100.0, UnitMode::Auto);
/// assert_eq!(results.len(), NS_RECIPE.len());
/// assert_eq!(results[2].to_string(), "氯化铵 (NH₄Cl): 100g");
/// ```
#[tracing::instrument(level = "debug", skip(recipe), fields(len = recipe.len()))]
pub fn project(recipe: &[Ingredient], volume: f64, mode: UnitMode) -> Vec<FormattedResult<'_>> {
    let results: Vec<FormattedResult<'_>> = recipe
        .iter()
        .map(|ingredient| {
            let grams = ingredient.grams_for(volume);
            FormattedResult {
                ingredient,
                grams,
                amount: format_mass(grams, mode),
            }
        })
        .collect();
    debug!("projected {} ingredients", results.len());
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::NS_RECIPE;

    #[test]
    fn test_project_default_batch() {
        let results = project(&NS_RECIPE, 100.0, UnitMode::Auto);
        let rendered: Vec<String> = results
            .iter()
            .map(|r| format!("{}{}", r.value(), r.unit()))
            .collect();
        assert_eq!(
            rendered,
            vec!["50g", "500g", "100g", "100g", "50g", "20g", "2g", "1g", "0.2g", "0.1g"]
        );
    }

    #[test]
    fn test_project_keeps_identity() {
        let results = project(&NS_RECIPE, 10.0, UnitMode::Gram);
        for (result, ingredient) in results.iter().zip(NS_RECIPE.iter()) {
            assert_eq!(result.id(), ingredient.id);
            assert_eq!(result.name(), ingredient.name);
            assert_eq!(result.grams, ingredient.concentration * 10.0);
        }
    }

    #[test]
    fn test_project_empty_recipe() {
        assert!(project(&[], 100.0, UnitMode::Auto).is_empty());
    }
}
