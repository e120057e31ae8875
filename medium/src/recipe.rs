//! The fixed NS culture medium recipe.

use crate::unit::ConcentrationUnit::GramsPerLiter;
use crate::Ingredient;

/// Batch volume in liters used before the caller picks one.
pub const DEFAULT_VOLUME: f64 = 100.0;

/// Quick-select batch volumes, in liters.
pub const PRESET_VOLUMES: [f64; 6] = [10.0, 100.0, 500.0, 1000.0, 2000.0, 5000.0];

/// NS medium, in display order. Order is also the purchase-list order.
pub static NS_RECIPE: [Ingredient; 10] = [
    Ingredient {
        id: "yeast-extract",
        name: "酵母膏 (Yeast extract)",
        chemical_formula: None,
        concentration: 0.5,
        unit: GramsPerLiter,
        description: Some("有机营养来源"),
    },
    Ingredient {
        id: "sodium-malate-succinate",
        name: "苹果酸钠 / 丁二酸钠",
        chemical_formula: None,
        concentration: 5.0,
        unit: GramsPerLiter,
        description: Some("主要碳源"),
    },
    Ingredient {
        id: "ammonium-chloride",
        name: "氯化铵 (NH₄Cl)",
        chemical_formula: Some("NH₄Cl"),
        concentration: 1.0,
        unit: GramsPerLiter,
        description: Some("无机氮源"),
    },
    Ingredient {
        id: "potassium-phosphate",
        name: "磷酸氢二钾 (K₂HPO₄)",
        chemical_formula: Some("K₂HPO₄"),
        concentration: 1.0,
        unit: GramsPerLiter,
        description: Some("缓冲剂及磷源"),
    },
    Ingredient {
        id: "sodium-chloride",
        name: "氯化钠 (NaCl)",
        chemical_formula: Some("NaCl"),
        concentration: 0.5,
        unit: GramsPerLiter,
        description: None,
    },
    Ingredient {
        id: "magnesium-sulfate",
        name: "七水硫酸镁 (MgSO₄·7H₂O)",
        chemical_formula: Some("MgSO₄·7H₂O"),
        concentration: 0.2,
        unit: GramsPerLiter,
        description: None,
    },
    Ingredient {
        id: "calcium-chloride",
        name: "氯化钙 (CaCl₂)",
        chemical_formula: Some("CaCl₂"),
        concentration: 0.02,
        unit: GramsPerLiter,
        description: None,
    },
    Ingredient {
        id: "ferrous-sulfate",
        name: "七水硫酸亚铁 (FeSO₄·7H₂O)",
        chemical_formula: Some("FeSO₄·7H₂O"),
        concentration: 0.01,
        unit: GramsPerLiter,
        description: None,
    },
    Ingredient {
        id: "manganese-chloride",
        name: "四水氯化锰 (MnCl₂·4H₂O)",
        chemical_formula: Some("MnCl₂·4H₂O"),
        concentration: 0.002,
        unit: GramsPerLiter,
        description: None,
    },
    Ingredient {
        id: "sodium-molybdate",
        name: "二水钼酸钠 (NaMoO₄·2H₂O)",
        chemical_formula: Some("NaMoO₄·2H₂O"),
        concentration: 0.001,
        unit: GramsPerLiter,
        description: None,
    },
];

/// Look up a recipe entry by id.
pub fn find<'a>(recipe: &'a [Ingredient], id: &str) -> Option<&'a Ingredient> {
    recipe.iter().find(|i| i.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique() {
        let ids: HashSet<_> = NS_RECIPE.iter().map(|i| i.id).collect();
        assert_eq!(ids.len(), NS_RECIPE.len());
    }

    #[test]
    fn test_concentrations_are_non_negative() {
        assert!(NS_RECIPE.iter().all(|i| i.concentration >= 0.0));
    }

    #[test]
    fn test_find() {
        assert_eq!(
            find(&NS_RECIPE, "sodium-chloride").map(|i| i.concentration),
            Some(0.5)
        );
        assert!(find(&NS_RECIPE, "agar").is_none());
    }

    #[test]
    fn test_presets_include_default() {
        assert!(PRESET_VOLUMES.contains(&DEFAULT_VOLUME));
    }
}
