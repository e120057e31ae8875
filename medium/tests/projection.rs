//! Tests for projecting the NS recipe onto batch volumes, the workbench and
//! the purchase list export

#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use medium::recipe::{NS_RECIPE, PRESET_VOLUMES};
use medium::unit::{MassUnit, UnitMode};
use medium::{project, purchase_list, Checklist, MediumError, Volume, Workbench};
use rstest::rstest;

fn rendered(volume: f64, mode: UnitMode) -> Vec<String> {
    project(&NS_RECIPE, volume, mode)
        .iter()
        .map(|r| format!("{}{}", r.value(), r.unit()))
        .collect()
}

// ============================================================================
// Projection
// ============================================================================

#[rstest]
#[case::ten_liters(10.0, ["5g", "50g", "10g", "10g", "5g", "2g", "0.2g", "0.1g", "20mg", "10mg"])]
#[case::hundred_liters(100.0, ["50g", "500g", "100g", "100g", "50g", "20g", "2g", "1g", "0.2g", "0.1g"])]
#[case::thousand_liters(1000.0, ["500g", "5kg", "1kg", "1kg", "500g", "200g", "20g", "10g", "2g", "1g"])]
#[case::five_thousand_liters(5000.0, ["2.5kg", "25kg", "5kg", "5kg", "2.5kg", "1kg", "100g", "50g", "10g", "5g"])]
#[case::zero_liters(0.0, ["0g", "0g", "0g", "0g", "0g", "0g", "0g", "0g", "0g", "0g"])]
fn test_project_auto(#[case] volume: f64, #[case] expected: [&str; 10]) {
    assert_eq!(rendered(volume, UnitMode::Auto), expected);
}

#[test]
fn test_ammonium_chloride_and_molybdate_at_100l() {
    let results = project(&NS_RECIPE, 100.0, UnitMode::Auto);

    let nh4cl = results.iter().find(|r| r.id() == "ammonium-chloride").unwrap();
    assert_eq!(nh4cl.grams, 100.0);
    assert_eq!(nh4cl.value(), "100");
    assert_eq!(nh4cl.unit(), MassUnit::Gram);

    let molybdate = results.iter().find(|r| r.id() == "sodium-molybdate").unwrap();
    assert_eq!(molybdate.value(), "0.1");
    assert_eq!(molybdate.unit(), MassUnit::Gram);
}

#[rstest]
fn test_project_preserves_order_and_length(
    #[values(0.0, 0.5, 10.0, 100.0, 2000.0)] volume: f64,
    #[values(UnitMode::Auto, UnitMode::Gram, UnitMode::Milligram, UnitMode::Kilogram)]
    mode: UnitMode,
) {
    let results = project(&NS_RECIPE, volume, mode);
    assert_eq!(results.len(), NS_RECIPE.len());
    for (result, ingredient) in results.iter().zip(NS_RECIPE.iter()) {
        assert_eq!(result.id(), ingredient.id);
        assert_eq!(result.grams, ingredient.concentration * volume);
    }
}

#[test]
fn test_project_kg_rounds_ties_up() {
    let results = project(&NS_RECIPE, 62.5, UnitMode::Kilogram);
    assert_eq!(results[0].to_string(), "酵母膏 (Yeast extract): 0.0313kg");
    assert_eq!(results[4].to_string(), "氯化钠 (NaCl): 0.0313kg");
}

#[test]
fn test_presets_project() {
    for volume in PRESET_VOLUMES {
        assert_eq!(project(&NS_RECIPE, volume, UnitMode::Auto).len(), 10);
    }
}

#[test]
fn test_results_serialize_flat() {
    let results = project(&NS_RECIPE, 100.0, UnitMode::Auto);
    let json = serde_json::to_value(&results[2]).unwrap();
    assert_eq!(json["id"], "ammonium-chloride");
    assert_eq!(json["chemical_formula"], "NH₄Cl");
    assert_eq!(json["concentration_unit"], "g/L");
    assert_eq!(json["value"], "100");
    assert_eq!(json["unit"], "g");
}

// ============================================================================
// Workbench and Checklist
// ============================================================================

#[test]
fn test_workbench_volume_text() {
    let mut bench = Workbench::new();
    bench.set_volume_text("500 L");
    assert_eq!(bench.volume(), Volume::new(500.0));
    assert_eq!(bench.results()[1].to_string(), "苹果酸钠 / 丁二酸钠: 2.5kg");

    bench.set_volume_text("-3");
    assert_eq!(bench.volume().liters(), 0.0);
}

#[test]
fn test_checklist_toggle_pairs_cancel() {
    let mut checklist = Checklist::new();
    for ingredient in NS_RECIPE.iter().take(3) {
        checklist.toggle(ingredient.id);
    }
    let snapshot = checklist.clone();
    for ingredient in NS_RECIPE.iter() {
        checklist.toggle(ingredient.id);
        checklist.toggle(ingredient.id);
    }
    assert_eq!(checklist, snapshot);
    assert_eq!(checklist.count(), 3);
}

#[test]
fn test_workbench_rejects_unknown_id() {
    let mut bench = Workbench::new();
    let err = bench.toggle("peptone").unwrap_err();
    assert_eq!(
        err,
        MediumError::UnknownIngredient {
            id: "peptone".to_string()
        }
    );
    assert_eq!(bench.checked_count(), 0);
}

#[test]
fn test_workbench_full_progress() {
    let mut bench = Workbench::new();
    for ingredient in NS_RECIPE.iter() {
        bench.toggle(ingredient.id).unwrap();
    }
    assert!(bench.progress().is_complete());
    assert_eq!(bench.progress().to_string(), "10 / 10");
}

// ============================================================================
// Purchase List
// ============================================================================

#[test]
fn test_purchase_list_forced_mg() {
    let mut bench = Workbench::new();
    bench.set_volume(1.0);
    bench.set_unit_mode(UnitMode::Milligram);
    let date = NaiveDate::from_ymd_opt(2023, 12, 31).unwrap();
    let text = bench.purchase_list(date);
    assert!(text.starts_with("--- NS 培养基采购清单 (总规模: 1L) ---\n日期: 2023/12/31\n\n"));
    assert!(text.contains("\n3. 氯化铵 (NH₄Cl): 1000mg\n"));
    assert!(text.ends_with("10. 二水钼酸钠 (NaMoO₄·2H₂O): 1mg"));
}

#[test]
fn test_purchase_list_body_matches_results() {
    let results = project(&NS_RECIPE, 2000.0, UnitMode::Auto);
    let body = purchase_list::body(&results);
    let lines: Vec<&str> = body.lines().collect();
    assert_eq!(lines.len(), results.len());
    assert_eq!(lines[0], "1. 酵母膏 (Yeast extract): 1kg");
    assert_eq!(lines[9], "10. 二水钼酸钠 (NaMoO₄·2H₂O): 2g");
}
