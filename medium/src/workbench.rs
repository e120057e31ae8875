use chrono::{Local, NaiveDate};
use tracing::info;

use crate::checklist::{Checklist, Progress};
use crate::projector::{project, FormattedResult};
use crate::recipe::{self, NS_RECIPE};
use crate::unit::UnitMode;
use crate::volume::Volume;
use crate::{purchase_list, Ingredient, MediumError, MediumResult};

/// Owns the caller-controlled state of one batch calculation
///
/// Volume, unit mode and checklist live here and are handed by value to the
/// pure functions in [`crate::projector`] and [`crate::purchase_list`] on
/// every call.
///
/// # Examples
///
/// ```
/// use medium::{unit::UnitMode, Workbench};
///
/// let mut bench = Workbench::new();
/// bench.set_volume_text("2000");
/// bench.set_unit_mode(UnitMode::Auto);
///
/// let results = bench.results();
/// assert_eq!(results[1].to_string(), "苹果酸钠 / 丁二酸钠: 10kg");
///
/// bench.toggle("sodium-chloride").unwrap();
/// assert_eq!(bench.progress().to_string(), "1 / 10");
/// ```
#[derive(Clone, Debug)]
pub struct Workbench {
    recipe: &'static [Ingredient],
    volume: Volume,
    unit_mode: UnitMode,
    checklist: Checklist,
}

impl Default for Workbench {
    fn default() -> Self {
        Workbench::with_recipe(&NS_RECIPE)
    }
}

impl Workbench {
    /// NS recipe, default volume, auto units, nothing checked.
    pub fn new() -> Workbench {
        Workbench::default()
    }

    pub fn with_recipe(recipe: &'static [Ingredient]) -> Workbench {
        Workbench {
            recipe,
            volume: Volume::default(),
            unit_mode: UnitMode::default(),
            checklist: Checklist::new(),
        }
    }

    pub fn recipe(&self) -> &'static [Ingredient] {
        self.recipe
    }

    pub fn volume(&self) -> Volume {
        self.volume
    }

    /// Negative volumes clamp to zero.
    pub fn set_volume(&mut self, liters: f64) {
        self.volume = Volume::new(liters);
        info!(volume = %self.volume, "volume set");
    }

    /// Unparsable text sets the volume to zero.
    pub fn set_volume_text(&mut self, input: &str) {
        self.volume = Volume::parse(input);
        info!(input, volume = %self.volume, "volume set from text");
    }

    pub fn unit_mode(&self) -> UnitMode {
        self.unit_mode
    }

    pub fn set_unit_mode(&mut self, mode: UnitMode) {
        self.unit_mode = mode;
        info!(%mode, "unit mode set");
    }

    /// Current amounts, recomputed on every call.
    pub fn results(&self) -> Vec<FormattedResult<'static>> {
        project(self.recipe, self.volume.liters(), self.unit_mode)
    }

    /// Toggle a recipe entry on the checklist.
    ///
    /// Ids outside the recipe are rejected and leave the checklist untouched.
    pub fn toggle(&mut self, id: &str) -> MediumResult<bool> {
        if recipe::find(self.recipe, id).is_none() {
            return Err(MediumError::UnknownIngredient { id: id.to_string() });
        }
        Ok(self.checklist.toggle(id))
    }

    pub fn is_checked(&self, id: &str) -> bool {
        self.checklist.is_checked(id)
    }

    pub fn checked_count(&self) -> usize {
        self.checklist.count()
    }

    pub fn progress(&self) -> Progress {
        self.checklist.progress(self.recipe.len())
    }

    pub fn clear_checklist(&mut self) {
        self.checklist.clear();
    }

    pub fn checklist(&self) -> &Checklist {
        &self.checklist
    }

    /// Purchase list for the current state, dated `date`.
    pub fn purchase_list(&self, date: NaiveDate) -> String {
        purchase_list::render(&self.results(), self.volume, date)
    }

    /// Purchase list dated with the local calendar date.
    pub fn purchase_list_today(&self) -> String {
        self.purchase_list(Local::now().date_naive())
    }
}
