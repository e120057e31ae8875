//! # Medium
//!
//! Batch calculator for culture media: turns a fixed recipe of per-liter
//! concentrations into the absolute amounts to weigh out for a batch volume.
//!
//! ## Features
//!
//! - Scale every recipe entry by the batch volume (`grams = concentration × volume`)
//! - Display amounts in `g`, `mg` or `kg`, forced or picked from the magnitude
//! - Round to at most four decimals with trailing zeros dropped
//! - Track which entries have been weighed out
//! - Export a dated, numbered purchase list
//!
//! ## Quick Start
//!
//! ```
//! use medium::{project, recipe::NS_RECIPE, unit::{MassUnit, UnitMode}};
//!
//! let results = project(&NS_RECIPE, 100.0, UnitMode::Auto);
//! assert_eq!(results[2].id(), "ammonium-chloride");
//! assert_eq!(results[2].value(), "100");
//! assert_eq!(results[2].unit(), MassUnit::Gram);
//!
//! // exactly 0.1 g stays in grams
//! assert_eq!(results[9].value(), "0.1");
//! assert_eq!(results[9].unit(), MassUnit::Gram);
//! ```
//!
//! ## Stateful use
//!
//! [`Workbench`] holds the volume, unit mode and checklist for callers that
//! need them between recomputations:
//!
//! ```
//! use medium::{unit::UnitMode, Workbench};
//!
//! let mut bench = Workbench::new();
//! bench.set_volume_text("5000");
//! bench.set_unit_mode(UnitMode::Kilogram);
//! assert_eq!(bench.results()[0].to_string(), "酵母膏 (Yeast extract): 2.5kg");
//! ```

pub use crate::checklist::{Checklist, Progress};
pub use crate::error::{MediumError, MediumResult};
pub use crate::ingredient::Ingredient;
pub use crate::projector::{project, FormattedResult};
pub use crate::volume::Volume;
pub use crate::workbench::Workbench;

#[cfg(feature = "serde-derive")]
#[macro_use]
extern crate serde;

pub mod checklist;
pub mod error;
pub mod ingredient;
pub mod projector;
pub mod purchase_list;
pub mod recipe;
pub mod unit;
pub mod util;
pub mod volume;
mod workbench;
