//! Plain-text purchase list export.

use chrono::NaiveDate;
use itertools::Itertools;

use crate::projector::FormattedResult;
use crate::volume::Volume;

/// Date rendering used in the header, e.g. `2024/3/7`.
pub const DATE_FORMAT: &str = "%Y/%-m/%-d";

/// Header block: title with the batch volume, the date, then a blank line.
pub fn header(volume: Volume, date: NaiveDate) -> String {
    format!(
        "--- NS 培养基采购清单 (总规模: {volume}L) ---\n日期: {}\n\n",
        date.format(DATE_FORMAT)
    )
}

/// One `"<n>. <name>: <value><unit>"` line per result, 1-indexed, joined by `\n`.
pub fn body(results: &[FormattedResult<'_>]) -> String {
    results
        .iter()
        .enumerate()
        .map(|(index, result)| format!("{}. {}", index + 1, result))
        .join("\n")
}

/// Full purchase list text, ready for the clipboard.
///
/// ```
/// use chrono::NaiveDate;
/// use medium::{project, purchase_list, recipe::NS_RECIPE, unit::UnitMode, Volume};
///
/// let volume = Volume::new(10.0);
/// let results = project(&NS_RECIPE, volume.liters(), UnitMode::Auto);
/// let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
/// let text = purchase_list::render(&results, volume, date);
/// assert!(text.starts_with("--- NS 培养基采购清单 (总规模: 10L) ---\n日期: 2024/3/7\n\n1. "));
/// ```
pub fn render(results: &[FormattedResult<'_>], volume: Volume, date: NaiveDate) -> String {
    let mut text = header(volume, date);
    text.push_str(&body(results));
    text
}
