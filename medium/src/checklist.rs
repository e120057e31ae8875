use std::collections::HashSet;
use std::fmt;

use tracing::debug;

/// Ingredient ids the user has marked as weighed out
///
/// Purely an annotation: nothing here feeds back into the amounts.
#[cfg_attr(feature = "serde-derive", derive(Serialize))]
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Checklist {
    checked: HashSet<String>,
}

impl Checklist {
    pub fn new() -> Checklist {
        Checklist::default()
    }

    /// Mark `id` if unmarked, unmark it otherwise. Returns the new state.
    pub fn toggle(&mut self, id: &str) -> bool {
        let now_checked = if self.checked.remove(id) {
            false
        } else {
            self.checked.insert(id.to_string());
            true
        };
        debug!(id, now_checked, "toggled checklist entry");
        now_checked
    }

    pub fn is_checked(&self, id: &str) -> bool {
        self.checked.contains(id)
    }

    pub fn count(&self) -> usize {
        self.checked.len()
    }

    pub fn clear(&mut self) {
        self.checked.clear();
    }

    pub fn progress(&self, total: usize) -> Progress {
        Progress {
            checked: self.count(),
            total,
        }
    }
}

/// Checked count against the number of recipe entries, shown as `3 / 10`
#[cfg_attr(feature = "serde-derive", derive(Serialize))]
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Progress {
    pub checked: usize,
    pub total: usize,
}

impl Progress {
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.checked >= self.total
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} / {}", self.checked, self.total)
    }
}
