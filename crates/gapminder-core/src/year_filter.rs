// File: crates/gapminder-core/src/year_filter.rs
// Summary: Year selector and the selected-year / other-years visibility partition of marks.

use tracing::warn;

use crate::data::Dataset;
use crate::scene::{Display, MarkId, Scene};

/// Selector options and the current choice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct YearSelector {
    options: Vec<i32>,
    selected: Option<i32>,
}

impl YearSelector {
    /// Options in first-seen order. `default_year` is pre-selected when present;
    /// otherwise the first option is, as an HTML select does.
    pub fn from_dataset(dataset: &Dataset, default_year: i32) -> Self {
        Self::from_years(dataset.distinct_years(), default_year)
    }

    pub fn from_years(options: Vec<i32>, default_year: i32) -> Self {
        let selected = if options.contains(&default_year) {
            Some(default_year)
        } else {
            if let Some(first) = options.first() {
                warn!(default_year, fallback = first, "default year not in dataset");
            }
            options.first().copied()
        };
        Self { options, selected }
    }

    pub fn options(&self) -> &[i32] { &self.options }

    pub fn selected(&self) -> Option<i32> { self.selected }

    /// Change the selection; unknown years are ignored. Returns whether it changed.
    pub fn select(&mut self, year: i32) -> bool {
        if !self.options.contains(&year) || self.selected == Some(year) {
            return false;
        }
        self.selected = Some(year);
        true
    }

    /// Move the selection by `delta` options, saturating at either end.
    pub fn step(&mut self, delta: isize) -> bool {
        let Some(cur) = self.selected.and_then(|y| self.options.iter().position(|&o| o == y)) else {
            return false;
        };
        let next = (cur as isize + delta).clamp(0, self.options.len() as isize - 1) as usize;
        let year = self.options[next];
        self.select(year)
    }

    /// Visibility split for the current selection.
    pub fn partition(&self, dataset: &Dataset) -> VisibilityPartition {
        let mut visible = Vec::new();
        let mut hidden = Vec::new();
        for (i, o) in dataset.observations().iter().enumerate() {
            if Some(o.year) == self.selected {
                visible.push(MarkId(i));
            } else {
                hidden.push(MarkId(i));
            }
        }
        VisibilityPartition { visible, hidden }
    }
}

/// Marks matching the selected year vs all others.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VisibilityPartition {
    pub visible: Vec<MarkId>,
    pub hidden: Vec<MarkId>,
}

impl VisibilityPartition {
    pub fn display_of(&self, id: MarkId) -> Display {
        // both lists are ascending by construction
        if self.visible.binary_search(&id).is_ok() { Display::Inline } else { Display::None }
    }

    pub fn apply(&self, scene: &mut Scene) {
        scene.partition_marks(|id| self.display_of(id));
    }
}
