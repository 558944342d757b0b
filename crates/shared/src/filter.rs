use std::collections::BTreeSet;

use crate::models::{Category, Location, Status};

/// Page-local selection state for the map filters.
///
/// A location is displayed iff its category and its status are both selected.
/// Either set may be empty, in which case nothing is displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    selected_categories: BTreeSet<Category>,
    selected_status: BTreeSet<Status>,
}

impl Default for FilterState {
    fn default() -> Self {
        FilterState {
            selected_categories: Category::ALL.into_iter().collect(),
            selected_status: Status::ALL.into_iter().collect(),
        }
    }
}

impl FilterState {
    pub fn new(
        categories: impl IntoIterator<Item = Category>,
        statuses: impl IntoIterator<Item = Status>,
    ) -> Self {
        FilterState {
            selected_categories: categories.into_iter().collect(),
            selected_status: statuses.into_iter().collect(),
        }
    }

    pub fn toggle_category(&mut self, category: Category) {
        if !self.selected_categories.remove(&category) {
            self.selected_categories.insert(category);
        }
    }

    pub fn toggle_status(&mut self, status: Status) {
        if !self.selected_status.remove(&status) {
            self.selected_status.insert(status);
        }
    }

    pub fn is_category_selected(&self, category: Category) -> bool {
        self.selected_categories.contains(&category)
    }

    pub fn is_status_selected(&self, status: Status) -> bool {
        self.selected_status.contains(&status)
    }

    pub fn is_displayed(&self, location: &Location) -> bool {
        self.is_category_selected(location.category) && self.is_status_selected(location.status())
    }

    /// Locations passing the filter, in dataset order.
    pub fn visible<'a>(&self, dataset: &'a [Location]) -> Vec<&'a Location> {
        dataset.iter().filter(|l| self.is_displayed(l)).collect()
    }
}
