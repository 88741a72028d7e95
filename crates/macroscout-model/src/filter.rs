// SPDX-License-Identifier: Apache-2.0

use crate::catalog::{CatalogConfig, POWDER_FORM};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Closed interval over one nutrient domain. Construction sites keep
/// `domain.min <= min <= max <= domain.max`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RangeFilter {
    pub min: u32,
    pub max: u32,
}

/// Canonical in-memory representation of every discovery constraint.
///
/// Immutable per revision: user actions replace the whole state, they never
/// poke individual fields. An empty set means "no restriction"; a
/// domain-wide range means the same.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FilterState {
    pub flavors: BTreeSet<String>,
    pub protein_types: BTreeSet<String>,
    pub forms: BTreeSet<String>,
    pub package_types: BTreeSet<String>,
    pub protein: RangeFilter,
    pub calories: RangeFilter,
    pub carbs: RangeFilter,
    pub sugar: RangeFilter,
    pub search_query: Option<String>,
}

impl FilterState {
    /// The default (unrestricted) state for a catalog: every range equals
    /// its domain, every set is empty, no text query.
    #[must_use]
    pub fn default_for(config: &CatalogConfig) -> Self {
        Self {
            flavors: BTreeSet::new(),
            protein_types: BTreeSet::new(),
            forms: BTreeSet::new(),
            package_types: BTreeSet::new(),
            protein: config.protein.full(),
            calories: config.calories.full(),
            carbs: config.carbs.full(),
            sugar: config.sugar.full(),
            search_query: None,
        }
    }

    /// True iff every field equals its default. A default state must
    /// serialize to the empty parameter map.
    #[must_use]
    pub fn is_default(&self, config: &CatalogConfig) -> bool {
        self.flavors.is_empty()
            && self.protein_types.is_empty()
            && self.forms.is_empty()
            && self.package_types.is_empty()
            && self.protein == config.protein.full()
            && self.calories == config.calories.full()
            && self.carbs == config.carbs.full()
            && self.sugar == config.sugar.full()
            && self.search_query.is_none()
    }

    /// Replaces the form selection. The one cross-field rule in the model:
    /// `package_types` is only meaningful while the powder form is selected,
    /// so removing it forces the dependent field empty. Every mutation site
    /// that can change `forms` routes through here.
    #[must_use]
    pub fn with_forms(mut self, forms: BTreeSet<String>) -> Self {
        if !forms.contains(POWDER_FORM) {
            self.package_types.clear();
        }
        self.forms = forms;
        self
    }
}
