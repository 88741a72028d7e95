// SPDX-License-Identifier: Apache-2.0

use crate::filter::RangeFilter;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Form code that makes the dependent `package` field meaningful.
pub const POWDER_FORM: &str = "powder";

/// Absolute bounds for one nutrient filter. Filter intervals are clamped to
/// the domain; a domain-wide interval is the "no restriction" default.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RangeDomain {
    pub min: u32,
    pub max: u32,
}

impl RangeDomain {
    #[must_use]
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub const fn contains(&self, value: u32) -> bool {
        self.min <= value && value <= self.max
    }

    /// The unrestricted interval over this domain.
    #[must_use]
    pub const fn full(&self) -> RangeFilter {
        RangeFilter {
            min: self.min,
            max: self.max,
        }
    }
}

/// Fixed vocabularies and range domains for the discovery screen. The
/// codec validates every incoming parameter against this and nothing else.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogConfig {
    pub flavors: BTreeSet<String>,
    pub protein_types: BTreeSet<String>,
    pub forms: BTreeSet<String>,
    pub package_types: BTreeSet<String>,
    pub protein: RangeDomain,
    pub calories: RangeDomain,
    pub carbs: RangeDomain,
    pub sugar: RangeDomain,
}

fn codes(values: &[&str]) -> BTreeSet<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            flavors: codes(&[
                "chocolate",
                "vanilla",
                "strawberry",
                "cookies_cream",
                "matcha",
                "coffee",
                "banana",
                "unflavored",
            ]),
            protein_types: codes(&["wpc", "wpi", "wph", "casein", "soy", "pea", "egg", "mixed"]),
            forms: codes(&[POWDER_FORM, "rtd", "bar", "capsule"]),
            package_types: codes(&["pouch", "tub", "stick", "box"]),
            protein: RangeDomain::new(0, 40),
            calories: RangeDomain::new(0, 500),
            carbs: RangeDomain::new(0, 60),
            sugar: RangeDomain::new(0, 30),
        }
    }
}

impl CatalogConfig {
    #[must_use]
    pub fn is_flavor(&self, code: &str) -> bool {
        self.flavors.contains(code)
    }

    #[must_use]
    pub fn is_protein_type(&self, code: &str) -> bool {
        self.protein_types.contains(code)
    }

    #[must_use]
    pub fn is_form(&self, code: &str) -> bool {
        self.forms.contains(code)
    }

    #[must_use]
    pub fn is_package_type(&self, code: &str) -> bool {
        self.package_types.contains(code)
    }
}
