// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A parameter value as carried by the location identifier: repeatable keys
/// arrive as `Many`, everything else as `Single`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum ParamValue {
    Single(String),
    Many(Vec<String>),
}

impl ParamValue {
    /// All carried values in arrival order. A `Single` yields one element.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        match self {
            Self::Single(value) => std::slice::from_ref(value).iter(),
            Self::Many(values) => values.iter(),
        }
        .map(String::as_str)
    }

    /// Canonical form for a set of codes: `Single` for one element, `Many`
    /// for several, `None` for an empty set.
    #[must_use]
    pub fn from_codes<I>(codes: I) -> Option<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut values: Vec<String> = codes.into_iter().collect();
        match values.len() {
            0 => None,
            1 => Some(Self::Single(values.remove(0))),
            _ => Some(Self::Many(values)),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Single(value.to_string())
    }
}

impl From<Vec<&str>> for ParamValue {
    fn from(values: Vec<&str>) -> Self {
        Self::Many(values.into_iter().map(str::to_string).collect())
    }
}

/// Flat parameter map keyed by the location identifier's parameter names.
/// `BTreeMap` keeps key order deterministic for canonical output.
pub type RawParams = BTreeMap<String, ParamValue>;
