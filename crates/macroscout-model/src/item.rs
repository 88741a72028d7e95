// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

pub const ID_MAX_LEN: usize = 64;
pub const SLUG_MAX_LEN: usize = 128;

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseError {
    Empty(&'static str),
    Trimmed(&'static str),
    TooLong(&'static str, usize),
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty(name) => write!(f, "{name} must not be empty"),
            Self::Trimmed(name) => {
                write!(f, "{name} must not contain leading/trailing whitespace")
            }
            Self::TooLong(name, max) => write!(f, "{name} exceeds max length {max}"),
        }
    }
}

impl std::error::Error for ParseError {}

fn parse_bounded(input: &str, field: &'static str, max: usize) -> Result<String, ParseError> {
    if input.is_empty() {
        return Err(ParseError::Empty(field));
    }
    if input.trim() != input {
        return Err(ParseError::Trimmed(field));
    }
    if input.len() > max {
        return Err(ParseError::TooLong(field, max));
    }
    Ok(input.to_string())
}

/// Stable identifier of one purchasable variant; the key every cache shape
/// patches by.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
#[non_exhaustive]
pub struct VariantId(String);

impl VariantId {
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        parse_bounded(input, "variant_id", ID_MAX_LEN).map(Self)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
#[non_exhaustive]
pub struct SkuId(String);

impl SkuId {
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        parse_bounded(input, "sku_id", ID_MAX_LEN).map(Self)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
#[non_exhaustive]
pub struct ItemSlug(String);

impl ItemSlug {
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        parse_bounded(input, "item_slug", SLUG_MAX_LEN).map(Self)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
#[non_exhaustive]
pub struct ViewerId(String);

impl ViewerId {
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        parse_bounded(input, "viewer_id", ID_MAX_LEN).map(Self)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One ranked row from the search collaborator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ResultItem {
    pub variant_id: VariantId,
    pub sku_id: SkuId,
    pub name: String,
    pub flavor: Option<String>,
    pub protein_g: u32,
    pub calories: u32,
    pub carbs_g: u32,
    pub sugar_g: u32,
    pub favorited: bool,
    pub favorite_count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ResultPage {
    pub items: Vec<ResultItem>,
}

impl ResultPage {
    #[must_use]
    pub fn new(items: Vec<ResultItem>) -> Self {
        Self { items }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// The variant currently shown on a detail screen; mirrors the list row so a
/// favorite patch lands identically in both places.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SelectedVariant {
    pub item: ResultItem,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DetailRecord {
    pub slug: ItemSlug,
    pub description: Option<String>,
    pub selected: SelectedVariant,
}
