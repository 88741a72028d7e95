// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    FavoritesCount,
    Protein,
    Calories,
    Name,
}

impl SortKey {
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "favorites_count" => Some(Self::FavoritesCount),
            "protein" => Some(Self::Protein),
            "calories" => Some(Self::Calories),
            "name" => Some(Self::Name),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FavoritesCount => "favorites_count",
            Self::Protein => "protein",
            Self::Calories => "calories",
            Self::Name => "name",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "asc" => Some(Self::Asc),
            "desc" => Some(Self::Desc),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SortState {
    pub by: SortKey,
    pub order: SortOrder,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            by: SortKey::FavoritesCount,
            order: SortOrder::Desc,
        }
    }
}
