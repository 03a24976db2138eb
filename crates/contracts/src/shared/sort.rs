use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The single active sort column of a list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortState {
    pub sort_by: String,
    pub sort_order: SortOrder,
}

impl SortState {
    pub fn new(sort_by: impl Into<String>, sort_order: SortOrder) -> Self {
        Self {
            sort_by: sort_by.into(),
            sort_order,
        }
    }

    pub fn asc(sort_by: impl Into<String>) -> Self {
        Self::new(sort_by, SortOrder::Asc)
    }

    pub fn desc(sort_by: impl Into<String>) -> Self {
        Self::new(sort_by, SortOrder::Desc)
    }

    pub fn is_active(&self, field: &str) -> bool {
        self.sort_by == field
    }
}
