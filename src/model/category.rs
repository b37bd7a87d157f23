use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TravelError;

/// Fixed grouping used by both emergency contacts and packing items.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Category {
    #[default]
    Family,
    Friend,
    Emergency,
    #[serde(rename = "Travel Related")]
    TravelRelated,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 4] = [
        Category::Family,
        Category::Friend,
        Category::Emergency,
        Category::TravelRelated,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Family => "Family",
            Category::Friend => "Friend",
            Category::Emergency => "Emergency",
            Category::TravelRelated => "Travel Related",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = TravelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "family" => Ok(Category::Family),
            "friend" => Ok(Category::Friend),
            "emergency" => Ok(Category::Emergency),
            "travel related" | "travel-related" | "travel_related" | "travel" => {
                Ok(Category::TravelRelated)
            }
            _ => Err(TravelError::UnknownCategory(s.trim().to_string())),
        }
    }
}
