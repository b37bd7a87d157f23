use serde::{Deserialize, Serialize};

use super::category::Category;
use super::ids::Id;

/// One thing to bring on a trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackingItem {
    pub id: Id<PackingItem>,
    pub trip: String,
    pub category: Category,
    pub name: String,
    pub packed: bool,
}

impl PackingItem {
    pub fn create(trip: String, category: Category, name: String) -> Self {
        Self {
            id: Id::generate(),
            trip,
            category,
            name,
            packed: false,
        }
    }

    pub fn status_label(&self) -> &'static str {
        if self.packed {
            "Packed"
        } else {
            "Not Packed"
        }
    }
}
