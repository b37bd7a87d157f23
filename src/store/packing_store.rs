use tracing::debug;

use crate::error::{TravelError, TravelResult};
use crate::model::{Category, Id, PackingItem};
use crate::queries::packing_queries;
use crate::validation;

/// Ordered packing list across all trips.
#[derive(Debug, Clone, Default)]
pub struct PackingStore {
    items: Vec<PackingItem>,
}

impl PackingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: Vec<PackingItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[PackingItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends an unpacked item. Trip and item name must not be blank.
    pub fn add(&mut self, trip: &str, category: Category, name: &str) -> TravelResult<&PackingItem> {
        let trip = validation::non_blank(trip, "trip")?;
        let name = validation::non_blank(name, "item name")?;
        let item = PackingItem::create(trip, category, name);
        debug!(id = %item.id, trip = %item.trip, name = %item.name, "packing item added");
        self.items.push(item);
        Ok(&self.items[self.items.len() - 1])
    }

    pub fn position_of(&self, id: Id<PackingItem>) -> TravelResult<usize> {
        self.items
            .iter()
            .position(|i| i.id == id)
            .ok_or_else(|| TravelError::NotFound {
                entity_type: "PackingItem".into(),
                id: id.to_string(),
            })
    }

    /// Flips the packed flag of the item at `position`. Returns the new flag.
    pub fn toggle(&mut self, position: usize) -> TravelResult<bool> {
        let len = self.items.len();
        let item = self
            .items
            .get_mut(position)
            .ok_or(TravelError::InvalidPosition { position, len })?;
        item.packed = !item.packed;
        debug!(id = %item.id, packed = item.packed, "packing item toggled");
        Ok(item.packed)
    }

    /// Removes and returns the item at `position`.
    pub fn delete(&mut self, position: usize) -> TravelResult<PackingItem> {
        if position >= self.items.len() {
            return Err(TravelError::InvalidPosition {
                position,
                len: self.items.len(),
            });
        }
        let item = self.items.remove(position);
        debug!(id = %item.id, "packing item deleted");
        Ok(item)
    }

    pub fn toggle_by_id(&mut self, id: Id<PackingItem>) -> TravelResult<bool> {
        let position = self.position_of(id)?;
        self.toggle(position)
    }

    pub fn delete_by_id(&mut self, id: Id<PackingItem>) -> TravelResult<PackingItem> {
        let position = self.position_of(id)?;
        self.delete(position)
    }

    /// Whole-list packing progress in percent.
    pub fn progress(&self) -> u8 {
        packing_queries::progress(&self.items)
    }

    /// Packing progress of a single trip in percent.
    pub fn trip_progress(&self, trip: &str) -> u8 {
        packing_queries::progress(packing_queries::items_for_trip(&self.items, trip))
    }

    pub fn trip_names(&self) -> Vec<String> {
        packing_queries::trip_names(&self.items)
    }

    pub fn items_for_trip(&self, trip: &str) -> Vec<&PackingItem> {
        packing_queries::items_for_trip(&self.items, trip)
    }
}
