use rusqlite::Connection;
use tracing::info;

use crate::db::{packing_repo, schema};
use crate::error::TravelResult;
use crate::model::{Category, Id, PackingItem};
use crate::store::PackingStore;

/// An open packing list backed by a SQLite connection. With auto-save on,
/// every successful mutation is written through immediately.
pub struct PackingSession {
    conn: Connection,
    store: PackingStore,
    auto_save: bool,
    dirty: bool,
}

impl PackingSession {
    /// Prepares the schema and loads the stored list.
    pub fn open(conn: Connection, auto_save: bool) -> TravelResult<Self> {
        schema::initialize(&conn)?;
        let items = packing_repo::find_all(&conn)?;
        info!(count = items.len(), auto_save, "packing list loaded");
        Ok(Self {
            conn,
            store: PackingStore::from_items(items),
            auto_save,
            dirty: false,
        })
    }

    pub fn store(&self) -> &PackingStore {
        &self.store
    }

    pub fn items(&self) -> &[PackingItem] {
        self.store.items()
    }

    pub fn auto_save_enabled(&self) -> bool {
        self.auto_save
    }

    /// True when the in-memory list differs from what was last written.
    pub fn has_unsaved_changes(&self) -> bool {
        self.dirty
    }

    pub fn add_item(&mut self, trip: &str, category: Category, name: &str) -> TravelResult<PackingItem> {
        let item = self.store.add(trip, category, name)?.clone();
        self.changed()?;
        Ok(item)
    }

    /// Toggles the item at a 0-based position. Returns the new packed flag.
    pub fn toggle(&mut self, position: usize) -> TravelResult<bool> {
        let packed = self.store.toggle(position)?;
        self.changed()?;
        Ok(packed)
    }

    pub fn delete_item(&mut self, position: usize) -> TravelResult<PackingItem> {
        let item = self.store.delete(position)?;
        self.changed()?;
        Ok(item)
    }

    pub fn toggle_by_id(&mut self, id: Id<PackingItem>) -> TravelResult<bool> {
        let packed = self.store.toggle_by_id(id)?;
        self.changed()?;
        Ok(packed)
    }

    pub fn delete_by_id(&mut self, id: Id<PackingItem>) -> TravelResult<PackingItem> {
        let item = self.store.delete_by_id(id)?;
        self.changed()?;
        Ok(item)
    }

    pub fn progress(&self) -> u8 {
        self.store.progress()
    }

    pub fn trip_progress(&self, trip: &str) -> u8 {
        self.store.trip_progress(trip)
    }

    pub fn trip_names(&self) -> Vec<String> {
        self.store.trip_names()
    }

    /// Saves pending changes, but only when auto-save is on.
    pub fn auto_save(&mut self) -> TravelResult<()> {
        if self.auto_save && self.dirty {
            self.save()?;
        }
        Ok(())
    }

    fn changed(&mut self) -> TravelResult<()> {
        self.dirty = true;
        self.auto_save()
    }

    /// Writes the whole list regardless of the auto-save setting.
    pub fn save(&mut self) -> TravelResult<()> {
        packing_repo::save_all(&mut self.conn, self.store.items())?;
        self.dirty = false;
        info!(count = self.store.len(), "packing list saved");
        Ok(())
    }
}
