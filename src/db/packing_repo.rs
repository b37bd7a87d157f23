use rusqlite::{params, Connection};

use crate::error::{TravelError, TravelResult};
use crate::model::{Category, Id, PackingItem};

/// Replaces every stored item with `items`, keeping their order. Runs in a
/// single transaction so a failed write leaves the previous list intact.
pub fn save_all(conn: &mut Connection, items: &[PackingItem]) -> TravelResult<()> {
    let tx = conn.transaction()?;
    tx.execute("DELETE FROM packing_items", [])?;
    {
        let mut stmt = tx.prepare(
            "INSERT INTO packing_items (id, position, trip, category, name, packed)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        )?;
        for (position, item) in items.iter().enumerate() {
            stmt.execute(params![
                item.id.value.to_string(),
                position as i64,
                item.trip,
                item.category.as_str(),
                item.name,
                item.packed as i32,
            ])?;
        }
    }
    tx.commit()?;
    Ok(())
}

pub fn find_all(conn: &Connection) -> TravelResult<Vec<PackingItem>> {
    let mut stmt = conn.prepare(
        "SELECT id, trip, category, name, packed FROM packing_items ORDER BY position",
    )?;

    let rows = stmt
        .query_map([], |row| {
            let id_str: String = row.get(0)?;
            let trip: String = row.get(1)?;
            let category: String = row.get(2)?;
            let name: String = row.get(3)?;
            let packed: i32 = row.get(4)?;
            Ok((id_str, trip, category, name, packed))
        })?
        .collect::<Result<Vec<_>, _>>()?;

    rows.into_iter()
        .map(|(id_str, trip, category, name, packed)| {
            Ok(PackingItem {
                id: Id::parse(&id_str)
                    .map_err(|e| TravelError::Other(format!("Invalid UUID: {}", e)))?,
                trip,
                category: category.parse::<Category>()?,
                name,
                packed: packed != 0,
            })
        })
        .collect()
}
