use std::collections::BTreeSet;

use crate::model::PackingItem;

/// Share of packed items as a whole percentage, rounded half up.
/// An empty list is 0% packed.
pub fn progress<'a, I>(items: I) -> u8
where
    I: IntoIterator<Item = &'a PackingItem>,
{
    let (packed, total) = items
        .into_iter()
        .fold((0usize, 0usize), |(packed, total), item| {
            (packed + usize::from(item.packed), total + 1)
        });
    if total == 0 {
        return 0;
    }
    ((packed * 100 + total / 2) / total) as u8
}

/// Distinct trip names, sorted.
pub fn trip_names(items: &[PackingItem]) -> Vec<String> {
    items
        .iter()
        .map(|i| i.trip.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

pub fn items_for_trip<'a>(items: &'a [PackingItem], trip: &str) -> Vec<&'a PackingItem> {
    items.iter().filter(|i| i.trip == trip).collect()
}

pub fn unpacked(items: &[PackingItem]) -> Vec<&PackingItem> {
    items.iter().filter(|i| !i.packed).collect()
}
