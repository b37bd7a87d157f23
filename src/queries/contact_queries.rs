use crate::model::{Category, ContactId, EmergencyContact};

/// Contacts of one category, primaries first.
#[derive(Debug, Clone)]
pub struct CategoryGroup<'a> {
    pub category: Category,
    pub contacts: Vec<&'a EmergencyContact>,
}

/// Groups contacts under every category in display order. Categories with
/// no contacts are still present. Inside a group primary contacts come
/// first, then ascending id.
pub fn categorized(contacts: &[EmergencyContact]) -> Vec<CategoryGroup<'_>> {
    Category::ALL
        .iter()
        .map(|&category| {
            let mut members: Vec<&EmergencyContact> = contacts
                .iter()
                .filter(|c| c.relationship == category)
                .collect();
            members.sort_by_key(|c| (!c.primary, c.id));
            CategoryGroup {
                category,
                contacts: members,
            }
        })
        .collect()
}

/// Primary contacts of a category, oldest id first, optionally leaving one
/// contact out of the count.
pub fn primaries_in(
    contacts: &[EmergencyContact],
    category: Category,
    excluding: Option<ContactId>,
) -> Vec<&EmergencyContact> {
    let mut found: Vec<&EmergencyContact> = contacts
        .iter()
        .filter(|c| c.relationship == category && c.primary && Some(c.id) != excluding)
        .collect();
    found.sort_by_key(|c| c.id);
    found
}

/// Case-insensitive substring search over name, phone and email.
pub fn search<'a>(contacts: &'a [EmergencyContact], query: &str) -> Vec<&'a EmergencyContact> {
    let lower = query.trim().to_lowercase();
    if lower.is_empty() {
        return Vec::new();
    }
    contacts
        .iter()
        .filter(|c| {
            c.name.to_lowercase().contains(&lower)
                || c.phone.contains(&lower)
                || c.email.to_lowercase().contains(&lower)
        })
        .collect()
}
