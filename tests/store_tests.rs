use std::cell::Cell;

use travelkit::error::TravelError;
use travelkit::model::*;
use travelkit::queries::contact_queries;
use travelkit::store::*;

fn contact(name: &str, phone: &str, email: &str, category: Category, primary: bool) -> EmergencyContact {
    EmergencyContact::create(
        name.into(),
        phone.into(),
        email.into(),
        format!("{} street", name),
        category,
        primary,
    )
}

fn primaries(store: &ContactStore, category: Category) -> Vec<ContactId> {
    contact_queries::primaries_in(store.contacts(), category, None)
        .iter()
        .map(|c| c.id)
        .collect()
}

// ==========================================================================
// CONTACT STORE: IDS
// ==========================================================================

#[test]
fn first_id_is_one() {
    let mut store = ContactStore::new();
    let id = store.add(contact("A", "1", "a@x", Category::Family, false)).unwrap();
    assert_eq!(id, ContactId(1));
    assert_eq!(store.find(id).unwrap().id, id);
}

#[test]
fn ids_strictly_increase_and_are_never_reused() {
    let mut store = ContactStore::new();
    let mut seen = Vec::new();
    for round in 0..5 {
        let a = store.add(contact(&format!("A{}", round), "1", "a", Category::Family, false)).unwrap();
        let b = store.add(contact(&format!("B{}", round), "2", "b", Category::Friend, false)).unwrap();
        seen.push(a);
        seen.push(b);
        // drop the newest one each round
        assert!(store.remove(b));
    }
    for pair in seen.windows(2) {
        assert!(pair[0] < pair[1]);
    }
    assert_eq!(store.next_id(), ContactId(11));
}

#[test]
fn removing_highest_id_does_not_lower_counter() {
    let mut store = ContactStore::new();
    store.add(contact("A", "1", "a", Category::Family, false)).unwrap();
    let b = store.add(contact("B", "2", "b", Category::Family, false)).unwrap();
    store.remove(b);
    let c = store.add(contact("C", "3", "c", Category::Family, false)).unwrap();
    assert_eq!(c, ContactId(3));
}

#[test]
fn from_contacts_resumes_after_max_id() {
    let mut a = contact("A", "1", "a", Category::Family, false);
    a.id = ContactId(4);
    let mut b = contact("B", "2", "b", Category::Family, false);
    b.id = ContactId(9);
    let mut store = ContactStore::from_contacts(vec![a, b]);
    assert_eq!(store.next_id(), ContactId(10));
    assert_eq!(store.add(contact("C", "3", "c", Category::Friend, false)).unwrap(), ContactId(10));
}

#[test]
fn replace_all_never_moves_counter_backwards() {
    let mut store = ContactStore::new();
    for i in 0..5 {
        store.add(contact(&format!("N{}", i), &i.to_string(), "e", Category::Family, false)).unwrap();
    }
    store.replace_all(Vec::new());
    assert!(store.is_empty());
    assert_eq!(store.next_id(), ContactId(6));
}

#[test]
fn add_fails_once_ids_run_out() {
    let mut last = contact("A", "1", "a", Category::Family, false);
    last.id = ContactId(u32::MAX - 1);
    let mut store = ContactStore::from_contacts(vec![last]);
    assert_eq!(store.next_id(), ContactId(u32::MAX));

    let result = store.add(contact("B", "2", "b", Category::Family, false));

    assert!(matches!(result, Err(TravelError::IdExhausted)));
    assert_eq!(store.len(), 1);
}

#[test]
fn highest_possible_id_saturates_counter() {
    let mut top = contact("A", "1", "a", Category::Family, false);
    top.id = ContactId(u32::MAX);
    let mut store = ContactStore::from_contacts(vec![top]);
    assert!(matches!(
        store.add(contact("B", "2", "b", Category::Family, false)),
        Err(TravelError::IdExhausted)
    ));
}

#[test]
fn remove_absent_id_is_noop() {
    let mut store = ContactStore::new();
    store.add(contact("A", "1", "a", Category::Family, false)).unwrap();
    assert!(!store.remove(ContactId(99)));
    assert_eq!(store.len(), 1);
}

#[test]
fn find_absent_is_none() {
    let store = ContactStore::new();
    assert!(store.find(ContactId(1)).is_none());
}

// ==========================================================================
// CONTACT STORE: DUPLICATES
// ==========================================================================

#[test]
fn duplicate_on_any_single_field() {
    let mut store = ContactStore::new();
    store.add(contact("Ana", "111", "ana@x", Category::Family, false)).unwrap();

    assert!(store.is_duplicate("Ana", "999", "other@x", None));
    assert!(store.is_duplicate("Other", "111", "other@x", None));
    assert!(store.is_duplicate("Other", "999", "ana@x", None));
    assert!(!store.is_duplicate("Other", "999", "other@x", None));
}

#[test]
fn duplicate_check_ignores_contact_being_edited() {
    let mut store = ContactStore::new();
    let id = store.add(contact("Ana", "111", "ana@x", Category::Family, false)).unwrap();
    assert!(!store.is_duplicate("Ana", "111", "ana@x", Some(id)));

    store.add(contact("Ben", "222", "ben@x", Category::Family, false)).unwrap();
    assert!(store.is_duplicate("Ana", "222", "ana@x", Some(id)));
}

#[test]
fn duplicate_check_is_exact_match() {
    let mut store = ContactStore::new();
    store.add(contact("Ana", "111", "ana@x", Category::Family, false)).unwrap();
    assert!(!store.is_duplicate("ana", "1111", "ANA@x", None));
}

// ==========================================================================
// CONTACT STORE: PRIMARY SLOTS
// ==========================================================================

#[test]
fn capacity_available_under_two() {
    let mut store = ContactStore::new();
    store.add(contact("A", "1", "a", Category::Family, true)).unwrap();
    assert_eq!(store.primary_capacity(Category::Family, None), PrimaryCapacity::Available);
}

#[test]
fn capacity_full_reports_oldest() {
    let mut store = ContactStore::new();
    let a = store.add(contact("A", "1", "a", Category::Family, true)).unwrap();
    store.add(contact("B", "2", "b", Category::Family, true)).unwrap();
    assert_eq!(
        store.primary_capacity(Category::Family, None),
        PrimaryCapacity::Full { oldest: a }
    );
    assert_eq!(store.primary_capacity(Category::Friend, None), PrimaryCapacity::Available);
}

#[test]
fn capacity_excludes_contact_being_edited() {
    let mut store = ContactStore::new();
    let a = store.add(contact("A", "1", "a", Category::Family, true)).unwrap();
    store.add(contact("B", "2", "b", Category::Family, true)).unwrap();
    assert_eq!(store.primary_capacity(Category::Family, Some(a)), PrimaryCapacity::Available);
}

#[test]
fn under_capacity_does_not_ask() {
    let mut store = ContactStore::new();
    store.add(contact("A", "1", "a", Category::Family, true)).unwrap();
    let asked = Cell::new(false);
    let ok = store.set_primary_with_capacity_check(Category::Family, None, |_| {
        asked.set(true);
        PrimaryChoice::KeepExisting
    });
    assert!(ok);
    assert!(!asked.get());
}

#[test]
fn replace_demotes_lowest_id() {
    let mut store = ContactStore::new();
    let a = store.add(contact("A", "1", "a", Category::Family, true)).unwrap();
    let b = store.add(contact("B", "2", "b", Category::Family, true)).unwrap();

    let ok = store.set_primary_with_capacity_check(Category::Family, None, |conflict| {
        assert_eq!(conflict.category, Category::Family);
        assert_eq!(conflict.oldest().id, a);
        assert_eq!(conflict.current.len(), 2);
        PrimaryChoice::ReplaceOldest
    });

    assert!(ok);
    assert!(!store.find(a).unwrap().primary);
    assert!(store.find(b).unwrap().primary);
}

#[test]
fn keep_existing_changes_nothing() {
    let mut store = ContactStore::new();
    let a = store.add(contact("A", "1", "a", Category::Family, true)).unwrap();
    let b = store.add(contact("B", "2", "b", Category::Family, true)).unwrap();

    let ok = store.set_primary_with_capacity_check(Category::Family, None, |_| {
        PrimaryChoice::KeepExisting
    });

    assert!(!ok);
    assert_eq!(primaries(&store, Category::Family), vec![a, b]);
}

#[test]
fn other_categories_are_independent() {
    let mut store = ContactStore::new();
    store.add(contact("A", "1", "a", Category::Family, true)).unwrap();
    store.add(contact("B", "2", "b", Category::Family, true)).unwrap();
    let ok = store.set_primary_with_capacity_check(Category::Emergency, None, |_| {
        panic!("should not ask")
    });
    assert!(ok);
}

#[test]
fn replace_trims_overfull_category_loaded_from_disk() {
    let mut contacts = Vec::new();
    for (i, name) in ["A", "B", "C"].iter().enumerate() {
        let mut c = contact(name, &i.to_string(), name, Category::Friend, true);
        c.id = ContactId(i as u32 + 1);
        contacts.push(c);
    }
    let mut store = ContactStore::from_contacts(contacts);

    let ok = store.set_primary_with_capacity_check(Category::Friend, None, |conflict| {
        assert_eq!(conflict.current.len(), 3);
        PrimaryChoice::ReplaceOldest
    });

    assert!(ok);
    assert_eq!(primaries(&store, Category::Friend), vec![ContactId(3)]);
}

// ==========================================================================
// CATEGORY VIEW
// ==========================================================================

#[test]
fn categorized_lists_every_category_even_empty() {
    let mut store = ContactStore::new();
    store.add(contact("A", "1", "a", Category::Friend, false)).unwrap();
    let groups = contact_queries::categorized(store.contacts());
    let cats: Vec<Category> = groups.iter().map(|g| g.category).collect();
    assert_eq!(cats, Category::ALL.to_vec());
    assert!(groups[0].contacts.is_empty());
    assert_eq!(groups[1].contacts.len(), 1);
}

#[test]
fn categorized_puts_primaries_first_then_by_id() {
    let mut store = ContactStore::new();
    let a = store.add(contact("A", "1", "a", Category::Family, false)).unwrap();
    let b = store.add(contact("B", "2", "b", Category::Family, true)).unwrap();
    let c = store.add(contact("C", "3", "c", Category::Family, false)).unwrap();
    let d = store.add(contact("D", "4", "d", Category::Family, true)).unwrap();

    let groups = contact_queries::categorized(store.contacts());
    let order: Vec<ContactId> = groups[0].contacts.iter().map(|c| c.id).collect();
    assert_eq!(order, vec![b, d, a, c]);
}

#[test]
fn search_matches_name_phone_and_email() {
    let mut store = ContactStore::new();
    store.add(contact("Ana Silva", "5551234", "ana@x.pt", Category::Family, false)).unwrap();
    store.add(contact("Ben", "777", "ben@y.com", Category::Friend, false)).unwrap();

    assert_eq!(contact_queries::search(store.contacts(), "silva").len(), 1);
    assert_eq!(contact_queries::search(store.contacts(), "555").len(), 1);
    assert_eq!(contact_queries::search(store.contacts(), "Y.COM").len(), 1);
    assert!(contact_queries::search(store.contacts(), "   ").is_empty());
}

// ==========================================================================
// PACKING STORE
// ==========================================================================

#[test]
fn add_item_is_unpacked_and_trimmed() {
    let mut store = PackingStore::new();
    let item = store.add("  Lisbon ", Category::TravelRelated, " Passport ").unwrap();
    assert_eq!(item.trip, "Lisbon");
    assert_eq!(item.name, "Passport");
    assert!(!item.packed);
}

#[test]
fn add_item_rejects_missing_input() {
    let mut store = PackingStore::new();
    assert!(matches!(
        store.add("", Category::Family, "Socks"),
        Err(TravelError::BlankField { .. })
    ));
    assert!(store.add("Lisbon", Category::Family, "  ").is_err());
    assert!(store.is_empty());
}

#[test]
fn toggle_flips_and_reports_state() {
    let mut store = PackingStore::new();
    store.add("Lisbon", Category::Family, "Socks").unwrap();
    assert!(store.toggle(0).unwrap());
    assert!(store.items()[0].packed);
    assert!(!store.toggle(0).unwrap());
}

#[test]
fn toggle_out_of_range_is_invalid_position() {
    let mut store = PackingStore::new();
    store.add("Lisbon", Category::Family, "Socks").unwrap();
    assert!(matches!(
        store.toggle(1),
        Err(TravelError::InvalidPosition { position: 1, len: 1 })
    ));
}

#[test]
fn delete_removes_and_shifts() {
    let mut store = PackingStore::new();
    store.add("Lisbon", Category::Family, "Socks").unwrap();
    store.add("Lisbon", Category::Family, "Hat").unwrap();
    let removed = store.delete(0).unwrap();
    assert_eq!(removed.name, "Socks");
    assert_eq!(store.items()[0].name, "Hat");
    assert!(matches!(store.delete(5), Err(TravelError::InvalidPosition { .. })));
}

#[test]
fn id_operations_are_stable_across_deletes() {
    let mut store = PackingStore::new();
    store.add("Lisbon", Category::Family, "Socks").unwrap();
    let hat = store.add("Lisbon", Category::Family, "Hat").unwrap().id;
    store.delete(0).unwrap();

    assert!(store.toggle_by_id(hat).unwrap());
    assert_eq!(store.delete_by_id(hat).unwrap().name, "Hat");
    assert!(matches!(store.toggle_by_id(hat), Err(TravelError::NotFound { .. })));
}

#[test]
fn progress_empty_is_zero() {
    assert_eq!(PackingStore::new().progress(), 0);
}

#[test]
fn progress_one_of_three_is_33() {
    let mut store = PackingStore::new();
    for name in ["A", "B", "C"] {
        store.add("Trip", Category::Family, name).unwrap();
    }
    store.toggle(0).unwrap();
    assert_eq!(store.progress(), 33);
    store.toggle(1).unwrap();
    assert_eq!(store.progress(), 67);
    store.toggle(2).unwrap();
    assert_eq!(store.progress(), 100);
}

#[test]
fn progress_rounds_half_up() {
    let mut store = PackingStore::new();
    for i in 0..8 {
        store.add("Trip", Category::Family, &format!("item {}", i)).unwrap();
    }
    store.toggle(0).unwrap();
    // 12.5% rounds up
    assert_eq!(store.progress(), 13);
}

#[test]
fn trip_names_are_distinct_and_sorted() {
    let mut store = PackingStore::new();
    store.add("Tokyo", Category::Family, "A").unwrap();
    store.add("Lisbon", Category::Family, "B").unwrap();
    store.add("Tokyo", Category::Friend, "C").unwrap();
    assert_eq!(store.trip_names(), vec!["Lisbon".to_string(), "Tokyo".to_string()]);
}

#[test]
fn trip_progress_only_counts_that_trip() {
    let mut store = PackingStore::new();
    store.add("Tokyo", Category::Family, "A").unwrap();
    store.add("Lisbon", Category::Family, "B").unwrap();
    store.add("Tokyo", Category::Friend, "C").unwrap();
    store.toggle(0).unwrap();
    assert_eq!(store.trip_progress("Tokyo"), 50);
    assert_eq!(store.trip_progress("Lisbon"), 0);
    assert_eq!(store.trip_progress("Nowhere"), 0);
    assert_eq!(store.items_for_trip("Tokyo").len(), 2);
}
