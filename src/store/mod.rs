pub mod contact_store;
pub mod packing_store;

pub use contact_store::{ContactStore, PrimaryCapacity, PrimaryChoice, PrimaryConflict, PRIMARY_SLOTS};
pub use packing_store::PackingStore;
