pub mod ids;
pub mod category;
pub mod contact;
pub mod packing;

// Re-exports for convenience
pub use ids::Id;
pub use category::Category;
pub use contact::{ContactForm, ContactId, EmergencyContact};
pub use packing::PackingItem;
