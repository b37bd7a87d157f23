pub mod contact_ops;
pub mod packing_ops;

pub use contact_ops::{ContactSession, SubmitAction, SubmitOutcome};
pub use packing_ops::PackingSession;
