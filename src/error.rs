use thiserror::Error;

#[derive(Debug, Error)]
pub enum TravelError {
    #[error("{field} cannot be blank")]
    BlankField { field: String },

    #[error("Phone number must contain digits only")]
    InvalidPhone,

    #[error("This contact already exists. Please enter different details.")]
    DuplicateContact,

    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: String, id: String },

    #[error("No item at position {position} (list has {len} items)")]
    InvalidPosition { position: usize, len: usize },

    #[error("Please select an item first")]
    InvalidSelection,

    #[error("Invalid contact id {id}: {reason}")]
    InvalidContactId { id: u32, reason: String },

    #[error("No contact ids left to assign")]
    IdExhausted,

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    InvalidArgument(String),

    #[error("{0}")]
    Other(String),
}

pub type TravelResult<T> = Result<T, TravelError>;
