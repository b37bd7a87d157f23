pub mod contact_queries;
pub mod packing_queries;
