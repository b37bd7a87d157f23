pub mod schema;
pub mod contact_file;
pub mod packing_repo;
