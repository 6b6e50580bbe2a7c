pub mod error;
pub mod posts;
pub mod schema;
pub mod slug;
pub mod types;
