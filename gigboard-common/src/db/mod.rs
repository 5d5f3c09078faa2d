//! Database schema and initialization

pub mod init;
pub mod models;

pub use init::{init_database, initialize_schema};
pub use models::{Artist, Contact, Show, Venue};
