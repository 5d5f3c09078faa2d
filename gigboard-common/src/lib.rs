//! # Gigboard Common Library
//!
//! Shared code for the gigboard booking directory:
//! - Database schema and initialization
//! - Row models and genre list handling
//! - Configuration loading
//! - Error types
//! - Date/time parsing and display formatting

pub mod config;
pub mod datetime;
pub mod db;
pub mod error;

pub use error::{Error, Result};
