//! Database query layer for gigboard-web
//!
//! One module per entity; handlers compose these into view models.

pub mod artists;
pub mod shows;
pub mod venues;
