//! # Gigbook Core
//!
//! Domain types and the pure logic of the booking directory:
//!
//! - [`availability`]: accepting or rejecting a proposed show for an artist
//! - [`directory`]: grouping venues by location with upcoming show counts
//! - [`search`]: case-insensitive name search with optional show counts
//! - [`validation`] and [`forms`]: field rules for venue and artist submissions
//!
//! Nothing here performs I/O. Rows are fetched through a [`store::BookingStore`]
//! by the caller and passed in, together with the evaluation instant.

pub mod availability;
pub mod directory;
pub mod errors;
pub mod forms;
pub mod models;
pub mod search;
pub mod store;
pub mod validation;
