//! Sea-ORM entities mirroring the existing catalog schema.
//!
//! Table and column names follow the database; field names are English.
//! The schema is owned outside this service, nothing here creates or
//! alters it.

pub mod accessory;
pub mod category;
pub mod compatibility;
pub mod default_assignment;
pub mod vehicle;
