//! Domain types shared by the database layer and the HTTP surface.

pub mod datetime;
pub mod error;
pub mod query;
pub mod rules;
pub mod types;
