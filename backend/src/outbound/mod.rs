//! Outbound adapters implementing the driven ports.
//!
//! - **persistence**: PostgreSQL question store via Diesel.
//! - **memory**: in-process question store seeded with sample data.
//! - **random**: seedable random source for quiz selection.

pub mod memory;
pub mod persistence;
pub mod random;
