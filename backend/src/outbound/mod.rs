//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: PostgreSQL repositories built on Diesel and bb8.
//!
//! Adapters translate between domain types and storage representations and
//! contain no business logic.

pub mod persistence;
