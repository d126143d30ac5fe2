//! Domain types and pure business rules for the job board.
//!
//! This crate has no I/O: the database and HTTP layers depend on it, never
//! the other way around.

pub mod access;
pub mod error;
pub mod estados;
pub mod geo;
pub mod pagination;
pub mod roles;
pub mod slug;
pub mod types;
