//! Functional core for the itemstore project.
//!
//! Domain types, validation, and the storage trait. No I/O happens here;
//! backends live in the `itemstore` binary crate.

pub mod item;
pub mod storage;
