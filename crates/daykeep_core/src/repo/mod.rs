//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the explicit store capability the host saves items through.
//! - Isolate SQLite query details from service/business orchestration.
//!
//! # Invariants
//! - Repository writes must enforce `Item::validate()` before persistence.
//! - Save failures surface as descriptive `RepoError` values and are passed
//!   through unchanged; repositories never retry or suppress them.

pub mod item_repo;
pub mod tag_repo;
