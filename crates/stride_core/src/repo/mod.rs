//! Record store contracts and the in-memory implementation.
//!
//! # Responsibility
//! - Define one repository trait per entity kind; these traits are the seam a
//!   durable backend plugs into.
//! - Own all entity state and apply derived-field rules on create/update.
//!
//! # Invariants
//! - Unknown IDs are reported as `None`/`false`, never as `RepoError`.
//! - Each collection is mutated atomically with respect to other operations
//!   on the same collection.
//! - Updates are shallow merges; list-valued fields are replaced wholesale.

pub mod memory_store;
pub mod record_repo;
