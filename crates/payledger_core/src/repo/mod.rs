//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the data-access contract shared by both front-ends.
//! - Isolate SQLite query details from service/business orchestration.
//!
//! # Invariants
//! - Absence of a matching row is a normal result (`false`/`None`), never an
//!   error; only store-level failures propagate as errors.
//! - Repository reads reject invalid persisted state instead of masking it.

pub mod employee_repo;
