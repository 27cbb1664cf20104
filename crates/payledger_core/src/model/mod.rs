//! Payroll domain model.
//!
//! # Responsibility
//! - Define the canonical employee record shared by the console and HTTP
//!   front-ends.
//! - Keep derived salary computation and partial-update merge rules in one
//!   place.
//!
//! # Invariants
//! - Monetary fields are fixed-point decimals; floating point is never used
//!   for money.
//! - Gross/net values are derived on demand, never stored.

pub mod employee;
