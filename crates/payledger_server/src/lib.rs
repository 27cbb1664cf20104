//! HTTP/JSON front-end for PayLedger.
//!
//! # Responsibility
//! - Expose the payroll gateway as a small REST API under `/api/employees`.
//! - Serve the bundled static front-end.
//!
//! # Invariants
//! - All payroll semantics live in `payledger_core`; this crate only
//!   translates requests and renders wire shapes.

pub mod error;
pub mod extract;
pub mod handler;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::{build_app, build_router};
pub use state::AppState;
