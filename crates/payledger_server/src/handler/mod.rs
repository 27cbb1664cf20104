//! API handlers, one module per resource.

pub mod employees;
