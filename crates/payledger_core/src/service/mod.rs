//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep console/HTTP adapters decoupled from storage details.

pub mod payroll_service;
