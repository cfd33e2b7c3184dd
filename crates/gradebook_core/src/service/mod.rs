//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate identity, aggregation and repository calls into the
//!   save/load record use-cases.
//! - Keep host/UI layers decoupled from storage details.

pub mod record_service;
