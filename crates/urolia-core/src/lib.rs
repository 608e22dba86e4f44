//! urolia-core
//!
//! Pure domain types for the urology decision-support engine: risk
//! categories, recommendation plans, reports, and the report assembler.
//! No I/O and no rule content: this is the shared vocabulary of the
//! Urolia system.

pub mod assemble;
pub mod error;
pub mod models;
