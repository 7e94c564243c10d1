// src/core/mod.rs

//! Core data structures and types

pub mod error;
pub mod state;
pub mod threshold;

// Re-export public types for convenient access via `soft_gates::core::TypeName`
pub use error::{GateError, WireId};
pub use state::SoftRegister;
pub use threshold::Threshold;

pub mod constants;
pub use constants::{BIT_MAX, BIT_MIN, DEFAULT_THRESHOLD};
