//! # Shaft Calculations
//!
//! Calculation modules follow one pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! ## LLM Integration
//!
//! All types are designed for LLM consumption:
//! - Comprehensive rustdoc with examples
//! - Clean JSON serialization
//! - Structured error responses
//!
//! ## Available Calculations
//!
//! - [`shaft`] - Two-bearing shaft reactions and bearing sizing

pub mod shaft;

// Re-export commonly used types
pub use shaft::{ReactionResult, ShaftInput};
