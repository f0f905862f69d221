//! Shared helpers for decoder tests.

/// Instruction word builder.
pub mod builder;

pub use builder::InstructionBuilder;
