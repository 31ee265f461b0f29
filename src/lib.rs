//! shortchain - short-circuiting integer transform chains
//!
//! A chain threads an integer through an ordered list of try-transform steps.
//! A step that cannot produce a value returns `None`; that absence is the
//! chain's result and no later step is invoked.
//!
//! ```rust
//! use shortchain::{half, run_chain};
//!
//! // 20 -> 10 -> 5, and 5 has no half: the other seven steps never run.
//! assert_eq!(run_chain(20, [half; 10]), None);
//! assert_eq!(run_chain(1024, [half; 10]), Some(1));
//! ```

// Export modules for library usage
pub mod chain;
pub mod cli;
pub mod commands;
pub mod config;
pub mod effects;
pub mod errors;
pub mod output;
pub mod transforms;

// Re-export commonly used types
pub use crate::chain::{run_chain, Chain, ChainBuilder, ChainTrace, FnStep, Step, StepRecord};
pub use crate::errors::ChainError;
pub use crate::output::{ChainReport, OutputFormat};
pub use crate::transforms::{decrement, half, negate, third, StepKind};
