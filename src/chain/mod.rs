//! Short-circuiting transform chains.
//!
//! A chain threads an integer through an ordered sequence of steps. Each step
//! either produces a new value or declines with `None`; the first `None` is
//! absorbing, so the remaining steps are never invoked and the chain's result
//! is `None`.

pub mod builder;
pub mod run;
pub mod step;
pub mod trace;

pub use builder::{Chain, ChainBuilder};
pub use run::run_chain;
pub use step::{FnStep, Step};
pub use trace::{ChainTrace, StepRecord};
