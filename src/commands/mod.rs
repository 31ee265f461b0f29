//! CLI command implementations for shortchain.
//!
//! Available commands:
//! - **run**: Resolve a chain from config and overrides, run it, and report the result
//! - **steps**: List the transform catalogue
//! - **init**: Write a default `.shortchain.toml`

pub mod init;
pub mod run;
pub mod steps;

pub use init::{init_config, init_config_in};
pub use run::{execute_chain, handle_run, RunConfig};
pub use steps::list_steps;
