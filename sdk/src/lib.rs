#![warn(clippy::pedantic)]
//! Collects Solidity custom error declarations from a source tree and renders
//! them into a single generated contract.
//!
//! The pipeline is: [`discover_source_files`] → [`extract_errors`] →
//! [`aggregate`] → [`generate_contract`], driven end to end by [`collect`].

pub mod collector;
pub use collector::*;

pub mod contract;
pub use contract::*;

pub mod custom_error;
pub use custom_error::*;

pub mod error_set;
pub use error_set::*;

pub mod errors;

pub mod source_file;
pub use source_file::*;

pub mod utils;
