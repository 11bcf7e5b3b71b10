//! justscale CLI library.
//!
//! This crate provides the command implementations, root-note prompt and
//! logging setup behind the `justscale` binary.

pub mod commands;
pub mod input;
pub mod logging;
