//! CLI command implementations

pub mod expand;
pub mod json_output;
pub mod keys;
pub mod options;
pub mod scale;
