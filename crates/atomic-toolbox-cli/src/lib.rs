//! Command-line front end for Atomic Toolbox.

pub mod cli;
pub mod logging;
