//! Command-line argument handling and reporting for the solver binary.

pub(crate) mod cli;
