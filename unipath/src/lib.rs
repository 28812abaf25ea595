// unipath/src/lib.rs
//! # unipath CLI Application
//!
//! This crate provides the command-line interface for `unipath-core`: it reads
//! text from a file or stdin, rewrites its paths and writes the result.

pub mod cli;
pub mod commands;
pub mod logger;
