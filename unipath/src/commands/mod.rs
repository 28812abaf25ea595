//! Command implementations for the unipath CLI.

pub mod demo;
pub mod unify;
