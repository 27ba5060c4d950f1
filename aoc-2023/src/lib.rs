//! Advent of Code 2023 puzzle solutions with automatic registration
//!
//! Each day lives in [`days`] and registers itself with the harness through
//! the `AutoRegisterSolver` derive macro. Linking this crate is enough for
//! `RegistryBuilder::register_all_plugins` to find every solver.

pub mod days;
pub mod utils;
