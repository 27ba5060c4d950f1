//! Helpers shared by several days

pub mod geometry;
pub mod grid;
pub mod math;
pub mod memo;
pub mod parse;
