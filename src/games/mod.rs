//! Reference game fixtures.

pub mod simple;
