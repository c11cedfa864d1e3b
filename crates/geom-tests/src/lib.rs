//! Integration tests for geom-rs crates.
//!
//! This crate contains end-to-end tests that exercise the facade and the
//! interaction between `geom-math` and `geom-random`.

#[cfg(test)]
mod reference;
