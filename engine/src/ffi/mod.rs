//! FFI boundary (PyO3)
//!
//! Minimal Python surface over the core: a simulator class plus
//! module-level risk functions. Dict-in, dict-out; field names match the
//! Rust structs and are the stable contract the reporting layer keys on.

pub mod risk;
pub mod simulator;
pub mod types;
