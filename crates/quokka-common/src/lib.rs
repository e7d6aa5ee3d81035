//! Common utilities for the Quokka unit engine.
//!
//! This crate provides shared infrastructure used by the engine crates:
//! - **Warning System** - colored terminal output for degraded-input diagnostics

pub mod warning;
