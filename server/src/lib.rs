//! Homestack configuration plugin host library.
//!
//! The binary in `main.rs` wires this router to a TCP listener; tests
//! drive it directly through tower.

pub mod error;
pub mod handler;

// vim: ts=4
