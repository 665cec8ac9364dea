//! Core types and definitions for the artillery duel.
//!
//! This crate defines the vocabulary shared across the other crates:
//! player identity, enums, constants, configuration, events and errors.
//! It has no dependency on any I/O or runtime.

pub mod config;
pub mod constants;
pub mod enums;
pub mod errors;
pub mod events;
pub mod types;
