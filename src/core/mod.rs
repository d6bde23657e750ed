//! Core library components.
//!
//! This module contains the reusable logic for value encryption, the
//! secret store and its container file, version tags, and the environment
//! bridge.

pub mod cipher;
pub mod config;
pub mod constants;
pub mod entry;
pub mod env;
pub mod store;
pub mod validation;
pub mod version;
