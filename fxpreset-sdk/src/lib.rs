//! # fxpreset-sdk
//!
//! Convenience layer over [`fxpreset_types`]: factory functions for the
//! effect kinds the plugin host ships, and preset file output.
//!
//! Parameter keys are a documentation-level contract with the host;
//! nothing here validates that a key or kind is one the host actually
//! recognizes.

pub mod builders;
pub mod preset;

pub use builders::*;
pub use preset::save_preset;
