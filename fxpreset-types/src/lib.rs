//! # fxpreset-types
//!
//! Data model for the fxpreset SDK: effect-chain presets that render to
//! the indented JSON document consumed by the plugin host.
//!
//! A [`Chain`] is an ordered list of [`Effect`]s; each effect carries a
//! `type` discriminator plus named parameters, which are either bare
//! scalars ([`ParamValue`]) or UI-aware [`Parameter`] objects.

mod chain;
mod effect;
mod param;

pub use chain::Chain;
pub use effect::{Effect, EffectKeyError, EffectValue};
pub use param::{ParamValue, Parameter};
