use serde::Serialize;

use crate::effect::Effect;

/// Ordered list of effects; insertion order is the host's processing
/// order. Serializes transparently as the bare JSON array.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Chain {
    effects: Vec<Effect>,
}

impl Chain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an effect. Chainable, like the host SDKs.
    pub fn add(&mut self, effect: Effect) -> &mut Self {
        self.effects.push(effect);
        self
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Effect> {
        self.effects.iter()
    }

    pub fn effects(&self) -> &[Effect] {
        &self.effects
    }

    /// Render the chain as a two-space-indented JSON array.
    ///
    /// Pure function of the chain state: does not mutate, and repeated
    /// calls on an unchanged chain yield byte-identical output.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
