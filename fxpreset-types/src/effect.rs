use std::fmt;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::param::{ParamValue, Parameter};

/// Key that carries the effect discriminator in the wire format.
const TYPE_KEY: &str = "type";

/// A value stored under an effect parameter key: either a bare scalar
/// or the UI-aware object form.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum EffectValue {
    Scalar(ParamValue),
    Param(Parameter),
}

impl From<ParamValue> for EffectValue {
    fn from(v: ParamValue) -> Self {
        EffectValue::Scalar(v)
    }
}

impl From<Parameter> for EffectValue {
    fn from(p: Parameter) -> Self {
        EffectValue::Param(p)
    }
}

impl From<f64> for EffectValue {
    fn from(v: f64) -> Self {
        EffectValue::Scalar(v.into())
    }
}

impl From<i64> for EffectValue {
    fn from(v: i64) -> Self {
        EffectValue::Scalar(v.into())
    }
}

impl From<i32> for EffectValue {
    fn from(v: i32) -> Self {
        EffectValue::Scalar(v.into())
    }
}

impl From<bool> for EffectValue {
    fn from(v: bool) -> Self {
        EffectValue::Scalar(v.into())
    }
}

impl From<&str> for EffectValue {
    fn from(v: &str) -> Self {
        EffectValue::Scalar(v.into())
    }
}

impl From<String> for EffectValue {
    fn from(v: String) -> Self {
        EffectValue::Scalar(v.into())
    }
}

/// Rejected effect parameter key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EffectKeyError {
    /// `type` is reserved for the effect discriminator.
    ReservedKey,
    /// The key is already present; JSON object keys must be unique.
    DuplicateKey(String),
}

impl fmt::Display for EffectKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EffectKeyError::ReservedKey => {
                write!(f, "'{}' is reserved for the effect discriminator", TYPE_KEY)
            }
            EffectKeyError::DuplicateKey(key) => {
                write!(f, "duplicate effect parameter key '{}'", key)
            }
        }
    }
}

impl std::error::Error for EffectKeyError {}

/// One processing stage in a chain: a `type` discriminator plus named
/// parameters in insertion order.
///
/// Keys collide at construction time, not on the wire: `set` rejects
/// the reserved `type` key and any key already present. The host makes
/// no such check, so a colliding key would otherwise turn into a
/// silently invalid JSON object.
#[derive(Debug, Clone, PartialEq)]
pub struct Effect {
    kind: String,
    entries: Vec<(String, EffectValue)>,
}

impl Effect {
    /// Empty effect of the given kind ("Gain", "Filter", ...).
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            entries: Vec::new(),
        }
    }

    /// The `type` discriminator.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Append a parameter entry. Fails on the reserved `type` key and
    /// on duplicates.
    pub fn set(
        &mut self,
        key: impl Into<String>,
        value: impl Into<EffectValue>,
    ) -> Result<(), EffectKeyError> {
        let key = key.into();
        if key == TYPE_KEY {
            return Err(EffectKeyError::ReservedKey);
        }
        if self.entries.iter().any(|(k, _)| *k == key) {
            return Err(EffectKeyError::DuplicateKey(key));
        }
        self.entries.push((key, value.into()));
        Ok(())
    }

    /// Chainable `set` for builder code with static keys.
    ///
    /// Panics on a reserved or duplicate key; that is a bug in the
    /// calling builder, not a runtime condition.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<EffectValue>) -> Self {
        if let Err(e) = self.set(key, value) {
            panic!("invalid effect parameter: {}", e);
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&EffectValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Number of parameter entries, excluding the discriminator.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parameter entries in insertion order.
    pub fn params(&self) -> impl Iterator<Item = (&str, &EffectValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl Serialize for Effect {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // `type` first, then parameters in insertion order.
        let mut map = serializer.serialize_map(Some(self.entries.len() + 1))?;
        map.serialize_entry(TYPE_KEY, &self.kind)?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
