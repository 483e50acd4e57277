use serde::Serialize;

/// A bare parameter scalar. Serializes untagged, so a `Float(-6.0)`
/// renders as `-6.0` directly under its key.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    Float(f64),
    Int(i64),
    Bool(bool),
    Text(String),
}

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        ParamValue::Float(v)
    }
}

impl From<i64> for ParamValue {
    fn from(v: i64) -> Self {
        ParamValue::Int(v)
    }
}

impl From<i32> for ParamValue {
    fn from(v: i32) -> Self {
        ParamValue::Int(v as i64)
    }
}

impl From<bool> for ParamValue {
    fn from(v: bool) -> Self {
        ParamValue::Bool(v)
    }
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        ParamValue::Text(v.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(v: String) -> Self {
        ParamValue::Text(v)
    }
}

/// UI-aware parameter: a value plus optional widget metadata.
///
/// The wire format is sparse. A field is left out of the JSON object
/// when it is unset, and also when it holds an "empty" value: a blank
/// `ui`/`style` string, an empty `options` list, or a `min`/`max` bound
/// of exactly `0.0`. The last rule means an explicit bound of zero is
/// indistinguishable from no bound at all; the host format works that
/// way and the SDK reproduces it rather than fixing it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Parameter {
    pub value: ParamValue,
    #[serde(skip_serializing_if = "is_blank")]
    pub ui: Option<String>,
    #[serde(skip_serializing_if = "is_blank")]
    pub style: Option<String>,
    #[serde(skip_serializing_if = "is_zero_or_unset")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "is_zero_or_unset")]
    pub max: Option<f64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
}

fn is_blank(v: &Option<String>) -> bool {
    v.as_deref().map_or(true, str::is_empty)
}

fn is_zero_or_unset(v: &Option<f64>) -> bool {
    v.map_or(true, |x| x == 0.0)
}

impl Parameter {
    /// Parameter with no UI metadata; only `value` serializes.
    pub fn new(value: impl Into<ParamValue>) -> Self {
        Self {
            value: value.into(),
            ui: None,
            style: None,
            min: None,
            max: None,
            options: Vec::new(),
        }
    }

    /// Set the widget class ("Slider", "ComboBox", ...).
    pub fn ui(mut self, ui: impl Into<String>) -> Self {
        self.ui = Some(ui.into());
        self
    }

    /// Set the widget sub-variant ("Rotary", "LinearVertical", ...).
    pub fn style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    /// Set numeric bounds for ranged controls.
    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    /// Set the choice list for discrete controls.
    pub fn options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }
}
