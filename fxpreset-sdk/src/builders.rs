//! Factory functions for the host's effect kinds.
//!
//! Each function is a pure, stateless builder returning one [`Effect`]
//! whose parameter keys match what the host's effect implementations
//! read from the preset document.

use fxpreset_types::{Effect, Parameter};

/// Gain stage, level in decibels.
pub fn gain(db: f64) -> Effect {
    Effect::new("Gain").with("gain_db", db)
}

/// Gain stage with a linear factor instead of decibels.
pub fn gain_linear(factor: f64) -> Effect {
    Effect::new("Gain").with("gain", factor)
}

/// Gain stage exposed as a vertical slider, -60..+12 dB.
pub fn gain_ui(db: f64) -> Effect {
    Effect::new("Gain").with(
        "gain_db",
        Parameter::new(db)
            .ui("Slider")
            .style("LinearVertical")
            .range(-60.0, 12.0),
    )
}

/// Filter response shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    LowPass,
    HighPass,
    BandPass,
}

impl FilterMode {
    pub const ALL: [FilterMode; 3] =
        [FilterMode::LowPass, FilterMode::HighPass, FilterMode::BandPass];

    pub fn as_str(self) -> &'static str {
        match self {
            FilterMode::LowPass => "LowPass",
            FilterMode::HighPass => "HighPass",
            FilterMode::BandPass => "BandPass",
        }
    }
}

/// IIR filter. The sub-kind goes under `mode`; the effect-level `type`
/// key is taken by the discriminator.
pub fn filter(mode: FilterMode, frequency: f64, q: f64) -> Effect {
    Effect::new("Filter")
        .with("mode", mode.as_str())
        .with("frequency", frequency)
        .with("q", q)
}

/// Filter with full widget metadata: mode combo box, rotary frequency
/// knob over the audible range, linear Q slider.
pub fn filter_ui(mode: FilterMode, frequency: f64, q: f64) -> Effect {
    Effect::new("Filter")
        .with(
            "mode",
            Parameter::new(mode.as_str())
                .ui("ComboBox")
                .options(FilterMode::ALL.iter().map(|m| m.as_str())),
        )
        .with(
            "frequency",
            Parameter::new(frequency)
                .ui("Slider")
                .style("Rotary")
                .range(20.0, 20000.0),
        )
        .with("q", Parameter::new(q).ui("Slider").range(0.1, 10.0))
}

/// Tanh waveshaper, drive in decibels.
pub fn distortion(drive_db: f64) -> Effect {
    Effect::new("Distortion").with("drive", drive_db)
}

/// Distortion with a rotary drive knob. No bounds: the host treats the
/// knob as unbounded drive.
pub fn distortion_ui(drive_db: f64) -> Effect {
    Effect::new("Distortion").with(
        "drive",
        Parameter::new(drive_db).ui("Slider").style("Rotary"),
    )
}

/// Feedback delay. `time` in seconds, `feedback` and `mix` 0..1.
pub fn delay(time: f64, feedback: f64, mix: f64) -> Effect {
    Effect::new("Delay")
        .with("time", time)
        .with("feedback", feedback)
        .with("mix", mix)
}

/// Reverb. `room_size` and `wet` 0..1.
pub fn reverb(room_size: f64, wet: f64) -> Effect {
    Effect::new("Reverb")
        .with("room_size", room_size)
        .with("wet", wet)
}

/// Compressor. Threshold in dB, attack/release in milliseconds.
pub fn compressor(threshold: f64, ratio: f64, attack: f64, release: f64) -> Effect {
    Effect::new("Compressor")
        .with("threshold", threshold)
        .with("ratio", ratio)
        .with("attack", attack)
        .with("release", release)
}

/// Limiter. Threshold in dB, release in milliseconds.
pub fn limiter(threshold: f64, release: f64) -> Effect {
    Effect::new("Limiter")
        .with("threshold", threshold)
        .with("release", release)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn to_value(e: &Effect) -> serde_json::Value {
        serde_json::to_value(e).unwrap()
    }

    #[test]
    fn gain_is_a_bare_scalar() {
        assert_eq!(
            to_value(&gain(-6.0)),
            json!({ "type": "Gain", "gain_db": -6.0 })
        );
    }

    #[test]
    fn gain_linear_uses_the_linear_key() {
        assert_eq!(to_value(&gain_linear(0.5)), json!({ "type": "Gain", "gain": 0.5 }));
    }

    #[test]
    fn gain_ui_object_shape() {
        let v = to_value(&gain_ui(-6.0));
        assert_eq!(v["type"], "Gain");
        assert_eq!(
            v["gain_db"],
            json!({
                "value": -6.0,
                "ui": "Slider",
                "style": "LinearVertical",
                "min": -60.0,
                "max": 12.0
            })
        );
    }

    #[test]
    fn filter_keys() {
        let v = to_value(&filter(FilterMode::HighPass, 2000.0, 0.707));
        assert_eq!(v["type"], "Filter");
        assert_eq!(v["mode"], "HighPass");
        assert_eq!(v["frequency"], 2000.0);
        assert_eq!(v["q"], 0.707);
    }

    #[test]
    fn filter_ui_mode_combo_box() {
        let v = to_value(&filter_ui(FilterMode::BandPass, 500.0, 2.0));
        assert_eq!(v["mode"]["value"], "BandPass");
        assert_eq!(v["mode"]["ui"], "ComboBox");
        assert_eq!(v["mode"]["options"], json!(["LowPass", "HighPass", "BandPass"]));
        assert_eq!(v["frequency"]["style"], "Rotary");
        assert_eq!(v["frequency"]["min"], 20.0);
        assert_eq!(v["frequency"]["max"], 20000.0);
        assert_eq!(v["q"]["min"], 0.1);
        assert_eq!(v["q"]["max"], 10.0);
    }

    #[test]
    fn distortion_ui_has_no_bounds() {
        let v = to_value(&distortion_ui(20.0));
        assert_eq!(v["type"], "Distortion");
        assert_eq!(v["drive"]["value"], 20.0);
        assert_eq!(v["drive"]["style"], "Rotary");
        assert!(v["drive"].get("min").is_none());
        assert!(v["drive"].get("max").is_none());
    }

    #[test]
    fn remaining_builders_carry_their_host_keys() {
        let v = to_value(&delay(0.3, 0.5, 0.3));
        assert_eq!(v["type"], "Delay");
        assert_eq!(v["time"], 0.3);
        assert_eq!(v["feedback"], 0.5);
        assert_eq!(v["mix"], 0.3);

        let v = to_value(&reverb(0.8, 0.5));
        assert_eq!(v["type"], "Reverb");
        assert_eq!(v["room_size"], 0.8);
        assert_eq!(v["wet"], 0.5);

        let v = to_value(&compressor(-18.0, 4.0, 10.0, 100.0));
        assert_eq!(v["type"], "Compressor");
        assert_eq!(v["threshold"], -18.0);
        assert_eq!(v["ratio"], 4.0);
        assert_eq!(v["attack"], 10.0);
        assert_eq!(v["release"], 100.0);

        let v = to_value(&limiter(-1.0, 50.0));
        assert_eq!(v["type"], "Limiter");
        assert_eq!(v["threshold"], -1.0);
        assert_eq!(v["release"], 50.0);
    }
}
