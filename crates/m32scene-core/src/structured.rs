//! Structured (JSON value) representation of a scene.
//!
//! `to_structured` is lossless. `from_structured` applies the same
//! best-effort policy as the text decoder: wrong types and missing keys take
//! the default, pan is clamped, and lists are padded or truncated to their
//! fixed lengths.

use log::{debug, warn};
use serde_json::{Map, Value, json};

use crate::scene::{
    BusSend, EqBandType, EqualizerBand, FourBandEqualizer, InputChannel, InsertType, MixerScene,
};

/// Convert a scene into a JSON object.
///
/// Channels are nested under `input_channels.channels`, the document
/// layout of the scene converter's JSON files.
///
/// # Examples
/// ```
/// use m32scene_core::{MixerScene, to_structured};
///
/// let value = to_structured(&MixerScene::new("Show"));
/// assert_eq!(value["name"], "Show");
/// let channels = &value["input_channels"]["channels"];
/// assert_eq!(channels.as_array().unwrap().len(), 32);
/// assert_eq!(channels[0]["equalizer"]["bands"][0]["type"], "peq");
/// ```
pub fn to_structured(scene: &MixerScene) -> Value {
    json!({
        "name": scene.name,
        "input_channels": {
            "channels": scene.channels.iter().map(channel_to_value).collect::<Vec<_>>(),
        },
    })
}

/// Build a scene from a JSON value, defaulting anything missing or malformed.
///
/// Channels are read from `input_channels.channels`; a flat top-level
/// `channels` list is accepted as well.
///
/// # Examples
/// ```
/// use m32scene_core::from_structured;
/// use serde_json::json;
///
/// let scene = from_structured(&json!({
///     "name": "Partial",
///     "input_channels": { "channels": [{ "name": "Kick", "pan": 4.0 }] },
/// }));
/// assert_eq!(scene.channels[0].name, "Kick");
/// assert_eq!(scene.channels[0].pan(), 1.0);
/// assert_eq!(scene.channels[1].gain, 30.0);
/// ```
pub fn from_structured(value: &Value) -> MixerScene {
    let mut scene = MixerScene::default();
    let Some(root) = value.as_object() else {
        warn!("structured scene is not an object, using defaults");
        return scene;
    };

    scene.name = string_field(root, "name", "");
    let channels = channel_list(root);
    if channels.len() > scene.channels.len() {
        debug!(
            "truncating {} structured channels to {}",
            channels.len(),
            scene.channels.len()
        );
    }
    for (slot, item) in scene.channels.iter_mut().zip(channels) {
        *slot = channel_from_value(item);
    }
    scene
}

fn channel_list(root: &Map<String, Value>) -> &[Value] {
    if let Some(nested) = root.get("input_channels").and_then(Value::as_object) {
        return array_field(nested, "channels");
    }
    if root.contains_key("channels") {
        return array_field(root, "channels");
    }
    warn!("structured scene has no channel list, using default channels");
    &[]
}

fn channel_to_value(channel: &InputChannel) -> Value {
    json!({
        "name": channel.name,
        "gain": channel.gain,
        "low_cut_filter": channel.low_cut_filter,
        "low_cut_filter_frequency": channel.low_cut_filter_frequency,
        "is_muted": channel.is_muted,
        "equalizer": {
            "bands": channel.equalizer.bands.iter().map(band_to_value).collect::<Vec<_>>(),
        },
        "equalizer_enabled": channel.equalizer_enabled,
        "pan": channel.pan(),
        "bus_sends": channel.bus_sends.iter().map(send_to_value).collect::<Vec<_>>(),
        "fader": channel.fader,
    })
}

fn band_to_value(band: &EqualizerBand) -> Value {
    json!({
        "type": band.kind.as_key(),
        "frequency": band.frequency,
        "gain": band.gain,
        "width": band.width,
    })
}

fn send_to_value(send: &BusSend) -> Value {
    json!({
        "is_muted": send.is_muted,
        "type": send.kind.as_key(),
        "level": send.level,
    })
}

fn channel_from_value(value: &Value) -> InputChannel {
    let mut channel = InputChannel::default();
    let Some(map) = value.as_object() else {
        return channel;
    };

    channel.name = string_field(map, "name", &channel.name);
    channel.gain = f64_field(map, "gain", channel.gain);
    channel.low_cut_filter = bool_field(map, "low_cut_filter", channel.low_cut_filter);
    channel.low_cut_filter_frequency = f64_field(
        map,
        "low_cut_filter_frequency",
        channel.low_cut_filter_frequency,
    );
    channel.is_muted = bool_field(map, "is_muted", channel.is_muted);
    channel.equalizer = equalizer_from_value(map.get("equalizer"));
    channel.equalizer_enabled = bool_field(map, "equalizer_enabled", channel.equalizer_enabled);
    channel.set_pan(f64_field(map, "pan", channel.pan()));
    for (slot, item) in channel.bus_sends.iter_mut().zip(array_field(map, "bus_sends")) {
        *slot = send_from_value(item);
    }
    channel.fader = f64_field(map, "fader", channel.fader);
    channel
}

fn equalizer_from_value(value: Option<&Value>) -> FourBandEqualizer {
    let mut equalizer = FourBandEqualizer::default();
    let bands = value
        .and_then(Value::as_object)
        .map(|map| array_field(map, "bands"))
        .unwrap_or(&[]);
    for (slot, item) in equalizer.bands.iter_mut().zip(bands) {
        *slot = band_from_value(item);
    }
    equalizer
}

fn band_from_value(value: &Value) -> EqualizerBand {
    let mut band = EqualizerBand::default();
    let Some(map) = value.as_object() else {
        return band;
    };
    band.kind = map
        .get("type")
        .and_then(Value::as_str)
        .and_then(EqBandType::from_key)
        .unwrap_or(band.kind);
    band.frequency = f64_field(map, "frequency", band.frequency);
    band.gain = f64_field(map, "gain", band.gain);
    band.width = f64_field(map, "width", band.width);
    band
}

fn send_from_value(value: &Value) -> BusSend {
    let mut send = BusSend::default();
    let Some(map) = value.as_object() else {
        return send;
    };
    send.is_muted = bool_field(map, "is_muted", send.is_muted);
    send.kind = map
        .get("type")
        .and_then(Value::as_str)
        .and_then(InsertType::from_key)
        .unwrap_or(send.kind);
    send.level = f64_field(map, "level", send.level);
    send
}

fn array_field<'a>(map: &'a Map<String, Value>, key: &str) -> &'a [Value] {
    map.get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

fn string_field(map: &Map<String, Value>, key: &str, default: &str) -> String {
    map.get(key)
        .and_then(Value::as_str)
        .unwrap_or(default)
        .to_string()
}

fn f64_field(map: &Map<String, Value>, key: &str, default: f64) -> f64 {
    map.get(key).and_then(Value::as_f64).unwrap_or(default)
}

fn bool_field(map: &Map<String, Value>, key: &str, default: bool) -> bool {
    map.get(key).and_then(Value::as_bool).unwrap_or(default)
}
