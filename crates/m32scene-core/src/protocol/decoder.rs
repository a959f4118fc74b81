use log::{debug, trace};

use super::layout;
use super::path::{ChannelPath, ChannelProperty};
use super::reader::{LineReader, first_quoted};
use super::value::{map_eq_type, map_insert_type, parse_frequency, parse_level, parse_width};
use crate::scene::{InputChannel, MixerScene};

/// Decode scene text into a fresh [`MixerScene`].
///
/// Never fails: unknown sections, malformed lines and out-of-range indices
/// are skipped, and unparsable fields fall back to defaults.
///
/// # Examples
/// ```
/// use m32scene_core::decode_scene;
///
/// let scene = decode_scene("#4.0# \"Show\"\n/ch/02/fader -5.0\n/ch/99/fader +10\n");
/// assert_eq!(scene.name, "Show");
/// assert_eq!(scene.channels[1].fader, -5.0);
/// assert_eq!(scene.channels.len(), 32);
/// ```
pub fn decode_scene(text: &str) -> MixerScene {
    let mut scene = MixerScene::default();
    for line in text.lines() {
        apply_line(&mut scene, line);
    }
    scene
}

/// Apply a single protocol line to `scene`.
pub fn apply_line(scene: &mut MixerScene, line: &str) {
    let reader = LineReader::new(line);
    let text = reader.line();
    if text.is_empty() {
        return;
    }

    if text.starts_with(layout::HEADER_PREFIX) {
        match first_quoted(text) {
            Some(name) => scene.name = name.to_string(),
            None => debug!("scene header without a quoted name: {text}"),
        }
        return;
    }

    if !text.starts_with(layout::CHANNEL_PREFIX) {
        trace!("skipping line outside channel section: {text}");
        return;
    }

    let Some(path) = ChannelPath::parse(reader.path()) else {
        trace!("skipping unmodeled channel path: {}", reader.path());
        return;
    };
    // Indices are validated by ChannelPath::parse.
    let channel = &mut scene.channels[path.channel];

    match path.property {
        ChannelProperty::Config => apply_config(channel, &reader),
        ChannelProperty::Preamp => apply_preamp(channel, &reader),
        ChannelProperty::EqSummary => channel.equalizer_enabled = reader.has_on(),
        ChannelProperty::EqBand(band) => apply_eq_band(channel, band, &reader),
        ChannelProperty::Pan => {
            if let Some(token) = reader.arg(0) {
                channel.set_pan(parse_level(token) / layout::PAN_SCALE);
            }
        }
        ChannelProperty::MixSummary => {
            trace!("mix summary is informational: {text}");
        }
        ChannelProperty::MixSend(send) => apply_send(channel, send, &reader),
        ChannelProperty::Fader => {
            if let Some(token) = reader.arg(0) {
                channel.fader = parse_level(token);
            }
        }
    }
}

fn apply_config(channel: &mut InputChannel, reader: &LineReader<'_>) {
    if let Some(name) = reader.config_name() {
        channel.name = name.to_string();
    } else if let Some(raw) = reader.arg(0) {
        debug!("config line without a quoted name, using raw token: {raw}");
        channel.name = raw.trim_matches('"').to_string();
    }
}

// Fields are not tagged; the layout is trim ... slope frequency, so the first
// number is the gain and the last one the low-cut frequency.
fn apply_preamp(channel: &mut InputChannel, reader: &LineReader<'_>) {
    let numbers = reader.numeric_fields();
    if let Some(first) = numbers.first() {
        channel.gain = parse_level(first);
    }
    if let [_, .., last] = numbers.as_slice() {
        channel.low_cut_filter_frequency = parse_frequency(last);
    }
    if reader.has_on() {
        channel.low_cut_filter = true;
    }
}

fn apply_eq_band(channel: &mut InputChannel, band: usize, reader: &LineReader<'_>) {
    let kind = reader.arg(0).map(map_eq_type);
    let frequency = reader.arg(1).map(parse_frequency);
    let gain = reader.arg(2).map(parse_level);
    let width = reader.arg(3).and_then(|token| {
        let width = parse_width(token);
        if width.is_none() {
            debug!("keeping previous EQ width, unparsable token: {token}");
        }
        width
    });
    channel.equalizer.set_band(band, kind, frequency, gain, width);
}

fn apply_send(channel: &mut InputChannel, send: usize, reader: &LineReader<'_>) {
    let target = &mut channel.bus_sends[send];
    if let Some(flag) = reader.arg(0) {
        target.is_muted = flag == layout::OFF;
    }
    if let Some(level) = reader.arg(1) {
        target.level = parse_level(level);
    }
    // arg(2) is the send pan, not modeled. Sends without a tap token are
    // pre-fader.
    target.kind = map_insert_type(reader.arg(3).unwrap_or(""));
}
