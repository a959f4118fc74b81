use super::format::{
    eq_type_token, format_frequency, format_gain, format_level, format_width, insert_type_token,
    on_off,
};
use super::layout;
use crate::scene::{InputChannel, MixerScene};

/// Encode a scene as protocol text, one newline-terminated line per field
/// group.
///
/// Pan is not written, and the `mix` summary line only carries the mute
/// flag and fader for readability; neither survives a decode.
///
/// # Examples
/// ```
/// use m32scene_core::{MixerScene, decode_scene, encode_scene};
///
/// let mut scene = MixerScene::new("Show");
/// scene.channels[0].fader = -6.5;
/// let text = encode_scene(&scene);
/// assert!(text.starts_with("#4.0# \"Show\"\n"));
/// assert!(text.contains("/ch/01/fader -6.5\n"));
/// assert_eq!(decode_scene(&text).channels[0].fader, -6.5);
/// ```
pub fn encode_scene(scene: &MixerScene) -> String {
    let mut lines = Vec::with_capacity(1 + layout::CHANNEL_COUNT * (8 + layout::SEND_COUNT));
    lines.push(format!(
        "{} \"{}\"",
        layout::HEADER_VERSION,
        quotable(&scene.name)
    ));
    for (idx, channel) in scene.channels.iter().enumerate() {
        encode_channel(&mut lines, idx + 1, channel);
    }

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

fn encode_channel(lines: &mut Vec<String>, number: usize, channel: &InputChannel) {
    let prefix = format!("{}{:02}", layout::CHANNEL_PREFIX, number);

    lines.push(format!(
        "{prefix}/{} \"{}\" {} {} {}",
        layout::PROPERTY_CONFIG,
        quotable(&channel.name),
        layout::CONFIG_ICON,
        layout::CONFIG_COLOUR,
        number
    ));
    lines.push(format!(
        "{prefix}/{} {} {} {} {} {}",
        layout::PROPERTY_PREAMP,
        format_gain(channel.gain),
        layout::OFF,
        on_off(channel.low_cut_filter),
        layout::PREAMP_SLOPE,
        format_frequency(channel.low_cut_filter_frequency)
    ));

    lines.push(format!(
        "{prefix}/{} {}",
        layout::PROPERTY_EQ,
        on_off(channel.equalizer_enabled)
    ));
    for (idx, band) in channel.equalizer.bands.iter().enumerate() {
        lines.push(format!(
            "{prefix}/{}/{} {} {} {} {}",
            layout::PROPERTY_EQ,
            idx + 1,
            eq_type_token(band.kind),
            format_frequency(band.frequency),
            format_gain(band.gain),
            format_width(band.width)
        ));
    }

    lines.push(format!(
        "{prefix}/{} {} {} {} +0 {} {}",
        layout::PROPERTY_MIX,
        on_off(!channel.is_muted),
        format_level(channel.fader),
        layout::OFF,
        layout::OFF,
        layout::MIN_LEVEL_TOKEN
    ));
    for (idx, send) in channel.bus_sends.iter().enumerate() {
        lines.push(format!(
            "{prefix}/{}/{:02} {} {} +0 {}",
            layout::PROPERTY_MIX,
            idx + 1,
            on_off(!send.is_muted),
            format_level(send.level),
            insert_type_token(send.kind)
        ));
    }

    lines.push(format!(
        "{prefix}/{} {}",
        layout::PROPERTY_FADER,
        format_level(channel.fader)
    ));
}

// The line grammar has no escape for a double quote inside a name.
fn quotable(name: &str) -> String {
    name.replace('"', "")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::decode_scene;
    use crate::scene::{EqBandType, InsertType};

    #[test]
    fn emits_fixed_line_order() {
        let text = encode_scene(&MixerScene::new("Order"));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 1 + 32 * 25);
        assert_eq!(lines[0], "#4.0# \"Order\"");
        assert_eq!(lines[1], "/ch/01/config \"\" 1 WH 1");
        assert_eq!(lines[2], "/ch/01/preamp +30.0 OFF OFF 24 100");
        assert_eq!(lines[3], "/ch/01/eq OFF");
        assert_eq!(lines[4], "/ch/01/eq/1 PEQ 1k +0.0 2.0");
        assert_eq!(lines[8], "/ch/01/mix ON +0.0 OFF +0 OFF -oo");
        assert_eq!(lines[9], "/ch/01/mix/01 ON -oo +0 POST");
        assert_eq!(lines[24], "/ch/01/mix/16 ON -oo +0 POST");
        assert_eq!(lines[25], "/ch/01/fader +0.0");
        assert_eq!(lines[26], "/ch/02/config \"\" 1 WH 2");
        assert!(text.ends_with("/ch/32/fader +0.0\n"));
    }

    #[test]
    fn encodes_channel_fields() {
        let mut scene = MixerScene::default();
        let channel = &mut scene.channels[9];
        channel.name = "Bass DI".to_string();
        channel.gain = 12.25;
        channel.low_cut_filter = true;
        channel.low_cut_filter_frequency = 81.5;
        channel.equalizer_enabled = true;
        channel.equalizer.bands[2].kind = EqBandType::HighShelf;
        channel.equalizer.bands[2].frequency = 1970.0;
        channel.equalizer.bands[2].gain = -4.5;
        channel.equalizer.bands[2].width = 0.7;
        channel.bus_sends[4].is_muted = true;
        channel.bus_sends[4].level = -3.0;
        channel.bus_sends[4].kind = InsertType::PreFader;

        let text = encode_scene(&scene);
        assert!(text.contains("/ch/10/config \"Bass DI\" 1 WH 10\n"));
        assert!(text.contains("/ch/10/preamp +12.25 OFF ON 24 81.5\n"));
        assert!(text.contains("/ch/10/eq ON\n"));
        assert!(text.contains("/ch/10/eq/3 HShv 1k97 -4.50 0.7\n"));
        assert!(text.contains("/ch/10/mix/05 OFF -3.0 +0 PRE\n"));
    }

    #[test]
    fn quotes_in_names_are_dropped() {
        let mut scene = MixerScene::new("The \"Big\" Show");
        scene.channels[0].name = "\"Vox\"".to_string();
        let decoded = decode_scene(&encode_scene(&scene));
        assert_eq!(decoded.name, "The Big Show");
        assert_eq!(decoded.channels[0].name, "Vox");
    }

    #[test]
    fn encoded_fields_survive_decode() {
        let mut scene = MixerScene::new("Round");
        let channel = &mut scene.channels[31];
        channel.gain = -6.5;
        channel.low_cut_filter = true;
        channel.low_cut_filter_frequency = 300.0;
        channel.fader = -90.0;
        channel.bus_sends[15].level = 10.0;
        channel.equalizer.bands[0].kind = EqBandType::LowCut;
        channel.equalizer.bands[0].frequency = 10020.0;

        let decoded = decode_scene(&encode_scene(&scene));
        assert_eq!(decoded, scene);
    }

    #[test]
    fn pan_and_mute_do_not_survive_decode() {
        let mut scene = MixerScene::default();
        scene.channels[0].set_pan(0.5);
        scene.channels[0].is_muted = true;

        let decoded = decode_scene(&encode_scene(&scene));
        assert_eq!(decoded.channels[0].pan(), 0.0);
        assert!(!decoded.channels[0].is_muted);
    }
}
