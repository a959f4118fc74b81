use m32scene_core::{MIN_LEVEL_DB, MixerScene};
use serde::Serialize;

/// Compact overview printed by `inspect`.
#[derive(Debug, Serialize)]
pub struct SceneSummary {
    pub name: String,
    pub channels: Vec<ChannelSummary>,
}

#[derive(Debug, Serialize)]
pub struct ChannelSummary {
    /// 1-based console channel number.
    pub channel: usize,
    pub name: String,
    pub gain_db: f64,
    pub fader_db: f64,
    pub pan: f64,
    pub eq_enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub low_cut_hz: Option<f64>,
    /// Buses (1-based) receiving an unmuted send above the minimum level.
    pub active_sends: Vec<usize>,
}

impl SceneSummary {
    pub fn from_scene(scene: &MixerScene) -> Self {
        let channels = scene
            .channels
            .iter()
            .enumerate()
            .map(|(idx, channel)| ChannelSummary {
                channel: idx + 1,
                name: channel.name.clone(),
                gain_db: channel.gain,
                fader_db: channel.fader,
                pan: channel.pan(),
                eq_enabled: channel.equalizer_enabled,
                low_cut_hz: channel
                    .low_cut_filter
                    .then_some(channel.low_cut_filter_frequency),
                active_sends: channel
                    .bus_sends
                    .iter()
                    .enumerate()
                    .filter(|(_, send)| !send.is_muted && send.level > MIN_LEVEL_DB)
                    .map(|(bus, _)| bus + 1)
                    .collect(),
            })
            .collect();

        Self {
            name: scene.name.clone(),
            channels,
        }
    }
}
