//! Typed in-memory scene model.
//!
//! Every collection in the model has a fixed cardinality (32 channels,
//! 4 EQ bands, 16 bus sends) and is stored as an array, so no decode or
//! structural import can ever change its length. Defaults are built per slot.

use crate::protocol::layout;

/// EQ band shape.
///
/// # Examples
/// ```
/// use m32scene_core::EqBandType;
///
/// assert_eq!(EqBandType::default(), EqBandType::Peq);
/// assert_eq!(EqBandType::HighShelf.as_key(), "high_shelf");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EqBandType {
    #[default]
    Peq,
    LowShelf,
    HighShelf,
    LowCut,
    HighCut,
}

impl EqBandType {
    pub const ALL: [EqBandType; 5] = [
        EqBandType::Peq,
        EqBandType::LowShelf,
        EqBandType::HighShelf,
        EqBandType::LowCut,
        EqBandType::HighCut,
    ];

    /// Stable key used by the structured (JSON) representation.
    pub fn as_key(self) -> &'static str {
        match self {
            EqBandType::Peq => "peq",
            EqBandType::LowShelf => "low_shelf",
            EqBandType::HighShelf => "high_shelf",
            EqBandType::LowCut => "low_cut",
            EqBandType::HighCut => "high_cut",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_key() == key)
    }
}

/// Tap point of a bus send.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InsertType {
    PreFader,
    #[default]
    PostFader,
}

impl InsertType {
    pub fn as_key(self) -> &'static str {
        match self {
            InsertType::PreFader => "pre_fader",
            InsertType::PostFader => "post_fader",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "pre_fader" => Some(InsertType::PreFader),
            "post_fader" => Some(InsertType::PostFader),
            _ => None,
        }
    }
}

/// One band of the four-band channel EQ.
///
/// # Examples
/// ```
/// use m32scene_core::{EqBandType, EqualizerBand};
///
/// let band = EqualizerBand::default();
/// assert_eq!(band.kind, EqBandType::Peq);
/// assert_eq!(band.frequency, 1000.0);
/// assert_eq!(band.width, 2.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct EqualizerBand {
    pub kind: EqBandType,
    /// Centre or corner frequency in Hz.
    pub frequency: f64,
    /// Gain in dB.
    pub gain: f64,
    /// Width as a Q factor.
    pub width: f64,
}

impl Default for EqualizerBand {
    fn default() -> Self {
        Self {
            kind: EqBandType::Peq,
            frequency: 1000.0,
            gain: 0.0,
            width: 2.0,
        }
    }
}

/// Four EQ bands in console order (band 1 first).
#[derive(Debug, Clone, PartialEq)]
pub struct FourBandEqualizer {
    pub bands: [EqualizerBand; layout::EQ_BAND_COUNT],
}

impl Default for FourBandEqualizer {
    fn default() -> Self {
        Self {
            bands: std::array::from_fn(|_| EqualizerBand::default()),
        }
    }
}

impl FourBandEqualizer {
    /// Update the given fields of band `index` (0-based), leaving `None`
    /// fields untouched. Returns `false` when `index` is out of range.
    ///
    /// # Examples
    /// ```
    /// use m32scene_core::{EqBandType, FourBandEqualizer};
    ///
    /// let mut eq = FourBandEqualizer::default();
    /// assert!(eq.set_band(1, Some(EqBandType::LowShelf), Some(120.0), None, None));
    /// assert_eq!(eq.bands[1].frequency, 120.0);
    /// assert_eq!(eq.bands[1].gain, 0.0);
    /// assert!(!eq.set_band(4, None, None, Some(3.0), None));
    /// ```
    pub fn set_band(
        &mut self,
        index: usize,
        kind: Option<EqBandType>,
        frequency: Option<f64>,
        gain: Option<f64>,
        width: Option<f64>,
    ) -> bool {
        let Some(band) = self.bands.get_mut(index) else {
            return false;
        };
        if let Some(kind) = kind {
            band.kind = kind;
        }
        if let Some(frequency) = frequency {
            band.frequency = frequency;
        }
        if let Some(gain) = gain {
            band.gain = gain;
        }
        if let Some(width) = width {
            band.width = width;
        }
        true
    }
}

/// Per-channel send to one of the 16 mix buses.
///
/// # Examples
/// ```
/// use m32scene_core::{BusSend, InsertType, MIN_LEVEL_DB};
///
/// let send = BusSend::default();
/// assert!(!send.is_muted);
/// assert_eq!(send.kind, InsertType::PostFader);
/// assert_eq!(send.level, MIN_LEVEL_DB);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BusSend {
    pub is_muted: bool,
    pub kind: InsertType,
    /// Send level in dB; `MIN_LEVEL_DB` means off.
    pub level: f64,
}

impl Default for BusSend {
    fn default() -> Self {
        Self {
            is_muted: false,
            kind: InsertType::PostFader,
            level: layout::MIN_LEVEL_DB,
        }
    }
}

/// One of the 32 input channels.
///
/// `pan` is kept private so that every write goes through [`set_pan`],
/// which clamps to `[-1.0, 1.0]`.
///
/// [`set_pan`]: InputChannel::set_pan
#[derive(Debug, Clone, PartialEq)]
pub struct InputChannel {
    pub name: String,
    /// Preamp gain in dB.
    pub gain: f64,
    pub low_cut_filter: bool,
    pub low_cut_filter_frequency: f64,
    pub is_muted: bool,
    pub equalizer: FourBandEqualizer,
    pub equalizer_enabled: bool,
    pan: f64,
    pub bus_sends: [BusSend; layout::SEND_COUNT],
    /// Fader level in dB.
    pub fader: f64,
}

impl Default for InputChannel {
    fn default() -> Self {
        Self {
            name: String::new(),
            gain: 30.0,
            low_cut_filter: false,
            low_cut_filter_frequency: 100.0,
            is_muted: false,
            equalizer: FourBandEqualizer::default(),
            equalizer_enabled: false,
            pan: 0.0,
            bus_sends: std::array::from_fn(|_| BusSend::default()),
            fader: 0.0,
        }
    }
}

impl InputChannel {
    /// Pan position, -1.0 (left) to 1.0 (right).
    pub fn pan(&self) -> f64 {
        self.pan
    }

    /// Set the pan position, clamped to `[-1.0, 1.0]`. NaN maps to centre.
    ///
    /// # Examples
    /// ```
    /// use m32scene_core::InputChannel;
    ///
    /// let mut channel = InputChannel::default();
    /// channel.set_pan(1.7);
    /// assert_eq!(channel.pan(), 1.0);
    /// ```
    pub fn set_pan(&mut self, pan: f64) {
        self.pan = if pan.is_nan() { 0.0 } else { pan.clamp(-1.0, 1.0) };
    }
}

/// A full mixer scene: a name and exactly 32 input channels.
///
/// # Examples
/// ```
/// use m32scene_core::MixerScene;
///
/// let scene = MixerScene::default();
/// assert_eq!(scene.channels.len(), 32);
/// assert_eq!(scene.channels[0].gain, 30.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MixerScene {
    pub name: String,
    pub channels: [InputChannel; layout::CHANNEL_COUNT],
}

impl Default for MixerScene {
    fn default() -> Self {
        Self {
            name: String::new(),
            channels: std::array::from_fn(|_| InputChannel::default()),
        }
    }
}

impl MixerScene {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Channel by 1-based console number.
    pub fn channel(&self, number: usize) -> Option<&InputChannel> {
        number.checked_sub(1).and_then(|idx| self.channels.get(idx))
    }

    pub fn channel_mut(&mut self, number: usize) -> Option<&mut InputChannel> {
        number.checked_sub(1).and_then(|idx| self.channels.get_mut(idx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_independent_per_slot() {
        let mut scene = MixerScene::default();
        scene.channels[0].equalizer.bands[0].gain = 6.0;
        scene.channels[0].bus_sends[3].level = -10.0;

        assert_eq!(scene.channels[1].equalizer.bands[0].gain, 0.0);
        assert_eq!(scene.channels[0].equalizer.bands[1].gain, 0.0);
        assert_eq!(scene.channels[0].bus_sends[4].level, layout::MIN_LEVEL_DB);
    }

    #[test]
    fn channel_lookup_is_one_based() {
        let mut scene = MixerScene::default();
        scene.channel_mut(32).unwrap().name = "Last".to_string();
        assert_eq!(scene.channels[31].name, "Last");
        assert!(scene.channel(0).is_none());
        assert!(scene.channel(33).is_none());
    }

    #[test]
    fn pan_is_clamped() {
        let mut channel = InputChannel::default();
        channel.set_pan(-3.0);
        assert_eq!(channel.pan(), -1.0);
        channel.set_pan(0.25);
        assert_eq!(channel.pan(), 0.25);
        channel.set_pan(f64::NAN);
        assert_eq!(channel.pan(), 0.0);
    }

    #[test]
    fn enum_keys_round_trip() {
        for kind in EqBandType::ALL {
            assert_eq!(EqBandType::from_key(kind.as_key()), Some(kind));
        }
        assert_eq!(InsertType::from_key("pre_fader"), Some(InsertType::PreFader));
        assert_eq!(InsertType::from_key("PRE"), None);
    }
}
