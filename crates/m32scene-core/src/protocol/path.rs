//! Channel path descriptors.
//!
//! A `/ch/...` path is decoded once into a [`ChannelPath`]; the decoder then
//! branches on the closed [`ChannelProperty`] set instead of on strings.
//! Indices are validated here, so every descriptor addresses a real slot.

use super::layout;

/// Modeled channel properties. Sub-indices are 0-based and in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelProperty {
    Config,
    Preamp,
    EqSummary,
    EqBand(usize),
    Pan,
    MixSummary,
    MixSend(usize),
    Fader,
}

/// A decoded `/ch/<n>/<property>[/<sub>]` path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelPath {
    /// 0-based channel slot.
    pub channel: usize,
    pub property: ChannelProperty,
}

impl ChannelPath {
    /// Decode a path token. Returns `None` for paths outside the channel
    /// section, unmodeled properties and out-of-range indices.
    ///
    /// # Examples
    /// ```
    /// use m32scene_core::protocol::path::{ChannelPath, ChannelProperty};
    ///
    /// let path = ChannelPath::parse("/ch/05/eq/2").unwrap();
    /// assert_eq!(path.channel, 4);
    /// assert_eq!(path.property, ChannelProperty::EqBand(1));
    /// assert!(ChannelPath::parse("/ch/99/fader").is_none());
    /// assert!(ChannelPath::parse("/ch/01/gate").is_none());
    /// ```
    pub fn parse(token: &str) -> Option<Self> {
        let rest = token.strip_prefix(layout::CHANNEL_PREFIX)?;
        let mut segments = rest.split('/');
        let channel = one_based_index(segments.next()?, layout::CHANNEL_COUNT)?;
        let name = segments.next()?;
        let sub = segments.next();
        if segments.next().is_some() {
            return None;
        }

        let property = match (name, sub) {
            (layout::PROPERTY_CONFIG, None) => ChannelProperty::Config,
            (layout::PROPERTY_PREAMP, None) => ChannelProperty::Preamp,
            (layout::PROPERTY_EQ, None) => ChannelProperty::EqSummary,
            (layout::PROPERTY_EQ, Some(band)) => {
                ChannelProperty::EqBand(one_based_index(band, layout::EQ_BAND_COUNT)?)
            }
            (layout::PROPERTY_PAN, None) => ChannelProperty::Pan,
            (layout::PROPERTY_MIX, None) => ChannelProperty::MixSummary,
            (layout::PROPERTY_MIX, Some(send)) => {
                ChannelProperty::MixSend(one_based_index(send, layout::SEND_COUNT)?)
            }
            (layout::PROPERTY_FADER, None) => ChannelProperty::Fader,
            _ => return None,
        };

        Some(Self { channel, property })
    }
}

/// Map a 1-based decimal index onto `0..count`.
fn one_based_index(segment: &str, count: usize) -> Option<usize> {
    let number: usize = segment.parse().ok()?;
    (1..=count).contains(&number).then(|| number - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_property() {
        let cases = [
            ("/ch/01/config", ChannelProperty::Config),
            ("/ch/01/preamp", ChannelProperty::Preamp),
            ("/ch/01/eq", ChannelProperty::EqSummary),
            ("/ch/01/eq/4", ChannelProperty::EqBand(3)),
            ("/ch/01/pan", ChannelProperty::Pan),
            ("/ch/01/mix", ChannelProperty::MixSummary),
            ("/ch/01/mix/16", ChannelProperty::MixSend(15)),
            ("/ch/01/fader", ChannelProperty::Fader),
        ];
        for (token, property) in cases {
            let path = ChannelPath::parse(token).unwrap();
            assert_eq!(path.channel, 0, "{token}");
            assert_eq!(path.property, property, "{token}");
        }
    }

    #[test]
    fn accepts_unpadded_channel_numbers() {
        assert_eq!(ChannelPath::parse("/ch/7/fader").unwrap().channel, 6);
        assert_eq!(ChannelPath::parse("/ch/32/fader").unwrap().channel, 31);
    }

    #[test]
    fn rejects_out_of_range_indices() {
        assert!(ChannelPath::parse("/ch/00/fader").is_none());
        assert!(ChannelPath::parse("/ch/33/fader").is_none());
        assert!(ChannelPath::parse("/ch/01/eq/0").is_none());
        assert!(ChannelPath::parse("/ch/01/eq/9").is_none());
        assert!(ChannelPath::parse("/ch/01/mix/17").is_none());
        assert!(ChannelPath::parse("/ch/01/mix/x").is_none());
    }

    #[test]
    fn rejects_foreign_and_malformed_paths() {
        assert!(ChannelPath::parse("/bus/01/mix").is_none());
        assert!(ChannelPath::parse("/ch/ab/fader").is_none());
        assert!(ChannelPath::parse("/ch/01").is_none());
        assert!(ChannelPath::parse("/ch/01/fader/2").is_none());
        assert!(ChannelPath::parse("/ch/01/eq/1/2").is_none());
        assert!(ChannelPath::parse("/ch/01/dyn").is_none());
    }
}
