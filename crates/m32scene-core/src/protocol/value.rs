//! Token parsers.
//!
//! Every parser here always returns a value: unparsable input maps to a
//! documented fallback instead of an error, so one bad token never costs the
//! rest of a line.

use super::layout;
use super::reader::first_number;
use crate::scene::{EqBandType, InsertType};

/// Parse a frequency in Hz from plain decimal or k-notation.
///
/// The first `k` (either case) acts as the decimal point of a kilohertz
/// value. Empty or unparsable input yields `0.0`.
///
/// # Examples
/// ```
/// use m32scene_core::protocol::value::parse_frequency;
///
/// assert_eq!(parse_frequency("124.7"), 124.7);
/// assert_eq!(parse_frequency("1k97"), 1970.0);
/// assert_eq!(parse_frequency("10k02"), 10020.0);
/// assert_eq!(parse_frequency("bogus"), 0.0);
/// ```
pub fn parse_frequency(token: &str) -> f64 {
    let token = token.trim();
    let Some(pos) = token.find(['k', 'K']) else {
        return parse_finite(token).unwrap_or(0.0);
    };

    let mut numeric = String::with_capacity(token.len() + 1);
    numeric.push_str(&token[..pos]);
    numeric.push('.');
    numeric.push_str(&token[pos + 1..]);
    if numeric.ends_with('.') {
        numeric.push('0');
    }
    parse_finite(&numeric)
        .map(|khz| round_hz(khz * 1000.0))
        .unwrap_or(0.0)
}

/// Parse a level or gain in dB.
///
/// `-oo`, `-inf`, the infinity sign and empty input map to
/// [`MIN_LEVEL_DB`](layout::MIN_LEVEL_DB). Otherwise a leading `+` is
/// stripped and the token parsed as a float; failing that, the first number
/// embedded in the token is used, and failing that the minimum level.
///
/// # Examples
/// ```
/// use m32scene_core::protocol::value::parse_level;
///
/// assert_eq!(parse_level("-oo"), -90.0);
/// assert_eq!(parse_level("+3.0"), 3.0);
/// assert_eq!(parse_level("-12.5dB"), -12.5);
/// assert_eq!(parse_level("junk"), -90.0);
/// ```
pub fn parse_level(token: &str) -> f64 {
    let token = token.trim();
    if token.is_empty()
        || token.contains(layout::INFINITY_SYMBOL)
        || layout::MIN_LEVEL_ALIASES
            .iter()
            .any(|alias| token.eq_ignore_ascii_case(alias))
    {
        return layout::MIN_LEVEL_DB;
    }

    let unsigned = token.strip_prefix('+').unwrap_or(token);
    parse_finite(unsigned)
        .or_else(|| first_number(token).and_then(parse_finite))
        .unwrap_or(layout::MIN_LEVEL_DB)
}

/// Classify an EQ type token.
///
/// Checks run in a fixed order and the first match wins: the `peq`/`veq`
/// prefix, then high shelf, low shelf, low cut, high cut. Anything else is
/// a parametric band.
///
/// # Examples
/// ```
/// use m32scene_core::EqBandType;
/// use m32scene_core::protocol::value::map_eq_type;
///
/// assert_eq!(map_eq_type("VEQ"), EqBandType::Peq);
/// assert_eq!(map_eq_type("HShv"), EqBandType::HighShelf);
/// assert_eq!(map_eq_type("LShv"), EqBandType::LowShelf);
/// assert_eq!(map_eq_type("LCut"), EqBandType::LowCut);
/// assert_eq!(map_eq_type("???"), EqBandType::Peq);
/// ```
pub fn map_eq_type(token: &str) -> EqBandType {
    let t = token.trim().to_ascii_lowercase();
    if t.starts_with("peq") || t.starts_with("veq") {
        EqBandType::Peq
    } else if t.starts_with('h') && (t.contains("sh") || t.contains("shv") || t.contains("shelf")) {
        EqBandType::HighShelf
    } else if t.starts_with('l') && (t.contains("sh") || t.contains("shelf")) {
        EqBandType::LowShelf
    } else if t.contains("lcut") {
        EqBandType::LowCut
    } else if t.contains("hcut") {
        EqBandType::HighCut
    } else {
        EqBandType::Peq
    }
}

/// Classify a send tap token. Empty, `PRE*` and `IN*` style tokens are
/// pre-fader; everything else is post-fader.
///
/// # Examples
/// ```
/// use m32scene_core::InsertType;
/// use m32scene_core::protocol::value::map_insert_type;
///
/// assert_eq!(map_insert_type(""), InsertType::PreFader);
/// assert_eq!(map_insert_type("IN/LC"), InsertType::PreFader);
/// assert_eq!(map_insert_type("POST"), InsertType::PostFader);
/// ```
pub fn map_insert_type(token: &str) -> InsertType {
    let t = token.trim().to_ascii_uppercase();
    if t.is_empty() || t.contains("PRE") || t.contains("IN") {
        InsertType::PreFader
    } else {
        InsertType::PostFader
    }
}

/// Parse a Q factor. Unlike the other parsers this one can fail, so callers
/// keep the previous width on `None`.
pub fn parse_width(token: &str) -> Option<f64> {
    let token = token.trim();
    parse_finite(token.strip_prefix('+').unwrap_or(token))
}

fn parse_finite(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|v| v.is_finite())
}

// 1k97 * 1000 is 1969.9999999999998 in binary floating point.
fn round_hz(hz: f64) -> f64 {
    (hz * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frequency_k_notation_variants() {
        assert_eq!(parse_frequency("2k"), 2000.0);
        assert_eq!(parse_frequency("2K5"), 2500.0);
        assert_eq!(parse_frequency("20k0"), 20000.0);
        assert_eq!(parse_frequency(" 450 "), 450.0);
    }

    #[test]
    fn frequency_fallbacks() {
        assert_eq!(parse_frequency(""), 0.0);
        assert_eq!(parse_frequency("k"), 0.0);
        assert_eq!(parse_frequency("inf"), 0.0);
        assert_eq!(parse_frequency("1kk2"), 0.0);
    }

    #[test]
    fn level_sentinels() {
        assert_eq!(parse_level(""), layout::MIN_LEVEL_DB);
        assert_eq!(parse_level("-OO"), layout::MIN_LEVEL_DB);
        assert_eq!(parse_level("-inf"), layout::MIN_LEVEL_DB);
        assert_eq!(parse_level("-\u{221e}"), layout::MIN_LEVEL_DB);
    }

    #[test]
    fn level_rejects_non_finite_floats() {
        assert_eq!(parse_level("nan"), layout::MIN_LEVEL_DB);
        assert_eq!(parse_level("inf"), layout::MIN_LEVEL_DB);
    }

    #[test]
    fn level_signed_values() {
        assert_eq!(parse_level("+0.0"), 0.0);
        assert_eq!(parse_level("-89.5"), -89.5);
        assert_eq!(parse_level("+10"), 10.0);
    }

    #[test]
    fn eq_type_long_names() {
        assert_eq!(map_eq_type("high_shelf"), EqBandType::HighShelf);
        assert_eq!(map_eq_type("low_shelf"), EqBandType::LowShelf);
        assert_eq!(map_eq_type("hcut"), EqBandType::HighCut);
        assert_eq!(map_eq_type("PEQ"), EqBandType::Peq);
    }

    #[test]
    fn eq_type_check_order_prefers_high_shelf() {
        assert_eq!(map_eq_type("hshelf_lshv"), EqBandType::HighShelf);
        assert_eq!(map_eq_type("lcut_hcut"), EqBandType::LowCut);
    }

    #[test]
    fn insert_type_is_case_insensitive() {
        assert_eq!(map_insert_type("pre"), InsertType::PreFader);
        assert_eq!(map_insert_type("EQ->"), InsertType::PostFader);
        assert_eq!(map_insert_type("grp"), InsertType::PostFader);
    }

    #[test]
    fn width_keeps_failures_visible() {
        assert_eq!(parse_width("0.35"), Some(0.35));
        assert_eq!(parse_width("wide"), None);
    }
}
