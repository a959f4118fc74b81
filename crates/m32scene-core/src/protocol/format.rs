//! Token formatters, the inverse of `value`.

use super::layout;
use crate::scene::{EqBandType, InsertType};

/// Render a frequency in Hz.
///
/// Values in the k-notation range keep two remainder digits with trailing
/// zeros stripped; everything else is plain decimal.
///
/// # Examples
/// ```
/// use m32scene_core::protocol::format::format_frequency;
///
/// assert_eq!(format_frequency(124.7), "124.7");
/// assert_eq!(format_frequency(80.0), "80");
/// assert_eq!(format_frequency(1970.0), "1k97");
/// assert_eq!(format_frequency(10020.0), "10k02");
/// assert_eq!(format_frequency(1500.0), "1k5");
/// ```
pub fn format_frequency(hz: f64) -> String {
    if !hz.is_finite() {
        return "0".to_string();
    }
    if !layout::K_NOTATION_RANGE.contains(&hz) {
        return format_decimal(hz);
    }

    let khz = format!("{:.2}", hz / 1000.0);
    let (whole, fraction) = khz.split_once('.').unwrap_or((khz.as_str(), ""));
    format!("{}k{}", whole, fraction.trim_end_matches('0'))
}

/// Render a level in dB: the minimum sentinel, or signed with one decimal.
///
/// # Examples
/// ```
/// use m32scene_core::protocol::format::format_level;
///
/// assert_eq!(format_level(-90.0), "-oo");
/// assert_eq!(format_level(-120.0), "-oo");
/// assert_eq!(format_level(3.0), "+3.0");
/// assert_eq!(format_level(-12.5), "-12.5");
/// ```
pub fn format_level(db: f64) -> String {
    if db.is_nan() || db <= layout::MIN_LEVEL_DB {
        return layout::MIN_LEVEL_TOKEN.to_string();
    }
    format!("{:+.1}", positive_zero(db))
}

/// Render a gain in dB, always signed.
///
/// # Examples
/// ```
/// use m32scene_core::protocol::format::format_gain;
///
/// assert_eq!(format_gain(30.0), "+30.0");
/// assert_eq!(format_gain(-4.25), "-4.25");
/// assert_eq!(format_gain(0.0), "+0.0");
/// ```
pub fn format_gain(db: f64) -> String {
    let db = positive_zero(db);
    if db.fract() != 0.0 && db.abs() < 100.0 {
        format!("{:+.2}", db)
    } else {
        format!("{:+.1}", db)
    }
}

/// Render a Q factor without losing precision.
pub fn format_width(q: f64) -> String {
    if q.fract() == 0.0 {
        format!("{:.1}", q)
    } else {
        q.to_string()
    }
}

pub fn eq_type_token(kind: EqBandType) -> &'static str {
    match kind {
        EqBandType::Peq => "PEQ",
        EqBandType::HighShelf => "HShv",
        EqBandType::LowShelf => "LShv",
        EqBandType::LowCut => "LCut",
        EqBandType::HighCut => "HCut",
    }
}

pub fn insert_type_token(kind: InsertType) -> &'static str {
    match kind {
        InsertType::PreFader => "PRE",
        InsertType::PostFader => "POST",
    }
}

pub fn on_off(on: bool) -> &'static str {
    if on { layout::ON } else { layout::OFF }
}

fn format_decimal(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}

fn positive_zero(value: f64) -> f64 {
    if value == 0.0 { 0.0 } else { value }
}
