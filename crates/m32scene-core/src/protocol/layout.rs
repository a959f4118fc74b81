pub const HEADER_PREFIX: char = '#';
pub const CHANNEL_PREFIX: &str = "/ch/";
/// Version marker written at the start of the header line.
pub const HEADER_VERSION: &str = "#4.0#";

pub const CHANNEL_COUNT: usize = 32;
pub const EQ_BAND_COUNT: usize = 4;
pub const SEND_COUNT: usize = 16;

/// Minimum level in dB, written as `MIN_LEVEL_TOKEN`.
pub const MIN_LEVEL_DB: f64 = -90.0;
pub const MIN_LEVEL_TOKEN: &str = "-oo";
pub const MIN_LEVEL_ALIASES: [&str; 2] = ["-oo", "-inf"];
pub const INFINITY_SYMBOL: char = '\u{221e}';

/// Pan is written on a ±100 scale.
pub const PAN_SCALE: f64 = 100.0;

/// Frequencies in this range are written in k-notation (`1k97`).
pub const K_NOTATION_RANGE: std::ops::Range<f64> = 1000.0..100_000.0;

pub const ON: &str = "ON";
pub const OFF: &str = "OFF";

pub const PROPERTY_CONFIG: &str = "config";
pub const PROPERTY_PREAMP: &str = "preamp";
pub const PROPERTY_EQ: &str = "eq";
pub const PROPERTY_PAN: &str = "pan";
pub const PROPERTY_MIX: &str = "mix";
pub const PROPERTY_FADER: &str = "fader";

/// Fixed trailing fields of an encoded `config` line (icon, colour).
pub const CONFIG_ICON: &str = "1";
pub const CONFIG_COLOUR: &str = "WH";
/// Fixed high-pass slope written on `preamp` lines.
pub const PREAMP_SLOPE: &str = "24";
