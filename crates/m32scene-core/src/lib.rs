//! M32 scene codec.
//!
//! This crate converts between the mixer's line-oriented scene text (`.scn`)
//! and a typed [`MixerScene`], and between that model and a structured JSON
//! value. Only input-channel settings are modeled: name, preamp gain and
//! low-cut, four-band EQ, pan, fader and the 16 bus sends.
//!
//! Invariants:
//! - A scene always has 32 channels, each with 4 EQ bands and 16 sends.
//! - Decoding never fails on content; only file I/O can fail.
//! - For scenes decoded from well-formed files, `decode(encode(scene))`
//!   reproduces every encoded field. Pan and the channel mute are not
//!   encoded and come back as defaults.
//!
//! # Examples
//! ```no_run
//! use std::path::Path;
//!
//! use m32scene_core::{decode_scene_file, save_json_file};
//!
//! let scene = decode_scene_file(Path::new("show.scn"))?;
//! println!("scene: {}", scene.name);
//! save_json_file(&scene, Path::new("show.json"), true)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod protocol;
mod scene;
mod source;
mod structured;

pub use protocol::layout::{CHANNEL_COUNT, EQ_BAND_COUNT, MIN_LEVEL_DB, SEND_COUNT};
pub use protocol::{apply_line, decode_scene, encode_scene};
pub use scene::{
    BusSend, EqBandType, EqualizerBand, FourBandEqualizer, InputChannel, InsertType, MixerScene,
};
pub use source::{
    SceneError, decode_scene_file, encode_scene_file, load_json_file, save_json_file,
};
pub use structured::{from_structured, to_structured};
