//! Scene-file (`.scn`) protocol codec.
//!
//! The codec follows a layered structure:
//! - `layout`: path prefixes, sentinels and fixed cardinalities (source of truth)
//! - `reader`: line tokenization and text conventions (quotes, numeric scans)
//! - `path`: typed decoding of `/ch/<n>/<property>[/<sub>]` paths
//! - `value` / `format`: token parsers and their inverse formatters
//! - `decoder` / `encoder`: scene-level conversion
//!
//! Everything here is pure and works on in-memory text; file access lives in
//! `source`. Decoding never fails on content: malformed tokens fall back to
//! defaults and unknown lines are skipped.

pub mod decoder;
pub mod encoder;
pub mod format;
pub mod layout;
pub mod path;
pub(crate) mod reader;
pub mod value;

pub use decoder::{apply_line, decode_scene};
pub use encoder::encode_scene;
