//! File access for scene text and JSON documents.
//!
//! Each operation is a single read or write of the whole file; parsing stays
//! in `protocol` and `structured`.

mod json;
mod scn;

pub use json::{load_json_file, save_json_file};
pub use scn::{decode_scene_file, encode_scene_file};

use thiserror::Error;

/// Errors surfaced by file-level operations.
///
/// Content problems in scene text are never errors; only I/O failures and
/// JSON that is not syntactically valid are reported.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
