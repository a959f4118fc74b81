use std::fs;
use std::path::Path;

use log::debug;

use super::SceneError;
use crate::protocol::{decode_scene, encode_scene};
use crate::scene::MixerScene;

/// Read and decode a scene file. Fails only when the file cannot be read.
pub fn decode_scene_file(path: &Path) -> Result<MixerScene, SceneError> {
    let text = fs::read_to_string(path)?;
    debug!("decoding {} ({} bytes)", path.display(), text.len());
    Ok(decode_scene(&text))
}

/// Encode a scene and write it to `path`, replacing any existing file.
pub fn encode_scene_file(scene: &MixerScene, path: &Path) -> Result<(), SceneError> {
    let text = encode_scene(scene);
    debug!("writing {} ({} bytes)", path.display(), text.len());
    fs::write(path, text)?;
    Ok(())
}
