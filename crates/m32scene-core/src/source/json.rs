use std::fs;
use std::path::Path;

use log::debug;
use serde_json::Value;

use super::SceneError;
use crate::scene::MixerScene;
use crate::structured::{from_structured, to_structured};

/// Read a JSON scene document.
///
/// Text that is not valid JSON is a [`SceneError::Json`]; valid JSON with
/// missing or mistyped fields is recovered with defaults.
pub fn load_json_file(path: &Path) -> Result<MixerScene, SceneError> {
    let text = fs::read_to_string(path)?;
    let value: Value = serde_json::from_str(&text)?;
    debug!("loaded JSON scene from {}", path.display());
    Ok(from_structured(&value))
}

/// Write a scene as JSON, newline-terminated.
pub fn save_json_file(scene: &MixerScene, path: &Path, pretty: bool) -> Result<(), SceneError> {
    let value = to_structured(scene);
    let mut text = if pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    text.push('\n');
    debug!("writing JSON scene to {}", path.display());
    fs::write(path, text)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scene.json");
        let mut scene = MixerScene::new("Json");
        scene.channels[0].set_pan(-0.25);
        scene.channels[7].bus_sends[3].level = -17.3;

        for pretty in [false, true] {
            save_json_file(&scene, &path, pretty).unwrap();
            assert_eq!(load_json_file(&path).unwrap(), scene);
        }
    }

    #[test]
    fn computed_values_survive_json_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("computed.json");
        let mut scene = MixerScene::new("Computed");
        for (idx, channel) in scene.channels.iter_mut().enumerate() {
            let n = idx as f64;
            channel.gain = n * 0.1 + n / 7.0 - 12.0;
            channel.fader = -n / 3.0;
            channel.low_cut_filter_frequency = 20.0 + n * 3.3;
            channel.set_pan(n / 31.0 * 2.0 - 1.0);
            for (b, band) in channel.equalizer.bands.iter_mut().enumerate() {
                band.frequency = 31.1 * (1.0 + n + b as f64) / 3.0;
                band.gain = (n - b as f64) * 0.1 / 0.3;
                band.width = 0.3 + b as f64 / 7.0;
            }
            for (s, send) in channel.bus_sends.iter_mut().enumerate() {
                send.level = -(s as f64) * 0.7 - n / 9.0;
            }
        }

        for pretty in [false, true] {
            save_json_file(&scene, &path, pretty).unwrap();
            assert_eq!(load_json_file(&path).unwrap(), scene);
        }
    }

    #[test]
    fn invalid_json_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(load_json_file(&path), Err(SceneError::Json(_))));
    }

    #[test]
    fn missing_json_file_is_io() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_json_file(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, SceneError::Io(_)));
    }
}
