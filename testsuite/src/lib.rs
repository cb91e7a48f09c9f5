//! Fixture helpers shared by the conversion integration tests.

use serde_json::Value;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Write `contents` verbatim to `dir/name` and return the full path.
pub fn write_fixture(dir: &Path, name: &str, contents: &str) -> io::Result<PathBuf> {
    let path = dir.join(name);
    fs::write(&path, contents)?;
    Ok(path)
}

/// Parse the file at `path` back into a JSON value.
pub fn read_document(path: &Path) -> io::Result<Value> {
    let bytes = fs::read(path)?;
    serde_json::from_slice(&bytes).map_err(io::Error::from)
}

/// A rigid body export the way the physics body editor writes it.
pub const EDITOR_EXPORT: &str = r#"{
  "rigidBodies": [
    {
      "name": "imperialSmall",
      "imagePath": "imperialSmall.png",
      "origin": {"x": 0, "y": 0},
      "polygons": [[{"x": 0.1, "y": 0.2}, {"x": 0.5, "y": 0.9}, {"x": 0.9, "y": 0.2}]],
      "circles": [{"cx": 0.5, "cy": 0.5, "r": 0.25}],
      "shapes": [
        {"type": "POLYGON", "vertices": [{"x": 0.1, "y": 0.2}, {"x": 0.5, "y": 0.9}, {"x": 0.9, "y": 0.2}]}
      ]
    },
    {
      "name": "imperialBig",
      "imagePath": "imperialBig.png",
      "origin": {"x": 0, "y": 0},
      "polygons": [],
      "circles": [],
      "shapes": []
    }
  ],
  "dynamicObjects": []
}"#;
