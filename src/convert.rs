//! Rewrites an editor rigid body document into the loader layout.
//!
//! The editor writes `rigidBodies` as a list of bodies carrying `imagePath`
//! and `name`. The loader expects a single `rigidBody` object without them.

use log::{debug, info, warn};
use serde_json::Value;
use std::fs;
use std::path::Path;

use crate::error::{ConvertError, ParseSource, Result, SchemaViolation};
use crate::ser::to_string_pretty;

pub const RIGID_BODY: &str = "rigidBody";
pub const RIGID_BODIES: &str = "rigidBodies";

/// Editor-only keys dropped from the rigid body.
pub const EDITOR_METADATA: [&str; 2] = ["imagePath", "name"];

/// Normalize a parsed document in place.
///
/// `rigidBodies` always wins over an existing `rigidBody`. On error the
/// document may be partially rewritten, so callers must not persist it.
pub fn normalize(document: &mut Value) -> Result<()> {
    let root = document
        .as_object_mut()
        .ok_or(SchemaViolation::NotAnObject)?;

    if let Some(bodies) = root.remove(RIGID_BODIES) {
        if root.contains_key(RIGID_BODY) {
            warn!(
                "both `{}` and `{}` present, keeping `{}`",
                RIGID_BODY, RIGID_BODIES, RIGID_BODIES
            );
        }
        debug!("renaming `{}` to `{}`", RIGID_BODIES, RIGID_BODY);
        root.insert(RIGID_BODY.to_owned(), bodies);
    }

    let slot = root
        .get_mut(RIGID_BODY)
        .ok_or(SchemaViolation::MissingRigidBody)?;
    collapse(slot)?;

    let body = slot
        .as_object_mut()
        .ok_or(SchemaViolation::RigidBodyNotAnObject)?;
    for key in EDITOR_METADATA.iter() {
        if body.remove(*key).is_some() {
            debug!("stripped `{}`", key);
        }
    }

    Ok(())
}

/// Replace a list of bodies with its first element.
fn collapse(slot: &mut Value) -> Result<()> {
    if let Value::Array(bodies) = slot {
        if bodies.is_empty() {
            return Err(SchemaViolation::EmptyRigidBodies.into());
        }
        if bodies.len() > 1 {
            warn!("discarding {} rigid bodies after the first", bodies.len() - 1);
        }
        let first = bodies.swap_remove(0);
        *slot = first;
    }
    Ok(())
}

/// Read the document at `path`, normalize it and write it back in place.
pub fn convert_file<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();

    let mut document = read_document(path)?;
    normalize(&mut document)?;
    let serialized = to_string_pretty(&document)?;
    write_document(path, &serialized)?;

    info!("converted {}", path.display());
    Ok(())
}

fn read_document(path: &Path) -> Result<Value> {
    let parse_error = |source: ParseSource| ConvertError::Parse {
        path: path.to_path_buf(),
        source,
    };

    let bytes = fs::read(path).map_err(|err| parse_error(err.into()))?;
    serde_json::from_slice(&bytes).map_err(|err| parse_error(err.into()))
}

/// Overwrite the target in place, keeping its permissions and links.
fn write_document(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|source| ConvertError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn normalized(mut document: Value) -> Value {
        normalize(&mut document).unwrap();
        document
    }

    fn violation(mut document: Value) -> SchemaViolation {
        match normalize(&mut document) {
            Err(ConvertError::Schema(violation)) => violation,
            other => panic!("expected schema error, got {:?}", other),
        }
    }

    #[test]
    fn test_renames_rigid_bodies() {
        init();

        let document = normalized(json!({"rigidBodies": {"a": 1}}));
        assert_eq!(document, json!({"rigidBody": {"a": 1}}));
    }

    #[test]
    fn test_collapses_list_to_first_body() {
        init();

        let document = normalized(json!({"rigidBody": [{"a": 1}, {"a": 2}, {"a": 3}]}));
        assert_eq!(document, json!({"rigidBody": {"a": 1}}));
    }

    #[test]
    fn test_renames_then_collapses() {
        init();

        let document = normalized(json!({
            "rigidBodies": [{"name": "hull", "imagePath": "hull.png", "origin": {"x": 0.5, "y": 0.5}}]
        }));
        assert_eq!(document, json!({"rigidBody": {"origin": {"x": 0.5, "y": 0.5}}}));
    }

    #[test]
    fn test_strips_editor_metadata() {
        init();

        let document = normalized(json!({
            "rigidBody": {"imagePath": "x.png", "name": "Body1", "density": 2.5}
        }));
        assert_eq!(document, json!({"rigidBody": {"density": 2.5}}));

        // missing metadata is fine
        let document = normalized(json!({"rigidBody": {"density": 2.5}}));
        assert_eq!(document, json!({"rigidBody": {"density": 2.5}}));
    }

    #[test]
    fn test_only_top_level_body_metadata_is_stripped() {
        init();

        let document = normalized(json!({
            "name": "kept",
            "rigidBody": {"shapes": [{"name": "kept too", "type": "POLYGON"}]}
        }));
        assert_eq!(
            document,
            json!({
                "name": "kept",
                "rigidBody": {"shapes": [{"name": "kept too", "type": "POLYGON"}]}
            })
        );
    }

    #[test]
    fn test_siblings_pass_through() {
        init();

        let document = normalized(json!({
            "fixtures": [{"friction": 0.2}, null],
            "dynamicBodies": [],
            "rigidBody": {}
        }));
        assert_eq!(
            document,
            json!({
                "fixtures": [{"friction": 0.2}, null],
                "dynamicBodies": [],
                "rigidBody": {}
            })
        );
    }

    #[test]
    fn test_rigid_bodies_overwrites_rigid_body() {
        init();

        let document = normalized(json!({
            "rigidBody": {"old": true},
            "rigidBodies": [{"new": true}]
        }));
        assert_eq!(document, json!({"rigidBody": {"new": true}}));
    }

    #[test]
    fn test_canonical_document_is_unchanged() {
        init();

        let canonical = json!({"other": 1, "rigidBody": {"circles": [], "origin": {"x": 0, "y": 0}}});
        assert_eq!(normalized(canonical.clone()), canonical);
    }

    #[test]
    fn test_schema_violations() {
        init();

        assert_eq!(violation(json!([1, 2])), SchemaViolation::NotAnObject);
        assert_eq!(violation(json!("rigidBody")), SchemaViolation::NotAnObject);
        assert_eq!(violation(json!({"fixtures": []})), SchemaViolation::MissingRigidBody);
        assert_eq!(violation(json!({"rigidBody": []})), SchemaViolation::EmptyRigidBodies);
        assert_eq!(violation(json!({"rigidBodies": []})), SchemaViolation::EmptyRigidBodies);
        assert_eq!(violation(json!({"rigidBody": "hull"})), SchemaViolation::RigidBodyNotAnObject);
        assert_eq!(violation(json!({"rigidBody": [7]})), SchemaViolation::RigidBodyNotAnObject);
    }
}
