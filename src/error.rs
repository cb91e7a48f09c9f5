//! Error types for rigid body conversion.

use std::fmt;
use std::io;
use std::path::PathBuf;
use std::string::FromUtf8Error as Utf8Error;

use thiserror::Error;

/// Structural rule a document broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaViolation {
    /// The top-level value is not a JSON object.
    NotAnObject,
    /// Neither `rigidBody` nor `rigidBodies` is present.
    MissingRigidBody,
    /// The rigid body list has no first element to keep.
    EmptyRigidBodies,
    /// The rigid body slot holds something other than an object.
    RigidBodyNotAnObject,
}

impl fmt::Display for SchemaViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            SchemaViolation::NotAnObject => "top-level value is not an object",
            SchemaViolation::MissingRigidBody => "no `rigidBody` or `rigidBodies` key",
            SchemaViolation::EmptyRigidBodies => "`rigidBody` list is empty",
            SchemaViolation::RigidBodyNotAnObject => "`rigidBody` is not an object",
        };
        f.write_str(message)
    }
}

#[derive(Debug, Error)]
pub enum ConvertError {
    /// The input could not be read or is not valid JSON.
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseSource,
    },

    #[error("schema error: {0}")]
    Schema(SchemaViolation),

    #[error("failed to serialize document: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("serialized document is not valid UTF-8: {0}")]
    Encoding(#[from] Utf8Error),

    /// The converted document could not be written back.
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Underlying cause of a [`ConvertError::Parse`].
#[derive(Debug, Error)]
pub enum ParseSource {
    #[error(transparent)]
    Read(#[from] io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl From<SchemaViolation> for ConvertError {
    fn from(violation: SchemaViolation) -> Self {
        ConvertError::Schema(violation)
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
