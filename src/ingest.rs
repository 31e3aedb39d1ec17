//! Path-annotated ingestion of host payloads.
//!
//! Hosts that deliver descriptors and raw policy expressions over a process
//! boundary ship them as JSON; these helpers deserialize with JSON-path
//! context so a malformed payload names the exact field that broke. These
//! are transport failures, deliberately distinct from synthesis
//! [`Diagnostic`](crate::diagnostic::Diagnostic)s.

use serde::de::DeserializeOwned;

use crate::descriptor::TypeDescriptor;
use crate::expr::Expr;

/// A payload that could not be deserialized.
#[derive(Debug, thiserror::Error)]
#[error("invalid {what} payload at {path}: {message}")]
pub struct IngestError {
    pub what: &'static str,
    /// JSON path of the failing element (`.` for the document root).
    pub path: String,
    pub message: String,
}

pub fn descriptor_from_json(src: &str) -> Result<TypeDescriptor, IngestError> {
    from_json("type descriptor", src)
}

pub fn expr_from_json(src: &str) -> Result<Expr, IngestError> {
    from_json("policy expression", src)
}

fn from_json<T: DeserializeOwned>(what: &'static str, src: &str) -> Result<T, IngestError> {
    let de = &mut serde_json::Deserializer::from_str(src);
    serde_path_to_error::deserialize::<_, T>(de).map_err(|err| IngestError {
        what,
        path: err.path().to_string(),
        message: err.into_inner().to_string(),
    })
}
