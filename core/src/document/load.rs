use crate::error::{ScanError, ScanResult};
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

/// Parse a complete JSON document. Anything after the first value other than
/// whitespace is rejected. Nesting depth is bounded only by memory: the stack
/// grows onto the heap as needed.
pub fn parse_document(bytes: &[u8]) -> Result<Value, serde_json::Error> {
    let mut de = serde_json::Deserializer::from_slice(bytes);
    de.disable_recursion_limit();
    let value = Value::deserialize(serde_stacker::Deserializer::new(&mut de))?;
    de.end()?;
    Ok(value)
}

/// Read `path` fully into memory and parse it as a single JSON document.
pub fn read_document(path: impl AsRef<Path>) -> ScanResult<Value> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| ScanError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("read {} bytes from {}", bytes.len(), path.display());

    parse_document(&bytes).map_err(|source| ScanError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
