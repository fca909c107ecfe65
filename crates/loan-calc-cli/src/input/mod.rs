pub mod file;
pub mod stdin;

use serde::de::DeserializeOwned;
use serde_json::Value;

/// Resolve command input: `--input` file first, then piped stdin.
///
/// Returns `None` when neither is present so the caller can fall back to flags.
pub fn read_input<T: DeserializeOwned>(
    path: Option<&str>,
) -> Result<Option<T>, Box<dyn std::error::Error>> {
    if let Some(path) = path {
        tracing::debug!(path, "reading input file");
        return Ok(Some(file::read_json(path)?));
    }
    match stdin::read_stdin()? {
        Some(data) => {
            tracing::debug!("reading input from stdin");
            Ok(Some(serde_json::from_value(data)?))
        }
        None => Ok(None),
    }
}

/// Like [`read_input`] but without a typed target.
pub fn read_input_value(path: Option<&str>) -> Result<Option<Value>, Box<dyn std::error::Error>> {
    if let Some(path) = path {
        return Ok(Some(file::read_json_value(path)?));
    }
    stdin::read_stdin()
}
