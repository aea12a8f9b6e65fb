//! # File I/O Module
//!
//! Saves and loads [`ParameterSet`]s as `.json` files.
//!
//! - **Suffix normalization**: `.json` is appended on save when missing
//! - **Atomic saves**: write to `<file>.tmp`, sync, rename over the target
//! - **Readable output**: UTF-8, two-space indent, non-ASCII text kept as-is
//!
//! Two layers are provided. The `try_*` functions return [`CalcResult`] for
//! callers that want the error. [`save_parameters`] and [`load_parameters`]
//! log the failure through `tracing` and return `false` / `None`, which is
//! what an input form needs.
//!
//! ## Example
//!
//! ```rust,no_run
//! use foundation_core::file_io::{load_parameters, save_parameters};
//! use foundation_core::presets::default_parameters;
//!
//! let params = default_parameters();
//! if save_parameters(&params, "pump_base") {
//!     let loaded = load_parameters("pump_base.json").expect("just saved");
//!     assert_eq!(loaded, params);
//! }
//! ```

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, error};

use crate::errors::{CalcError, CalcResult};
use crate::parameters::ParameterSet;

/// Extension every saved parameter file carries
pub const FILE_EXTENSION: &str = ".json";

/// Append `.json` to `filename` unless it already ends with it.
///
/// The check is on the raw string, so `case.v1` becomes `case.v1.json`
/// rather than replacing the existing extension.
pub fn json_path(filename: impl AsRef<Path>) -> PathBuf {
    let path = filename.as_ref();
    if path.to_string_lossy().ends_with(FILE_EXTENSION) {
        return path.to_path_buf();
    }
    let mut name = OsString::from(path.as_os_str());
    name.push(FILE_EXTENSION);
    PathBuf::from(name)
}

fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}

/// Save a parameter set, returning the path actually written.
///
/// The save process:
/// 1. Serialize to pretty JSON
/// 2. Write to `<path>.tmp` and sync it to disk
/// 3. Rename the temp file over the target
///
/// An existing file at the target path is replaced.
///
/// # Example
///
/// ```rust,no_run
/// use foundation_core::file_io::try_save_parameters;
/// use foundation_core::parameters::ParameterSet;
///
/// let params = ParameterSet::new().with("length", 3.0);
/// let path = try_save_parameters(&params, "case")?;
/// assert_eq!(path.to_str(), Some("case.json"));
/// # Ok::<(), foundation_core::errors::CalcError>(())
/// ```
pub fn try_save_parameters(params: &ParameterSet, filename: impl AsRef<Path>) -> CalcResult<PathBuf> {
    let path = json_path(filename);

    let json = serde_json::to_string_pretty(params).map_err(|e| CalcError::serialization(e.to_string()))?;

    let tmp_path = tmp_path_for(&path);

    // Errors name the target; the temp path goes in the reason.
    let temp_file_error = |operation: &str, e: std::io::Error| {
        CalcError::file_error(
            operation,
            path.display().to_string(),
            format!("{}: {}", tmp_path.display(), e),
        )
    };

    let mut tmp_file = File::create(&tmp_path).map_err(|e| temp_file_error("create temp file", e))?;

    let written = tmp_file
        .write_all(json.as_bytes())
        .and_then(|()| tmp_file.sync_all());
    drop(tmp_file);
    if let Err(e) = written {
        let _ = fs::remove_file(&tmp_path);
        return Err(temp_file_error("write temp file", e));
    }

    fs::rename(&tmp_path, &path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        CalcError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    Ok(path)
}

/// Load a parameter set from a JSON file.
///
/// No suffix is added; `filename` is opened as given.
///
/// # Returns
///
/// * `Ok(ParameterSet)` - Successfully loaded
/// * `Err(CalcError::FileError)` - Missing or unreadable file (including invalid UTF-8)
/// * `Err(CalcError::SerializationError)` - Invalid JSON, or JSON that is not an object
pub fn try_load_parameters(filename: impl AsRef<Path>) -> CalcResult<ParameterSet> {
    let path = filename.as_ref();

    let mut file = File::open(path).map_err(|e| {
        CalcError::file_error("open", path.display().to_string(), e.to_string())
    })?;

    let mut contents = String::new();
    file.read_to_string(&mut contents).map_err(|e| {
        CalcError::file_error("read", path.display().to_string(), e.to_string())
    })?;

    let value: Value = serde_json::from_str(&contents).map_err(|e| {
        CalcError::serialization(format!("Invalid JSON in {}: {}", path.display(), e))
    })?;

    match value {
        Value::Object(map) => Ok(ParameterSet::from(map)),
        other => Err(CalcError::serialization(format!(
            "Expected a JSON object in {}, found {}",
            path.display(),
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Save a parameter set, reporting any failure instead of returning it.
///
/// Returns `true` when the file was written. On failure the error is
/// logged at `error` level and `false` is returned.
pub fn save_parameters(params: &ParameterSet, filename: impl AsRef<Path>) -> bool {
    let filename = filename.as_ref();
    match try_save_parameters(params, filename) {
        Ok(path) => {
            debug!(path = %path.display(), fields = params.len(), "saved parameters");
            true
        }
        Err(e) => {
            error!(path = %filename.display(), "failed to save parameters: {e}");
            false
        }
    }
}

/// Load a parameter set, reporting any failure instead of returning it.
///
/// Returns `None` for a missing file, unreadable contents, or malformed
/// JSON; the cause is logged at `error` level.
pub fn load_parameters(filename: impl AsRef<Path>) -> Option<ParameterSet> {
    let filename = filename.as_ref();
    match try_load_parameters(filename) {
        Ok(params) => {
            debug!(path = %filename.display(), fields = params.len(), "loaded parameters");
            Some(params)
        }
        Err(e) => {
            error!(path = %filename.display(), "failed to load parameters: {e}");
            None
        }
    }
}
