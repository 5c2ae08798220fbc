//! Generic parameters functions

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use serde::de::DeserializeOwned;
use std::fs::read_to_string;
use std::path::{Path, PathBuf};
use thiserror::Error;
use toml;

// ---------------------------------------------------------------------------
// CONSTANTS
// ---------------------------------------------------------------------------

/// Directory, relative to the working directory, holding parameter files.
pub const PARAMS_DIR: &str = "params";

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// An error that occurs during loading of a parameter file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Cannot load the parmeter file {0:?}: {1}")]
    FileLoadError(PathBuf, std::io::Error),

    #[error("Cannot read the parameter file: {0}")]
    DeserialiseError(toml::de::Error)
}

// ---------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ---------------------------------------------------------------------------

/// Load a parameter file
///
/// The file path is relative to the `params` directory in the working
/// directory.
pub fn load<P>(param_file_path: &str) -> Result<P, LoadError>
where
    P: DeserializeOwned
{
    let mut path = PathBuf::from(PARAMS_DIR);
    path.push(param_file_path);

    load_from(path)
}

/// Load a parameter file from an explicit path.
pub fn load_from<P, Q>(path: Q) -> Result<P, LoadError>
where
    P: DeserializeOwned,
    Q: AsRef<Path>
{
    // Load the file into a string
    let params_str = match read_to_string(path.as_ref()) {
        Ok(s) => s,
        Err(e) => return Err(
            LoadError::FileLoadError(path.as_ref().to_path_buf(), e))
    };

    // Parse the string into the parameter struct
    match toml::from_str(params_str.as_str()) {
        Ok(p) => Ok(p),
        Err(e) => Err(LoadError::DeserialiseError(e))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde::Deserialize;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[derive(Debug, Deserialize, PartialEq)]
    struct TestParams {
        gain: f64,
        #[serde(default)]
        enabled: bool,
    }

    fn toml_tempfile(content: &str) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(content.as_bytes()).unwrap();
        f
    }

    #[test]
    fn test_load_from() {
        let f = toml_tempfile("gain = 2.5\n");
        let p: TestParams = load_from(f.path()).unwrap();
        assert_eq!(p, TestParams { gain: 2.5, enabled: false });
    }

    #[test]
    fn test_load_missing_file() {
        let res: Result<TestParams, _> = load("does_not_exist.toml");
        assert!(matches!(res, Err(LoadError::FileLoadError(_, _))));
    }

    #[test]
    fn test_load_bad_toml() {
        let f = toml_tempfile("gain = \"fast\"\n");
        let res: Result<TestParams, _> = load_from(f.path());
        assert!(matches!(res, Err(LoadError::DeserialiseError(_))));
    }
}
