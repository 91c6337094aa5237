//! CLI command implementations.

pub mod decode;
pub mod encode;
pub mod inspect;

use std::fs;
use std::path::Path;

use crate::exit::CliError;

/// Read a whole input file.
pub(crate) fn read_input(path: &Path) -> Result<Vec<u8>, CliError> {
    fs::read(path).map_err(|source| CliError::InputUnreadable {
        path: path.to_path_buf(),
        source,
    })
}

/// Create (or truncate) an output file and write `bytes` to it.
pub(crate) fn write_output(path: &Path, bytes: &[u8]) -> Result<(), CliError> {
    fs::write(path, bytes).map_err(|source| CliError::OutputUnwritable {
        path: path.to_path_buf(),
        source,
    })
}
