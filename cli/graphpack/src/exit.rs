//! Failure categories and process exit codes.
//!
//! Exit codes:
//! - 0: success
//! - 1: invalid arguments (detected before any I/O)
//! - 2: input file missing or unreadable
//! - 3: output file cannot be created or written
//! - 4: malformed text edge list or truncated binary record
//! - 5: configuration file present but invalid
//! - 6: anything else
//!
//! Every failure is fatal. Output written before a failure is left as it
//! is; the commands finish all parsing in memory before creating the
//! output file, so malformed input never leaves a partial file behind.

use std::io;
use std::path::PathBuf;

use graphpack_codec::CodecError;
use graphpack_core::LoadError;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum CliExitCode {
    Success = 0,
    InvalidArguments = 1,
    InputUnreadable = 2,
    OutputUnwritable = 3,
    MalformedRecord = 4,
    ConfigInvalid = 5,
    Failure = 6,
}

impl From<CliExitCode> for i32 {
    fn from(code: CliExitCode) -> Self {
        code as i32
    }
}

/// File-level failures raised by the commands.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("cannot read input file {}", path.display())]
    InputUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write output file {}", path.display())]
    OutputUnwritable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config {}: {detail}", path.display())]
    ConfigInvalid { path: PathBuf, detail: String },
}

impl From<&CliError> for CliExitCode {
    fn from(err: &CliError) -> Self {
        match err {
            CliError::InputUnreadable { .. } => CliExitCode::InputUnreadable,
            CliError::OutputUnwritable { .. } => CliExitCode::OutputUnwritable,
            CliError::ConfigInvalid { .. } => CliExitCode::ConfigInvalid,
        }
    }
}

/// Pick the exit code for an error by walking its cause chain.
pub fn exit_code_for_error(err: &anyhow::Error) -> CliExitCode {
    for cause in err.chain() {
        if let Some(cli_err) = cause.downcast_ref::<CliError>() {
            return cli_err.into();
        }
        if cause.downcast_ref::<LoadError>().is_some() {
            return CliExitCode::MalformedRecord;
        }
        if let Some(codec_err) = cause.downcast_ref::<CodecError>() {
            return match codec_err {
                CodecError::Io(_) => CliExitCode::OutputUnwritable,
                _ => CliExitCode::MalformedRecord,
            };
        }
    }
    CliExitCode::Failure
}
