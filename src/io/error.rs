//! Error types, path context, and the persistent error log

use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Anything that stops a montage invocation
#[derive(Debug)]
pub enum MontageError {
    /// A source, feature, or background image could not be decoded
    ImageLoad {
        /// Image that was being read
        path: PathBuf,
        /// Decoder failure
        source: image::ImageError,
    },

    /// A finished montage could not be encoded or written
    ImageExport {
        /// Intended output file
        path: PathBuf,
        /// Encoder failure
        source: image::ImageError,
    },

    /// Reading or writing a settings file, list file, dump, or log failed
    FileSystem {
        /// File or directory involved
        path: PathBuf,
        /// What was being attempted, e.g. "read settings file"
        operation: &'static str,
        /// I/O failure
        source: std::io::Error,
    },

    /// A resolved option is out of range
    InvalidParameter {
        /// Option name as used in settings files
        parameter: &'static str,
        /// Value as given
        value: String,
        /// What was expected instead
        reason: String,
    },

    /// Settings file contains a value that cannot be interpreted
    InvalidSettings {
        /// Settings file being read
        path: PathBuf,
        /// Offending line, trimmed
        line: String,
        /// Explanation of the problem
        reason: String,
    },

    /// Pre-flight checks found one or more problems
    ///
    /// All problems are collected before rendering starts so they can be
    /// reported together.
    Validation {
        /// One message per problem found
        problems: Vec<String>,
    },
}

impl fmt::Display for MontageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Cannot open image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(f, "Cannot save montage '{}': {source}", path.display())
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => write!(f, "Cannot {operation} '{}': {source}", path.display()),
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => write!(f, "Invalid {parameter} '{value}': {reason}"),
            Self::InvalidSettings { path, line, reason } => {
                write!(
                    f,
                    "Invalid setting '{line}' in '{}': {reason}",
                    path.display()
                )
            }
            Self::Validation { problems } => {
                write!(f, "CANNOT PROCEED")?;
                for problem in problems {
                    write!(f, "\n{problem}")?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for MontageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::InvalidParameter { .. }
            | Self::InvalidSettings { .. }
            | Self::Validation { .. } => None,
        }
    }
}

/// Result of any montage operation
pub type Result<T> = std::result::Result<T, MontageError>;

/// Attaches the path and operation to a failed I/O call
pub trait WithPath<T> {
    /// Convert an I/O failure into [`MontageError::FileSystem`]
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path and operation applied
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T>;
}

impl<T> WithPath<T> for std::io::Result<T> {
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T> {
        self.map_err(|source| MontageError::FileSystem {
            path: path.to_path_buf(),
            operation,
            source,
        })
    }
}

/// Build [`MontageError::InvalidParameter`]
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl fmt::Display,
    reason: &impl fmt::Display,
) -> MontageError {
    MontageError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Destination for the "HALTED" report written when an invocation fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorLog {
    /// Do not write a log file
    Disabled,
    /// Append to the given file
    File(PathBuf),
}

impl ErrorLog {
    /// Resolve the log destination from the command line options
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory of an explicit log path does
    /// not exist, or the path exists but is not a regular file
    pub fn resolve(explicit: Option<&Path>, disabled: bool, default_name: &str) -> Result<Self> {
        if disabled {
            return Ok(Self::Disabled);
        }
        let Some(path) = explicit else {
            return Ok(Self::File(PathBuf::from(default_name)));
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if !parent.is_dir() {
                return Err(invalid_parameter(
                    "error_log",
                    &path.display(),
                    &format!("cannot find directory '{}'", parent.display()),
                ));
            }
        }
        if path.exists() && !path.is_file() {
            return Err(invalid_parameter("error_log", &path.display(), &"not a file"));
        }
        Ok(Self::File(path.to_path_buf()))
    }

    /// Append a timestamped report of `error` under the given title
    ///
    /// # Errors
    ///
    /// Returns an error if the log file cannot be opened or written
    pub fn append(&self, title: &str, error: &MontageError) -> Result<()> {
        let Self::File(path) = self else {
            return Ok(());
        };

        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_path(path, "open error log")?;

        let stamp = chrono::Local::now().format("%Y-%m-%d %H:%M");
        writeln!(file, "\n[{stamp}]\nHALTED {title}\n{error}").with_path(path, "write error log")
    }
}
