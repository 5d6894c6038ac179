use std::{
    error::Error,
    fmt::{self, Display},
    io,
    path::PathBuf,
};

use crate::data::Label;

/// The result type used in the entire crate.
pub type Result<T> = std::result::Result<T, SpamErr>;

/// The crate's error type.
#[derive(Debug)]
pub enum SpamErr {
    Io {
        path: PathBuf,
        source: io::Error,
    },
    MalformedRow {
        line: usize,
        reason: &'static str,
    },
    SizeMismatch {
        a: &'static str,
        b: &'static str,
        got: usize,
        expected: usize,
    },
    EmptyDataset {
        what: &'static str,
    },
    EmptyClass {
        label: Label,
    },
    InvalidLabel {
        value: String,
    },
    InvalidRadius {
        radius: f64,
    },
    NoRadiusCandidates,
    InvalidConfig(String),
    Json(serde_json::Error),
}

impl Display for SpamErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpamErr::Io { path, source } => write!(f, "io error on {}: {source}", path.display()),
            SpamErr::MalformedRow { line, reason } => {
                write!(f, "malformed row at line {line}: {reason}")
            }
            SpamErr::SizeMismatch {
                a,
                b,
                got,
                expected,
            } => write!(
                f,
                "There's a size mismatch between {a} and {b}, got {got} and expected {expected}"
            ),
            SpamErr::EmptyDataset { what } => write!(f, "the {what} set has no messages"),
            SpamErr::EmptyClass { label } => write!(
                f,
                "the training set has no {label} messages, cannot estimate its prior"
            ),
            SpamErr::InvalidLabel { value } => write!(f, "invalid label {value:?}"),
            SpamErr::InvalidRadius { radius } => {
                write!(f, "kernel radius must be positive and finite, got {radius}")
            }
            SpamErr::NoRadiusCandidates => write!(f, "no radius candidates to select from"),
            SpamErr::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            SpamErr::Json(e) => write!(f, "json error: {e}"),
        }
    }
}

impl Error for SpamErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SpamErr::Io { source, .. } => Some(source),
            SpamErr::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for SpamErr {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl SpamErr {
    /// Wraps an `io::Error` together with the path that produced it.
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
