use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Error taxonomy
// ---------------------------------------------------------------------------

/// Every way a run can be refused before (or while) touching the kernels.
///
/// All variants are local validation failures: nothing is retried and a run
/// that produces one of them writes no output.
#[derive(Debug, Error)]
pub enum NdftError {
    #[error("line {line}: {reason}")]
    MalformedInput { line: u64, reason: String },

    #[error("degenerate sample series: {0}")]
    DegenerateSampleSeries(DegenerateReason),

    #[error("frequency grid entry {index} is zero")]
    ZeroFrequency { index: usize },

    #[error("frequency grid entry {index} is not finite ({value})")]
    NonFiniteFrequency { index: usize, value: f64 },

    #[error("frequency grid entry {index} ({value:e}) squares to zero")]
    FrequencyUnderflow { index: usize, value: f64 },

    #[error("sample {index} has t = 0, reciprocal frequency grid is undefined")]
    ZeroAbscissa { index: usize },

    #[error("{}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config {}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl NdftError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        NdftError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Why a sample series cannot be integrated segment by segment.
#[derive(Debug, Clone, PartialEq)]
pub enum DegenerateReason {
    TooFewSamples { count: usize },
    /// `t[index] == t[index + 1]`, a zero-width segment.
    RepeatedAbscissa { index: usize, t: f64 },
    /// `t[index + 1] < t[index]`.
    Descending { index: usize },
}

impl fmt::Display for DegenerateReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DegenerateReason::TooFewSamples { count } => {
                write!(f, "need at least 2 samples, got {count}")
            }
            DegenerateReason::RepeatedAbscissa { index, t } => {
                write!(f, "samples {index} and {} share t = {t}", index + 1)
            }
            DegenerateReason::Descending { index } => {
                write!(f, "t decreases between samples {index} and {}", index + 1)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, NdftError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_location() {
        let e = NdftError::MalformedInput {
            line: 7,
            reason: "expected 2 tab-separated fields, found 1".into(),
        };
        assert_eq!(e.to_string(), "line 7: expected 2 tab-separated fields, found 1");

        let e = NdftError::DegenerateSampleSeries(DegenerateReason::RepeatedAbscissa {
            index: 3,
            t: 1.5,
        });
        assert_eq!(
            e.to_string(),
            "degenerate sample series: samples 3 and 4 share t = 1.5"
        );

        let e = NdftError::io(
            "/nope/in.txt",
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        );
        assert_eq!(e.to_string(), "/nope/in.txt");
        let chain = format!("{:#}", anyhow::Error::new(e));
        assert_eq!(chain.matches("missing").count(), 1, "{chain}");
    }
}
