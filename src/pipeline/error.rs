use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// Fewer samples than one full day; no profile can be computed.
    InputTooShort(usize),
    /// Filtering left no calendar day with all 24 hourly samples.
    NoCompleteDays,
    /// The series mixes naive and offset-aware timestamps, so no single
    /// interpretation of the naive ones is unambiguous.
    MixedTimestampKinds,
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisError::InputTooShort(n) => {
                write!(f, "series has {} samples, at least 24 are required", n)
            }
            AnalysisError::NoCompleteDays => {
                write!(f, "no calendar day has all 24 hourly samples")
            }
            AnalysisError::MixedTimestampKinds => {
                write!(f, "series mixes naive and offset-aware timestamps")
            }
        }
    }
}

impl std::error::Error for AnalysisError {}
