pub mod completeness;
pub mod error;
pub mod extremes;
pub mod profile;
pub mod timezone;

pub use error::AnalysisError;

use chrono_tz::Tz;

use crate::series::{Analysis, HOURS_PER_DAY, RawSeries};

/// Runs the full extraction: time-zone normalization, complete-day
/// filtering, hourly averaging and extreme-day selection. Each stage
/// produces a new value; the input series is never mutated.
pub fn run(raw: &RawSeries, zone: Tz) -> Result<Analysis, AnalysisError> {
    if raw.len() < HOURS_PER_DAY {
        return Err(AnalysisError::InputTooShort(raw.len()));
    }

    let localized = timezone::normalize(raw, zone)?;
    let complete = completeness::retain_complete_days(&localized);
    let average = profile::hourly_average(&complete)?;
    let (max_day, min_day) = extremes::select_extremes(&complete)?;

    Ok(Analysis {
        average,
        max_day,
        min_day,
    })
}
