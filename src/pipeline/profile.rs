use chrono::Timelike;

use crate::pipeline::AnalysisError;
use crate::series::{HOURS_PER_DAY, HourlyProfile, IrradianceSeries};

/// Arithmetic mean of the series per local hour of day, over every
/// retained day. Expects the complete-day filtered series; an empty one
/// means filtering left nothing to average.
pub fn hourly_average(series: &IrradianceSeries) -> Result<HourlyProfile, AnalysisError> {
    if series.is_empty() {
        return Err(AnalysisError::NoCompleteDays);
    }

    let mut sums = [0.0; HOURS_PER_DAY];
    let mut counts = [0usize; HOURS_PER_DAY];

    for sample in &series.samples {
        let hour = sample.instant.hour() as usize;
        sums[hour] += sample.value;
        counts[hour] += 1;
    }

    let mut means = [0.0; HOURS_PER_DAY];
    for (hour, mean) in means.iter_mut().enumerate() {
        // Every hour has the same count on complete-day input; the guard
        // keeps the function safe when reused on arbitrary series.
        if counts[hour] > 0 {
            *mean = sums[hour] / counts[hour] as f64;
        }
    }

    Ok(HourlyProfile::new(means))
}
