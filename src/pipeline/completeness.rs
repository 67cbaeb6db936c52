use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::series::{HOURS_PER_DAY, IrradianceSeries};

/// Keeps only samples belonging to local calendar days with exactly 24
/// hourly samples. Truncated boundary days (typically the first and last
/// day after the time-zone shift) are dropped whole, never partially.
/// Zero remaining days is not an error here; downstream stages raise.
pub fn retain_complete_days(series: &IrradianceSeries) -> IrradianceSeries {
    let mut counts: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for sample in &series.samples {
        *counts.entry(sample.instant.date_naive()).or_insert(0) += 1;
    }

    let samples = series
        .samples
        .iter()
        .filter(|sample| counts[&sample.instant.date_naive()] == HOURS_PER_DAY)
        .copied()
        .collect();

    IrradianceSeries::new(samples)
}
