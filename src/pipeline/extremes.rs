use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::pipeline::AnalysisError;
use crate::series::{DayProfile, HourlyProfile, IrradianceSeries};

/// Sum of sample values per local calendar day, in chronological order.
pub fn daily_totals(series: &IrradianceSeries) -> BTreeMap<NaiveDate, f64> {
    let mut totals = BTreeMap::new();
    for sample in &series.samples {
        *totals.entry(sample.instant.date_naive()).or_insert(0.0) += sample.value;
    }

    totals
}

/// Picks the maximum- and minimum-energy days and extracts their 24-hour
/// profiles. Strict comparisons over chronological day order mean the
/// earlier day wins an exact tie.
pub fn select_extremes(
    series: &IrradianceSeries,
) -> Result<(DayProfile, DayProfile), AnalysisError> {
    let totals = daily_totals(series);

    let mut max_day: Option<(NaiveDate, f64)> = None;
    let mut min_day: Option<(NaiveDate, f64)> = None;

    for (&date, &total) in &totals {
        match max_day {
            Some((_, best)) if total <= best => {}
            _ => max_day = Some((date, total)),
        }
        match min_day {
            Some((_, best)) if total >= best => {}
            _ => min_day = Some((date, total)),
        }
    }

    let (max_date, _) = max_day.ok_or(AnalysisError::NoCompleteDays)?;
    let (min_date, _) = min_day.ok_or(AnalysisError::NoCompleteDays)?;

    Ok((day_profile(series, max_date), day_profile(series, min_date)))
}

/// Extracts the profile of one local day, in series (hence hour) order.
/// A short day is right-padded with zeros to 24 values; a day with extra
/// samples (duplicate hour from a clock anomaly) keeps only the first 24.
/// Callers can rely on the 24-length output unconditionally.
pub fn day_profile(series: &IrradianceSeries, date: NaiveDate) -> DayProfile {
    let values: Vec<f64> = series
        .samples
        .iter()
        .filter(|s| s.instant.date_naive() == date)
        .map(|s| s.value)
        .collect();

    DayProfile {
        date,
        profile: HourlyProfile::from_hour_ordered(&values),
    }
}
