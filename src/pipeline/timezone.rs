use chrono_tz::Tz;

use crate::pipeline::AnalysisError;
use crate::series::{IrradianceSample, IrradianceSeries, RawSeries, RawTimestamp};

/// Converts every sample to the target civil zone. Naive timestamps are
/// taken as UTC (metadata only, the instant itself is unchanged); aware
/// timestamps keep their absolute instant, so re-normalizing an already
/// normalized series is a no-op.
pub fn normalize(raw: &RawSeries, zone: Tz) -> Result<IrradianceSeries, AnalysisError> {
    let has_naive = raw
        .samples
        .iter()
        .any(|s| matches!(s.instant, RawTimestamp::Naive(_)));
    let has_aware = raw
        .samples
        .iter()
        .any(|s| matches!(s.instant, RawTimestamp::Aware(_)));

    if has_naive && has_aware {
        return Err(AnalysisError::MixedTimestampKinds);
    }

    let samples = raw
        .samples
        .iter()
        .map(|sample| {
            let instant = match sample.instant {
                RawTimestamp::Naive(naive) => naive.and_utc().with_timezone(&zone),
                RawTimestamp::Aware(aware) => aware.with_timezone(&zone),
            };

            IrradianceSample {
                instant,
                value: sample.value,
            }
        })
        .collect();

    Ok(IrradianceSeries::new(samples))
}
