use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use chrono_tz::Tz;

pub const HOURS_PER_DAY: usize = 24;

/// A timestamp as delivered by the data source, before normalization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawTimestamp {
    /// No offset attached; interpreted as UTC during normalization.
    Naive(NaiveDateTime),
    /// Carries its own UTC offset.
    Aware(DateTime<FixedOffset>),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawSample {
    pub instant: RawTimestamp,
    pub value: f64,
}

/// Hourly GHI series as read from the source, in time order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawSeries {
    pub samples: Vec<RawSample>,
}

impl RawSeries {
    pub fn new(samples: Vec<RawSample>) -> Self {
        Self { samples }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// A sample whose instant lives in the target civil zone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IrradianceSample {
    pub instant: DateTime<Tz>,
    pub value: f64,
}

/// Zone-normalized series. Each pipeline stage produces a new one; none
/// mutates its input.
#[derive(Debug, Clone, PartialEq)]
pub struct IrradianceSeries {
    pub samples: Vec<IrradianceSample>,
}

impl IrradianceSeries {
    pub fn new(samples: Vec<IrradianceSample>) -> Self {
        Self { samples }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Exactly one value per local hour of day, index 0..=23.
#[derive(Debug, Clone, PartialEq)]
pub struct HourlyProfile {
    values: [f64; HOURS_PER_DAY],
}

impl HourlyProfile {
    pub fn new(values: [f64; HOURS_PER_DAY]) -> Self {
        Self { values }
    }

    /// Builds a profile from hour-ordered values. Fewer than 24 values are
    /// right-padded with zeros; anything past the first 24 is dropped.
    pub fn from_hour_ordered(values: &[f64]) -> Self {
        let mut padded = [0.0; HOURS_PER_DAY];
        for (slot, value) in padded.iter_mut().zip(values) {
            *slot = *value;
        }
        Self { values: padded }
    }

    pub fn values(&self) -> &[f64; HOURS_PER_DAY] {
        &self.values
    }

    /// Daily energy total in Wh/m² (hourly W/m² samples summed over the day).
    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }

    /// Daily energy total expressed in peak-sun-hours (kWh/m²/day).
    pub fn peak_sun_hours(&self) -> f64 {
        self.total() / 1000.0
    }
}

/// The 24-hour profile of one specific local day.
#[derive(Debug, Clone, PartialEq)]
pub struct DayProfile {
    pub date: NaiveDate,
    pub profile: HourlyProfile,
}

/// Result bundle of one pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub average: HourlyProfile,
    pub max_day: DayProfile,
    pub min_day: DayProfile,
}
