use crate::series::{Analysis, HOURS_PER_DAY};

/// Hour-by-hour comparison of the average, maximum-day and minimum-day
/// profiles, one row per local hour.
pub fn profile_table(analysis: &Analysis) -> String {
    let average = analysis.average.values();
    let max_day = analysis.max_day.profile.values();
    let min_day = analysis.min_day.profile.values();

    let mut table = format!(
        "{:>4} {:>10} {:>10} {:>10}\n",
        "Hour", "Average", "Maximum", "Minimum"
    );

    for hour in 0..HOURS_PER_DAY {
        table.push_str(&format!(
            "{:>4} {:>10.2} {:>10.2} {:>10.2}\n",
            hour, average[hour], max_day[hour], min_day[hour]
        ));
    }

    table
}

/// Daily energy totals expressed in peak-sun-hours (kWh/m²/day), extreme
/// days tagged with their calendar date.
pub fn energy_summary(analysis: &Analysis) -> String {
    format!(
        "Annual average      : {:.3}\nMaximum day ({}) : {:.3}\nMinimum day ({}) : {:.3}",
        analysis.average.peak_sun_hours(),
        analysis.max_day.date.format("%d-%b"),
        analysis.max_day.profile.peak_sun_hours(),
        analysis.min_day.date.format("%d-%b"),
        analysis.min_day.profile.peak_sun_hours(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::{DayProfile, HourlyProfile};
    use chrono::NaiveDate;

    fn sample_analysis() -> Analysis {
        Analysis {
            average: HourlyProfile::from_hour_ordered(&[233.33; 24]),
            max_day: DayProfile {
                date: NaiveDate::from_ymd_opt(2023, 6, 2).unwrap(),
                profile: HourlyProfile::from_hour_ordered(&[500.0; 24]),
            },
            min_day: DayProfile {
                date: NaiveDate::from_ymd_opt(2023, 6, 1).unwrap(),
                profile: HourlyProfile::from_hour_ordered(&[100.0; 24]),
            },
        }
    }

    #[test]
    fn test_profile_table_has_one_row_per_hour() {
        let table = profile_table(&sample_analysis());
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 25); // header + 24 hours
        assert!(lines[1].contains("233.33"));
        assert!(lines[24].contains("500.00"));
    }

    #[test]
    fn test_energy_summary_reports_peak_sun_hours() {
        let summary = energy_summary(&sample_analysis());

        assert!(summary.contains("12.000")); // 24 * 500 / 1000
        assert!(summary.contains("2.400")); // 24 * 100 / 1000
        assert!(summary.contains("02-Jun"));
        assert!(summary.contains("01-Jun"));
    }
}
