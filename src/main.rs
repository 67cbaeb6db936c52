mod config;
mod pipeline;
mod readers;
mod report;
mod series;

use config::Config;
use readers::{JsonSeriesReader, SeriesReader};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "./data/config/riohacha.json".to_string());

    let config = Config::from_file(&config_path)?;

    println!(
        "GHI analysis for Lat {}, Lon {} ({})",
        config.latitude(),
        config.longitude(),
        config.timezone()
    );

    let reader = JsonSeriesReader {
        path: config.series_file().to_path_buf(),
    };
    let raw = reader.read_series()?;
    println!("Loaded {} hourly samples", raw.len());

    let analysis = pipeline::run(&raw, config.timezone())?;

    println!("\nHourly GHI [W/m²]");
    println!("{}", report::profile_table(&analysis));
    println!("Daily energy totals (peak-sun-hours, kWh/m²/day)");
    println!("{}", report::energy_summary(&analysis));

    Ok(())
}
