use chrono_tz::Tz;

use serde::Deserialize;
use serde::Deserializer;
use serde::de::Error;

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

pub mod error;
pub use error::ConfigError;

/// Site description for one analysis run. Latitude and longitude only
/// identify the site in the report header; the retrieval layer that would
/// query a remote database with them lives outside this crate.
#[derive(Debug, Clone)]
pub struct Config {
    latitude: f64,
    longitude: f64,
    timezone: Tz,
    series_file: PathBuf,
}

// Deserializes a Config, ensuring the coordinates are within valid ranges
// and the time zone is a known IANA name.
impl<'de> Deserialize<'de> for Config {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct ConfigHelper {
            latitude: f64,
            longitude: f64,
            timezone: String,
            series_file: String,
        }

        let helper = ConfigHelper::deserialize(deserializer)?;

        if !(-90.0..=90.0).contains(&helper.latitude) {
            return Err(D::Error::custom("latitude must be between -90 and 90"));
        }

        if !(-180.0..=180.0).contains(&helper.longitude) {
            return Err(D::Error::custom("longitude must be between -180 and 180"));
        }

        let timezone: Tz = helper
            .timezone
            .parse()
            .map_err(|_| D::Error::custom(format!("Unknown time zone: {}", helper.timezone)))?;

        Ok(Config {
            latitude: helper.latitude,
            longitude: helper.longitude,
            timezone,
            series_file: PathBuf::from(helper.series_file),
        })
    }
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);

        let config: Config = serde_json::from_reader(reader).map_err(ConfigError::from)?;

        Ok(config)
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    pub fn series_file(&self) -> &Path {
        &self.series_file
    }
}
