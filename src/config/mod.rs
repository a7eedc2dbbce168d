use chrono::NaiveDate;

use serde::Deserialize;
use serde::Deserializer;
use serde::de::Error;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::wbm::ClassifierConfig;

pub mod error;
pub use error::ConfigError;

/// Run configuration: the two acquisition dates plus the classifier knobs.
/// date1 is the older scene.
#[derive(Debug, Clone, Copy)]
pub struct Config {
    date1: NaiveDate,
    date2: NaiveDate,
    classifier: ClassifierConfig,
}

// This deserializes a Config object from a deserializer, ensuring the dates
// are valid and in order, and the thresholds are plausible index values.
impl<'de> Deserialize<'de> for Config {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct ConfigHelper {
            date1: String,
            date2: String,
            mndwi_threshold: Option<f64>,
            ndwi_threshold: Option<f64>,
            filter_urban_bare_soil: Option<bool>,
            filter_shadow_snow: Option<bool>,
        }

        // Deserialize into the helper struct
        let helper = ConfigHelper::deserialize(deserializer)?;

        // Parse date1
        let date1 = NaiveDate::parse_from_str(&helper.date1, "%Y-%m-%d")
            .map_err(|e| D::Error::custom(format!("Invalid date1 format: {}", e)))?;

        // Parse date2
        let date2 = NaiveDate::parse_from_str(&helper.date2, "%Y-%m-%d")
            .map_err(|e| D::Error::custom(format!("Invalid date2 format: {}", e)))?;

        // Unspecified knobs keep their recommended defaults
        let defaults = ClassifierConfig::default();
        let classifier = ClassifierConfig {
            mndwi_threshold: helper.mndwi_threshold.unwrap_or(defaults.mndwi_threshold),
            ndwi_threshold: helper.ndwi_threshold.unwrap_or(defaults.ndwi_threshold),
            filter_urban_bare_soil: helper
                .filter_urban_bare_soil
                .unwrap_or(defaults.filter_urban_bare_soil),
            filter_shadow_snow: helper
                .filter_shadow_snow
                .unwrap_or(defaults.filter_shadow_snow),
        };

        Config::with_classifier(date1, date2, classifier).map_err(D::Error::custom)
    }
}

impl Config {
    /// Validated configuration with the default classifier knobs.
    pub fn new(date1: NaiveDate, date2: NaiveDate) -> Result<Self, ConfigError> {
        Self::with_classifier(date1, date2, ClassifierConfig::default())
    }

    /// Validated configuration with explicit classifier knobs.
    pub fn with_classifier(
        date1: NaiveDate,
        date2: NaiveDate,
        classifier: ClassifierConfig,
    ) -> Result<Self, ConfigError> {
        // Ensure date1 is the older scene
        if date1 > date2 {
            return Err(ConfigError::DateOrder);
        }

        // Normalized difference indices live in [-1, 1]
        if !(-1.0..=1.0).contains(&classifier.mndwi_threshold)
            || !(-1.0..=1.0).contains(&classifier.ndwi_threshold)
        {
            return Err(ConfigError::Threshold);
        }

        Ok(Self {
            date1,
            date2,
            classifier,
        })
    }

    /// Builds a configuration from two ISO `YYYY-MM-DD` date strings.
    pub fn from_date_strs(date1: &str, date2: &str) -> Result<Self, ConfigError> {
        let date1 = NaiveDate::parse_from_str(date1, "%Y-%m-%d")?;
        let date2 = NaiveDate::parse_from_str(date2, "%Y-%m-%d")?;

        Self::new(date1, date2)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);

        let config: Config = serde_json::from_reader(reader).map_err(ConfigError::from)?;

        Ok(config)
    }

    pub fn date1(&self) -> NaiveDate {
        self.date1
    }

    pub fn date2(&self) -> NaiveDate {
        self.date2
    }

    pub fn classifier(&self) -> ClassifierConfig {
        self.classifier
    }
}
