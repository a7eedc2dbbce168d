use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::fmt::Display;

/// Landsat sensor generations supported by the change pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sensor {
    /// Landsat 4-5 Thematic Mapper, Level-2 collection (1984 to 2012).
    Landsat45Tm,
    /// Landsat 8-9 OLI/TIRS, Level-2 collection (2013 onwards).
    Landsat89,
}

/// Sensor-native band labels as published in the Level-2 collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Band {
    B01,
    B02,
    B03,
    B04,
    B05,
    B06,
    B07,
}

/// Canonical spectral roles consumed by the water classifier, independent of
/// any sensor's band numbering. Order matches the per-sensor band tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BandRole {
    Blue,
    Green,
    Red,
    Nir,
    Swir1,
    Swir2,
}

/// Raw per-pixel reflectance bundle for one scene, keyed by native band.
pub type BandValues = BTreeMap<Band, f64>;

/// Per-pixel reflectance at the six canonical roles, for one acquisition.
#[derive(Debug, Clone, Copy)]
pub struct ReflectanceSample {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub nir: f64,
    pub swir1: f64,
    pub swir2: f64,
}

/// Role-to-band mapping for one sensor generation.
#[derive(Debug, Clone, Copy)]
pub struct BandLayout {
    sensor: Sensor,
    bands: &'static [Band; 6],
}

impl BandLayout {
    pub fn new(sensor: Sensor) -> Self {
        // Role order: blue, green, red, nir, swir1, swir2.
        // TODO: Sentinel-2 L2A layout; the classifier thresholds were
        // calibrated against it as well.
        let bands: &'static [Band; 6] = match sensor {
            // Bands 1 to 5 and 7; band 6 is the thermal band
            Sensor::Landsat45Tm => &[
                Band::B01,
                Band::B02,
                Band::B03,
                Band::B04,
                Band::B05,
                Band::B07,
            ],
            // Bands 2 to 7
            Sensor::Landsat89 => &[
                Band::B02,
                Band::B03,
                Band::B04,
                Band::B05,
                Band::B06,
                Band::B07,
            ],
        };
        Self { sensor, bands }
    }

    pub fn sensor(&self) -> Sensor {
        self.sensor
    }

    /// Bands the host has to request from the collection for this layout.
    pub fn bands(&self) -> &[Band; 6] {
        self.bands
    }

    /// Band carrying the given spectral role.
    pub fn band(&self, role: BandRole) -> Band {
        self.bands[role as usize]
    }

    /// Builds the canonical sample for one pixel from a raw band bundle.
    pub fn sample(&self, values: &BandValues) -> Result<ReflectanceSample, MissingBandError> {
        Ok(ReflectanceSample {
            red: self.value(values, BandRole::Red)?,
            green: self.value(values, BandRole::Green)?,
            blue: self.value(values, BandRole::Blue)?,
            nir: self.value(values, BandRole::Nir)?,
            swir1: self.value(values, BandRole::Swir1)?,
            swir2: self.value(values, BandRole::Swir2)?,
        })
    }

    fn value(&self, values: &BandValues, role: BandRole) -> Result<f64, MissingBandError> {
        let band = self.band(role);
        values.get(&band).copied().ok_or(MissingBandError {
            band,
            sensor: self.sensor,
        })
    }
}

/// Last date for which the Landsat 4-5 TM Level-2 collection has data.
pub fn tm45_end_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2012, 5, 1).unwrap()
}

/// First date for which the Landsat 8-9 Level-2 collection has data.
pub fn oli89_start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2013, 2, 1).unwrap()
}

/// Selects the band layout for each of the two acquisition dates.
///
/// Evaluated once per run, first match wins:
/// 1. date1 after the Landsat 8-9 start: both scenes use the OLI layout.
/// 2. date1 within TM coverage and date2 after the Landsat 8-9 start: TM
///    layout for date1, OLI layout for date2.
/// 3. date2 within TM coverage: both scenes use the TM layout.
///
/// Any other combination (for example both dates inside the 2012-2013
/// coverage gap) has no supported layout and fails.
pub fn layouts_for_dates(
    date1: NaiveDate,
    date2: NaiveDate,
) -> Result<(BandLayout, BandLayout), DateCoverageError> {
    if date1 > oli89_start_date() {
        Ok((
            BandLayout::new(Sensor::Landsat89),
            BandLayout::new(Sensor::Landsat89),
        ))
    } else if date1 < tm45_end_date() && date2 > oli89_start_date() {
        Ok((
            BandLayout::new(Sensor::Landsat45Tm),
            BandLayout::new(Sensor::Landsat89),
        ))
    } else if date2 < tm45_end_date() {
        Ok((
            BandLayout::new(Sensor::Landsat45Tm),
            BandLayout::new(Sensor::Landsat45Tm),
        ))
    } else {
        Err(DateCoverageError { date1, date2 })
    }
}

/// No supported sensor combination covers the requested date pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateCoverageError {
    pub date1: NaiveDate,
    pub date2: NaiveDate,
}

impl Display for DateCoverageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "no Landsat collection combination covers {} and {} (TM ends {}, Landsat 8-9 starts {})",
            self.date1,
            self.date2,
            tm45_end_date(),
            oli89_start_date()
        )
    }
}

impl std::error::Error for DateCoverageError {}

/// A raw band bundle is missing a band its layout requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingBandError {
    pub band: Band,
    pub sensor: Sensor,
}

impl Display for MissingBandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "band {} missing from {} sample", self.band, self.sensor)
    }
}

impl std::error::Error for MissingBandError {}

impl Display for Sensor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sensor::Landsat45Tm => write!(f, "Landsat 4-5 TM"),
            Sensor::Landsat89 => write!(f, "Landsat 8-9"),
        }
    }
}

impl Display for Band {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Band::B01 => write!(f, "B01"),
            Band::B02 => write!(f, "B02"),
            Band::B03 => write!(f, "B03"),
            Band::B04 => write!(f, "B04"),
            Band::B05 => write!(f, "B05"),
            Band::B06 => write!(f, "B06"),
            Band::B07 => write!(f, "B07"),
        }
    }
}

impl Display for BandLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Sensor: {}, Bands: {:?}", self.sensor, self.bands)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_tm_layout_roles() {
        let layout = BandLayout::new(Sensor::Landsat45Tm);

        assert_eq!(layout.band(BandRole::Blue), Band::B01);
        assert_eq!(layout.band(BandRole::Green), Band::B02);
        assert_eq!(layout.band(BandRole::Red), Band::B03);
        assert_eq!(layout.band(BandRole::Nir), Band::B04);
        assert_eq!(layout.band(BandRole::Swir1), Band::B05);
        assert_eq!(layout.band(BandRole::Swir2), Band::B07);
    }

    #[test]
    fn test_oli_layout_roles() {
        let layout = BandLayout::new(Sensor::Landsat89);

        assert_eq!(layout.band(BandRole::Blue), Band::B02);
        assert_eq!(layout.band(BandRole::Green), Band::B03);
        assert_eq!(layout.band(BandRole::Red), Band::B04);
        assert_eq!(layout.band(BandRole::Nir), Band::B05);
        assert_eq!(layout.band(BandRole::Swir1), Band::B06);
        assert_eq!(layout.band(BandRole::Swir2), Band::B07);
    }

    #[test]
    fn test_layouts_straddling_the_generations() {
        // Poyang Lake example: an old TM scene against a recent OLI scene
        let (layout1, layout2) = layouts_for_dates(date("1988-08-13"), date("2022-08-19")).unwrap();

        assert_eq!(layout1.sensor(), Sensor::Landsat45Tm);
        assert_eq!(layout2.sensor(), Sensor::Landsat89);
    }

    #[test]
    fn test_layouts_both_recent() {
        let (layout1, layout2) = layouts_for_dates(date("2015-06-01"), date("2022-08-19")).unwrap();

        assert_eq!(layout1.sensor(), Sensor::Landsat89);
        assert_eq!(layout2.sensor(), Sensor::Landsat89);
    }

    #[test]
    fn test_layouts_both_old() {
        let (layout1, layout2) = layouts_for_dates(date("1988-08-13"), date("2010-09-02")).unwrap();

        assert_eq!(layout1.sensor(), Sensor::Landsat45Tm);
        assert_eq!(layout2.sensor(), Sensor::Landsat45Tm);
    }

    #[test]
    fn test_layouts_inside_coverage_gap() {
        let result = layouts_for_dates(date("2012-07-15"), date("2012-12-01"));

        assert_eq!(
            result.unwrap_err(),
            DateCoverageError {
                date1: date("2012-07-15"),
                date2: date("2012-12-01"),
            }
        );
    }

    #[test]
    fn test_layouts_date1_in_gap_date2_recent() {
        // date1 past the TM end but before the Landsat 8-9 start
        let result = layouts_for_dates(date("2012-06-15"), date("2022-08-19"));

        assert!(result.is_err());
    }

    #[test]
    fn test_layouts_boundary_dates_are_exclusive() {
        // The case table compares strictly; a date sitting exactly on a
        // boundary matches no collection.
        let result = layouts_for_dates(date("2013-02-01"), date("2022-08-19"));

        assert!(result.is_err());
    }

    #[test]
    fn test_sample_extraction_tm() {
        let layout = BandLayout::new(Sensor::Landsat45Tm);
        let values = BandValues::from([
            (Band::B01, 0.03),
            (Band::B02, 0.04),
            (Band::B03, 0.02),
            (Band::B04, 0.01),
            (Band::B05, 0.005),
            (Band::B07, 0.003),
        ]);

        let sample = layout.sample(&values).unwrap();

        assert_eq!(sample.blue, 0.03);
        assert_eq!(sample.green, 0.04);
        assert_eq!(sample.red, 0.02);
        assert_eq!(sample.nir, 0.01);
        assert_eq!(sample.swir1, 0.005);
        assert_eq!(sample.swir2, 0.003);
    }

    #[test]
    fn test_sample_extraction_missing_band() {
        let layout = BandLayout::new(Sensor::Landsat89);
        // B06 (swir1 for OLI) deliberately absent
        let values = BandValues::from([
            (Band::B02, 0.03),
            (Band::B03, 0.04),
            (Band::B04, 0.02),
            (Band::B05, 0.01),
            (Band::B07, 0.003),
        ]);

        let err = layout.sample(&values).unwrap_err();

        assert_eq!(
            err,
            MissingBandError {
                band: Band::B06,
                sensor: Sensor::Landsat89,
            }
        );
        assert_eq!(err.to_string(), "band B06 missing from Landsat 8-9 sample");
    }
}
