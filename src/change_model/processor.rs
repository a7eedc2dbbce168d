use std::fmt::Display;

use crate::change_model::composer::{PixelChange, compose_change};
use crate::config::{Config, ConfigError};
use crate::sat_bands::{BandLayout, BandValues, MissingBandError, layouts_for_dates};
use crate::wbm::WaterBodyClassifier;

/// Runs the full per-pixel pipeline for a configured date pair: extract the
/// canonical sample for each date, classify both, compose the change.
///
/// The two band layouts are resolved once at construction; an unsupported
/// date combination fails here rather than mid-run.
#[derive(Debug, Clone, Copy)]
pub struct ChangeProcessor {
    layout1: BandLayout,
    layout2: BandLayout,
    classifier: WaterBodyClassifier,
}

impl ChangeProcessor {
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        let (layout1, layout2) = layouts_for_dates(config.date1(), config.date2())?;

        Ok(Self {
            layout1,
            layout2,
            classifier: WaterBodyClassifier::new(config.classifier()),
        })
    }

    /// Layout resolved for the older scene.
    pub fn layout1(&self) -> BandLayout {
        self.layout1
    }

    /// Layout resolved for the newer scene.
    pub fn layout2(&self) -> BandLayout {
        self.layout2
    }

    /// Evaluates one pixel from its two raw band bundles.
    pub fn evaluate_pixel(
        &self,
        values1: &BandValues,
        values2: &BandValues,
    ) -> Result<PixelChange, ProcessError> {
        let sample1 = self.layout1.sample(values1)?;
        let sample2 = self.layout2.sample(values2)?;

        let water1 = self.classifier.classify(&sample1);
        let water2 = self.classifier.classify(&sample2);

        // Land pixels render as the newer scene's true color
        let true_color = [sample2.red, sample2.green, sample2.blue];

        Ok(compose_change(water1, water2, true_color))
    }

    /// Evaluates a region given as two equal-length pixel slices, one bundle
    /// per pixel per date, in matching order.
    pub fn evaluate_region(
        &self,
        values1: &[BandValues],
        values2: &[BandValues],
    ) -> Result<Vec<PixelChange>, ProcessError> {
        if values1.len() != values2.len() {
            return Err(ProcessError::SizeMismatch {
                len1: values1.len(),
                len2: values2.len(),
            });
        }

        values1
            .iter()
            .zip(values2)
            .map(|(v1, v2)| self.evaluate_pixel(v1, v2))
            .collect()
    }
}

impl Display for ChangeProcessor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ChangeProcessor {{ date1: {}, date2: {} }}",
            self.layout1.sensor(),
            self.layout2.sensor()
        )
    }
}

#[derive(Debug)]
pub enum ProcessError {
    /// The two region slices do not describe the same number of pixels.
    SizeMismatch { len1: usize, len2: usize },
    Band(MissingBandError),
}

impl Display for ProcessError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProcessError::SizeMismatch { len1, len2 } => write!(
                f,
                "region slices differ in length: {} pixels at date1, {} at date2",
                len1, len2
            ),
            ProcessError::Band(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ProcessError {}

impl From<MissingBandError> for ProcessError {
    fn from(err: MissingBandError) -> ProcessError {
        ProcessError::Band(err)
    }
}
