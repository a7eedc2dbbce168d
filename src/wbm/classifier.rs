use crate::sat_bands::ReflectanceSample;
use crate::wbm::indices::SpectralIndices;

/// Label for pixels classified as surface water.
pub const WATER: f64 = 1.0;
/// Label for everything else, including pixels that could not be evaluated.
pub const NOT_WATER: f64 = 0.0;

// Fixed AWEI decision thresholds of the water bodies mapping method.
const AWEISH_THRESHOLD: f64 = 0.1112;
const AWEINSH_THRESHOLD: f64 = 0.1879;

/// Tunable knobs of the water body classifier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassifierConfig {
    /// MNDWI decision threshold. 0.42 works well for Sentinel-2 and
    /// Landsat 8; turbid or bright scenes may need values up to 0.8.
    pub mndwi_threshold: f64,
    /// NDWI decision threshold. 0.4 recommended, up to 0.5 for some scenes.
    pub ndwi_threshold: f64,
    /// Suppress false detections over urban areas and bare soil.
    /// Recommended on.
    pub filter_urban_bare_soil: bool,
    /// Suppress false detections from shadows and snow or ice. Off by
    /// default; worth enabling for low-illumination scenes and
    /// multitemporal comparisons.
    pub filter_shadow_snow: bool,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            mndwi_threshold: 0.42,
            ndwi_threshold: 0.4,
            filter_urban_bare_soil: true,
            filter_shadow_snow: false,
        }
    }
}

/// Per-pixel surface water detector.
#[derive(Debug, Clone, Copy)]
pub struct WaterBodyClassifier {
    config: ClassifierConfig,
}

impl WaterBodyClassifier {
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> ClassifierConfig {
        self.config
    }

    /// Labels one pixel as [`WATER`] or [`NOT_WATER`].
    ///
    /// A sample whose index set cannot be fully evaluated (vanishing
    /// denominators give non-finite indices) is labelled [`NOT_WATER`]
    /// instead of failing.
    pub fn classify(&self, sample: &ReflectanceSample) -> f64 {
        let idx = SpectralIndices::compute(sample);

        if !idx.is_finite() {
            return NOT_WATER;
        }

        let mut water = idx.mndwi > self.config.mndwi_threshold
            || idx.ndwi > self.config.ndwi_threshold
            || idx.aweinsh > AWEINSH_THRESHOLD
            || idx.aweish > AWEISH_THRESHOLD
            || idx.ndvi < -0.2
            || idx.ndwi_leaves > 1.0;

        if water && self.config.filter_urban_bare_soil {
            water = !(idx.aweinsh <= -0.03 || idx.dbsi > 0.0);
        }

        if water && self.config.filter_shadow_snow {
            water = !Self::shadow_or_snow(sample, &idx);
        }

        if water { WATER } else { NOT_WATER }
    }

    /// Shadow and snow/ice screening. Any single rule firing rejects the
    /// pixel.
    fn shadow_or_snow(sample: &ReflectanceSample, idx: &SpectralIndices) -> bool {
        // shadows
        if idx.aweish <= AWEISH_THRESHOLD && idx.ndvi > -0.2 {
            return true;
        }
        if idx.aweinsh < 0.5 && idx.ndvi > -0.2 {
            return true;
        }
        if idx.aweinsh < 0.0 || idx.aweish <= 0.0 || idx.ndvi > -0.1 {
            return true;
        }
        // snow and ice
        if sample.green >= 0.319 && idx.mndwi > 0.2 && sample.nir > 0.15 && sample.blue > 0.18 {
            return true;
        }
        if sample.green > 0.319 {
            return true;
        }
        if idx.wii > 0.04 || idx.wri < 2.0 {
            return true;
        }
        if idx.puwi < 0.0 || idx.uwi < 0.0 || idx.usi <= -1.0 {
            return true;
        }
        // spectrum shape
        idx.mndwi < idx.aweinsh || idx.ndwi - idx.aweinsh > 0.5
    }
}
