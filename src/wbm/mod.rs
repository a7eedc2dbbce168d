//! Water Bodies Mapping (WBM)
//!
//! Per-pixel surface water detection from Landsat Level-2 surface
//! reflectance, following the water bodies mapping method by Mohor Gartner
//! from the Sentinel Hub custom scripts collection.
//!
//! ## Method Overview
//!
//! Each pixel goes through three stages:
//!
//! 1. **Indices**: twelve spectral indices are evaluated from the six
//!    canonical bands (blue, green, red, NIR, SWIR1, SWIR2).
//! 2. **Decision**: the pixel is water when any primary condition fires,
//!    MNDWI or NDWI above their configured thresholds, AWEI above fixed
//!    thresholds, strongly negative NDVI, or the NDWI leaf variant above 1.
//! 3. **Screening**: optional filters then suppress the usual false
//!    positives, urban surfaces and bare soil on one hand, shadows and
//!    snow or ice on the other.
//!
//! The MNDWI and NDWI thresholds are scene-dependent and exposed through
//! [`ClassifierConfig`]; every other threshold is fixed by the method.
//!
//! ## References
//!
//! - Gartner, M. Water bodies mapping custom script:
//!   <https://github.com/sentinel-hub/custom-scripts/tree/master/sentinel-2/water_bodies_mapping-wbm>
//! - Xu, H. (2006). Modification of normalised difference water index (NDWI)
//!   to enhance open water features in remotely sensed imagery.
//!   *International Journal of Remote Sensing*, 27(14), 3025-3033.
//! - Feyisa, G. L., Meilby, H., Fensholt, R., & Proud, S. R. (2014).
//!   Automated Water Extraction Index: A new technique for surface water
//!   mapping using Landsat imagery. *Remote Sensing of Environment*, 140,
//!   23-35.
//!
//! ## Usage Example
//!
//! ```rust
//! use naiad::sat_bands::ReflectanceSample;
//! use naiad::wbm::{ClassifierConfig, WaterBodyClassifier, WATER};
//!
//! let open_water = ReflectanceSample {
//!     red: 0.02,
//!     green: 0.04,
//!     blue: 0.03,
//!     nir: 0.01,
//!     swir1: 0.005,
//!     swir2: 0.003,
//! };
//!
//! let classifier = WaterBodyClassifier::new(ClassifierConfig::default());
//! assert_eq!(classifier.classify(&open_water), WATER);
//! ```

pub mod classifier;
pub mod indices;

pub use classifier::*;
pub use indices::*;
