//! Surface water extent change detection core for Landsat Level-2 imagery.
//!
//! Given two acquisition dates and raw per-pixel band bundles for both, the
//! crate resolves the band layout of each sensor generation, labels every
//! pixel as water or not through a composite spectral index cascade, and
//! composes the two labels into a four-way change visualization: receded,
//! expanded, persistent water, or land shown as brightened true color.
//!
//! Scene acquisition, mosaicking and rendering belong to the hosting raster
//! environment; this crate only computes.

pub mod change_model;
pub mod config;
pub mod sat_bands;
pub mod scene;
pub mod wbm;

pub use change_model::{ChangeCategory, ChangeProcessor, PixelChange};
pub use config::Config;
