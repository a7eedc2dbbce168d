use crate::sat_bands::ReflectanceSample;

/// Spectral indices evaluated for one pixel, the full set consumed by the
/// water body classifier.
///
/// Every index is computed unconditionally. A vanishing denominator yields a
/// non-finite value instead of an error; callers screen the whole set with
/// [`SpectralIndices::is_finite`] before classifying.
#[derive(Debug, Clone, Copy)]
pub struct SpectralIndices {
    /// Normalized Difference Vegetation Index:
    /// `(nir - red) / (nir + red)`.
    pub ndvi: f64,
    /// Modified Normalized Difference Water Index (Xu, 2006):
    /// `(green - swir1) / (green + swir1)`.
    pub mndwi: f64,
    /// Normalized Difference Water Index (McFeeters, 1996):
    /// `(green - nir) / (green + nir)`.
    pub ndwi: f64,
    /// NDWI leaf-water variant (Gao, 1996):
    /// `(nir - swir1) / (nir + swir1)`.
    pub ndwi_leaves: f64,
    /// Automated Water Extraction Index, shadow variant (Feyisa et al., 2014).
    pub aweish: f64,
    /// Automated Water Extraction Index, no-shadow variant (Feyisa et al.,
    /// 2014).
    pub aweinsh: f64,
    /// Dry Bare-Soil Index (Rasul et al., 2018), inverted MNDWI minus NDVI.
    pub dbsi: f64,
    /// Water Impoundment Index: `nir^2 / red`.
    pub wii: f64,
    /// Water Ratio Index (Shen and Li, 2010):
    /// `(green + red) / (nir + swir1)`.
    pub wri: f64,
    /// Polynomial urban water index, a linear combination tuned for built-up
    /// scenes.
    pub puwi: f64,
    /// Urban water index, the same linear form normalized by its magnitude.
    pub uwi: f64,
    /// Urban shadow index, built from green/red, nir/green and blue/green
    /// ratios.
    pub usi: f64,
}

impl SpectralIndices {
    /// Evaluates all indices for one sample.
    pub fn compute(sample: &ReflectanceSample) -> Self {
        let ReflectanceSample {
            red: r,
            green: g,
            blue: b,
            nir,
            swir1,
            swir2,
        } = *sample;

        let ndvi = (nir - r) / (nir + r);

        Self {
            ndvi,
            mndwi: (g - swir1) / (g + swir1),
            ndwi: (g - nir) / (g + nir),
            ndwi_leaves: (nir - swir1) / (nir + swir1),
            aweish: b + 2.5 * g - 1.5 * (nir + swir1) - 0.25 * swir2,
            aweinsh: 4.0 * (g - swir1) - (0.25 * nir + 2.75 * swir1),
            dbsi: (swir1 - g) / (swir1 + g) - ndvi,
            wii: nir.powi(2) / r,
            wri: (g + r) / (nir + swir1),
            puwi: 5.83 * g - 6.57 * r - 30.32 * nir + 2.25,
            uwi: (g - 1.1 * r - 5.2 * nir + 0.4) / (g - 1.1 * r - 5.2 * nir).abs(),
            usi: 0.25 * (g / r) - 0.57 * (nir / g) - 0.83 * (b / g) + 1.0,
        }
    }

    /// True when every index came out as a usable number.
    pub fn is_finite(&self) -> bool {
        [
            self.ndvi,
            self.mndwi,
            self.ndwi,
            self.ndwi_leaves,
            self.aweish,
            self.aweinsh,
            self.dbsi,
            self.wii,
            self.wri,
            self.puwi,
            self.uwi,
            self.usi,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_water_indices() {
        let sample = ReflectanceSample {
            red: 0.02,
            green: 0.04,
            blue: 0.03,
            nir: 0.01,
            swir1: 0.005,
            swir2: 0.003,
        };

        let idx = SpectralIndices::compute(&sample);

        assert!((idx.ndvi - (-1.0 / 3.0)).abs() < 1e-10);
        assert!((idx.mndwi - 7.0 / 9.0).abs() < 1e-10);
        assert!((idx.ndwi - 0.6).abs() < 1e-10);
        assert!((idx.aweish - 0.10675).abs() < 1e-10);
        assert!((idx.aweinsh - 0.12375).abs() < 1e-10);
        assert!((idx.wii - 0.005).abs() < 1e-10);
        assert!((idx.wri - 4.0).abs() < 1e-10);
        assert!(idx.is_finite());
    }

    #[test]
    fn test_vegetation_indices() {
        let sample = ReflectanceSample {
            red: 0.05,
            green: 0.08,
            blue: 0.04,
            nir: 0.45,
            swir1: 0.25,
            swir2: 0.15,
        };

        let idx = SpectralIndices::compute(&sample);

        assert!((idx.ndvi - 0.8).abs() < 1e-10);
        assert!(idx.mndwi < 0.0);
        assert!(idx.ndwi < 0.0);
        assert!((idx.aweinsh - (-1.48)).abs() < 1e-10);
        assert!(idx.is_finite());
    }

    #[test]
    fn test_zero_red_is_not_finite() {
        // wii divides by red and usi divides green by red
        let sample = ReflectanceSample {
            red: 0.0,
            green: 0.04,
            blue: 0.03,
            nir: 0.01,
            swir1: 0.005,
            swir2: 0.003,
        };

        let idx = SpectralIndices::compute(&sample);

        assert!(!idx.wii.is_finite());
        assert!(!idx.is_finite());
    }

    #[test]
    fn test_zero_nir_swir1_is_not_finite() {
        // ndwi_leaves and wri share the nir + swir1 denominator
        let sample = ReflectanceSample {
            red: 0.02,
            green: 0.04,
            blue: 0.03,
            nir: 0.0,
            swir1: 0.0,
            swir2: 0.003,
        };

        let idx = SpectralIndices::compute(&sample);

        assert!(!idx.ndwi_leaves.is_finite());
        assert!(!idx.wri.is_finite());
        assert!(!idx.is_finite());
    }
}
